use contracts::domain::a003_driver::aggregate::Driver;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::badges::flag_badge;
use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{Column, DataTable, FilterOption, TableFilter, TableRecord};
use crate::shared::remote_list::use_remote_collection;

impl TableRecord for Driver {}

fn vehicle_text(d: &Driver) -> String {
    match (&d.vehicle_number, &d.vehicle_type) {
        (Some(number), Some(kind)) => format!("{} · {}", number, kind),
        (Some(number), None) => number.clone(),
        (None, Some(kind)) => kind.clone(),
        (None, None) => String::new(),
    }
}

fn rating_text(d: &Driver) -> String {
    d.rating.map(|r| format!("{:.1}", r)).unwrap_or_default()
}

fn driver_columns(show_vendor: bool) -> Vec<Column<Driver>> {
    let mut columns = vec![
        Column::field("Name", "name").min_width(160.0),
        Column::field("Phone", "phone"),
        Column::text("Vehicle", vehicle_text).min_width(160.0),
    ];
    if show_vendor {
        columns.push(Column::field("Vendor", "vendorName"));
    }
    columns.push(Column::text("Rating", rating_text).right().min_width(80.0));
    columns
}

/// CSV gets plain-text status columns instead of badges
fn export_columns(show_vendor: bool) -> Vec<Column<Driver>> {
    let mut columns = driver_columns(show_vendor);
    columns.push(Column::text("Online", |d: &Driver| {
        if d.is_online { "Online" } else { "Offline" }.to_string()
    }));
    columns.push(Column::text("Verified", |d: &Driver| {
        if d.is_verified { "Yes" } else { "No" }.to_string()
    }));
    columns
}

fn screen_columns(show_vendor: bool) -> Vec<Column<Driver>> {
    let mut columns = driver_columns(show_vendor);
    columns.push(Column::view("Online", |d: &Driver| flag_badge(d.is_online, "Online", "Offline")));
    columns.push(Column::view("Verified", |d: &Driver| flag_badge(d.is_verified, "Verified", "Pending")));
    columns
}

/// Drivers of the whole platform (admin) or of the signed-in fleet (vendor)
#[component]
pub fn DriverList(role: Role) -> impl IntoView {
    let drivers = use_remote_collection::<Driver>(role, "/drivers");
    let toasts = drivers.toasts();
    let show_vendor = role == Role::Admin;

    let online_filter = RwSignal::new(None::<bool>);
    let records = Signal::derive(move || {
        let wanted = online_filter.get();
        drivers.items.with(|rows| {
            rows.iter()
                .filter(|d| wanted.map_or(true, |w| d.is_online == w))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let filters = vec![TableFilter::new(
        "online",
        "Availability",
        vec![
            FilterOption::new("Online", "online"),
            FilterOption::new("Offline", "offline"),
        ],
        Callback::new(move |value: String| {
            online_filter.set(match value.as_str() {
                "online" => Some(true),
                "offline" => Some(false),
                _ => None,
            });
        }),
    )];

    let export = Callback::new(move |_: ()| {
        records.with_untracked(|rows| {
            export_with_toast(toasts, rows, &export_columns(show_vendor), "drivers.csv")
        });
    });

    let subtitle = if show_vendor {
        "All drivers across vendors"
    } else {
        "Drivers in your fleet"
    };

    view! {
        <div class="page">
            <PageHeader title="Drivers" subtitle=subtitle icon_name="drivers">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| drivers.reload())
                    on_export=export
                    loading=drivers.loading
                />
            </PageHeader>
            <DataTable
                records=records
                columns=screen_columns(show_vendor)
                filters=filters
                search_keys=vec!["name".to_string(), "phone".to_string(), "vehicleNumber".to_string(), "vendorName".to_string()]
                search_placeholder="Search drivers..."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn driver() -> Driver {
        Driver {
            id: Some("d1".to_string()),
            name: "Ravi Kumar".to_string(),
            phone: Some("9876543210".to_string()),
            vehicle_number: Some("KA01AB1234".to_string()),
            vehicle_type: Some("Sedan".to_string()),
            vendor_name: Some("Blue Cabs".to_string()),
            rating: Some(4.56),
            is_online: true,
            is_verified: false,
        }
    }

    #[test]
    fn test_vehicle_text() {
        assert_eq!(vehicle_text(&driver()), "KA01AB1234 · Sedan");
        let mut d = driver();
        d.vehicle_number = None;
        assert_eq!(vehicle_text(&d), "Sedan");
        d.vehicle_type = None;
        assert_eq!(vehicle_text(&d), "");
    }

    #[test]
    fn test_vendor_column_only_for_admin() {
        assert_eq!(driver_columns(true).len(), 5);
        assert!(driver_columns(false).iter().all(|c| c.header != "Vendor"));
    }

    #[test]
    fn test_export_row() {
        let csv = build_csv(&[driver()], &export_columns(false)).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Ravi Kumar;9876543210;KA01AB1234 · Sedan;4.6;Online;No");
    }
}
