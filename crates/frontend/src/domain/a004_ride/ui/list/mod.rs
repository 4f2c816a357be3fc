use contracts::domain::a004_ride::aggregate::Ride;
use contracts::enums::RideStatus;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::badges::ride_status_badge;
use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_inr;
use crate::shared::data_table::{Column, DataTable, FilterOption, TableFilter, TableRecord};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::remote_list::use_remote_collection;

impl TableRecord for Ride {}

pub fn filter_by_status(rows: &[Ride], status: Option<RideStatus>) -> Vec<Ride> {
    rows.iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .cloned()
        .collect()
}

fn distance_text(r: &Ride) -> String {
    r.distance_km.map(|km| format!("{:.1} km", km)).unwrap_or_default()
}

fn ride_columns(status: Column<Ride>) -> Vec<Column<Ride>> {
    vec![
        Column::field("Rider", "riderName").min_width(140.0),
        Column::field("Driver", "driverName").min_width(140.0),
        Column::field("Pickup", "pickup").min_width(180.0),
        Column::field("Drop", "drop").min_width(180.0),
        Column::text("Distance", distance_text).right().min_width(90.0),
        Column::text("Fare", |r: &Ride| format_inr(r.fare)).right(),
        status,
        Column::text("Scheduled", |r: &Ride| format_optional_datetime(r.scheduled_at.as_ref())),
    ]
}

fn export_columns() -> Vec<Column<Ride>> {
    ride_columns(Column::text("Status", |r: &Ride| r.status.display_name().to_string()))
}

fn subtitle_for(role: Role) -> &'static str {
    match role {
        Role::Admin => "Every ride on the platform",
        Role::Vendor => "Rides served by your fleet",
        Role::Partner => "Rides you drove",
        Role::Agent => "Rides you booked for customers",
        Role::Corporate => "Rides taken by your employees",
    }
}

/// Ride history of the signed-in role, with a status filter
#[component]
pub fn RideList(role: Role) -> impl IntoView {
    let rides = use_remote_collection::<Ride>(role, "/rides");
    let toasts = rides.toasts();

    let status = RwSignal::new(None::<RideStatus>);
    let records = Signal::derive(move || {
        let wanted = status.get();
        rides.items.with(|rows| filter_by_status(rows, wanted))
    });

    let filters = vec![TableFilter::new(
        "status",
        "Status",
        RideStatus::all()
            .into_iter()
            .map(|s| FilterOption::new(s.display_name(), s.code()))
            .collect(),
        Callback::new(move |value: String| status.set(RideStatus::from_code(&value))),
    )];

    let export = Callback::new(move |_: ()| {
        records.with_untracked(|rows| export_with_toast(toasts, rows, &export_columns(), "rides.csv"));
    });

    view! {
        <div class="page">
            <PageHeader title="Rides" subtitle=subtitle_for(role) icon_name="rides">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| rides.reload())
                    on_export=export
                    loading=rides.loading
                />
            </PageHeader>
            <DataTable
                records=records
                columns=ride_columns(Column::view("Status", |r: &Ride| ride_status_badge(r.status)))
                filters=filters
                search_keys=vec![
                    "id".to_string(),
                    "riderName".to_string(),
                    "driverName".to_string(),
                    "pickup".to_string(),
                    "drop".to_string(),
                ]
                search_placeholder="Search by rider, driver or address..."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(id: &str, status: RideStatus) -> Ride {
        Ride {
            id: Some(id.to_string()),
            rider_name: "Asha".to_string(),
            driver_name: None,
            pickup: "MG Road".to_string(),
            drop: "Airport".to_string(),
            distance_km: Some(32.0),
            fare: 845.0,
            status,
            booked_by: None,
            scheduled_at: None,
        }
    }

    #[test]
    fn test_filter_by_status() {
        let rows = vec![
            ride("r1", RideStatus::Completed),
            ride("r2", RideStatus::Cancelled),
            ride("r3", RideStatus::Completed),
        ];
        assert_eq!(filter_by_status(&rows, None).len(), 3);

        let completed = filter_by_status(&rows, Some(RideStatus::Completed));
        let ids: Vec<_> = completed.iter().filter_map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["r1".to_string(), "r3".to_string()]);

        assert!(filter_by_status(&rows, Some(RideStatus::Ongoing)).is_empty());
    }

    #[test]
    fn test_missing_driver_exports_empty_cell() {
        let columns = export_columns();
        let r = ride("r1", RideStatus::Requested);
        assert_eq!(columns[1].cell_text(&r), Some(String::new()));
        assert_eq!(columns[4].cell_text(&r), Some("32.0 km".to_string()));
        assert_eq!(columns[6].cell_text(&r), Some("Requested".to_string()));
    }
}
