use contracts::domain::a002_vendor::aggregate::{Vendor, VendorVerificationDto};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, Space};

use crate::shared::components::badges::flag_badge;
use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{Column, DataTable, FilterOption, TableFilter, TableRecord};
use crate::shared::remote_list::{use_remote_collection, RemoteCollection};

impl TableRecord for Vendor {}

/// Shared column set; the last column differs between screen and CSV
fn vendor_columns(verification: Column<Vendor>) -> Vec<Column<Vendor>> {
    vec![
        Column::field("Company", "companyName").min_width(180.0),
        Column::field("Contact", "contactName"),
        Column::field("Phone", "phone"),
        Column::field("City", "city"),
        Column::field("Fleet", "fleetSize").right().min_width(80.0),
        verification,
    ]
}

fn export_columns() -> Vec<Column<Vendor>> {
    vendor_columns(Column::text("Verified", |v: &Vendor| {
        if v.is_verified { "Yes" } else { "No" }.to_string()
    }))
}

/// PUT the new verification flag, then reload the list
fn set_verification(vendors: RemoteCollection<Vendor>, id: String, is_verified: bool) {
    let sessions = vendors.sessions();
    let toasts = vendors.toasts();
    let role = vendors.role();
    let client = sessions.client(role);

    spawn_local(async move {
        let body = VendorVerificationDto { is_verified };
        match client
            .put_json::<_, Vendor>(&format!("/vendors/{}/verification", id), &body)
            .await
        {
            Ok(vendor) => {
                let verb = if vendor.is_verified { "verified" } else { "unverified" };
                toasts.success(format!("{} {}", vendor.company_name, verb));
                vendors.reload();
            }
            Err(e) => sessions.report_error(toasts, role, "Failed to update vendor", &e),
        }
    });
}

fn verification_cell(vendors: RemoteCollection<Vendor>, vendor: &Vendor) -> AnyView {
    let id = vendor.id.clone();
    let is_verified = vendor.is_verified;
    let has_id = id.is_some();
    let label = if is_verified { "Revoke" } else { "Verify" };
    let appearance = if is_verified {
        ButtonAppearance::Subtle
    } else {
        ButtonAppearance::Primary
    };

    view! {
        <Space>
            {flag_badge(is_verified, "Verified", "Pending")}
            <Button
                appearance=appearance
                size=ButtonSize::Small
                disabled=!has_id
                on_click=move |_| {
                    if let Some(id) = id.clone() {
                        set_verification(vendors, id, !is_verified);
                    }
                }
            >
                {label}
            </Button>
        </Space>
    }
    .into_any()
}

#[component]
pub fn VendorList(role: Role) -> impl IntoView {
    let vendors = use_remote_collection::<Vendor>(role, "/vendors");
    let toasts = vendors.toasts();

    // Caller-side filter: the table only reports the selection
    let verified_filter = RwSignal::new(None::<bool>);
    let records = Signal::derive(move || {
        let wanted = verified_filter.get();
        vendors.items.with(|rows| {
            rows.iter()
                .filter(|v| wanted.map_or(true, |w| v.is_verified == w))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let filters = vec![TableFilter::new(
        "verified",
        "Verification",
        vec![
            FilterOption::new("Verified", "yes"),
            FilterOption::new("Pending", "no"),
        ],
        Callback::new(move |value: String| {
            verified_filter.set(match value.as_str() {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            });
        }),
    )];

    let columns = vendor_columns(
        Column::view("Verification", move |v: &Vendor| verification_cell(vendors, v)).min_width(180.0),
    );

    let export = Callback::new(move |_: ()| {
        records.with_untracked(|rows| export_with_toast(toasts, rows, &export_columns(), "vendors.csv"));
    });

    view! {
        <div class="page">
            <PageHeader title="Vendors" subtitle="Fleet operators and their verification" icon_name="vendors">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| vendors.reload())
                    on_export=export
                    loading=vendors.loading
                />
            </PageHeader>
            <DataTable
                records=records
                columns=columns
                filters=filters
                search_keys=vec!["companyName".to_string(), "contactName".to_string(), "city".to_string(), "phone".to_string()]
                search_placeholder="Search vendors..."
            />
        </div>
    }
}
