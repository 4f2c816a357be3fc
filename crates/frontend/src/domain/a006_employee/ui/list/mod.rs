use contracts::domain::a006_employee::aggregate::Employee;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_inr;
use crate::shared::data_table::{Column, DataTable, TableRecord};
use crate::shared::remote_list::use_remote_collection;

impl TableRecord for Employee {}

fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column::field("Code", "employeeCode").min_width(90.0),
        Column::field("Name", "name").min_width(160.0),
        Column::field("Department", "department"),
        Column::field("Email", "email").min_width(180.0),
        Column::field("Phone", "phone"),
        Column::text("Monthly limit", |e: &Employee| {
            e.monthly_limit.map(format_inr).unwrap_or_default()
        })
        .right(),
    ]
}

/// Employees of the corporate account allowed to book rides
#[component]
pub fn EmployeeList(role: Role) -> impl IntoView {
    let employees = use_remote_collection::<Employee>(role, "/employees");
    let toasts = employees.toasts();

    let export = Callback::new(move |_: ()| {
        employees.items.with_untracked(|rows| {
            export_with_toast(toasts, rows, &employee_columns(), "employees.csv")
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Employees" subtitle="People who can ride on the company account" icon_name="employees">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| employees.reload())
                    on_export=export
                    loading=employees.loading
                />
            </PageHeader>
            // no search_keys: every field is searched
            <DataTable
                records=employees.items
                columns=employee_columns()
                search_placeholder="Search employees..."
            />
        </div>
    }
}
