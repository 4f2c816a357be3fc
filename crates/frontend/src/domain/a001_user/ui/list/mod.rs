use contracts::domain::a001_user::aggregate::User;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::badges::flag_badge;
use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::{Column, DataTable, TableRecord};
use crate::shared::date_utils::format_date;
use crate::shared::remote_list::use_remote_collection;

impl TableRecord for User {}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::field("Name", "name").min_width(160.0),
        Column::field("Email", "email").min_width(180.0),
        Column::field("Phone", "phone"),
        Column::view("Status", |u: &User| flag_badge(u.is_active, "Active", "Blocked")),
        Column::text("Joined", |u: &User| u.created_at.as_ref().map(format_date).unwrap_or_default()),
    ]
}

#[component]
pub fn UserList(role: Role) -> impl IntoView {
    let users = use_remote_collection::<User>(role, "/users");
    let toasts = users.toasts();

    let export = Callback::new(move |_: ()| {
        users
            .items
            .with_untracked(|rows| export_with_toast(toasts, rows, &user_columns(), "users.csv"));
    });

    view! {
        <div class="page">
            <PageHeader title="Users" subtitle="Riders registered on the platform" icon_name="users">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| users.reload())
                    on_export=export
                    loading=users.loading
                />
            </PageHeader>
            <DataTable
                records=users.items
                columns=user_columns()
                search_keys=vec!["name".to_string(), "email".to_string(), "phone".to_string()]
                search_placeholder="Search by name, email or phone..."
            />
        </div>
    }
}
