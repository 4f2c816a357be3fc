//! `/console/:role/:section`: role guard, frame and section dispatch

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::left::sidebar::{section_for, Section};
use super::Shell;
use crate::dashboards::ConsoleDashboard;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_vendor::ui::list::VendorList;
use crate::domain::a003_driver::ui::list::DriverList;
use crate::domain::a004_ride::ui::list::RideList;
use crate::domain::a005_pricing::ui::list::PricingList;
use crate::domain::a006_employee::ui::list::EmployeeList;
use crate::routes::NotFound;
use crate::system::auth::guard::RequireSession;

fn section_view(role: Role, section: Option<Section>) -> AnyView {
    match section {
        Some(Section::Dashboard) => view! { <ConsoleDashboard role=role /> }.into_any(),
        Some(Section::Users) => view! { <UserList role=role /> }.into_any(),
        Some(Section::Vendors) => view! { <VendorList role=role /> }.into_any(),
        Some(Section::Drivers) => view! { <DriverList role=role /> }.into_any(),
        Some(Section::Rides) => view! { <RideList role=role /> }.into_any(),
        Some(Section::Pricing) => view! { <PricingList role=role /> }.into_any(),
        Some(Section::Employees) => view! { <EmployeeList role=role /> }.into_any(),
        None => view! {
            <div class="page page__empty">
                <h2>"Section not available"</h2>
                <p>"This section does not exist or is not part of the " {role.label()} " console."</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Console() -> impl IntoView {
    let params = use_params_map();
    let role = Memo::new(move |_| {
        params.with(|p| p.get("role").and_then(|slug| Role::from_slug(&slug)))
    });

    move || match role.get() {
        Some(role) => {
            let section = Memo::new(move |_| {
                params.with(|p| section_for(role, &p.get("section").unwrap_or_default()))
            });
            view! {
                <RequireSession role=role>
                    <Shell role=role active=section>
                        {move || section_view(role, section.get())}
                    </Shell>
                </RequireSession>
            }
            .into_any()
        }
        None => view! { <NotFound /> }.into_any(),
    }
}
