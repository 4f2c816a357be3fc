use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use super::NotFound;
use crate::layout::console::Console;
use crate::system::pages::about::AboutPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;

#[component]
fn LoginRoute() -> impl IntoView {
    let params = use_params_map();
    move || {
        match params.with(|p| p.get("role").and_then(|slug| Role::from_slug(&slug))) {
            Some(role) => view! { <LoginPage role=role /> }.into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/login/:role") view=LoginRoute />
                <Route path=path!("/console/:role") view=Console />
                <Route path=path!("/console/:role/:section") view=Console />
            </Routes>
        </Router>
    }
}
