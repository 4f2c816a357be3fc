pub mod routes;

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::A;

pub use routes::AppRoutes;

/// `/console/<role>/<section>`
pub fn console_path(role: Role, section: &str) -> String {
    format!("/console/{}/{}", role.slug(), section)
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page__empty">
            <h2>"Page not found"</h2>
            <A href="/">"Back to home"</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_path() {
        assert_eq!(console_path(Role::Corporate, "employees"), "/console/corporate/employees");
    }
}
