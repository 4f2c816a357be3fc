use contracts::system::auth::Role;
use leptos::prelude::*;

use super::context::use_sessions;
use crate::system::pages::login::LoginPage;

/// Renders the children once the role is signed in, its login form otherwise
#[component]
pub fn RequireSession(role: Role, children: ChildrenFn) -> impl IntoView {
    let sessions = use_sessions();

    view! {
        <Show
            when=move || sessions.is_signed_in(role)
            fallback=move || view! { <LoginPage role=role /> }
        >
            {children()}
        </Show>
    }
}
