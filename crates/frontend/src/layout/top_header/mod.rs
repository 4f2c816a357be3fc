//! Top bar of a console: brand, signed-in user and logout

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_sessions;

#[component]
pub fn TopHeader(role: Role) -> impl IntoView {
    let sessions = use_sessions();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let user_name = move || {
        sessions
            .user(role)
            .map(|u| u.name)
            .unwrap_or_else(|| role.label().to_string())
    };

    let logout = move |_| {
        sessions.sign_out(role);
        toasts.info(format!("Signed out of the {} console", role.label()));
        navigate("/", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <a href="/" class="top-header__title">"ARA Travels"</a>
                <span class="top-header__badge">{role.label()}</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{user_name}</span>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
