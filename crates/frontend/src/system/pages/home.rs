use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::console_path;
use crate::system::auth::context::use_sessions;

fn role_blurb(role: Role) -> &'static str {
    match role {
        Role::Admin => "Run the platform: users, vendors, drivers and fares.",
        Role::Vendor => "Manage your fleet and follow the rides it serves.",
        Role::Partner => "See your trips and what you earned.",
        Role::Agent => "Track the rides you book for your customers.",
        Role::Corporate => "Keep an eye on employee travel and spend.",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let sessions = use_sessions();

    view! {
        <div class="marketing">
            <section class="hero">
                <h1 class="hero__title">"ARA Travels"</h1>
                <p class="hero__subtitle">
                    "Airport transfers, outstation trips and city rides across India, "
                    "run by a network of verified vendors and drivers."
                </p>
                <A href="/about">"Learn more"</A>
            </section>

            <section class="role-grid">
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        let action = move || {
                            if sessions.is_signed_in(role) { "Open console" } else { "Sign in" }
                        };
                        view! {
                            <a class="role-card" href=console_path(role, "dashboard")>
                                <h3 class="role-card__title">{role.label()}</h3>
                                <p class="role-card__text">{role_blurb(role)}</p>
                                <span class="role-card__action">{action}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
