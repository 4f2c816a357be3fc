use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::console_path;
use crate::shared::toast::use_toasts;
use crate::system::auth::{api, context::use_sessions};

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let sessions = use_sessions();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(role, username_val, password_val).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    toasts.success(format!("Welcome, {}", response.user.name));
                    sessions.sign_in(role, response);
                    // inside the console the guard swaps in the section by itself
                    if !pathname.get_untracked().starts_with("/console") {
                        navigate(&console_path(role, "dashboard"), Default::default());
                    }
                }
                Err(e) => {
                    log::warn!("{} login failed: {}", role, e);
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ARA Travels"</h1>
                <h2>{format!("{} console", role.label())}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Email or phone"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href="/">"Back to home"</A>
                </div>
            </div>
        </div>
    }
}
