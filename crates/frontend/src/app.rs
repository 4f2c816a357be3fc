use crate::routes::AppRoutes;
use crate::shared::toast::{Toaster, ToastService};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts first: session errors are reported through them
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <Toaster />
        </SessionProvider>
    }
}
