pub mod console;
pub mod left;
pub mod top_header;

use contracts::system::auth::Role;
use leptos::prelude::*;
use left::sidebar::{Section, Sidebar};
use top_header::TopHeader;

/// Console frame.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(
    role: Role,
    #[prop(into)]
    active: Signal<Option<Section>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader role=role />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar role=role active=active />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
