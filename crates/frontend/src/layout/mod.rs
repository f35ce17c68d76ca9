pub mod header;
pub mod left;

use leptos::prelude::*;

/// Frame shared by every signed-in page.
///
/// ```text
/// +--------------------------------+
/// |             Header             |
/// +--------------------------------+
/// |  Sidebar  |      Content       |
/// +--------------------------------+
/// ```
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
