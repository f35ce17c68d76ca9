use crate::routes::routes::DASHBOARD_PATH;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            {icon("alert-triangle")}
            <h1>"Page not found"</h1>
            <p>"The page you requested does not exist."</p>
            <a href=DASHBOARD_PATH>"Go to dashboard"</a>
        </div>
    }
}
