use crate::shared::components::{PageHeader, Section};
use crate::system::auth::context::{use_current_user, use_sign_out};
use leptos::prelude::*;
use thaw::*;

/// Landing page for signed-in roles without a dashboard of their own
#[component]
pub fn DashboardHome() -> impl IntoView {
    let current_user = use_current_user();
    let sign_out = use_sign_out();

    let greeting = move || {
        current_user
            .get()
            .map(|u| format!("Welcome, {}", u.display_name()))
            .unwrap_or_default()
    };
    let role = move || {
        current_user
            .get()
            .map(|u| u.role.as_code().to_string())
            .unwrap_or_default()
    };

    view! {
        <div id="dashboard_home--page" class="page">
            <PageHeader title="Dashboard" icon_name="home" />
            <Section title="Welcome">
                <p class="dashboard-home__greeting">{greeting}</p>
                <p class="text-muted">
                    "Your role ("<code>{role}</code>") has no dedicated dashboard yet. "
                    "Contact the Commission if you need access to one."
                </p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| sign_out()>
                    "Sign out"
                </Button>
            </Section>
        </div>
    }
}
