use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_current_user, use_sign_out};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let current_user = use_current_user();
    let sign_out = use_sign_out();

    let initials = move || {
        current_user
            .get()
            .map(|u| u.initials())
            .unwrap_or_default()
    };
    let display_name = move || {
        current_user
            .get()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };
    let role_label = move || {
        current_user
            .get()
            .map(|u| u.role.label().to_string())
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{config().app.title.clone()}</span>
            </div>
            <div class="header__actions">
                <div class="header__user">
                    <span class="header__avatar">{initials}</span>
                    <div class="header__user-text">
                        <span class="header__user-name">{display_name}</span>
                        <span class="header__user-role">{role_label}</span>
                    </div>
                </div>
                <button class="button button--ghost" title="Sign out" on:click=move |_| sign_out()>
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
