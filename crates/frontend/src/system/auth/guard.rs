use contracts::system::auth::RoleCode;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use super::access::{evaluate, GuardPhase, PageRequirement, RoleDashboardTable};
use super::context::provide_current_user;
use super::session::read_session;
use super::storage::LocalStorageSessionStore;
use crate::shared::config::config;

/// Runs the session check once after mount and renders `children` only when
/// the guard settles in `Allowed`. A placeholder is shown before that and
/// while a redirect is in flight.
fn guarded_page(requirement: PageRequirement, children: ChildrenFn) -> impl IntoView {
    let phase = RwSignal::new(GuardPhase::Initializing);
    let current_user = provide_current_user();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let page_path = location.pathname.get_untracked();
        let result = read_session(&LocalStorageSessionStore::from_config());
        let next = evaluate(
            result,
            &requirement,
            &page_path,
            &config().routes,
            RoleDashboardTable::standard(),
        );

        let mut settled = false;
        phase.update(|p| settled = p.settle(next.clone()));
        if !settled {
            return;
        }

        match next {
            GuardPhase::Allowed(profile) => current_user.0.set(Some(profile)),
            GuardPhase::Redirecting(target) => navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            ),
            GuardPhase::Initializing => {}
        }
    });

    move || match phase.get() {
        GuardPhase::Allowed(_) => children().into_any(),
        GuardPhase::Initializing => {
            view! { <GuardPlaceholder message="Checking session..." /> }.into_any()
        }
        GuardPhase::Redirecting(_) => {
            view! { <GuardPlaceholder message="Redirecting..." /> }.into_any()
        }
    }
}

#[component]
fn GuardPlaceholder(message: &'static str) -> impl IntoView {
    view! {
        <div class="guard-placeholder">
            <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Medium>
                <Spinner />
                <span>{message}</span>
            </Flex>
        </div>
    }
}

/// Page open only to users holding `required_role`.
/// Other roles are sent to their own dashboard, anonymous users to login.
#[component]
pub fn RoleGuard(required_role: RoleCode, children: ChildrenFn) -> impl IntoView {
    guarded_page(PageRequirement::Role(required_role), children)
}

/// Page open to every signed-in user
#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    guarded_page(PageRequirement::AnySignedIn, children)
}
