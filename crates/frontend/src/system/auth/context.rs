use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::storage::clear_session;
use crate::shared::config::config;

/// Profile of the user a guard let through.
///
/// Stays `None` until the guard settles in the allowed state.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub RwSignal<Option<UserProfile>>);

/// Provide an empty current-user slot for the subtree
pub fn provide_current_user() -> CurrentUser {
    let current = CurrentUser(RwSignal::new(None));
    provide_context(current);
    current
}

/// Hook to access the current user
pub fn use_current_user() -> Signal<Option<UserProfile>> {
    let current = use_context::<CurrentUser>()
        .expect("CurrentUser not found: page is not wrapped in a guard");
    current.0.into()
}

/// Clear the stored session and go back to the login page
pub fn use_sign_out() -> impl Fn() + Clone + 'static {
    let navigate = use_navigate();
    let slot = use_context::<CurrentUser>();
    move || {
        clear_session();
        if let Some(slot) = slot {
            slot.0.set(None);
        }
        log::info!("Signed out");
        navigate(&config().routes.login_path, Default::default());
    }
}
