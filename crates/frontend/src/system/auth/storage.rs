use contracts::system::auth::UserProfile;
use web_sys::window;

use super::session::{Session, SessionStore};
use crate::shared::config::{config, SessionConfig};

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Session kept in `window.localStorage` under the configured keys.
///
/// Unavailable storage reads as an empty session.
#[derive(Clone, Debug)]
pub struct LocalStorageSessionStore {
    keys: SessionConfig,
}

impl LocalStorageSessionStore {
    pub fn new(keys: SessionConfig) -> Self {
        Self { keys }
    }

    pub fn from_config() -> Self {
        Self::new(config().session.clone())
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn read(&self) -> Session {
        Session {
            token: get_item(&self.keys.token_key),
            raw_user_record: get_item(&self.keys.user_key),
        }
    }
}

/// Save token and user record after sign-in
pub fn save_session(token: &str, profile: &UserProfile) -> Result<(), String> {
    let keys = &config().session;
    let raw = profile
        .to_json()
        .map_err(|e| format!("Failed to serialize user record: {}", e))?;
    let storage = get_local_storage().ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .set_item(&keys.token_key, token)
        .map_err(|e| format!("Failed to store token: {:?}", e))?;
    storage
        .set_item(&keys.user_key, &raw)
        .map_err(|e| format!("Failed to store user record: {:?}", e))?;
    Ok(())
}

/// Remove token and user record
pub fn clear_session() {
    let keys = &config().session;
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(&keys.token_key);
        let _ = storage.remove_item(&keys.user_key);
    }
}
