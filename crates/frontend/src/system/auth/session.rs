use contracts::system::auth::UserProfile;

/// Raw session entries as found in client storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub raw_user_record: Option<String>,
}

impl Session {
    pub fn new(token: Option<&str>, raw_user_record: Option<&str>) -> Self {
        Self {
            token: token.map(str::to_string),
            raw_user_record: raw_user_record.map(str::to_string),
        }
    }
}

/// Read-only access to wherever the session lives.
///
/// Guard logic only ever sees storage through this trait.
pub trait SessionStore {
    fn read(&self) -> Session;
}

/// Outcome of reading the cached session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionReadResult {
    /// Token or user record missing.
    NoSession,
    /// User record present but not a valid profile.
    Corrupt,
    Valid(UserProfile),
}

impl SessionReadResult {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionReadResult::Valid(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Classify a stored session. Empty strings count as missing.
pub fn classify(session: &Session) -> SessionReadResult {
    let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).is_some();
    if !present(&session.token) {
        return SessionReadResult::NoSession;
    }
    let Some(raw) = session.raw_user_record.as_deref().filter(|s| !s.is_empty()) else {
        return SessionReadResult::NoSession;
    };

    match UserProfile::from_json(raw) {
        Ok(profile) => SessionReadResult::Valid(profile),
        Err(e) => {
            log::warn!("Discarding cached user record: {}", e);
            SessionReadResult::Corrupt
        }
    }
}

/// Read and classify the session. Never writes to the store.
pub fn read_session(store: &impl SessionStore) -> SessionReadResult {
    classify(&store.read())
}

/// In-memory store, used for tests and previews.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    session: Session,
}

impl MemorySessionStore {
    pub fn new(token: Option<&str>, raw_user_record: Option<&str>) -> Self {
        Self {
            session: Session::new(token, raw_user_record),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Session {
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::RoleCode;

    const JANE: &str = r#"{"role":"ADMIN","firstName":"Jane","lastName":"Doe"}"#;

    #[test]
    fn test_missing_token_or_record_is_no_session() {
        for store in [
            MemorySessionStore::default(),
            MemorySessionStore::new(None, Some(JANE)),
            MemorySessionStore::new(Some("abc"), None),
            MemorySessionStore::new(Some(""), Some(JANE)),
            MemorySessionStore::new(Some("abc"), Some("")),
        ] {
            assert_eq!(read_session(&store), SessionReadResult::NoSession);
        }
    }

    #[test]
    fn test_unparseable_record_is_corrupt() {
        for raw in ["{not json", "not-json", r#"{"role":""}"#, "null"] {
            let store = MemorySessionStore::new(Some("abc"), Some(raw));
            assert_eq!(read_session(&store), SessionReadResult::Corrupt, "{raw}");
        }
    }

    #[test]
    fn test_valid_record() {
        let store = MemorySessionStore::new(Some("abc"), Some(JANE));
        let result = read_session(&store);
        let profile = result.profile().unwrap();
        assert_eq!(profile.role, RoleCode::Admin);
        assert_eq!(profile.display_name(), "Jane Doe");
    }

    #[test]
    fn test_reading_leaves_store_untouched() {
        let store = MemorySessionStore::new(Some("abc"), Some("{not json"));
        let before = store.read();
        let _ = read_session(&store);
        let _ = read_session(&store);
        assert_eq!(store.read(), before);
    }
}
