use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::RoleCode;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("user record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Cached user record written at login.
///
/// Only `role` is required. Names are display-only: missing or `null`
/// values become empty strings. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub role: RoleCode,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    pub fn new(role: RoleCode, first_name: &str, last_name: &str) -> Self {
        Self {
            role,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
        }
    }

    /// Parse and validate a serialized record.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Upper-cased first letters of first and last name, `"?"` if both are empty.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Full name, or the role label when no name is recorded.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.role.label().to_string()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let profile =
            UserProfile::from_json(r#"{"role":"ADMIN","firstName":"Jane","lastName":"Doe"}"#)
                .unwrap();
        assert_eq!(profile.role, RoleCode::Admin);
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_extra_and_missing_display_fields_tolerated() {
        let profile = UserProfile::from_json(
            r#"{"role":"PERSONNEL","lastName":null,"id":42,"permissions":["read"]}"#,
        )
        .unwrap();
        assert_eq!(profile.role, RoleCode::Personnel);
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.last_name, "");
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        for raw in [
            "not-json",
            "{not json",
            "42",
            "[]",
            r#"{"firstName":"Jane"}"#,
            r#"{"role":""}"#,
            r#"{"role":7}"#,
            r#"{"role":"ADMIN","firstName":5}"#,
        ] {
            assert!(UserProfile::from_json(raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn test_initials_and_display_name() {
        let jane = UserProfile::new(RoleCode::Admin, "jane", "doe");
        assert_eq!(jane.initials(), "JD");
        assert_eq!(jane.display_name(), "jane doe");

        let nameless = UserProfile::new(RoleCode::JvCoordinator, "", " ");
        assert_eq!(nameless.initials(), "?");
        assert_eq!(nameless.display_name(), "JV Coordinator");
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let raw = UserProfile::new(RoleCode::Reviewer, "Kofi", "Mensah")
            .to_json()
            .unwrap();
        assert_eq!(raw, r#"{"role":"reviewer","firstName":"Kofi","lastName":"Mensah"}"#);
    }
}
