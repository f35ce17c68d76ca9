use serde::{Deserialize, Serialize};
use std::fmt;

/// Role label carried in the cached user record.
///
/// Two code families exist side by side: the upper-case codes (`ADMIN`,
/// `COMPANY_ADMIN`, ...) and the lower-case codes used by the commission and
/// reviewer pages (`commission_admin`, `reviewer`). They are distinct values
/// and are never folded into each other. Codes compare case-sensitively.
///
/// Any other non-blank code is kept verbatim in [`RoleCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoleCode {
    Admin,
    CompanyAdmin,
    ComplianceOfficer,
    ImmigrationOfficer,
    Personnel,
    LocalContentOfficer,
    FinanceOfficer,
    JvCoordinator,
    CommissionAdmin,
    Reviewer,
    Other(String),
}

impl RoleCode {
    /// Every role with a dedicated dashboard, in sidebar order.
    pub fn known() -> [RoleCode; 10] {
        [
            RoleCode::Admin,
            RoleCode::CompanyAdmin,
            RoleCode::ComplianceOfficer,
            RoleCode::ImmigrationOfficer,
            RoleCode::Personnel,
            RoleCode::LocalContentOfficer,
            RoleCode::FinanceOfficer,
            RoleCode::JvCoordinator,
            RoleCode::CommissionAdmin,
            RoleCode::Reviewer,
        ]
    }

    /// Parse a stored code. Returns `None` for blank input.
    pub fn from_code(code: &str) -> Option<Self> {
        let role = match code {
            "ADMIN" => RoleCode::Admin,
            "COMPANY_ADMIN" => RoleCode::CompanyAdmin,
            "COMPLIANCE_OFFICER" => RoleCode::ComplianceOfficer,
            "IMMIGRATION_OFFICER" => RoleCode::ImmigrationOfficer,
            "PERSONNEL" => RoleCode::Personnel,
            "LOCAL_CONTENT_OFFICER" => RoleCode::LocalContentOfficer,
            "FINANCE_OFFICER" => RoleCode::FinanceOfficer,
            "JV_COORDINATOR" => RoleCode::JvCoordinator,
            "commission_admin" => RoleCode::CommissionAdmin,
            "reviewer" => RoleCode::Reviewer,
            other if other.trim().is_empty() => return None,
            other => RoleCode::Other(other.to_string()),
        };
        Some(role)
    }

    /// The code as written to storage.
    pub fn as_code(&self) -> &str {
        match self {
            RoleCode::Admin => "ADMIN",
            RoleCode::CompanyAdmin => "COMPANY_ADMIN",
            RoleCode::ComplianceOfficer => "COMPLIANCE_OFFICER",
            RoleCode::ImmigrationOfficer => "IMMIGRATION_OFFICER",
            RoleCode::Personnel => "PERSONNEL",
            RoleCode::LocalContentOfficer => "LOCAL_CONTENT_OFFICER",
            RoleCode::FinanceOfficer => "FINANCE_OFFICER",
            RoleCode::JvCoordinator => "JV_COORDINATOR",
            RoleCode::CommissionAdmin => "commission_admin",
            RoleCode::Reviewer => "reviewer",
            RoleCode::Other(code) => code,
        }
    }

    /// Returns the display name for the UI.
    pub fn label(&self) -> &str {
        match self {
            RoleCode::Admin => "Commission Administrator",
            RoleCode::CompanyAdmin => "Company Administrator",
            RoleCode::ComplianceOfficer => "Compliance Officer",
            RoleCode::ImmigrationOfficer => "Immigration Officer",
            RoleCode::Personnel => "Personnel",
            RoleCode::LocalContentOfficer => "Local Content Officer",
            RoleCode::FinanceOfficer => "Finance Officer",
            RoleCode::JvCoordinator => "JV Coordinator",
            RoleCode::CommissionAdmin => "Commission Admin",
            RoleCode::Reviewer => "Reviewer",
            RoleCode::Other(code) => code,
        }
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl TryFrom<String> for RoleCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoleCode::from_code(&value).ok_or_else(|| "role must not be blank".to_string())
    }
}

impl From<RoleCode> for String {
    fn from(role: RoleCode) -> Self {
        role.as_code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for role in RoleCode::known() {
            assert_eq!(RoleCode::from_code(role.as_code()), Some(role.clone()));
        }
    }

    #[test]
    fn test_families_stay_distinct() {
        assert_eq!(RoleCode::from_code("ADMIN"), Some(RoleCode::Admin));
        assert_eq!(
            RoleCode::from_code("commission_admin"),
            Some(RoleCode::CommissionAdmin)
        );
        assert_ne!(RoleCode::Admin, RoleCode::CommissionAdmin);
        assert_eq!(
            RoleCode::from_code("admin"),
            Some(RoleCode::Other("admin".to_string()))
        );
    }

    #[test]
    fn test_blank_code_rejected() {
        assert_eq!(RoleCode::from_code(""), None);
        assert_eq!(RoleCode::from_code("   "), None);
        assert!(serde_json::from_str::<RoleCode>("\"\"").is_err());
    }

    #[test]
    fn test_serde_uses_storage_code() {
        let json = serde_json::to_string(&RoleCode::JvCoordinator).unwrap();
        assert_eq!(json, "\"JV_COORDINATOR\"");
        let parsed: RoleCode = serde_json::from_str("\"AUDITOR\"").unwrap();
        assert_eq!(parsed, RoleCode::Other("AUDITOR".to_string()));
    }
}
