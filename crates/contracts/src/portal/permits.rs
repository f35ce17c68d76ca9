use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::applications::ApplicationStatus;

/// Permits expiring within this many days are listed as due for renewal.
pub const RENEWAL_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermitStatus {
    Active,
    Suspended,
    Expired,
    Revoked,
}

impl PermitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PermitStatus::Active => "Active",
            PermitStatus::Suspended => "Suspended",
            PermitStatus::Expired => "Expired",
            PermitStatus::Revoked => "Revoked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permit {
    pub number: String,
    pub company: String,
    pub category: String,
    pub issued_on: NaiveDate,
    pub expires_on: NaiveDate,
    pub status: PermitStatus,
}

impl Permit {
    /// Negative once the permit has lapsed.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expires_on - today).num_days()
    }

    /// Active permits inside the window, and lapsed ones, need renewal.
    /// Suspended and revoked permits cannot be renewed.
    pub fn is_due_for_renewal(&self, today: NaiveDate, window_days: i64) -> bool {
        match self.status {
            PermitStatus::Active | PermitStatus::Expired => {
                self.days_until_expiry(today) <= window_days
            }
            PermitStatus::Suspended | PermitStatus::Revoked => false,
        }
    }
}

pub fn renewals_due(permits: &[Permit], today: NaiveDate) -> Vec<Permit> {
    let mut due: Vec<Permit> = permits
        .iter()
        .filter(|p| p.is_due_for_renewal(today, RENEWAL_WINDOW_DAYS))
        .cloned()
        .collect();
    due.sort_by_key(|p| p.expires_on);
    due
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalRequest {
    pub permit_number: String,
    pub company: String,
    pub requested_on: NaiveDate,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn permit(number: &str, expires_on: NaiveDate, status: PermitStatus) -> Permit {
        Permit {
            number: number.to_string(),
            company: "Delta Drilling".to_string(),
            category: "Drilling".to_string(),
            issued_on: date(2022, 1, 1),
            expires_on,
            status,
        }
    }

    #[test]
    fn test_days_until_expiry() {
        let p = permit("P-1", date(2024, 3, 31), PermitStatus::Active);
        assert_eq!(p.days_until_expiry(date(2024, 3, 1)), 30);
        assert_eq!(p.days_until_expiry(date(2024, 4, 2)), -2);
    }

    #[test]
    fn test_renewal_window() {
        let today = date(2024, 1, 1);
        assert!(permit("P-1", date(2024, 3, 1), PermitStatus::Active)
            .is_due_for_renewal(today, 90));
        assert!(!permit("P-2", date(2024, 12, 1), PermitStatus::Active)
            .is_due_for_renewal(today, 90));
        assert!(permit("P-3", date(2023, 12, 1), PermitStatus::Expired)
            .is_due_for_renewal(today, 90));
        assert!(!permit("P-4", date(2024, 1, 15), PermitStatus::Revoked)
            .is_due_for_renewal(today, 90));
    }

    #[test]
    fn test_renewals_due_sorted_by_expiry() {
        let today = date(2024, 1, 1);
        let permits = vec![
            permit("P-late", date(2024, 3, 20), PermitStatus::Active),
            permit("P-far", date(2025, 1, 1), PermitStatus::Active),
            permit("P-lapsed", date(2023, 11, 30), PermitStatus::Expired),
        ];
        let due: Vec<String> = renewals_due(&permits, today)
            .into_iter()
            .map(|p| p.number)
            .collect();
        assert_eq!(due, vec!["P-lapsed", "P-late"]);
    }
}
