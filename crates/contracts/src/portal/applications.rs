use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    QueryRaised,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under review",
            ApplicationStatus::QueryRaised => "Query raised",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Still waiting on the commission.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Submitted
                | ApplicationStatus::UnderReview
                | ApplicationStatus::QueryRaised
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationKind {
    OperatingPermit,
    PermitRenewal,
    ExpatriateQuota,
    WorkPermit,
    LocalContentPlan,
}

impl ApplicationKind {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationKind::OperatingPermit => "Operating permit",
            ApplicationKind::PermitRenewal => "Permit renewal",
            ApplicationKind::ExpatriateQuota => "Expatriate quota",
            ApplicationKind::WorkPermit => "Work permit",
            ApplicationKind::LocalContentPlan => "Local content plan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermitApplication {
    pub id: String,
    pub company: String,
    pub kind: ApplicationKind,
    pub submitted_on: NaiveDate,
    pub status: ApplicationStatus,
    pub reviewer: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub total: usize,
    pub submitted: usize,
    pub under_review: usize,
    pub query_raised: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ApplicationSummary {
    pub fn pending(&self) -> usize {
        self.submitted + self.under_review + self.query_raised
    }

    /// Approved share of decided applications, `None` until something is decided.
    pub fn approval_rate(&self) -> Option<f64> {
        let decided = self.approved + self.rejected;
        if decided == 0 {
            None
        } else {
            Some(self.approved as f64 * 100.0 / decided as f64)
        }
    }
}

pub fn summarize_applications(items: &[PermitApplication]) -> ApplicationSummary {
    items
        .iter()
        .fold(ApplicationSummary::default(), |mut acc, item| {
            acc.total += 1;
            match item.status {
                ApplicationStatus::Submitted => acc.submitted += 1,
                ApplicationStatus::UnderReview => acc.under_review += 1,
                ApplicationStatus::QueryRaised => acc.query_raised += 1,
                ApplicationStatus::Approved => acc.approved += 1,
                ApplicationStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, status: ApplicationStatus) -> PermitApplication {
        PermitApplication {
            id: id.to_string(),
            company: "Offshore Energy Ltd".to_string(),
            kind: ApplicationKind::OperatingPermit,
            submitted_on: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            status,
            reviewer: None,
        }
    }

    #[test]
    fn test_summarize_counts_each_status() {
        let items = vec![
            app("A-1", ApplicationStatus::Submitted),
            app("A-2", ApplicationStatus::UnderReview),
            app("A-3", ApplicationStatus::Approved),
            app("A-4", ApplicationStatus::Approved),
            app("A-5", ApplicationStatus::Rejected),
            app("A-6", ApplicationStatus::QueryRaised),
        ];
        let summary = summarize_applications(&items);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.pending(), 3);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_approval_rate() {
        assert_eq!(summarize_applications(&[]).approval_rate(), None);
        let items = vec![
            app("A-1", ApplicationStatus::Approved),
            app("A-2", ApplicationStatus::Approved),
            app("A-3", ApplicationStatus::Approved),
            app("A-4", ApplicationStatus::Rejected),
            app("A-5", ApplicationStatus::Submitted),
        ];
        assert_eq!(summarize_applications(&items).approval_rate(), Some(75.0));
    }
}
