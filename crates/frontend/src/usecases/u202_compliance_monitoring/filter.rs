use contracts::portal::compliance::{CaseStatus, ComplianceCase, Severity};
use std::cmp::Reverse;

/// Criteria of the compliance case list. Empty criteria match every case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplianceFilter {
    pub query: String,
    pub severity: Option<Severity>,
    pub status: Option<CaseStatus>,
}

impl ComplianceFilter {
    pub fn matches(&self, case: &ComplianceCase) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_match = query.is_empty()
            || [&case.id, &case.company, &case.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));

        text_match
            && self.severity.map_or(true, |s| case.severity == s)
            && self.status.map_or(true, |s| case.status == s)
    }

    /// Matching cases, most severe first, then newest first.
    pub fn apply(&self, cases: &[ComplianceCase]) -> Vec<ComplianceCase> {
        let mut result: Vec<ComplianceCase> =
            cases.iter().filter(|c| self.matches(c)).cloned().collect();
        result.sort_by_key(|c| (Reverse(c.severity), Reverse(c.opened_on)));
        result
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.severity.is_some() || self.status.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComplianceSummary {
    pub open: usize,
    pub under_review: usize,
    pub resolved: usize,
    /// Critical cases not yet resolved.
    pub critical: usize,
}

pub fn summarize(cases: &[ComplianceCase]) -> ComplianceSummary {
    cases.iter().fold(ComplianceSummary::default(), |mut acc, c| {
        match c.status {
            CaseStatus::Open => acc.open += 1,
            CaseStatus::UnderReview => acc.under_review += 1,
            CaseStatus::Resolved => acc.resolved += 1,
        }
        if c.severity == Severity::Critical && c.status != CaseStatus::Resolved {
            acc.critical += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn case(
        id: &str,
        company: &str,
        severity: Severity,
        status: CaseStatus,
        day: u32,
    ) -> ComplianceCase {
        ComplianceCase {
            id: id.into(),
            company: company.into(),
            category: "Flaring".into(),
            severity,
            status,
            opened_on: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            due_on: None,
            officer: "E. Boateng".into(),
            findings: vec![],
        }
    }

    fn sample() -> Vec<ComplianceCase> {
        vec![
            case("CMP-001", "Tullow Ghana", Severity::Low, CaseStatus::Open, 1),
            case("CMP-002", "Eni Ghana", Severity::Critical, CaseStatus::Open, 3),
            case("CMP-003", "Kosmos Energy", Severity::Critical, CaseStatus::Resolved, 9),
            case("CMP-004", "Eni Ghana", Severity::High, CaseStatus::UnderReview, 5),
        ]
    }

    fn ids(cases: &[ComplianceCase]) -> Vec<&str> {
        cases.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_sorts_by_severity_then_date() {
        let filter = ComplianceFilter::default();
        assert!(!filter.is_active());
        assert_eq!(
            ids(&filter.apply(&sample())),
            vec!["CMP-003", "CMP-002", "CMP-004", "CMP-001"]
        );
    }

    #[test]
    fn test_query_is_case_insensitive_over_id_company_category() {
        let cases = sample();
        let by_company = ComplianceFilter {
            query: "  eni ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_company.apply(&cases)), vec!["CMP-002", "CMP-004"]);

        let by_id = ComplianceFilter {
            query: "cmp-001".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_id.apply(&cases)), vec!["CMP-001"]);

        let by_category = ComplianceFilter {
            query: "FLAR".into(),
            ..Default::default()
        };
        assert_eq!(by_category.apply(&cases).len(), 4);
    }

    #[test]
    fn test_severity_and_status_are_exact() {
        let filter = ComplianceFilter {
            query: String::new(),
            severity: Some(Severity::Critical),
            status: Some(CaseStatus::Open),
        };
        assert!(filter.is_active());
        assert_eq!(ids(&filter.apply(&sample())), vec!["CMP-002"]);
    }

    #[test]
    fn test_summarize() {
        assert_eq!(
            summarize(&sample()),
            ComplianceSummary {
                open: 2,
                under_review: 1,
                resolved: 1,
                critical: 1,
            }
        );
        assert_eq!(summarize(&[]), ComplianceSummary::default());
    }
}
