use crate::shared::date_utils::days_from_today;
use contracts::portal::compliance::{CaseStatus, ComplianceCase, Severity};

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    company: &str,
    category: &str,
    severity: Severity,
    status: CaseStatus,
    opened_days_ago: i64,
    due_in_days: Option<i64>,
    officer: &str,
    findings: &[&str],
) -> ComplianceCase {
    ComplianceCase {
        id: id.to_string(),
        company: company.to_string(),
        category: category.to_string(),
        severity,
        status,
        opened_on: days_from_today(-opened_days_ago),
        due_on: due_in_days.map(days_from_today),
        officer: officer.to_string(),
        findings: findings.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn cases() -> Vec<ComplianceCase> {
    use CaseStatus::*;
    use Severity::*;
    vec![
        case(
            "CMP-1042",
            "Eni Ghana E&P",
            "Gas flaring",
            Critical,
            Open,
            4,
            Some(10),
            "E. Boateng",
            &[
                "Routine flaring above the approved monthly volume",
                "Flare meter calibration certificate expired",
            ],
        ),
        case(
            "CMP-1039",
            "Tullow Ghana Ltd",
            "Local content reporting",
            Medium,
            UnderReview,
            11,
            Some(20),
            "A. Asante",
            &["Quarterly local content report filed late"],
        ),
        case(
            "CMP-1035",
            "Kosmos Energy Ghana",
            "HSE incident",
            High,
            Open,
            15,
            Some(5),
            "E. Boateng",
            &[
                "Lost-time injury on FPSO not reported within 24 hours",
                "Permit-to-work records incomplete",
            ],
        ),
        case(
            "CMP-1031",
            "Petrosol Ltd",
            "Expatriate quota",
            High,
            UnderReview,
            22,
            None,
            "K. Owusu",
            &["Two expatriates working without valid work permits"],
        ),
        case(
            "CMP-1027",
            "Halliburton Ghana",
            "Data submission",
            Low,
            Resolved,
            40,
            None,
            "A. Asante",
            &[],
        ),
        case(
            "CMP-1020",
            "Springfield E&P",
            "Environmental permit",
            Critical,
            Resolved,
            75,
            None,
            "E. Boateng",
            &["Produced water discharge exceeded limits", "Remediation verified on site"],
        ),
        case(
            "CMP-1016",
            "Schlumberger Ghana",
            "Procurement",
            Medium,
            Open,
            90,
            Some(-3),
            "K. Owusu",
            &["Contract awarded without Commission approval of tender"],
        ),
    ]
}
