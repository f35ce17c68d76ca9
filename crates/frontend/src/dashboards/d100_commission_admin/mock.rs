use crate::shared::date_utils::days_from_today;
use contracts::portal::applications::{ApplicationKind, ApplicationStatus, PermitApplication};
use contracts::portal::permits::{Permit, PermitStatus};

fn application(
    id: &str,
    company: &str,
    kind: ApplicationKind,
    submitted_days_ago: i64,
    status: ApplicationStatus,
    reviewer: Option<&str>,
) -> PermitApplication {
    PermitApplication {
        id: id.to_string(),
        company: company.to_string(),
        kind,
        submitted_on: days_from_today(-submitted_days_ago),
        status,
        reviewer: reviewer.map(str::to_string),
    }
}

#[rustfmt::skip]
pub fn applications() -> Vec<PermitApplication> {
    use ApplicationKind::*;
    use ApplicationStatus::*;
    vec![
        application("APP-2301", "Tullow Ghana Ltd", OperatingPermit, 3, Submitted, None),
        application("APP-2298", "Eni Ghana E&P", ExpatriateQuota, 6, UnderReview, Some("A. Asante")),
        application("APP-2295", "Kosmos Energy Ghana", PermitRenewal, 9, QueryRaised, Some("E. Boateng")),
        application("APP-2290", "Springfield E&P", LocalContentPlan, 12, UnderReview, Some("A. Asante")),
        application("APP-2284", "Halliburton Ghana", WorkPermit, 18, Approved, Some("K. Owusu")),
        application("APP-2279", "Schlumberger Ghana", OperatingPermit, 24, Approved, Some("E. Boateng")),
        application("APP-2270", "Petrosol Ltd", OperatingPermit, 30, Rejected, Some("K. Owusu")),
        application("APP-2266", "Baker Hughes Ghana", PermitRenewal, 33, Approved, Some("A. Asante")),
    ]
}

fn permit(
    number: &str,
    company: &str,
    category: &str,
    issued_days_ago: i64,
    expires_in_days: i64,
    status: PermitStatus,
) -> Permit {
    Permit {
        number: number.to_string(),
        company: company.to_string(),
        category: category.to_string(),
        issued_on: days_from_today(-issued_days_ago),
        expires_on: days_from_today(expires_in_days),
        status,
    }
}

#[rustfmt::skip]
pub fn permits() -> Vec<Permit> {
    vec![
        permit("PC-OP-0142", "Tullow Ghana Ltd", "Upstream operator", 700, 30, PermitStatus::Active),
        permit("PC-SV-0311", "Halliburton Ghana", "Well services", 400, 330, PermitStatus::Active),
        permit("PC-SV-0287", "Schlumberger Ghana", "Well services", 360, 65, PermitStatus::Active),
        permit("PC-OP-0150", "Eni Ghana E&P", "Upstream operator", 1100, -12, PermitStatus::Expired),
        permit("PC-SV-0199", "Petrosol Ltd", "Logistics", 500, 20, PermitStatus::Suspended),
        permit("PC-SV-0305", "Baker Hughes Ghana", "Drilling services", 200, 540, PermitStatus::Active),
        permit("PC-OP-0161", "Kosmos Energy Ghana", "Upstream operator", 300, 88, PermitStatus::Active),
    ]
}
