use crate::shared::date_utils::days_from_today;
use contracts::portal::applications::{ApplicationKind, ApplicationStatus, PermitApplication};
use contracts::portal::permits::{Permit, PermitStatus};
use contracts::portal::personnel::{PersonnelDocument, PersonnelRecord, PersonnelStatus};

/// Company the demo company administrator belongs to.
pub const COMPANY_NAME: &str = "Tullow Ghana Ltd";
pub const HOST_NATIONALITY: &str = "Ghanaian";
/// Expatriate positions approved for the company.
pub const EXPATRIATE_QUOTA: usize = 6;

pub fn permits() -> Vec<Permit> {
    vec![
        Permit {
            number: "PC-OP-0142".to_string(),
            company: COMPANY_NAME.to_string(),
            category: "Upstream operator".to_string(),
            issued_on: days_from_today(-700),
            expires_on: days_from_today(30),
            status: PermitStatus::Active,
        },
        Permit {
            number: "PC-SV-0402".to_string(),
            company: COMPANY_NAME.to_string(),
            category: "Offshore logistics".to_string(),
            issued_on: days_from_today(-120),
            expires_on: days_from_today(610),
            status: PermitStatus::Active,
        },
    ]
}

pub fn applications() -> Vec<PermitApplication> {
    vec![
        PermitApplication {
            id: "APP-2301".to_string(),
            company: COMPANY_NAME.to_string(),
            kind: ApplicationKind::OperatingPermit,
            submitted_on: days_from_today(-3),
            status: ApplicationStatus::Submitted,
            reviewer: None,
        },
        PermitApplication {
            id: "APP-2244".to_string(),
            company: COMPANY_NAME.to_string(),
            kind: ApplicationKind::ExpatriateQuota,
            submitted_on: days_from_today(-60),
            status: ApplicationStatus::Approved,
            reviewer: Some("K. Owusu".to_string()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn person(
    id: &str,
    first_name: &str,
    last_name: &str,
    nationality: &str,
    position: &str,
    started_days_ago: i64,
    passport_number: &str,
    status: PersonnelStatus,
) -> PersonnelRecord {
    PersonnelRecord {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        nationality: nationality.to_string(),
        company: COMPANY_NAME.to_string(),
        position: position.to_string(),
        start_date: days_from_today(-started_days_ago),
        passport_number: passport_number.to_string(),
        documents: PersonnelDocument::all().to_vec(),
        status,
    }
}

#[rustfmt::skip]
pub fn personnel() -> Vec<PersonnelRecord> {
    use PersonnelStatus::*;
    vec![
        person("PER-0001", "Ama", "Owusu", "Ghanaian", "Reservoir Geologist", 900, "G4410021", Active),
        person("PER-0002", "James", "Whitfield", "British", "Drilling Superintendent", 420, "UK5521907", Active),
        person("PER-0003", "Kofi", "Adjei", "Ghanaian", "HSE Coordinator", 300, "G3381170", Active),
        person("PER-0004", "Ravi", "Menon", "Indian", "Subsea Engineer", 250, "IN8830145", PermitExpiring),
        person("PER-0005", "Lucia", "Ferreira", "Brazilian", "Production Chemist", 20, "BR0912733", Pending),
        person("PER-0006", "Pieter", "de Vries", "Dutch", "Marine Superintendent", 600, "NL7718820", Suspended),
    ]
}
