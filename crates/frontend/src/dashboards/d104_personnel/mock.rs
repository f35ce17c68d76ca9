use crate::shared::date_utils::days_from_today;
use chrono::NaiveDate;
use contracts::portal::personnel::{PersonnelDocument, PersonnelRecord, PersonnelStatus};

/// Record of the signed-in employee.
pub fn my_record() -> PersonnelRecord {
    PersonnelRecord {
        id: "PER-0004".to_string(),
        first_name: "Ravi".to_string(),
        last_name: "Menon".to_string(),
        email: Some("ravi.menon@tullowghana.example".to_string()),
        nationality: "Indian".to_string(),
        company: "Tullow Ghana Ltd".to_string(),
        position: "Subsea Engineer".to_string(),
        start_date: days_from_today(-250),
        passport_number: "IN8830145".to_string(),
        documents: vec![PersonnelDocument::PassportCopy, PersonnelDocument::CurriculumVitae],
        status: PersonnelStatus::PermitExpiring,
    }
}

pub const WORK_PERMIT_NUMBER: &str = "WP-24-0877";

pub fn work_permit_expiry() -> NaiveDate {
    days_from_today(41)
}
