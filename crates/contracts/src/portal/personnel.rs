use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonnelStatus {
    Pending,
    Active,
    PermitExpiring,
    Suspended,
}

impl PersonnelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PersonnelStatus::Pending => "Pending approval",
            PersonnelStatus::Active => "Active",
            PersonnelStatus::PermitExpiring => "Permit expiring",
            PersonnelStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonnelDocument {
    PassportCopy,
    CurriculumVitae,
    Certificates,
}

impl PersonnelDocument {
    pub fn all() -> [PersonnelDocument; 3] {
        [
            PersonnelDocument::PassportCopy,
            PersonnelDocument::CurriculumVitae,
            PersonnelDocument::Certificates,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonnelDocument::PassportCopy => "Passport copy",
            PersonnelDocument::CurriculumVitae => "Curriculum vitae",
            PersonnelDocument::Certificates => "Professional certificates",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub nationality: String,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub passport_number: String,
    pub documents: Vec<PersonnelDocument>,
    pub status: PersonnelStatus,
}

impl PersonnelRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
