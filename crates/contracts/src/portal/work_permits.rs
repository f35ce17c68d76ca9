use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::applications::ApplicationStatus;

/// Expatriate work permit request handled by immigration officers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPermitRequest {
    pub reference: String,
    pub holder: String,
    pub nationality: String,
    pub company: String,
    pub position: String,
    pub submitted_on: NaiveDate,
    pub status: ApplicationStatus,
}
