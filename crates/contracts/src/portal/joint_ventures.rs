use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JvStatus {
    Exploration,
    Development,
    Production,
    Suspended,
}

impl JvStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JvStatus::Exploration => "Exploration",
            JvStatus::Development => "Development",
            JvStatus::Production => "Production",
            JvStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JvPartner {
    pub name: String,
    pub stake_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointVenture {
    pub name: String,
    pub block: String,
    pub operator: String,
    pub partners: Vec<JvPartner>,
    pub status: JvStatus,
}

impl JointVenture {
    pub fn total_stake(&self) -> f64 {
        self.partners.iter().map(|p| p.stake_percent).sum()
    }

    /// Partner stakes add up to 100% (within rounding).
    pub fn is_balanced(&self) -> bool {
        (self.total_stake() - 100.0).abs() < 0.01
    }
}
