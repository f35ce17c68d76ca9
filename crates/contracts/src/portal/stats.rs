use serde::{Deserialize, Serialize};

/// How to format a stat value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a stat card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// One headline number on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Change relative to the previous period, in percent.
    pub change_percent: Option<f64>,
}

impl DashboardStat {
    pub fn count(label: &str, icon: &str, value: usize) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value: value as f64,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
            change_percent: None,
        }
    }

    pub fn percent(label: &str, icon: &str, value: f64) -> Self {
        Self {
            format: ValueFormat::Percent { decimals: 1 },
            ..Self::count(label, icon, 0)
        }
        .with_value(value)
    }

    pub fn money(label: &str, icon: &str, value: f64, currency: &str) -> Self {
        Self {
            format: ValueFormat::Money {
                currency: currency.to_string(),
            },
            ..Self::count(label, icon, 0)
        }
        .with_value(value)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_change(mut self, change_percent: f64) -> Self {
        self.change_percent = Some(change_percent);
        self
    }
}
