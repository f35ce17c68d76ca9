use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalContentPlan {
    pub company: String,
    pub period: String,
    /// Spend with local suppliers and staff, in USD.
    pub local_spend: f64,
    pub total_spend: f64,
    pub target_percent: f64,
    pub local_staff: u32,
    pub total_staff: u32,
}

impl LocalContentPlan {
    pub fn local_share_percent(&self) -> f64 {
        if self.total_spend <= 0.0 {
            0.0
        } else {
            self.local_spend * 100.0 / self.total_spend
        }
    }

    pub fn local_staff_percent(&self) -> f64 {
        if self.total_staff == 0 {
            0.0
        } else {
            self.local_staff as f64 * 100.0 / self.total_staff as f64
        }
    }

    pub fn meets_target(&self) -> bool {
        self.local_share_percent() >= self.target_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(local_spend: f64, total_spend: f64, target_percent: f64) -> LocalContentPlan {
        LocalContentPlan {
            company: "Coastal Services".to_string(),
            period: "2024".to_string(),
            local_spend,
            total_spend,
            target_percent,
            local_staff: 45,
            total_staff: 60,
        }
    }

    #[test]
    fn test_local_share_and_target() {
        let p = plan(6_000_000.0, 10_000_000.0, 55.0);
        assert_eq!(p.local_share_percent(), 60.0);
        assert!(p.meets_target());
        assert_eq!(p.local_staff_percent(), 75.0);
        assert!(!plan(4_000_000.0, 10_000_000.0, 55.0).meets_target());
    }

    #[test]
    fn test_zero_spend_is_zero_share() {
        assert_eq!(plan(0.0, 0.0, 10.0).local_share_percent(), 0.0);
    }
}
