use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub company: String,
    pub description: String,
    pub amount: f64,
    pub paid: f64,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl Invoice {
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid).max(0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.outstanding() == 0.0
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_settled() && today > self.due_on
    }
}

pub fn outstanding_total(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(Invoice::outstanding).sum()
}

pub fn collected_total(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|i| i.paid.min(i.amount)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(amount: f64, paid: f64, due_on: NaiveDate) -> Invoice {
        Invoice {
            number: "INV-1".to_string(),
            company: "Tema Oil Services".to_string(),
            description: "Permit fee".to_string(),
            amount,
            paid,
            issued_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_on,
        }
    }

    #[test]
    fn test_outstanding_and_overdue() {
        let due = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let partly = invoice(5_000.0, 2_000.0, due);
        assert_eq!(partly.outstanding(), 3_000.0);
        assert!(partly.is_overdue(after));
        assert!(!partly.is_overdue(due));

        let settled = invoice(5_000.0, 5_000.0, due);
        assert!(settled.is_settled());
        assert!(!settled.is_overdue(after));
    }

    #[test]
    fn test_totals_ignore_overpayment() {
        let due = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let items = vec![invoice(1_000.0, 1_200.0, due), invoice(4_000.0, 1_000.0, due)];
        assert_eq!(outstanding_total(&items), 3_000.0);
        assert_eq!(collected_total(&items), 2_000.0);
    }
}
