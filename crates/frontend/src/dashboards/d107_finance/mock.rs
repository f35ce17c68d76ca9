use crate::shared::date_utils::days_from_today;
use contracts::portal::finance::Invoice;

fn invoice(
    number: &str,
    company: &str,
    description: &str,
    amount: f64,
    paid: f64,
    issued_days_ago: i64,
    due_in_days: i64,
) -> Invoice {
    Invoice {
        number: number.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        amount,
        paid,
        issued_on: days_from_today(-issued_days_ago),
        due_on: days_from_today(due_in_days),
    }
}

#[rustfmt::skip]
pub fn invoices() -> Vec<Invoice> {
    vec![
        invoice("INV-24-3310", "Tullow Ghana Ltd", "Operating permit renewal fee", 25_000.0, 25_000.0, 40, -10),
        invoice("INV-24-3322", "Eni Ghana E&P", "Annual regulatory levy", 180_000.0, 90_000.0, 35, -5),
        invoice("INV-24-3341", "Kosmos Energy Ghana", "Expatriate quota fee", 12_500.0, 0.0, 12, 18),
        invoice("INV-24-3356", "Petrosol Ltd", "Late filing penalty", 7_500.0, 0.0, 60, -30),
        invoice("INV-24-3362", "Halliburton Ghana", "Service permit fee", 15_000.0, 15_000.0, 8, 22),
        invoice("INV-24-3375", "Springfield E&P", "Data room access", 4_000.0, 0.0, 2, 28),
    ]
}
