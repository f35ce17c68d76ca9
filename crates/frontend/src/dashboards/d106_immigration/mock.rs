use crate::shared::date_utils::days_from_today;
use contracts::portal::applications::ApplicationStatus;
use contracts::portal::work_permits::WorkPermitRequest;

fn request(
    reference: &str,
    holder: &str,
    nationality: &str,
    company: &str,
    position: &str,
    submitted_days_ago: i64,
    status: ApplicationStatus,
) -> WorkPermitRequest {
    WorkPermitRequest {
        reference: reference.to_string(),
        holder: holder.to_string(),
        nationality: nationality.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        submitted_on: days_from_today(-submitted_days_ago),
        status,
    }
}

#[rustfmt::skip]
pub fn requests() -> Vec<WorkPermitRequest> {
    use ApplicationStatus::*;
    vec![
        request("WP-24-0912", "Lucia Ferreira", "Brazilian", "Tullow Ghana Ltd", "Production Chemist", 2, Submitted),
        request("WP-24-0905", "Marco Bianchi", "Italian", "Eni Ghana E&P", "Process Engineer", 5, UnderReview),
        request("WP-24-0899", "John Carter", "American", "Kosmos Energy Ghana", "Completions Lead", 8, QueryRaised),
        request("WP-24-0890", "Hans Vogel", "German", "Schlumberger Ghana", "Wireline Specialist", 13, UnderReview),
        request("WP-24-0877", "Ravi Menon", "Indian", "Tullow Ghana Ltd", "Subsea Engineer", 20, Approved),
        request("WP-24-0861", "Olga Petrova", "Russian", "Petrosol Ltd", "Logistics Manager", 26, Rejected),
        request("WP-24-0854", "Chen Wei", "Chinese", "Halliburton Ghana", "Cementing Engineer", 31, Approved),
    ]
}
