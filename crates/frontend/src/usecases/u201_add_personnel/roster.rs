use contracts::portal::personnel::PersonnelRecord;
use leptos::prelude::*;

/// Personnel list shared between the company dashboard and the wizard.
///
/// Lives in memory only; a reload brings back the seed records.
#[derive(Clone, Copy)]
pub struct PersonnelRoster(RwSignal<Vec<PersonnelRecord>>);

impl PersonnelRoster {
    pub fn new(seed: Vec<PersonnelRecord>) -> Self {
        Self(RwSignal::new(seed))
    }

    pub fn records(&self) -> Signal<Vec<PersonnelRecord>> {
        self.0.into()
    }

    pub fn add(&self, record: PersonnelRecord) {
        self.0.update(|list| list.push(record));
    }

    pub fn next_id(&self) -> String {
        self.0.with_untracked(|list| next_personnel_id(list))
    }
}

/// `PER-` followed by one more than the highest numeric suffix in use
pub fn next_personnel_id(records: &[PersonnelRecord]) -> String {
    let highest = records
        .iter()
        .filter_map(|r| r.id.strip_prefix("PER-")?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("PER-{:04}", highest.saturating_add(1))
}

pub fn provide_personnel_roster(seed: Vec<PersonnelRecord>) -> PersonnelRoster {
    let roster = PersonnelRoster::new(seed);
    provide_context(roster);
    roster
}

pub fn use_personnel_roster() -> PersonnelRoster {
    use_context::<PersonnelRoster>().expect("PersonnelRoster not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::portal::personnel::PersonnelStatus;

    fn record(id: &str) -> PersonnelRecord {
        PersonnelRecord {
            id: id.into(),
            first_name: "Ama".into(),
            last_name: "Owusu".into(),
            email: None,
            nationality: "Ghanaian".into(),
            company: "Tullow Ghana Ltd".into(),
            position: "Geologist".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
            passport_number: "G7654321".into(),
            documents: vec![],
            status: PersonnelStatus::Active,
        }
    }

    #[test]
    fn test_next_personnel_id() {
        assert_eq!(next_personnel_id(&[]), "PER-0001");
        let records = [record("PER-0003"), record("PER-0012"), record("legacy-9")];
        assert_eq!(next_personnel_id(&records), "PER-0013");
    }

    #[test]
    fn test_next_personnel_id_past_u32_range() {
        let records = [record("PER-4294967295")];
        assert_eq!(next_personnel_id(&records), "PER-4294967296");
        let records = [record(&format!("PER-{}", u64::MAX))];
        assert_eq!(next_personnel_id(&records), format!("PER-{}", u64::MAX));
    }
}
