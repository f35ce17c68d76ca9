//! Step logic of the add-personnel wizard, kept free of UI state.

use crate::shared::date_utils::parse_iso_date;
use contracts::portal::personnel::{PersonnelDocument, PersonnelRecord, PersonnelStatus};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Personal,
    Employment,
    Documents,
    Review,
}

impl WizardStep {
    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::Personal,
            WizardStep::Employment,
            WizardStep::Documents,
            WizardStep::Review,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Personal => 0,
            WizardStep::Employment => 1,
            WizardStep::Documents => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal details",
            WizardStep::Employment => "Employment",
            WizardStep::Documents => "Documents",
            WizardStep::Review => "Review",
        }
    }

    fn next(self) -> WizardStep {
        match self {
            WizardStep::Personal => WizardStep::Employment,
            WizardStep::Employment => WizardStep::Documents,
            WizardStep::Documents | WizardStep::Review => WizardStep::Review,
        }
    }

    fn prev(self) -> WizardStep {
        match self {
            WizardStep::Personal | WizardStep::Employment => WizardStep::Personal,
            WizardStep::Documents => WizardStep::Employment,
            WizardStep::Review => WizardStep::Documents,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Nationality,
    Company,
    Position,
    StartDate,
    PassportNumber,
    Documents,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Nationality => "Nationality",
            Field::Company => "Company",
            Field::Position => "Position",
            Field::StartDate => "Start date",
            Field::PassportNumber => "Passport number",
            Field::Documents => "Documents",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("Start date must be in YYYY-MM-DD format")]
    InvalidStartDate,
    #[error("Passport number must be 6 to 12 letters or digits")]
    InvalidPassport,
    #[error("Tick at least one document")]
    NoDocuments,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
            FieldError::InvalidStartDate => Field::StartDate,
            FieldError::InvalidPassport => Field::PassportNumber,
            FieldError::NoDocuments => Field::Documents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Finish the {} step before submitting", .0.label())]
    NotReady(WizardStep),
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonnelForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub nationality: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub passport_number: String,
    pub documents: Vec<PersonnelDocument>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_valid_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

fn is_valid_passport(value: &str) -> bool {
    let value = value.trim();
    (6..=12).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn require(errors: &mut Vec<FieldError>, field: Field, value: &str) {
    if is_blank(value) {
        errors.push(FieldError::Required(field));
    }
}

/// Errors for the fields shown on `step`. Review has none of its own.
pub fn validate_step(step: WizardStep, form: &PersonnelForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match step {
        WizardStep::Personal => {
            require(&mut errors, Field::FirstName, &form.first_name);
            require(&mut errors, Field::LastName, &form.last_name);
            if !is_blank(&form.email) && !is_valid_email(&form.email) {
                errors.push(FieldError::InvalidEmail);
            }
            require(&mut errors, Field::Nationality, &form.nationality);
        }
        WizardStep::Employment => {
            require(&mut errors, Field::Company, &form.company);
            require(&mut errors, Field::Position, &form.position);
            if is_blank(&form.start_date) {
                errors.push(FieldError::Required(Field::StartDate));
            } else if parse_iso_date(&form.start_date).is_none() {
                errors.push(FieldError::InvalidStartDate);
            }
        }
        WizardStep::Documents => {
            if is_blank(&form.passport_number) {
                errors.push(FieldError::Required(Field::PassportNumber));
            } else if !is_valid_passport(&form.passport_number) {
                errors.push(FieldError::InvalidPassport);
            }
            if form.documents.is_empty() {
                errors.push(FieldError::NoDocuments);
            }
        }
        WizardStep::Review => {}
    }
    errors
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddPersonnelWizard {
    step: WizardStep,
    pub form: PersonnelForm,
}

impl Default for AddPersonnelWizard {
    fn default() -> Self {
        Self::new(PersonnelForm::default())
    }
}

impl AddPersonnelWizard {
    pub fn new(form: PersonnelForm) -> Self {
        Self {
            step: WizardStep::Personal,
            form,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Validate the current step and move forward on success.
    pub fn next(&mut self) -> Result<WizardStep, Vec<FieldError>> {
        let errors = validate_step(self.step, &self.form);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    /// One step back, entered values are kept.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.prev();
        self.step
    }

    pub fn progress_percent(&self) -> u8 {
        let total = WizardStep::all().len();
        ((self.step.index() + 1) * 100 / total) as u8
    }

    /// Build the record from the review step. Every step is checked again.
    pub fn submit(&self, id: impl Into<String>) -> Result<PersonnelRecord, SubmitError> {
        if self.step != WizardStep::Review {
            return Err(SubmitError::NotReady(self.step));
        }

        let errors: Vec<FieldError> = WizardStep::all()
            .into_iter()
            .flat_map(|step| validate_step(step, &self.form))
            .collect();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
        let start_date = parse_iso_date(&self.form.start_date)
            .ok_or(SubmitError::Invalid(vec![FieldError::InvalidStartDate]))?;

        let form = &self.form;
        let email = form.email.trim();
        Ok(PersonnelRecord {
            id: id.into(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
            nationality: form.nationality.trim().to_string(),
            company: form.company.trim().to_string(),
            position: form.position.trim().to_string(),
            start_date,
            passport_number: form.passport_number.trim().to_uppercase(),
            documents: form.documents.clone(),
            status: PersonnelStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_form() -> PersonnelForm {
        PersonnelForm {
            first_name: "Kwame".into(),
            last_name: "Mensah".into(),
            email: "k.mensah@example.com".into(),
            nationality: "Ghanaian".into(),
            company: "Tullow Ghana Ltd".into(),
            position: "Drilling Engineer".into(),
            start_date: "2024-05-01".into(),
            passport_number: "g1234567".into(),
            documents: vec![PersonnelDocument::PassportCopy],
        }
    }

    fn at_review() -> AddPersonnelWizard {
        let mut wizard = AddPersonnelWizard::new(filled_form());
        for _ in 0..3 {
            wizard.next().unwrap();
        }
        wizard
    }

    #[test]
    fn test_empty_personal_step_lists_required_fields() {
        let mut wizard = AddPersonnelWizard::default();
        let errors = wizard.next().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Required(Field::FirstName),
                FieldError::Required(Field::LastName),
                FieldError::Required(Field::Nationality),
            ]
        );
        assert_eq!(wizard.step(), WizardStep::Personal);
    }

    #[test]
    fn test_email_is_optional_but_checked() {
        let mut form = filled_form();
        form.email = "   ".into();
        assert!(validate_step(WizardStep::Personal, &form).is_empty());

        for bad in ["mensah", "@example.com", "k.mensah@"] {
            form.email = bad.into();
            assert_eq!(
                validate_step(WizardStep::Personal, &form),
                vec![FieldError::InvalidEmail],
                "{bad}"
            );
        }
    }

    #[test]
    fn test_employment_start_date_format() {
        let mut form = filled_form();
        form.start_date = "01/05/2024".into();
        assert_eq!(
            validate_step(WizardStep::Employment, &form),
            vec![FieldError::InvalidStartDate]
        );
        form.start_date = String::new();
        assert_eq!(
            validate_step(WizardStep::Employment, &form),
            vec![FieldError::Required(Field::StartDate)]
        );
    }

    #[test]
    fn test_documents_step() {
        let mut form = filled_form();
        form.passport_number = "AB12".into();
        form.documents.clear();
        let errors = validate_step(WizardStep::Documents, &form);
        assert_eq!(errors, vec![FieldError::InvalidPassport, FieldError::NoDocuments]);
        assert_eq!(errors[1].field(), Field::Documents);

        form.passport_number = "AB12-4567".into();
        form.documents = vec![PersonnelDocument::Certificates];
        assert_eq!(
            validate_step(WizardStep::Documents, &form),
            vec![FieldError::InvalidPassport]
        );
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = at_review();
        assert_eq!(wizard.back(), WizardStep::Documents);
        assert_eq!(wizard.back(), WizardStep::Employment);
        assert_eq!(wizard.back(), WizardStep::Personal);
        assert_eq!(wizard.back(), WizardStep::Personal);
        assert_eq!(wizard.form, filled_form());
    }

    #[test]
    fn test_progress() {
        let mut wizard = AddPersonnelWizard::new(filled_form());
        assert_eq!(wizard.progress_percent(), 25);
        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.progress_percent(), 75);
        wizard.next().unwrap();
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_submit_only_from_review() {
        let wizard = AddPersonnelWizard::new(filled_form());
        assert_eq!(
            wizard.submit("PER-1"),
            Err(SubmitError::NotReady(WizardStep::Personal))
        );
    }

    #[test]
    fn test_submit_revalidates() {
        let mut wizard = at_review();
        wizard.form.first_name.clear();
        assert_eq!(
            wizard.submit("PER-1"),
            Err(SubmitError::Invalid(vec![FieldError::Required(Field::FirstName)]))
        );
    }

    #[test]
    fn test_submit_builds_pending_record() {
        let record = at_review().submit("PER-7").unwrap();
        assert_eq!(record.id, "PER-7");
        assert_eq!(record.full_name(), "Kwame Mensah");
        assert_eq!(record.passport_number, "G1234567");
        assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(record.status, PersonnelStatus::Pending);
        assert_eq!(record.email.as_deref(), Some("k.mensah@example.com"));
    }
}
