use super::roster::use_personnel_roster;
use super::wizard::{AddPersonnelWizard, FieldError, PersonnelForm, SubmitError, WizardStep};
use crate::dashboards::d101_company_admin::mock::COMPANY_NAME;
use crate::routes::routes::COMPANY_DASHBOARD_PATH;
use crate::shared::components::{PageHeader, Section};
use crate::shared::date_utils::{format_date, today};
use contracts::portal::personnel::{PersonnelDocument, PersonnelRecord};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// One signal per input, so thaw inputs can bind to them directly.
#[derive(Clone, Copy)]
struct FormFields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    nationality: RwSignal<String>,
    company: RwSignal<String>,
    position: RwSignal<String>,
    start_date: RwSignal<String>,
    passport_number: RwSignal<String>,
    passport_copy: RwSignal<bool>,
    curriculum_vitae: RwSignal<bool>,
    certificates: RwSignal<bool>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            nationality: RwSignal::new(String::new()),
            company: RwSignal::new(COMPANY_NAME.to_string()),
            position: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            passport_number: RwSignal::new(String::new()),
            passport_copy: RwSignal::new(false),
            curriculum_vitae: RwSignal::new(false),
            certificates: RwSignal::new(false),
        }
    }

    fn document_flags(&self) -> [(PersonnelDocument, RwSignal<bool>); 3] {
        [
            (PersonnelDocument::PassportCopy, self.passport_copy),
            (PersonnelDocument::CurriculumVitae, self.curriculum_vitae),
            (PersonnelDocument::Certificates, self.certificates),
        ]
    }

    fn snapshot(&self) -> PersonnelForm {
        PersonnelForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            nationality: self.nationality.get_untracked(),
            company: self.company.get_untracked(),
            position: self.position.get_untracked(),
            start_date: self.start_date.get_untracked(),
            passport_number: self.passport_number.get_untracked(),
            documents: self
                .document_flags()
                .into_iter()
                .filter(|(_, flag)| flag.get_untracked())
                .map(|(doc, _)| doc)
                .collect(),
        }
    }

    fn reset(&self) {
        for text in [
            self.first_name,
            self.last_name,
            self.email,
            self.nationality,
            self.position,
            self.start_date,
            self.passport_number,
        ] {
            text.set(String::new());
        }
        self.company.set(COMPANY_NAME.to_string());
        for (_, flag) in self.document_flags() {
            flag.set(false);
        }
    }
}

#[component]
fn FormRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="form-row">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{label}</Label>
                {children()}
            </Flex>
        </div>
    }
}

fn step_label_class(current: WizardStep, label: WizardStep) -> String {
    let mut class = String::from("wizard-steps__label");
    if current == label {
        class.push_str(" wizard-steps__label--active");
    } else if current.index() > label.index() {
        class.push_str(" wizard-steps__label--done");
    }
    class
}

#[component]
fn StepIndicator(step: Signal<WizardStep>, progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="wizard-steps">
            <div class="wizard-steps__labels">
                {WizardStep::all().into_iter().map(|s| view! {
                    <span class=move || step_label_class(step.get(), s)>
                        {format!("{}. {}", s.index() + 1, s.label())}
                    </span>
                }).collect_view()}
            </div>
            <div class="wizard-steps__track">
                <div
                    class="wizard-steps__bar"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
        </div>
    }
}

fn review_rows(form: &PersonnelForm) -> Vec<(&'static str, String)> {
    let documents = form
        .documents
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        ("Name", format!("{} {}", form.first_name.trim(), form.last_name.trim())),
        ("Email", form.email.trim().to_string()),
        ("Nationality", form.nationality.trim().to_string()),
        ("Company", form.company.trim().to_string()),
        ("Position", form.position.trim().to_string()),
        ("Start date", form.start_date.trim().to_string()),
        ("Passport number", form.passport_number.trim().to_uppercase()),
        ("Documents", documents),
    ]
}

#[component]
pub fn AddPersonnelView() -> impl IntoView {
    let roster = use_personnel_roster();
    let navigate = use_navigate();
    let fields = FormFields::new();
    let wizard = RwSignal::new(AddPersonnelWizard::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let notice = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<PersonnelRecord>);

    let step = Signal::derive(move || wizard.with(|w| w.step()));
    let progress = Signal::derive(move || wizard.with(|w| w.progress_percent()));

    let on_next = move |_| {
        notice.set(None);
        let mut outcome = Ok(WizardStep::Personal);
        wizard.update(|w| {
            w.form = fields.snapshot();
            outcome = w.next();
        });
        match outcome {
            Ok(_) => errors.set(Vec::new()),
            Err(list) => errors.set(list),
        }
    };

    let on_back = move |_| {
        errors.set(Vec::new());
        notice.set(None);
        wizard.update(|w| {
            w.back();
        });
    };

    let on_submit = move |_| {
        let id = roster.next_id();
        let result = wizard.with_untracked(|w| w.submit(id));
        match result {
            Ok(record) => {
                log::info!("Personnel record {} submitted for approval", record.id);
                errors.set(Vec::new());
                notice.set(None);
                roster.add(record.clone());
                submitted.set(Some(record));
            }
            Err(SubmitError::Invalid(list)) => {
                log::warn!("Personnel submission rejected: {} field error(s)", list.len());
                errors.set(list);
            }
            Err(e) => notice.set(Some(e.to_string())),
        }
    };

    let on_restart = move |_| {
        fields.reset();
        wizard.set(AddPersonnelWizard::default());
        errors.set(Vec::new());
        submitted.set(None);
    };

    let go_dashboard = move |_| navigate(COMPANY_DASHBOARD_PATH, Default::default());

    let step_body = move || match step.get() {
        WizardStep::Personal => view! {
            <FormRow label="First name"><Input value=fields.first_name placeholder="Kwame" /></FormRow>
            <FormRow label="Last name"><Input value=fields.last_name placeholder="Mensah" /></FormRow>
            <FormRow label="Email (optional)"><Input value=fields.email placeholder="name@company.com" /></FormRow>
            <FormRow label="Nationality"><Input value=fields.nationality placeholder="Ghanaian" /></FormRow>
        }
        .into_any(),
        WizardStep::Employment => view! {
            <FormRow label="Company"><Input value=fields.company /></FormRow>
            <FormRow label="Position"><Input value=fields.position placeholder="Drilling Engineer" /></FormRow>
            <FormRow label="Start date"><Input value=fields.start_date placeholder="YYYY-MM-DD" /></FormRow>
        }
        .into_any(),
        WizardStep::Documents => view! {
            <FormRow label="Passport number"><Input value=fields.passport_number placeholder="G1234567" /></FormRow>
            <FormRow label="Attached documents">
                <Flex vertical=true gap=FlexGap::Small>
                    {fields.document_flags().into_iter().map(|(doc, flag)| view! {
                        <Checkbox checked=flag label=doc.label() />
                    }).collect_view()}
                </Flex>
            </FormRow>
        }
        .into_any(),
        WizardStep::Review => {
            let rows = review_rows(&fields.snapshot());
            view! {
                <dl class="review-list">
                    {rows.into_iter().map(|(k, v)| view! {
                        <dt>{k}</dt>
                        <dd>{if v.is_empty() { "—".to_string() } else { v }}</dd>
                    }).collect_view()}
                </dl>
            }
            .into_any()
        }
    };

    let form_view = move || view! {
        <StepIndicator step=step progress=progress />

        {move || notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}
        {move || {
            let list = errors.get();
            (!list.is_empty()).then(|| view! {
                <div class="alert alert--error">
                    <ul>
                        {list.into_iter().map(|e| view! { <li>{e.to_string()}</li> }).collect_view()}
                    </ul>
                </div>
            })
        }}

        <div class="wizard-body">{step_body}</div>

        <Flex justify=FlexJustify::SpaceBetween>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=on_back
                disabled=Signal::derive(move || step.get() == WizardStep::Personal)
            >
                "Back"
            </Button>
            {move || if step.get() == WizardStep::Review {
                view! {
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        "Submit for approval"
                    </Button>
                }.into_any()
            } else {
                view! {
                    <Button appearance=ButtonAppearance::Primary on_click=on_next>
                        "Next"
                    </Button>
                }.into_any()
            }}
        </Flex>
    };

    view! {
        <div id="u201_add_personnel--usecase" class="page">
            <PageHeader
                title="Add personnel"
                subtitle="Register an employee for commission approval"
                icon_name="user-plus"
            />
            <Section title="New personnel record">
                {move || match submitted.get() {
                    Some(record) => {
                        let go_dashboard = go_dashboard.clone();
                        view! {
                            <div class="wizard-done">
                                <p>
                                    {format!(
                                        "{} ({}) was submitted on {} and is pending approval.",
                                        record.full_name(),
                                        record.id,
                                        format_date(today()),
                                    )}
                                </p>
                                <Flex gap=FlexGap::Small>
                                    <Button appearance=ButtonAppearance::Primary on_click=on_restart>
                                        "Add another"
                                    </Button>
                                    <Button appearance=ButtonAppearance::Secondary on_click=go_dashboard>
                                        "Back to dashboard"
                                    </Button>
                                </Flex>
                            </div>
                        }
                        .into_any()
                    }
                    None => form_view().into_any(),
                }}
            </Section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rows_trim_and_join() {
        let form = PersonnelForm {
            first_name: " Ama ".into(),
            last_name: "Owusu".into(),
            passport_number: "g7654321".into(),
            documents: vec![PersonnelDocument::PassportCopy, PersonnelDocument::Certificates],
            ..Default::default()
        };
        let rows = review_rows(&form);
        assert_eq!(rows[0], ("Name", "Ama Owusu".to_string()));
        assert_eq!(rows[6], ("Passport number", "G7654321".to_string()));
        assert_eq!(rows[7].1, "Passport copy, Professional certificates");
    }

    #[test]
    fn test_step_label_class() {
        assert_eq!(
            step_label_class(WizardStep::Employment, WizardStep::Employment),
            "wizard-steps__label wizard-steps__label--active"
        );
        assert_eq!(
            step_label_class(WizardStep::Employment, WizardStep::Personal),
            "wizard-steps__label wizard-steps__label--done"
        );
        assert_eq!(
            step_label_class(WizardStep::Employment, WizardStep::Review),
            "wizard-steps__label"
        );
    }
}
