use super::super::mock;
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid, StatusBadge};
use crate::shared::date_utils::{format_date, format_days_left, today};
use crate::shared::icons::icon;
use crate::system::auth::context::use_current_user;
use contracts::portal::personnel::{PersonnelDocument, PersonnelRecord};
use contracts::portal::permits::RENEWAL_WINDOW_DAYS;
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;

fn permit_state(days_left: i64) -> (&'static str, IndicatorStatus) {
    if days_left < 0 {
        ("Expired", IndicatorStatus::Bad)
    } else if days_left <= RENEWAL_WINDOW_DAYS {
        ("Renewal due", IndicatorStatus::Warning)
    } else {
        ("Valid", IndicatorStatus::Good)
    }
}

/// Every document type with whether it is on file
fn document_checklist(record: &PersonnelRecord) -> Vec<(PersonnelDocument, bool)> {
    PersonnelDocument::all()
        .into_iter()
        .map(|doc| (doc, record.documents.contains(&doc)))
        .collect()
}

#[component]
pub fn PersonnelDashboard() -> impl IntoView {
    let current_user = use_current_user();
    let record = mock::my_record();
    let days_left = (mock::work_permit_expiry() - today()).num_days();
    let (permit_label, permit_status) = permit_state(days_left);
    let checklist = document_checklist(&record);
    let on_file = checklist.iter().filter(|(_, present)| *present).count();

    let stats = vec![
        DashboardStat::count("Days of permit left", "clock", days_left.max(0) as usize)
            .with_status(permit_status),
        DashboardStat::count("Documents on file", "file-text", on_file).with_status(
            if on_file == checklist.len() {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Warning
            },
        ),
    ];

    let greeting = move || {
        current_user
            .get()
            .map(|u| format!("Signed in as {}", u.display_name()))
            .unwrap_or_default()
    };

    let profile_rows = vec![
        ("Personnel ID", record.id.clone()),
        ("Name", record.full_name()),
        ("Company", record.company.clone()),
        ("Position", record.position.clone()),
        ("Nationality", record.nationality.clone()),
        ("Start date", format_date(record.start_date)),
        ("Email", record.email.clone().unwrap_or_default()),
    ];

    view! {
        <div id="d104_personnel--dashboard" class="page">
            <PageHeader title="My profile" icon_name="users">
                <span class="page-header__note">{greeting}</span>
                {tone_badge(&record.status)}
            </PageHeader>
            <StatGrid stats=stats />

            <Section title="Profile">
                <dl class="review-list">
                    {profile_rows.into_iter().map(|(k, v)| view! {
                        <dt>{k}</dt>
                        <dd>{v}</dd>
                    }).collect_view()}
                </dl>
            </Section>

            <Section title="Work permit">
                <dl class="review-list">
                    <dt>"Permit number"</dt>
                    <dd>{mock::WORK_PERMIT_NUMBER}</dd>
                    <dt>"Expires"</dt>
                    <dd>{format!("{} ({})", format_date(mock::work_permit_expiry()), format_days_left(days_left))}</dd>
                    <dt>"Status"</dt>
                    <dd><StatusBadge label=permit_label status=permit_status /></dd>
                </dl>
            </Section>

            <Section title="Document checklist">
                <ul class="checklist">
                    {checklist.into_iter().map(|(doc, present)| view! {
                        <li class="checklist__item" class:checklist__item--missing=!present>
                            {icon(if present { "check-circle" } else { "alert-triangle" })}
                            <span>{doc.label()}</span>
                            <span class="checklist__state">{if present { "On file" } else { "Missing" }}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </Section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permit_state() {
        assert_eq!(permit_state(-1).1, IndicatorStatus::Bad);
        assert_eq!(permit_state(0).1, IndicatorStatus::Warning);
        assert_eq!(permit_state(RENEWAL_WINDOW_DAYS).1, IndicatorStatus::Warning);
        assert_eq!(permit_state(RENEWAL_WINDOW_DAYS + 1).0, "Valid");
    }

    #[test]
    fn test_document_checklist_marks_missing() {
        let checklist = document_checklist(&mock::my_record());
        assert_eq!(
            checklist,
            vec![
                (PersonnelDocument::PassportCopy, true),
                (PersonnelDocument::CurriculumVitae, true),
                (PersonnelDocument::Certificates, false),
            ]
        );
    }
}
