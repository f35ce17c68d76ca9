use super::super::mock::{self, EXPATRIATE_QUOTA, HOST_NATIONALITY};
use crate::routes::routes::ADD_PERSONNEL_PATH;
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid};
use crate::shared::date_utils::{format_date, format_days_left, today};
use crate::usecases::u201_add_personnel::use_personnel_roster;
use contracts::portal::permits::PermitStatus;
use contracts::portal::personnel::{PersonnelRecord, PersonnelStatus};
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Expatriates holding or awaiting a quota slot.
pub fn expatriate_quota_used(records: &[PersonnelRecord]) -> usize {
    records
        .iter()
        .filter(|r| !r.nationality.trim().eq_ignore_ascii_case(HOST_NATIONALITY))
        .filter(|r| r.status != PersonnelStatus::Suspended)
        .count()
}

fn quota_stat(used: usize) -> DashboardStat {
    let status = if used > EXPATRIATE_QUOTA {
        IndicatorStatus::Bad
    } else if used == EXPATRIATE_QUOTA {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Good
    };
    DashboardStat::count("Expatriate quota used", "globe", used).with_status(status)
}

#[component]
pub fn CompanyAdminDashboard() -> impl IntoView {
    let today = today();
    let roster = use_personnel_roster();
    let navigate = use_navigate();
    let permits = mock::permits();
    let applications = mock::applications();

    let active_permits = permits
        .iter()
        .filter(|p| p.status == PermitStatus::Active)
        .count();
    let open_applications = applications.iter().filter(|a| a.status.is_pending()).count();

    let stats = move || {
        let records = roster.records().get();
        vec![
            DashboardStat::count("Active permits", "shield", active_permits),
            DashboardStat::count("Open applications", "file-text", open_applications),
            DashboardStat::count("Personnel", "users", records.len()),
            quota_stat(expatriate_quota_used(&records)),
        ]
    };

    view! {
        <div id="d101_company_admin--dashboard" class="page">
            <PageHeader
                title=mock::COMPANY_NAME
                subtitle=format!("Expatriate quota: {} positions", EXPATRIATE_QUOTA)
                icon_name="briefcase"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate(ADD_PERSONNEL_PATH, Default::default())
                >
                    "Add personnel"
                </Button>
            </PageHeader>

            {move || view! { <StatGrid stats=stats() /> }}

            <Section title="Permits">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Permit"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Issued"</TableHeaderCell>
                            <TableHeaderCell>"Expires"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {permits.into_iter().map(|p| {
                            let expiry = format!(
                                "{} ({})",
                                format_date(p.expires_on),
                                format_days_left(p.days_until_expiry(today))
                            );
                            let number = p.number.clone();
                            let category = p.category.clone();
                            let issued = format_date(p.issued_on);
                            let status = p.status;
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{issued}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{expiry}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{tone_badge(&status)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Section>

            <Section title="Applications">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Reference"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Submitted"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {applications.into_iter().map(|a| {
                            let id = a.id.clone();
                            let kind = a.kind.label();
                            let submitted = format_date(a.submitted_on);
                            let status = a.status;
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{submitted}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{tone_badge(&status)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Section>

            <Section title="Personnel">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"ID"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Nationality"</TableHeaderCell>
                            <TableHeaderCell>"Position"</TableHeaderCell>
                            <TableHeaderCell>"Start date"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || roster.records().get()
                            key=|r| r.id.clone()
                            children=|r| {
                                let id = r.id.clone();
                                let name = r.full_name();
                                let nationality = r.nationality.clone();
                                let position = r.position.clone();
                                let started = format_date(r.start_date);
                                let status = r.status;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{nationality}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{position}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{started}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{tone_badge(&status)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_counts_non_suspended_expatriates() {
        // British, Indian, Brazilian; the Dutch record is suspended
        assert_eq!(expatriate_quota_used(&mock::personnel()), 3);
    }

    #[test]
    fn test_quota_stat_status() {
        assert_eq!(quota_stat(3).status, IndicatorStatus::Good);
        assert_eq!(quota_stat(EXPATRIATE_QUOTA).status, IndicatorStatus::Warning);
        assert_eq!(quota_stat(EXPATRIATE_QUOTA + 1).status, IndicatorStatus::Bad);
    }
}
