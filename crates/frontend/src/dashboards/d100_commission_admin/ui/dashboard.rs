use super::super::mock;
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid};
use crate::shared::date_utils::{format_date, format_days_left, today};
use contracts::portal::applications::{summarize_applications, PermitApplication};
use contracts::portal::permits::{renewals_due, Permit, PermitStatus};
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

fn headline_stats(
    applications: &[PermitApplication],
    permits: &[Permit],
    due: &[Permit],
) -> Vec<DashboardStat> {
    let summary = summarize_applications(applications);
    let active = permits
        .iter()
        .filter(|p| p.status == PermitStatus::Active)
        .count();
    let approval = match summary.approval_rate() {
        Some(rate) if rate < 50.0 => DashboardStat::percent("Approval rate", "check-circle", rate)
            .with_status(IndicatorStatus::Warning),
        Some(rate) => DashboardStat::percent("Approval rate", "check-circle", rate)
            .with_status(IndicatorStatus::Good),
        None => DashboardStat::percent("Approval rate", "check-circle", 0.0),
    };

    vec![
        DashboardStat::count("Applications", "file-text", summary.total),
        DashboardStat::count("Pending review", "clock", summary.pending())
            .with_status(IndicatorStatus::Warning),
        approval,
        DashboardStat::count("Active permits", "shield", active),
        DashboardStat::count("Renewals due", "alert-triangle", due.len()).with_status(
            if due.is_empty() {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            },
        ),
    ]
}

#[component]
fn PendingApplicationsTable(rows: Vec<PermitApplication>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Reference"</TableHeaderCell>
                    <TableHeaderCell>"Company"</TableHeaderCell>
                    <TableHeaderCell>"Type"</TableHeaderCell>
                    <TableHeaderCell>"Submitted"</TableHeaderCell>
                    <TableHeaderCell>"Reviewer"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows.into_iter().map(|app| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{app.id.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{app.company.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{app.kind.label()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(app.submitted_on)}</TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>{app.reviewer.clone().unwrap_or_else(|| "Unassigned".to_string())}</TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout>{tone_badge(&app.status)}</TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
pub fn RenewalsTable(rows: Vec<Permit>, today: NaiveDate) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Permit"</TableHeaderCell>
                    <TableHeaderCell>"Company"</TableHeaderCell>
                    <TableHeaderCell>"Category"</TableHeaderCell>
                    <TableHeaderCell>"Expires"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows.into_iter().map(|permit| {
                    let days = permit.days_until_expiry(today);
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{permit.number.clone()}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{permit.company.clone()}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{permit.category.clone()}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {format!("{} ({})", format_date(permit.expires_on), format_days_left(days))}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{tone_badge(&permit.status)}</TableCellLayout></TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

/// Overview for commission administrators
#[component]
pub fn CommissionAdminDashboard() -> impl IntoView {
    let today = today();
    let applications = mock::applications();
    let permits = mock::permits();
    let due = renewals_due(&permits, today);
    let stats = headline_stats(&applications, &permits, &due);
    let pending: Vec<PermitApplication> = applications
        .into_iter()
        .filter(|a| a.status.is_pending())
        .collect();

    view! {
        <div id="d100_commission_admin--dashboard" class="page">
            <PageHeader
                title="Commission administration"
                subtitle="Permits, applications and renewals across the upstream sector"
                icon_name="shield"
            />
            <StatGrid stats=stats />
            <Section title="Pending applications">
                <PendingApplicationsTable rows=pending />
            </Section>
            <Section title="Renewals due">
                <RenewalsTable rows=due today=today />
            </Section>
        </div>
    }
}
