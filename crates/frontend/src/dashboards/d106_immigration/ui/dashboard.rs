use super::super::mock;
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid};
use crate::shared::date_utils::format_date;
use contracts::portal::applications::ApplicationStatus;
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use contracts::portal::work_permits::WorkPermitRequest;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

fn headline_stats(requests: &[WorkPermitRequest]) -> Vec<DashboardStat> {
    let count = |status: ApplicationStatus| requests.iter().filter(|r| r.status == status).count();
    let pending = requests.iter().filter(|r| r.status.is_pending()).count();
    let nationalities: HashSet<&str> = requests.iter().map(|r| r.nationality.as_str()).collect();

    vec![
        DashboardStat::count("Awaiting decision", "clock", pending)
            .with_status(IndicatorStatus::Warning),
        DashboardStat::count(
            "Queries raised",
            "alert-triangle",
            count(ApplicationStatus::QueryRaised),
        ),
        DashboardStat::count("Approved", "check-circle", count(ApplicationStatus::Approved))
            .with_status(IndicatorStatus::Good),
        DashboardStat::count("Rejected", "x", count(ApplicationStatus::Rejected))
            .with_status(IndicatorStatus::Bad),
        DashboardStat::count("Nationalities", "globe", nationalities.len()),
    ]
}

/// Oldest pending requests first, decided ones after them
fn queue_order(mut requests: Vec<WorkPermitRequest>) -> Vec<WorkPermitRequest> {
    requests.sort_by_key(|r| (!r.status.is_pending(), r.submitted_on));
    requests
}

#[component]
pub fn ImmigrationDashboard() -> impl IntoView {
    let requests = mock::requests();
    let stats = headline_stats(&requests);
    let queue = queue_order(requests);

    view! {
        <div id="d106_immigration--dashboard" class="page">
            <PageHeader
                title="Work permits"
                subtitle="Expatriate work permit queue"
                icon_name="globe"
            />
            <StatGrid stats=stats />
            <Section title="Request queue">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Reference"</TableHeaderCell>
                            <TableHeaderCell>"Holder"</TableHeaderCell>
                            <TableHeaderCell>"Nationality"</TableHeaderCell>
                            <TableHeaderCell>"Company"</TableHeaderCell>
                            <TableHeaderCell>"Position"</TableHeaderCell>
                            <TableHeaderCell>"Submitted"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {queue.into_iter().map(|r| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{r.reference.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{r.holder.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{r.nationality.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{r.company.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{r.position.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(r.submitted_on)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{tone_badge(&r.status)}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
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
    fn test_headline_stats() {
        let stats = headline_stats(&mock::requests());
        let values: Vec<f64> = stats.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![4.0, 1.0, 2.0, 1.0, 7.0]);
    }

    #[test]
    fn test_queue_puts_oldest_pending_first() {
        let queue = queue_order(mock::requests());
        let refs: Vec<&str> = queue.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(
            refs,
            vec![
                "WP-24-0890",
                "WP-24-0899",
                "WP-24-0905",
                "WP-24-0912",
                "WP-24-0854",
                "WP-24-0861",
                "WP-24-0877",
            ]
        );
    }
}
