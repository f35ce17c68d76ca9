use super::super::mock;
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid, StatusBadge};
use crate::shared::number_format::format_percent;
use contracts::portal::joint_ventures::{JointVenture, JvStatus};
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;
use thaw::*;

fn partner_summary(venture: &JointVenture) -> String {
    venture
        .partners
        .iter()
        .map(|p| format!("{} {}", p.name, format_percent(p.stake_percent, 2)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn headline_stats(ventures: &[JointVenture]) -> Vec<DashboardStat> {
    let producing = ventures
        .iter()
        .filter(|v| v.status == JvStatus::Production)
        .count();
    let unbalanced = ventures.iter().filter(|v| !v.is_balanced()).count();
    let partners: usize = ventures.iter().map(|v| v.partners.len()).sum();

    vec![
        DashboardStat::count("Joint ventures", "activity", ventures.len()),
        DashboardStat::count("In production", "check-circle", producing)
            .with_status(IndicatorStatus::Good),
        DashboardStat::count("Partner interests", "users", partners),
        DashboardStat::count("Stake mismatches", "alert-triangle", unbalanced).with_status(
            if unbalanced > 0 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            },
        ),
    ]
}

#[component]
pub fn JvCoordinatorDashboard() -> impl IntoView {
    let ventures = mock::ventures();
    let stats = headline_stats(&ventures);

    view! {
        <div id="d105_jv_coordinator--dashboard" class="page">
            <PageHeader
                title="Joint ventures"
                subtitle="Partners, participating interests and field status"
                icon_name="activity"
            />
            <StatGrid stats=stats />
            <Section title="Ventures">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Venture"</TableHeaderCell>
                            <TableHeaderCell>"Block"</TableHeaderCell>
                            <TableHeaderCell>"Operator"</TableHeaderCell>
                            <TableHeaderCell>"Partners"</TableHeaderCell>
                            <TableHeaderCell>"Total stake"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {ventures.into_iter().map(|v| {
                            let stake_label = format_percent(v.total_stake(), 2);
                            let stake_status = if v.is_balanced() {
                                IndicatorStatus::Good
                            } else {
                                IndicatorStatus::Bad
                            };
                            let name = v.name.clone();
                            let block = v.block.clone();
                            let operator = v.operator.clone();
                            let partners = partner_summary(&v);
                            let status = v.status;
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{block}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{operator}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{partners}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout><StatusBadge label=stake_label status=stake_status /></TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{tone_badge(&status)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Section>
        </div>
    }
}
