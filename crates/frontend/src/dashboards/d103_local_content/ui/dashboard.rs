use super::super::mock;
use crate::shared::components::{PageHeader, Section, StatGrid, StatusBadge};
use crate::shared::number_format::{format_money, format_percent};
use contracts::portal::local_content::LocalContentPlan;
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;
use thaw::*;

/// Spend-weighted local share over all plans
fn overall_local_share(plans: &[LocalContentPlan]) -> f64 {
    let total: f64 = plans.iter().map(|p| p.total_spend).sum();
    if total <= 0.0 {
        return 0.0;
    }
    plans.iter().map(|p| p.local_spend).sum::<f64>() * 100.0 / total
}

fn headline_stats(plans: &[LocalContentPlan]) -> Vec<DashboardStat> {
    let meeting = plans.iter().filter(|p| p.meets_target()).count();
    let behind = plans.len() - meeting;
    let local_staff: u32 = plans.iter().map(|p| p.local_staff).sum();
    let total_staff: u32 = plans.iter().map(|p| p.total_staff).sum();
    let staff_share = if total_staff == 0 {
        0.0
    } else {
        local_staff as f64 * 100.0 / total_staff as f64
    };

    vec![
        DashboardStat::count("Plans filed", "file-text", plans.len()),
        DashboardStat::percent("Local spend share", "layers", overall_local_share(plans)),
        DashboardStat::percent("Local staff share", "users", staff_share),
        DashboardStat::count("Below target", "alert-triangle", behind).with_status(if behind > 0 {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        }),
    ]
}

#[component]
pub fn LocalContentDashboard() -> impl IntoView {
    let plans = mock::plans();
    let stats = headline_stats(&plans);

    view! {
        <div id="d103_local_content--dashboard" class="page">
            <PageHeader
                title="Local content"
                subtitle="Local spend and staffing against plan targets"
                icon_name="layers"
            />
            <StatGrid stats=stats />
            <Section title="Local content plans">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Company"</TableHeaderCell>
                            <TableHeaderCell>"Period"</TableHeaderCell>
                            <TableHeaderCell>"Local spend"</TableHeaderCell>
                            <TableHeaderCell>"Local share"</TableHeaderCell>
                            <TableHeaderCell>"Target"</TableHeaderCell>
                            <TableHeaderCell>"Local staff"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {plans.into_iter().map(|plan| {
                            let (label, status) = if plan.meets_target() {
                                ("On target", IndicatorStatus::Good)
                            } else {
                                ("Below target", IndicatorStatus::Bad)
                            };
                            let company = plan.company.clone();
                            let period = plan.period.clone();
                            let spend = format_money(plan.local_spend, "USD");
                            let share = format_percent(plan.local_share_percent(), 1);
                            let target = format_percent(plan.target_percent, 0);
                            let staff = format!(
                                "{} / {} ({})",
                                plan.local_staff,
                                plan.total_staff,
                                format_percent(plan.local_staff_percent(), 0)
                            );
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{company}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{period}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{spend}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{share}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{target}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{staff}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout><StatusBadge label=label status=status /></TableCellLayout></TableCell>
                                </TableRow>
                            }
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
    fn test_overall_share_is_spend_weighted() {
        let plans = mock::plans();
        let local: f64 = 182.4 + 96.0 + 74.5 + 12.8 + 21.0;
        let total: f64 = 310.0 + 240.0 + 130.0 + 18.0 + 66.0;
        assert!((overall_local_share(&plans) - local * 100.0 / total).abs() < 1e-9);
        assert_eq!(overall_local_share(&[]), 0.0);
    }

    #[test]
    fn test_below_target_count() {
        // Eni 40% of 50%, Springfield 71.1% of 60%, Schlumberger 31.8% of 40%
        let stats = headline_stats(&mock::plans());
        assert_eq!(stats[3].value, 2.0);
        assert_eq!(stats[3].status, IndicatorStatus::Warning);
    }
}
