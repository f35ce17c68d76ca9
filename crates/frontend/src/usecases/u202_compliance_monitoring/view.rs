use super::filter::{summarize, ComplianceFilter};
use crate::shared::components::{tone_badge, PageHeader, Section, StatGrid};
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::modal::Modal;
use contracts::portal::compliance::{CaseStatus, ComplianceCase, Severity};
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;
use thaw::*;

fn summary_stats(cases: &[ComplianceCase]) -> Vec<DashboardStat> {
    let summary = summarize(cases);
    let critical_status = if summary.critical > 0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Good
    };
    vec![
        DashboardStat::count("Open cases", "alert-triangle", summary.open),
        DashboardStat::count("Under review", "clock", summary.under_review)
            .with_status(IndicatorStatus::Warning),
        DashboardStat::count("Resolved", "check-circle", summary.resolved)
            .with_status(IndicatorStatus::Good),
        DashboardStat::count("Critical unresolved", "shield", summary.critical)
            .with_status(critical_status),
    ]
}

#[component]
fn CaseDetails(case: ComplianceCase) -> impl IntoView {
    view! {
        <dl class="review-list">
            <dt>"Company"</dt><dd>{case.company.clone()}</dd>
            <dt>"Category"</dt><dd>{case.category.clone()}</dd>
            <dt>"Severity"</dt><dd>{tone_badge(&case.severity)}</dd>
            <dt>"Status"</dt><dd>{tone_badge(&case.status)}</dd>
            <dt>"Officer"</dt><dd>{case.officer.clone()}</dd>
            <dt>"Opened"</dt><dd>{format_date(case.opened_on)}</dd>
            <dt>"Due"</dt><dd>{format_optional_date(case.due_on)}</dd>
        </dl>
        <h3 class="modal__subtitle">"Findings"</h3>
        {if case.findings.is_empty() {
            view! { <p class="text-muted">"No findings recorded."</p> }.into_any()
        } else {
            view! {
                <ul class="findings-list">
                    {case.findings.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                </ul>
            }.into_any()
        }}
    }
}

/// Case list with filters and a detail dialog
#[component]
pub fn ComplianceMonitoringView(
    cases: Vec<ComplianceCase>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let stats = summary_stats(&cases);
    let cases = StoredValue::new(cases);

    let query = RwSignal::new(String::new());
    let severity = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<ComplianceCase>);

    let filter = Memo::new(move |_| ComplianceFilter {
        query: query.get(),
        severity: Severity::from_str(&severity.get()),
        status: CaseStatus::from_str(&status.get()),
    });
    let visible = Memo::new(move |_| cases.with_value(|all| filter.get().apply(all)));

    let clear_filters = move |_| {
        query.set(String::new());
        severity.set(String::new());
        status.set(String::new());
    };

    view! {
        <div id="u202_compliance_monitoring--usecase" class="page">
            <PageHeader
                title=title
                subtitle="Track findings and enforcement cases across operators"
                icon_name="alert-triangle"
            />
            <StatGrid stats=stats />

            <Section title="Compliance cases">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="width: 260px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=query placeholder="Case id, company or category" />
                            </Flex>
                        </div>
                        <div style="width: 160px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Severity"</Label>
                                <Select value=severity>
                                    <option value="">"All"</option>
                                    {Severity::all().into_iter().rev().map(|s| view! {
                                        <option value=s.as_str()>{s.label()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </div>
                        <div style="width: 160px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <Select value=status>
                                    <option value="">"All"</option>
                                    {CaseStatus::all().into_iter().map(|s| view! {
                                        <option value=s.as_str()>{s.label()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=clear_filters
                            disabled=Signal::derive(move || !filter.get().is_active())
                        >
                            "Clear"
                        </Button>
                    </Flex>
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Case"</TableHeaderCell>
                            <TableHeaderCell>"Company"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Severity"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Opened"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>"No cases match the current filters."</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }
                            rows.into_iter().map(|case| {
                                let for_click = case.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{case.id.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{case.company.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{case.category.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{tone_badge(&case.severity)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{tone_badge(&case.status)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_date(case.opened_on)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| selected.set(Some(for_click.clone()))
                                                >
                                                    "Details"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </Section>

            {move || selected.get().map(|case| view! {
                <Modal
                    title=format!("{} · {}", case.id, case.company)
                    on_close=Callback::new(move |_| selected.set(None))
                >
                    <CaseDetails case=case.clone() />
                </Modal>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_stats_flag_critical() {
        let case = ComplianceCase {
            id: "CMP-9".into(),
            company: "Eni Ghana".into(),
            category: "Spill reporting".into(),
            severity: Severity::Critical,
            status: CaseStatus::Open,
            opened_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            due_on: None,
            officer: "E. Boateng".into(),
            findings: vec![],
        };
        let stats = summary_stats(&[case]);
        assert_eq!(stats[0].value, 1.0);
        assert_eq!(stats[3].status, IndicatorStatus::Bad);
        assert_eq!(summary_stats(&[])[3].status, IndicatorStatus::Good);
    }
}
