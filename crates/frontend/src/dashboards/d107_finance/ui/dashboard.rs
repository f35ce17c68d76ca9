use super::super::mock;
use crate::shared::components::{PageHeader, Section, StatGrid, StatusBadge};
use crate::shared::date_utils::{format_date, today};
use crate::shared::number_format::format_money;
use chrono::NaiveDate;
use contracts::portal::finance::{collected_total, outstanding_total, Invoice};
use contracts::portal::stats::{DashboardStat, IndicatorStatus};
use leptos::prelude::*;
use thaw::*;

const CURRENCY: &str = "USD";

fn invoice_state(invoice: &Invoice, today: NaiveDate) -> (&'static str, IndicatorStatus) {
    if invoice.is_settled() {
        ("Paid", IndicatorStatus::Good)
    } else if invoice.is_overdue(today) {
        ("Overdue", IndicatorStatus::Bad)
    } else if invoice.paid > 0.0 {
        ("Part paid", IndicatorStatus::Warning)
    } else {
        ("Due", IndicatorStatus::Neutral)
    }
}

fn headline_stats(invoices: &[Invoice], today: NaiveDate) -> Vec<DashboardStat> {
    let invoiced: f64 = invoices.iter().map(|i| i.amount).sum();
    let overdue = invoices.iter().filter(|i| i.is_overdue(today)).count();

    vec![
        DashboardStat::money("Invoiced", "file-text", invoiced, CURRENCY),
        DashboardStat::money("Collected", "check-circle", collected_total(invoices), CURRENCY)
            .with_status(IndicatorStatus::Good),
        DashboardStat::money("Outstanding", "dollar", outstanding_total(invoices), CURRENCY)
            .with_status(IndicatorStatus::Warning),
        DashboardStat::count("Overdue invoices", "alert-triangle", overdue).with_status(
            if overdue > 0 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            },
        ),
    ]
}

#[component]
pub fn FinanceDashboard() -> impl IntoView {
    let today = today();
    let invoices = mock::invoices();
    let stats = headline_stats(&invoices, today);

    view! {
        <div id="d107_finance--dashboard" class="page">
            <PageHeader
                title="Fees and levies"
                subtitle="Invoices issued by the Commission"
                icon_name="dollar"
            />
            <StatGrid stats=stats />
            <Section title="Invoices">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Invoice"</TableHeaderCell>
                            <TableHeaderCell>"Company"</TableHeaderCell>
                            <TableHeaderCell>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Outstanding"</TableHeaderCell>
                            <TableHeaderCell>"Due"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {invoices.into_iter().map(|inv| {
                            let (label, status) = invoice_state(&inv, today);
                            let number = inv.number.clone();
                            let company = inv.company.clone();
                            let description = inv.description.clone();
                            let amount = format_money(inv.amount, CURRENCY);
                            let outstanding = format_money(inv.outstanding(), CURRENCY);
                            let due = format_date(inv.due_on);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{company}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{description}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{amount}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{outstanding}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{due}</TableCellLayout></TableCell>
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
    fn test_invoice_states() {
        let today = today();
        let states: Vec<&str> = mock::invoices()
            .iter()
            .map(|i| invoice_state(i, today).0)
            .collect();
        assert_eq!(states, vec!["Paid", "Overdue", "Due", "Overdue", "Paid", "Due"]);
    }

    #[test]
    fn test_headline_totals() {
        let stats = headline_stats(&mock::invoices(), today());
        assert_eq!(stats[0].value, 244_000.0);
        assert_eq!(stats[1].value, 130_000.0);
        assert_eq!(stats[2].value, 114_000.0);
        assert_eq!(stats[3].value, 2.0);
    }
}
