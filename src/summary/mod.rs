use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write;

use crate::models::{format_date, Transaction};
use crate::ui::util::round_cents;

pub(crate) const NO_RECORDS_NOTICE: &str = "No transactions found in the given date range.";

/// Totals over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) net: Decimal,
    pub(crate) count: usize,
}

impl Summary {
    pub(crate) fn from_records(records: &[Transaction]) -> Self {
        Self {
            total_income: records
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount)
                .sum(),
            total_expenses: records
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount)
                .sum(),
            net: records.iter().map(Transaction::signed_amount).sum(),
            count: records.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Render the records of a range followed by their totals.
pub(crate) fn render_report(start: NaiveDate, end: NaiveDate, records: &[Transaction]) -> String {
    let summary = Summary::from_records(records);
    let mut out = String::new();

    if summary.is_empty() {
        let _ = writeln!(out, "{NO_RECORDS_NOTICE}");
    } else {
        let _ = writeln!(
            out,
            "Transactions from {} to {}",
            format_date(start),
            format_date(end)
        );
        let _ = writeln!(
            out,
            "{:<10}  {:>12}  {:<8}  Description",
            "Date", "Amount", "Category"
        );
        let _ = writeln!(out, "{}", "─".repeat(48));
        for txn in records {
            let _ = writeln!(
                out,
                "{:<10}  {:>12.2}  {:<8}  {}",
                txn.formatted_date(),
                round_cents(txn.amount),
                txn.category.as_str(),
                txn.description
            );
        }
    }

    out.push('\n');
    out.push_str(&render_summary(&summary));
    out
}

pub(crate) fn render_summary(summary: &Summary) -> String {
    format!(
        "Summary:\nTotal Income: {:.2}\nTotal Expenses: {:.2}\nNet Savings: {:.2}\n",
        round_cents(summary.total_income),
        round_cents(summary.total_expenses),
        round_cents(summary.net)
    )
}

#[cfg(test)]
mod tests;
