use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;

/// Date format used for prompts, the ledger file and reports.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Largest amount a single entry may carry (one trillion). Keeps every sum
/// over a ledger far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Always strictly positive; the category carries the direction.
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Decimal, category: Category, description: String) -> Self {
        Self {
            date,
            amount,
            category,
            description,
        }
    }

    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    pub fn is_expense(&self) -> bool {
        self.category == Category::Expenses
    }

    /// Amount with the direction applied: income positive, expenses negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.category {
            Category::Income => self.amount,
            Category::Expenses => -self.amount,
        }
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
