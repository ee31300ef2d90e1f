mod category;
mod transaction;

pub use category::Category;
pub use transaction::{format_date, Transaction, DATE_FORMAT, MAX_AMOUNT};
