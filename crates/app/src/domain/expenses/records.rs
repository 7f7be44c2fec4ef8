//! Expense Records

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Expense Id
pub type ExpenseId = TypedId<ExpenseRecord>;

/// Expense Record
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub transaction_name: String,
    pub expense_name: String,
    pub amount: u32,
    pub price: Decimal,
    pub transaction_date: Date,
    pub total_expenses: Decimal,
}
