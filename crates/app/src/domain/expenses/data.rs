//! Expenses Data

use jiff::civil::Date;
use rust_decimal::Decimal;

/// New Expense Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub transaction_name: String,
    pub expense_name: String,
    pub amount: u32,
    pub price: Decimal,
    pub transaction_date: Date,
    pub total_expenses: Decimal,
}
