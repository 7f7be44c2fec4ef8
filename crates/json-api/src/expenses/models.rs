//! Expense Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use till_app::domain::expenses::{data::NewExpense, records::ExpenseRecord};

use crate::{
    decimal::{from_float, to_float},
    fields::{INVALID_INPUT, non_blank, parse_date, parse_quantity},
};

/// Expense Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ExpenseRequest {
    pub transaction_name: Option<String>,
    pub expense_name: Option<String>,
    pub amount: Option<i64>,
    pub price: Option<f64>,
    pub transaction_date: Option<String>,
    pub total_expenses: Option<f64>,
}

impl TryFrom<ExpenseRequest> for NewExpense {
    type Error = StatusError;

    fn try_from(request: ExpenseRequest) -> Result<Self, Self::Error> {
        let invalid = || StatusError::bad_request().brief(INVALID_INPUT);

        Ok(NewExpense {
            transaction_name: non_blank(request.transaction_name).ok_or_else(invalid)?,
            expense_name: non_blank(request.expense_name).ok_or_else(invalid)?,
            amount: parse_quantity(request.amount).ok_or_else(invalid)?,
            price: request.price.and_then(from_float).ok_or_else(invalid)?,
            transaction_date: request
                .transaction_date
                .as_deref()
                .and_then(parse_date)
                .ok_or_else(invalid)?,
            total_expenses: request
                .total_expenses
                .and_then(from_float)
                .ok_or_else(invalid)?,
        })
    }
}

/// Expense Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ExpenseResponse {
    pub id: i64,
    pub transaction_name: String,
    pub expense_name: String,
    pub amount: u32,
    pub price: f64,
    pub transaction_date: String,
    pub total_expenses: f64,
}

impl From<ExpenseRecord> for ExpenseResponse {
    fn from(expense: ExpenseRecord) -> Self {
        Self {
            id: expense.id.into_i64(),
            transaction_name: expense.transaction_name,
            expense_name: expense.expense_name,
            amount: expense.amount,
            price: to_float(expense.price),
            transaction_date: expense.transaction_date.to_string(),
            total_expenses: to_float(expense.total_expenses),
        }
    }
}
