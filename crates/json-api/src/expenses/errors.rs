//! Expense Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::expenses::ExpensesServiceError;

use crate::fields::INVALID_INPUT;

pub(crate) fn into_status_error(error: ExpensesServiceError) -> StatusError {
    match error {
        ExpensesServiceError::NotFound => StatusError::not_found().brief("Expense not found"),
        ExpensesServiceError::InvalidMonth(_) => {
            StatusError::bad_request().brief("year and month must name a calendar month")
        }
        ExpensesServiceError::MissingRequiredData | ExpensesServiceError::InvalidData => {
            StatusError::bad_request().brief(INVALID_INPUT)
        }
        ExpensesServiceError::Sql(source) => {
            error!("expense storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
