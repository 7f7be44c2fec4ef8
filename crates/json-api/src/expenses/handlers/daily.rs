//! Daily Expenses Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    expenses::{errors::into_status_error, models::ExpenseResponse},
    extensions::*,
    state::State,
};

/// Daily Expenses Handler
#[endpoint(
    tags("expenses"),
    summary = "List Expenses In Month",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Expenses within the month"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid year or month"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    year: QueryParam<i16, true>,
    month: QueryParam<i8, true>,
    depot: &mut Depot,
) -> Result<Json<Vec<ExpenseResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let month = (year, month).into_month()?;

    let expenses = state
        .app
        .expenses
        .list_expenses_in_month(month)
        .await
        .map_err(into_status_error)?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}
