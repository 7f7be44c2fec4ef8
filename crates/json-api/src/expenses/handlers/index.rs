//! Expense Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    expenses::{errors::into_status_error, models::ExpenseResponse},
    extensions::*,
    state::State,
};

/// Expense Index Handler
#[endpoint(
    tags("expenses"),
    summary = "List Expenses",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every expense record"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ExpenseResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let expenses = state
        .app
        .expenses
        .list_expenses()
        .await
        .map_err(into_status_error)?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}
