//! Create Expense Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use till_app::domain::expenses::data::NewExpense;

use crate::{
    expenses::{
        errors::into_status_error,
        models::{ExpenseRequest, ExpenseResponse},
    },
    extensions::*,
    state::State,
};

/// Create Expense Handler
///
/// Responds with the stored expense.
#[endpoint(
    tags("expenses"),
    summary = "Record Expense",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Expense recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or malformed field"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "expenses.create", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<ExpenseRequest>,
    depot: &mut Depot,
) -> Result<Json<ExpenseResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let expense = NewExpense::try_from(json.into_inner())?;

    let created = state
        .app
        .expenses
        .create_expense(expense)
        .await
        .map_err(into_status_error)?;

    tracing::info!(expense_id = %created.id, "recorded expense");

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use till_app::domain::expenses::MockExpensesService;

    use crate::test_helpers::{TEST_DATE, expenses_service, make_expense};

    use super::*;

    fn make_service(expenses: MockExpensesService) -> Service {
        expenses_service(expenses, Router::with_path("expenses").post(handler))
    }

    #[tokio::test]
    async fn test_create_expense_returns_record() -> TestResult {
        let mut expenses = MockExpensesService::new();

        expenses
            .expect_create_expense()
            .once()
            .withf(|expense| {
                *expense
                    == NewExpense {
                        transaction_name: "Restock".to_string(),
                        expense_name: "Rice sack".to_string(),
                        amount: 3,
                        price: Decimal::new(12000, 2),
                        transaction_date: TEST_DATE,
                        total_expenses: Decimal::new(36000, 2),
                    }
            })
            .return_once(|_| Ok(make_expense(9, "Rice sack")));

        let mut res = TestClient::post("http://example.com/expenses")
            .json(&json!({
                "transaction_name": "Restock",
                "expense_name": "Rice sack",
                "amount": 3,
                "price": 120.0,
                "transaction_date": "2024-06-03",
                "total_expenses": 360.0,
            }))
            .send(&make_service(expenses))
            .await;

        let body: ExpenseResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 9);
        assert_eq!(body.transaction_date, "2024-06-03");
        assert!(
            (body.total_expenses - 360.0).abs() < f64::EPSILON,
            "total {}",
            body.total_expenses
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_expense_invalid_amount_returns_400() {
        let mut expenses = MockExpensesService::new();

        expenses.expect_create_expense().never();

        let res = TestClient::post("http://example.com/expenses")
            .json(&json!({
                "transaction_name": "Restock",
                "expense_name": "Rice sack",
                "amount": 0,
                "price": 120.0,
                "transaction_date": "2024-06-03",
                "total_expenses": 0.0,
            }))
            .send(&make_service(expenses))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
