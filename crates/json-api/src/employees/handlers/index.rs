//! Employee Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    employees::{errors::into_status_error, models::EmployeeResponse},
    extensions::*,
    state::State,
};

/// Employee Index Handler
#[endpoint(
    tags("employees"),
    summary = "List Employees",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every employee"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<EmployeeResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let employees = state
        .app
        .employees
        .list_employees()
        .await
        .map_err(into_status_error)?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use till_app::domain::employees::MockEmployeesService;

    use crate::test_helpers::{employees_service, make_employee};

    use super::*;

    #[tokio::test]
    async fn test_list_employees_uses_camel_case() -> TestResult {
        let mut employees = MockEmployeesService::new();

        employees
            .expect_list_employees()
            .once()
            .return_once(|| Ok(vec![make_employee(1, "Maria")]));

        let mut res = TestClient::get("http://example.com/employees")
            .send(&employees_service(
                employees,
                Router::with_path("employees").get(handler),
            ))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "firstName": "Maria",
                "lastName": "Santos",
                "position": "Cashier",
                "phoneNumber": "09171234567",
            }])
        );

        Ok(())
    }
}
