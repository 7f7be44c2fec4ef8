//! Create Employee Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    employees::{
        errors::into_status_error,
        models::{EmployeeRequest, EmployeeResponse},
    },
    extensions::*,
    state::State,
};

/// Create Employee Handler
#[endpoint(
    tags("employees"),
    summary = "Create Employee",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Employee created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "employees.create", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<EmployeeRequest>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let employee = state
        .app
        .employees
        .create_employee(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(employee_id = %employee.id, "created employee");

    Ok(Json(employee.into()))
}
