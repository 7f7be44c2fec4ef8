//! Update Employee Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    employees::{
        errors::into_status_error,
        models::{EmployeeRequest, EmployeeResponse},
    },
    extensions::*,
    state::State,
};

/// Update Employee Handler
///
/// Replaces every field of the employee.
#[endpoint(
    tags("employees"),
    summary = "Update Employee",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Employee updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "employees.update",
    skip(id, json, depot),
    fields(employee_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<EmployeeRequest>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("employee_id", id);

    let employee = state
        .app
        .employees
        .update_employee(id.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(employee.into()))
}
