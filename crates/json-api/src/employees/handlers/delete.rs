//! Delete Employee Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    employees::errors::into_status_error, extensions::*, messages::MessageResponse, state::State,
};

/// Delete Employee Handler
#[endpoint(
    tags("employees"),
    summary = "Delete Employee",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Employee deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "employees.delete",
    skip(id, depot),
    fields(employee_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("employee_id", id);

    state
        .app
        .employees
        .delete_employee(id.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Employee Deleted")))
}
