//! Employee Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::employees::EmployeesServiceError;

pub(crate) fn into_status_error(error: EmployeesServiceError) -> StatusError {
    match error {
        EmployeesServiceError::NotFound => StatusError::not_found().brief("Employee not found"),
        EmployeesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Employee already exists")
        }
        EmployeesServiceError::MissingRequiredData | EmployeesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid employee payload")
        }
        EmployeesServiceError::Sql(source) => {
            error!("employee storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
