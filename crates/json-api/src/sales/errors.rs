//! Sale Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::sales::SalesServiceError;

use crate::fields::INVALID_INPUT;

pub(crate) fn into_status_error(error: SalesServiceError) -> StatusError {
    match error {
        SalesServiceError::NotFound => StatusError::not_found().brief("Sale not found"),
        SalesServiceError::EmptyBatch => {
            StatusError::bad_request().brief("A batch needs at least one sale")
        }
        SalesServiceError::InvalidMonth(_) => {
            StatusError::bad_request().brief("year and month must name a calendar month")
        }
        SalesServiceError::MissingRequiredData
        | SalesServiceError::InvalidData
        | SalesServiceError::InvalidAmount(_) => StatusError::bad_request().brief(INVALID_INPUT),
        SalesServiceError::Sql(source) => {
            error!("sale storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
