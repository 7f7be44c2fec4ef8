//! Item Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::items::ItemsServiceError;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        ItemsServiceError::AlreadyExists => StatusError::conflict().brief("Item already exists"),
        ItemsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Invalid decrement amount")
        }
        ItemsServiceError::InvalidReference
        | ItemsServiceError::MissingRequiredData
        | ItemsServiceError::InvalidData
        | ItemsServiceError::InvalidAmount(_) => {
            StatusError::bad_request().brief("Invalid item payload")
        }
        ItemsServiceError::Sql(source) => {
            error!("item storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
