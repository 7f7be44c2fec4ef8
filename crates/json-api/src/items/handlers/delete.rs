//! Delete Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*, items::errors::into_status_error, messages::MessageResponse, state::State,
};

/// Delete Item Handler
#[endpoint(
    tags("items"),
    summary = "Delete Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.delete",
    skip(id, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("item_id", id);

    state
        .app
        .items
        .delete_item(id.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(item_id = id, "deleted item");

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}
