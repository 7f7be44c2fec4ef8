//! Increment Item Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, items::errors::into_status_error, state::State};

/// Item Incremented Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemIncrementedResponse {
    pub success: bool,
    pub message: String,
}

/// Increment Item Handler
#[endpoint(
    tags("items"),
    summary = "Increment Item Stock",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock incremented by one"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.increment",
    skip(id, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ItemIncrementedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("item_id", id);

    let item = state
        .app
        .items
        .increment_stock(id.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(item_id = id, amount = item.amount, "incremented item stock");

    Ok(Json(ItemIncrementedResponse {
        success: true,
        message: "Item amount incremented successfully.".to_string(),
    }))
}
