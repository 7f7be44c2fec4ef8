//! Decrement Item Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Decrement Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DecrementItemRequest {
    /// Units to remove; must be positive
    pub amount_to_decrement: Option<i64>,
}

impl DecrementItemRequest {
    fn quantity(&self) -> Option<u32> {
        self.amount_to_decrement
            .filter(|amount| *amount > 0)
            .and_then(|amount| i32::try_from(amount).ok())
            .and_then(|amount| u32::try_from(amount).ok())
    }
}

/// Item Decremented Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemDecrementedResponse {
    pub success: bool,
    /// Item as stored after the decrement
    pub data: ItemResponse,
}

/// Decrement Item Handler
///
/// Stock is floored at zero. The response carries the amount actually stored.
#[endpoint(
    tags("items"),
    summary = "Decrement Item Stock",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock decremented"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid decrement amount"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.decrement",
    skip(id, json, depot),
    fields(item_id = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<DecrementItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemDecrementedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let quantity = json
        .into_inner()
        .quantity()
        .ok_or_else(|| StatusError::bad_request().brief("Invalid decrement amount"))?;

    let span = tracing::Span::current();

    span.record("item_id", id);
    span.record("quantity", quantity);

    let item = state
        .app
        .items
        .decrement_stock(id.into(), quantity)
        .await
        .map_err(into_status_error)?;

    tracing::info!(item_id = id, quantity, amount = item.amount, "decremented item stock");

    Ok(Json(ItemDecrementedResponse {
        success: true,
        data: item.into(),
    }))
}
