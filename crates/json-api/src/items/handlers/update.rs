//! Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use till_app::domain::items::data::ItemUpdate;

use crate::{
    decimal::from_float, extensions::*, items::errors::into_status_error,
    messages::MessageResponse, state::State,
};

/// Update Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateItemRequest {
    /// Replacement stock count
    pub amount: i64,
    /// Replacement unit price
    pub price: f64,
}

impl TryFrom<UpdateItemRequest> for ItemUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateItemRequest) -> Result<Self, Self::Error> {
        let invalid = || StatusError::bad_request().brief("Invalid item payload");

        let amount = i32::try_from(request.amount)
            .ok()
            .and_then(|amount| u32::try_from(amount).ok())
            .ok_or_else(invalid)?;

        let price = from_float(request.price).ok_or_else(invalid)?;

        Ok(ItemUpdate { amount, price })
    }
}

/// Item Update Handler
#[endpoint(
    tags("items"),
    summary = "Update Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(id, json, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("item_id", id);

    let update = ItemUpdate::try_from(json.into_inner())?;

    let item = state
        .app
        .items
        .update_item(id.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(item_id = id, amount = item.amount, price = %item.price, "updated item");

    Ok(Json(MessageResponse::new("Item updated successfully")))
}
