//! Item Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Item Index Handler
#[endpoint(
    tags("items"),
    summary = "List Items",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items in catalog order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .list_items()
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}
