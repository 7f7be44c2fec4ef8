//! Create Sale Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use till_app::domain::sales::data::NewSale;

use crate::{
    extensions::*,
    sales::{errors::into_status_error, models::SaleRequest},
    state::State,
};

/// Sale Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleCreatedResponse {
    pub message: String,
    /// Created sale id
    pub sale_id: i64,
}

/// Create Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Record Sale",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sale recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or malformed field"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "sales.create",
    skip(json, depot),
    fields(batch_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<SaleRequest>,
    depot: &mut Depot,
) -> Result<Json<SaleCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sale = NewSale::try_from(json.into_inner())?;

    if let Some(batch_uuid) = sale.batch_uuid {
        tracing::Span::current().record("batch_uuid", tracing::field::display(batch_uuid));
    }

    let created = state
        .app
        .sales
        .create_sale(sale)
        .await
        .map_err(into_status_error)?;

    tracing::info!(sale_id = %created.id, sales_name = %created.sales_name, "recorded sale");

    Ok(Json(SaleCreatedResponse {
        message: "Sale added successfully".to_string(),
        sale_id: created.id.into_i64(),
    }))
}
