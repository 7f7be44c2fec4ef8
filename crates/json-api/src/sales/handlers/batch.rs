//! Batch Sale Handler

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

/// Batch Sale Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BatchSaleRequest {
    pub records: Vec<SaleRequest>,
}

/// Batch Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchCreatedResponse {
    pub message: String,
    /// Created sale ids, in request order
    pub sale_ids: Vec<i64>,
}

/// Batch Sale Handler
///
/// Stores every record in one database transaction: either all rows are written or none are.
#[endpoint(
    tags("sales"),
    summary = "Record Sale Batch",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every sale recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty batch or malformed record"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "sales.batch",
    skip(json, depot),
    fields(records = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<BatchSaleRequest>,
    depot: &mut Depot,
) -> Result<Json<BatchCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sales = json
        .into_inner()
        .records
        .into_iter()
        .map(NewSale::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::Span::current().record("records", sales.len());

    let created = state
        .app
        .sales
        .create_sales(sales)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BatchCreatedResponse {
        message: "Sales added successfully".to_string(),
        sale_ids: created.into_iter().map(|sale| sale.id.into_i64()).collect(),
    }))
}
