//! Create Item Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use till_app::domain::items::data::NewItem;

use crate::{
    decimal::from_float,
    extensions::*,
    items::{
        errors::into_status_error,
        uploads::{discard_image, store_image},
    },
    state::State,
};

const INVALID_PAYLOAD: &str = "Invalid item payload";

/// Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemCreatedResponse {
    pub message: String,
    /// Created item id
    pub item_id: i64,
}

async fn text_field(req: &mut Request, key: &str) -> Option<String> {
    req.form::<String>(key)
        .await
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

async fn parse_fields(req: &mut Request) -> Result<(String, u32, f64), StatusError> {
    let invalid = || StatusError::bad_request().brief(INVALID_PAYLOAD);

    let name = text_field(req, "name").await.ok_or_else(invalid)?;

    let amount = text_field(req, "amount")
        .await
        .and_then(|amount| amount.parse::<i32>().ok())
        .and_then(|amount| u32::try_from(amount).ok())
        .ok_or_else(invalid)?;

    let price = text_field(req, "price")
        .await
        .and_then(|price| price.parse::<f64>().ok())
        .ok_or_else(invalid)?;

    Ok((name, amount, price))
}

/// Create Item Handler
///
/// Accepts `multipart/form-data` with `name`, `amount`, `price` and an optional `image` file.
#[endpoint(
    tags("items"),
    summary = "Create Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "items.create", skip_all, err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let (name, amount, price) = parse_fields(req).await?;

    let price = from_float(price).ok_or_else(|| StatusError::bad_request().brief(INVALID_PAYLOAD))?;

    let image = store_image(req, &state.assets_dir).await?;

    let created = state
        .app
        .items
        .create_item(NewItem {
            name,
            price,
            amount,
            image: image.clone(),
        })
        .await;

    let id = match created {
        Ok(item) => item.id,
        Err(error) => {
            discard_image(&state.assets_dir, &image).await;

            return Err(into_status_error(error));
        }
    };

    res.add_header(LOCATION, format!("/items/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ItemCreatedResponse {
        message: "Item added successfully".to_string(),
        item_id: id.into_i64(),
    }))
}
