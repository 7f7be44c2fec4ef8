//! Item Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use till_app::domain::items::records::ItemRecord;

use crate::decimal::to_float;

/// Item Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    pub id: i64,
    pub name: String,
    /// Units in stock
    pub amount: u32,
    pub price: f64,
    /// File name under `/assets`, empty when no image was uploaded
    pub image: String,
}

impl From<ItemRecord> for ItemResponse {
    fn from(item: ItemRecord) -> Self {
        Self {
            id: item.id.into_i64(),
            name: item.name,
            amount: item.amount,
            price: to_float(item.price),
            image: item.image,
        }
    }
}
