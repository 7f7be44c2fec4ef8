//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::items::{
        ItemsService, ItemsServiceError,
        data::NewItem,
        records::ItemRecord,
    },
    test::TestContext,
};

/// Create an item priced in minor units (centavos).
pub(crate) async fn create_item(
    ctx: &TestContext,
    name: &str,
    price_minor: i64,
    amount: u32,
) -> Result<ItemRecord, ItemsServiceError> {
    ctx.items
        .create_item(NewItem {
            name: name.to_string(),
            price: Decimal::new(price_minor, 2),
            amount,
            image: String::new(),
        })
        .await
}
