//! JSON bodies exchanged with the back-office API.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemPayload {
    pub id: i64,
    pub name: String,
    pub amount: u32,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl ItemPayload {
    pub(crate) fn into_item(self, currency: &'static Currency) -> Result<Item, PricingError> {
        let price = Decimal::from_f64(self.price).ok_or(PricingError::Overflow)?;

        Ok(
            Item::new(ItemId::new(self.id), self.name, from_decimal(price, currency)?, self.amount)
                .with_image(self.image),
        )
    }
}

fn money_to_float(money: &Money<'static, Currency>) -> f64 {
    to_decimal(money).to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SalePayload {
    pub batch_uuid: Uuid,
    pub transaction_name: String,
    pub sales_name: String,
    pub amount: u32,
    pub price: f64,
    pub transaction_date: String,
    pub total_sales: f64,
}

impl From<&SaleDraft> for SalePayload {
    fn from(draft: &SaleDraft) -> Self {
        Self {
            batch_uuid: draft.batch_uuid(),
            transaction_name: draft.transaction_name().to_string(),
            sales_name: draft.sales_name().to_string(),
            amount: draft.quantity(),
            price: money_to_float(draft.price()),
            transaction_date: draft.transaction_date().to_string(),
            total_sales: money_to_float(draft.total_sales()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleCreated {
    pub sale_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DecrementRequest {
    pub amount_to_decrement: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Decremented {
    pub data: ItemPayload,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::PHP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn item_payload_prices_round_to_centavos() -> TestResult {
        let item = ItemPayload {
            id: 4,
            name: "Bear Brand".to_string(),
            amount: 6,
            price: 12.5,
            image: "1700000000000-42.png".to_string(),
        }
        .into_item(PHP)?;

        assert_eq!(item.id(), ItemId::new(4));
        assert_eq!(item.price(), &Money::from_minor(1250, PHP));
        assert_eq!(item.image(), "1700000000000-42.png");

        Ok(())
    }

    #[test]
    fn sale_payload_copies_draft() -> TestResult {
        let item = Item::new(ItemId::new(3), "Century Tuna", Money::from_minor(3875, PHP), 9);
        let cart = Cart::new(PHP).add_line(&item, 2)?;
        let line = cart.lines().first().ok_or("missing line")?;
        let batch = Uuid::now_v7();

        let payload = SalePayload::from(&SaleDraft::from_line(line, batch, date(2024, 6, 3))?);

        assert_eq!(payload.batch_uuid, batch);
        assert_eq!(payload.transaction_name, "POS Sale - 2024-06-03");
        assert_eq!(payload.transaction_date, "2024-06-03");
        assert_eq!(payload.amount, 2);
        assert!((payload.price - 38.75).abs() < f64::EPSILON, "price {}", payload.price);
        assert!((payload.total_sales - 77.5).abs() < f64::EPSILON, "total {}", payload.total_sales);

        Ok(())
    }
}
