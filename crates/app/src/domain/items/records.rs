//! Item Records

use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Item Id
pub type ItemId = TypedId<ItemRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    pub amount: u32,
    pub image: String,
}
