//! Items Data

use rust_decimal::Decimal;

/// New Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: Decimal,
    pub amount: u32,
    pub image: String,
}

/// Item Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub amount: u32,
    pub price: Decimal,
}
