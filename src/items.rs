//! Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Catalog identifier of a stock-tracked item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wraps a raw catalog id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A catalog entry with a price and an on-hand stock count.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Money<'static, Currency>,
    amount: u32,
    image: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money<'static, Currency>,
        amount: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            amount,
            image: String::new(),
        }
    }

    /// Sets the stored image file name.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Returns the item id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the stock count.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the stored image file name.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Whether any stock remains.
    pub fn in_stock(&self) -> bool {
        self.amount > 0
    }

    pub(crate) fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn with_amount_keeps_other_fields() {
        let item = Item::new(ItemId::new(7), "Pandesal", Money::from_minor(500, iso::PHP), 4)
            .with_image("pandesal.png");

        let updated = item.with_amount(1);

        assert_eq!(updated.amount(), 1);
        assert_eq!(updated.id(), ItemId::new(7));
        assert_eq!(updated.name(), "Pandesal");
        assert_eq!(updated.image(), "pandesal.png");
        assert_eq!(updated.price(), item.price());
    }

    #[test]
    fn sold_out_item_is_not_in_stock() {
        let item = Item::new(ItemId::new(1), "Tuyo", Money::from_minor(4500, iso::PHP), 0);

        assert!(!item.in_stock());
    }
}
