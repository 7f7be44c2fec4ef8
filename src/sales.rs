//! Sales

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{cart::CartLine, items::ItemId, pricing::PricingError};

/// Label prefix shared by every record of a register sale.
pub const TRANSACTION_PREFIX: &str = "POS Sale";

/// Server-assigned identifier of a persisted sale record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(i64);

impl SaleId {
    /// Wraps a raw sale id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw sale id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for SaleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Authoritative stock for an item after a server-side decrement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StockLevel {
    /// Item that was decremented
    pub item: ItemId,
    /// Stock count stored by the server
    pub amount: u32,
}

/// Shared label for all records of a sale made on `date`.
pub fn transaction_name(date: Date) -> String {
    format!("{TRANSACTION_PREFIX} - {date}")
}

/// Everything needed to persist one cart line as a sale record.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleDraft {
    batch_uuid: Uuid,
    transaction_name: String,
    sales_name: String,
    item: ItemId,
    quantity: u32,
    price: Money<'static, Currency>,
    transaction_date: Date,
    total_sales: Money<'static, Currency>,
}

impl SaleDraft {
    /// Snapshots a cart line, computing its total now.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the line total overflows.
    pub fn from_line(line: &CartLine, batch_uuid: Uuid, date: Date) -> Result<Self, PricingError> {
        Ok(Self {
            batch_uuid,
            transaction_name: transaction_name(date),
            sales_name: line.name().to_string(),
            item: line.item(),
            quantity: line.quantity(),
            price: *line.price(),
            transaction_date: date,
            total_sales: line.total()?,
        })
    }

    /// Grouping key shared by all drafts of one commit attempt.
    pub fn batch_uuid(&self) -> Uuid {
        self.batch_uuid
    }

    /// Human-readable transaction label.
    pub fn transaction_name(&self) -> &str {
        &self.transaction_name
    }

    /// Name of the item sold.
    pub fn sales_name(&self) -> &str {
        &self.sales_name
    }

    /// Item sold.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Units sold.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Day of the sale.
    pub fn transaction_date(&self) -> Date {
        self.transaction_date
    }

    /// `price * quantity`.
    pub fn total_sales(&self) -> &Money<'static, Currency> {
        &self.total_sales
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::PHP;
    use testresult::TestResult;

    use super::*;
    use crate::{
        cart::Cart,
        items::{Item, ItemId},
    };

    #[test]
    fn transaction_name_includes_date() {
        assert_eq!(transaction_name(date(2024, 3, 9)), "POS Sale - 2024-03-09");
    }

    #[test]
    fn from_line_snapshots_totals() -> TestResult {
        let item = Item::new(ItemId::new(3), "Bear Brand", Money::from_minor(1250, PHP), 6);
        let cart = Cart::new(PHP).add_line(&item, 3)?;
        let line = cart.lines().first().ok_or("missing line")?;
        let batch = Uuid::now_v7();

        let draft = SaleDraft::from_line(line, batch, date(2024, 3, 9))?;

        assert_eq!(draft.batch_uuid(), batch);
        assert_eq!(draft.sales_name(), "Bear Brand");
        assert_eq!(draft.quantity(), 3);
        assert_eq!(draft.price(), &Money::from_minor(1250, PHP));
        assert_eq!(draft.total_sales(), &Money::from_minor(3750, PHP));
        assert_eq!(draft.transaction_name(), "POS Sale - 2024-03-09");

        Ok(())
    }
}
