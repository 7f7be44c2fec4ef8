//! Orders
//!
//! An order is the list of lines to ring up plus the cash tendered. Lines come either from
//! repeated `--line ID:QTY` flags or from a YAML file:
//!
//! ```yaml
//! paid: "500.00"
//! lines:
//!   - item: 3
//!     quantity: 2
//!   - item: 7
//!     quantity: 1
//! ```

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use till::prelude::*;

/// Order parsing errors.
#[derive(Debug, Error)]
pub enum OrderError {
    /// IO error reading the order file
    #[error("failed to read order file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse order file: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A line was not `ID:QTY`
    #[error("invalid order line {0:?}, expected ID:QTY")]
    InvalidLine(String),

    /// The tendered amount is not a decimal
    #[error("invalid payment amount: {0}")]
    InvalidPayment(String),

    /// Payment could not be expressed in the register currency
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Neither lines nor an order file were given
    #[error("the order has no lines")]
    Empty,
}

/// One `(item, quantity)` pair to add to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderLine {
    /// Item to sell
    pub item: ItemId,
    /// Units to sell
    pub quantity: u32,
}

impl FromStr for OrderLine {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OrderError::InvalidLine(s.to_string());

        let (item, quantity) = s.split_once(':').ok_or_else(invalid)?;

        let item = item.trim().parse::<i64>().ok().ok_or_else(invalid)?;
        let quantity = quantity.trim().parse::<u32>().ok().ok_or_else(invalid)?;

        Ok(Self {
            item: ItemId::new(item),
            quantity,
        })
    }
}

/// A complete order: lines plus cash tendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Lines in the order they are rung up
    pub lines: Vec<OrderLine>,
    /// Cash tendered, in major units
    pub paid: String,
}

impl Order {
    /// Loads an order from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, OrderError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parses an order from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid order.
    pub fn from_yaml(yaml: &str) -> Result<Self, OrderError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Cash tendered, as money in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if `paid` is not a decimal or does not fit the currency.
    pub fn paid_in(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, OrderError> {
        parse_payment(&self.paid, currency)
    }

    /// Adds every line to `register`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first line the register refuses; the lines before it are discarded.
    pub fn ring_up(&self, register: &Register) -> Result<Register, (OrderLine, RegisterError)> {
        self.lines.iter().try_fold(register.clone(), |register, line| {
            register
                .add(line.item, line.quantity)
                .map_err(|error| (*line, error))
        })
    }
}

/// Parses a cash amount such as `500` or `499.50`.
///
/// # Errors
///
/// Returns an error if `value` is not a non-negative decimal or does not fit the currency.
pub fn parse_payment(
    value: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, OrderError> {
    let amount = Decimal::from_str(value.trim())
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .ok_or_else(|| OrderError::InvalidPayment(value.to_string()))?;

    Ok(from_decimal(amount, currency)?)
}
