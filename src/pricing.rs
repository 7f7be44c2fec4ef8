//! Pricing

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while converting or totalling prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A price in one currency was combined with a price in another.
    #[error("price in {found} cannot be combined with {expected}")]
    CurrencyMismatch {
        /// Currency that was expected
        expected: &'static str,
        /// Currency that was found
        found: &'static str,
    },

    /// The amount does not fit into minor units.
    #[error("amount {0} is out of range")]
    OutOfRange(Decimal),

    /// Arithmetic overflowed while totalling.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Rounds a decimal amount to two places, midpoints away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts money into a decimal in major units (e.g. `1050` PHP minor units becomes `10.50`).
pub fn to_decimal(money: &Money<'_, Currency>) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

/// Converts a decimal in major units into money, rounding half-up at the currency's minor unit.
///
/// # Errors
///
/// Returns [`PricingError::OutOfRange`] if the amount cannot be represented in minor units.
pub fn from_decimal(
    value: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let exponent = currency.exponent;

    let minor = 10_i64
        .checked_pow(exponent)
        .and_then(|factor| {
            value
                .round_dp_with_strategy(exponent, RoundingStrategy::MidpointAwayFromZero)
                .checked_mul(Decimal::from(factor))
        })
        .and_then(|scaled| scaled.to_i64())
        .ok_or(PricingError::OutOfRange(value))?;

    Ok(Money::from_minor(minor, currency))
}

/// Calculates `price * quantity`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the line total does not fit into minor units.
pub fn line_total(
    price: &Money<'static, Currency>,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Sums `price * quantity` over a set of lines; an empty set totals zero.
///
/// # Errors
///
/// - [`PricingError::CurrencyMismatch`]: a line is priced in another currency.
/// - [`PricingError::Overflow`]: the total does not fit into minor units.
pub fn total_price<'a>(
    lines: impl IntoIterator<Item = (&'a Money<'static, Currency>, u32)>,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = lines.into_iter().try_fold(0_i64, |acc, (price, quantity)| {
        ensure_currency(price, currency)?;

        let line = line_total(price, quantity)?;

        acc.checked_add(line.to_minor_units())
            .ok_or(PricingError::Overflow)
    })?;

    Ok(Money::from_minor(minor, currency))
}

/// Checks that `money` is denominated in `currency`.
///
/// # Errors
///
/// Returns [`PricingError::CurrencyMismatch`] when the currencies differ.
pub fn ensure_currency(
    money: &Money<'_, Currency>,
    currency: &'static Currency,
) -> Result<(), PricingError> {
    if money.currency() == currency {
        Ok(())
    } else {
        Err(PricingError::CurrencyMismatch {
            expected: currency.iso_alpha_code,
            found: money.currency().iso_alpha_code,
        })
    }
}
