//! Cart

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    items::{Item, ItemId},
    pricing::{PricingError, ensure_currency, line_total, total_price},
};

/// Errors related to cart lines, totals and payment.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Lines must hold at least one unit.
    #[error("cannot add zero units of item {0}")]
    ZeroQuantity(ItemId),

    /// Money tendered does not cover the total.
    #[error("payment of {given} does not cover total of {total}")]
    InsufficientPayment {
        /// Cart total
        total: Money<'static, Currency>,
        /// Money tendered
        given: Money<'static, Currency>,
    },

    /// Wrapped pricing error (currency mismatch or overflow).
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One line per distinct item in the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    item: ItemId,
    name: String,
    price: Money<'static, Currency>,
    quantity: u32,
}

impl CartLine {
    /// Item this line sells.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Item name at the time it was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time it was added.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Units on this line, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity` for this line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit into minor units.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        line_total(&self.price, self.quantity)
    }
}

/// An order being built at the register.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: SmallVec::new(),
            currency,
        }
    }

    /// Adds `quantity` units of `item`, merging into an existing line for the same id.
    ///
    /// Callers pair this with a successful ledger reservation of the same quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is zero.
    /// - [`CartError::Pricing`]: the item is priced in another currency, or the quantity overflows.
    pub fn add_line(&self, item: &Item, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity(item.id()));
        }

        ensure_currency(item.price(), self.currency)?;

        let mut next = self.clone();

        match next.lines.iter_mut().find(|line| line.item == item.id()) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(PricingError::Overflow)?;
            }
            None => next.lines.push(CartLine {
                item: item.id(),
                name: item.name().to_string(),
                price: *item.price(),
                quantity,
            }),
        }

        Ok(next)
    }

    /// Removes one unit of `item`, dropping the line when it reaches zero.
    ///
    /// Removing an item that is not in the cart returns an identical cart.
    #[must_use]
    pub fn remove_line(&self, item: ItemId) -> Self {
        let mut next = self.clone();

        if let Some(position) = next.lines.iter().position(|line| line.item == item) {
            let emptied = next.lines.get_mut(position).is_some_and(|line| {
                line.quantity = line.quantity.saturating_sub(1);
                line.quantity == 0
            });

            if emptied {
                next.lines.remove(position);
            }
        }

        next
    }

    /// Sum of `price * quantity` over all lines; zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] if the total overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, CartError> {
        let total = total_price(
            self.lines.iter().map(|line| (&line.price, line.quantity)),
            self.currency,
        )?;

        Ok(total)
    }

    /// Change owed when `given` is tendered.
    ///
    /// # Errors
    ///
    /// - [`CartError::InsufficientPayment`]: `given` is less than the total.
    /// - [`CartError::Pricing`]: `given` is in another currency.
    pub fn change_due(
        &self,
        given: &Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, CartError> {
        ensure_currency(given, self.currency)?;

        let total = self.total()?;

        let change = given
            .to_minor_units()
            .checked_sub(total.to_minor_units())
            .ok_or(PricingError::Overflow)?;

        if change < 0 {
            return Err(CartError::InsufficientPayment {
                total,
                given: *given,
            });
        }

        Ok(Money::from_minor(change, self.currency))
    }

    /// An empty cart in the same currency.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.currency)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Units of `item` in the cart, zero if absent.
    pub fn quantity_of(&self, item: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item == item)
            .map_or(0, CartLine::quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{PHP, USD};
    use testresult::TestResult;

    use super::*;

    fn item(id: i64, minor: i64) -> Item {
        Item::new(ItemId::new(id), format!("Item {id}"), Money::from_minor(minor, PHP), 10)
    }

    #[test]
    fn add_line_merges_same_item() -> TestResult {
        let a = item(1, 1000);

        let cart = Cart::new(PHP).add_line(&a, 1)?.add_line(&a, 2)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(a.id()), 3);

        Ok(())
    }

    #[test]
    fn add_line_keeps_first_added_order() -> TestResult {
        let a = item(1, 1000);
        let b = item(2, 550);

        let cart = Cart::new(PHP)
            .add_line(&b, 1)?
            .add_line(&a, 1)?
            .add_line(&b, 1)?;

        let ids: Vec<_> = cart.lines().iter().map(CartLine::item).collect();

        assert_eq!(ids, [b.id(), a.id()]);

        Ok(())
    }

    #[test]
    fn add_line_rejects_zero_quantity() {
        let a = item(1, 1000);

        assert_eq!(
            Cart::new(PHP).add_line(&a, 0),
            Err(CartError::ZeroQuantity(a.id()))
        );
    }

    #[test]
    fn add_line_rejects_other_currencies() {
        let foreign = Item::new(ItemId::new(5), "Imported", Money::from_minor(100, USD), 1);

        assert!(matches!(
            Cart::new(PHP).add_line(&foreign, 1),
            Err(CartError::Pricing(PricingError::CurrencyMismatch { .. }))
        ));
    }

    #[test]
    fn remove_line_decrements_by_one() -> TestResult {
        let a = item(1, 1000);

        let cart = Cart::new(PHP).add_line(&a, 3)?.remove_line(a.id());

        assert_eq!(cart.quantity_of(a.id()), 2);

        Ok(())
    }

    #[test]
    fn remove_line_deletes_line_at_zero() -> TestResult {
        let a = item(1, 1000);

        let cart = Cart::new(PHP).add_line(&a, 1)?.remove_line(a.id());

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn remove_line_ignores_absent_items() -> TestResult {
        let cart = Cart::new(PHP).add_line(&item(1, 1000), 1)?;

        assert_eq!(cart.remove_line(ItemId::new(42)), cart);

        Ok(())
    }

    #[test]
    fn total_and_change() -> TestResult {
        let cart = Cart::new(PHP)
            .add_line(&item(1, 1000), 2)?
            .add_line(&item(2, 550), 1)?;

        assert_eq!(cart.total()?, Money::from_minor(2550, PHP));
        assert_eq!(
            cart.change_due(&Money::from_minor(3000, PHP))?,
            Money::from_minor(450, PHP)
        );

        Ok(())
    }

    #[test]
    fn exact_payment_gives_zero_change() -> TestResult {
        let cart = Cart::new(PHP).add_line(&item(1, 1000), 2)?;

        assert_eq!(
            cart.change_due(&Money::from_minor(2000, PHP))?,
            Money::from_minor(0, PHP)
        );

        Ok(())
    }

    #[test]
    fn empty_cart_totals_zero() -> TestResult {
        assert_eq!(Cart::new(PHP).total()?, Money::from_minor(0, PHP));

        Ok(())
    }

    #[test]
    fn short_payment_is_rejected() -> TestResult {
        let cart = Cart::new(PHP).add_line(&item(1, 1000), 2)?;

        assert_eq!(
            cart.change_due(&Money::from_minor(1999, PHP)),
            Err(CartError::InsufficientPayment {
                total: Money::from_minor(2000, PHP),
                given: Money::from_minor(1999, PHP),
            })
        );

        Ok(())
    }
}
