//! Register
//!
//! Pairs the cached [`Ledger`] with the active [`Cart`] so that every cart change is matched by
//! the corresponding stock reservation or release.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    commit::{CommitContext, CommitError, CommitObserver, CommitReceipt, SalesBackend, commit},
    items::{Item, ItemId},
    ledger::{Ledger, LedgerError},
};

/// Status exposed to the UI after a register action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    /// The sale was committed.
    Success,
    /// Not enough cached stock for the requested line.
    InsufficientStock,
    /// Money tendered does not cover the total.
    InsufficientPayment,
    /// The sale could not be committed.
    CommitFailed,
}

/// Errors from editing the register's cart.
#[derive(Debug, Error, PartialEq)]
pub enum RegisterError {
    /// Wrapped ledger error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Wrapped cart error.
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl RegisterError {
    /// Status to surface for this error, if it maps onto one.
    pub fn status(&self) -> Option<CheckoutStatus> {
        match self {
            Self::Ledger(LedgerError::InsufficientStock { .. }) => {
                Some(CheckoutStatus::InsufficientStock)
            }
            Self::Cart(CartError::InsufficientPayment { .. }) => {
                Some(CheckoutStatus::InsufficientPayment)
            }
            _ => None,
        }
    }
}

/// Errors from checking out.
#[derive(Debug, Error)]
pub enum CheckoutError<E> {
    /// Payment was rejected before anything was sent.
    #[error(transparent)]
    Payment(CartError),

    /// The commit protocol failed.
    #[error(transparent)]
    Commit(#[from] CommitError<E>),
}

impl<E> CheckoutError<E> {
    /// Status to surface for this error.
    pub fn status(&self) -> CheckoutStatus {
        match self {
            Self::Payment(CartError::InsufficientPayment { .. }) => {
                CheckoutStatus::InsufficientPayment
            }
            Self::Payment(_) | Self::Commit(_) => CheckoutStatus::CommitFailed,
        }
    }
}

/// A completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    /// Register ready for the next order
    pub register: Register,
    /// What the backend stored
    pub receipt: CommitReceipt,
    /// Change owed to the customer
    pub change: Money<'static, Currency>,
}

/// A register session: cached stock plus the order being built.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    ledger: Ledger,
    cart: Cart,
}

impl Register {
    /// Start a session from a freshly fetched catalog.
    pub fn new(items: impl IntoIterator<Item = Item>, currency: &'static Currency) -> Self {
        Self {
            ledger: Ledger::new(items),
            cart: Cart::new(currency),
        }
    }

    /// Reserves stock and adds `quantity` units of `item` to the cart.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::Ledger`]: the item is unknown or out of stock; nothing changes.
    /// - [`RegisterError::Cart`]: zero quantity or a pricing failure; nothing changes.
    pub fn add(&self, item: ItemId, quantity: u32) -> Result<Self, RegisterError> {
        let entry = self.ledger.get(item).ok_or(LedgerError::UnknownItem(item))?;

        let cart = self.cart.add_line(entry, quantity)?;
        let ledger = self.ledger.reserve(item, quantity)?;

        Ok(Self { ledger, cart })
    }

    /// Removes one unit of `item` from the cart and returns it to stock.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Ledger`] if the item is missing from the ledger.
    pub fn remove(&self, item: ItemId) -> Result<Self, RegisterError> {
        if self.cart.quantity_of(item) == 0 {
            return Ok(self.clone());
        }

        Ok(Self {
            ledger: self.ledger.release(item, 1)?,
            cart: self.cart.remove_line(item),
        })
    }

    /// Change owed when `given` is tendered.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Cart`] when `given` does not cover the total.
    pub fn change_due(
        &self,
        given: &Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, RegisterError> {
        Ok(self.cart.change_due(given)?)
    }

    /// Validates payment then commits the cart.
    ///
    /// On success the returned register has an empty cart. The ledger keeps its reservations;
    /// start a new [`Register`] from a refetched catalog to see server stock.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Payment`]: payment does not cover the total; nothing was sent.
    /// - [`CheckoutError::Commit`]: the commit failed; the cart should be kept.
    pub async fn checkout<B>(
        &self,
        backend: &B,
        given: &Money<'static, Currency>,
        context: &CommitContext,
        observer: &mut dyn CommitObserver,
    ) -> Result<Checkout, CheckoutError<B::Error>>
    where
        B: SalesBackend + ?Sized,
    {
        let change = self.cart.change_due(given).map_err(CheckoutError::Payment)?;

        let receipt = commit(backend, &self.cart, &self.ledger, context, observer).await?;

        Ok(Checkout {
            register: Self {
                ledger: self.ledger.clone(),
                cart: self.cart.cleared(),
            },
            receipt,
            change,
        })
    }

    /// Cached stock.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The order being built.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}
