//! Inventory Ledger
//!
//! Client-side snapshot of purchasable stock. Mutations never touch the server; each one
//! returns a new ledger and leaves the receiver unchanged.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::items::{Item, ItemId};

/// Errors raised by ledger mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// More units were requested than the cached stock holds.
    #[error("insufficient stock for item {item}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Item being reserved
        item: ItemId,
        /// Units requested
        requested: u32,
        /// Units currently cached as available
        available: u32,
    },

    /// The item is not part of the cached catalog.
    #[error("item {0} is not in the ledger")]
    UnknownItem(ItemId),
}

/// Cached stock counts, keyed by item, in catalog order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    items: Vec<Item>,
    index: FxHashMap<ItemId, usize>,
}

impl Ledger {
    /// Builds a ledger from a freshly fetched catalog.
    ///
    /// A repeated id replaces the earlier entry in place.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut ledger = Self::default();

        for item in items {
            match ledger.index.get(&item.id()).copied() {
                Some(position) => {
                    if let Some(slot) = ledger.items.get_mut(position) {
                        *slot = item;
                    }
                }
                None => {
                    ledger.index.insert(item.id(), ledger.items.len());
                    ledger.items.push(item);
                }
            }
        }

        ledger
    }

    /// Reserves `quantity` units of an item, returning the updated ledger.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownItem`]: the item is not cached.
    /// - [`LedgerError::InsufficientStock`]: fewer than `quantity` units are cached.
    pub fn reserve(&self, item: ItemId, quantity: u32) -> Result<Self, LedgerError> {
        let available = self.amount_of(item)?;

        let remaining =
            available
                .checked_sub(quantity)
                .ok_or(LedgerError::InsufficientStock {
                    item,
                    requested: quantity,
                    available,
                })?;

        debug!(%item, quantity, remaining, "reserved stock");

        Ok(self.with_amount(item, remaining))
    }

    /// Returns `quantity` units of an item to the cached stock.
    ///
    /// The result is not capped at the amount originally fetched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] if the item is not cached.
    pub fn release(&self, item: ItemId, quantity: u32) -> Result<Self, LedgerError> {
        let amount = self.amount_of(item)?.saturating_add(quantity);

        debug!(%item, quantity, amount, "released stock");

        Ok(self.with_amount(item, amount))
    }

    /// Cached stock for an item.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownItem`] if the item is not cached.
    pub fn amount_of(&self, item: ItemId) -> Result<u32, LedgerError> {
        self.get(item)
            .map(Item::amount)
            .ok_or(LedgerError::UnknownItem(item))
    }

    /// Looks up a cached item.
    pub fn get(&self, item: ItemId) -> Option<&Item> {
        self.index
            .get(&item)
            .and_then(|position| self.items.get(*position))
    }

    /// Cached items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items whose name contains `query`, ignoring case. An empty query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = query.trim().to_lowercase();

        self.items
            .iter()
            .filter(move |item| needle.is_empty() || item.name().to_lowercase().contains(&needle))
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn with_amount(&self, item: ItemId, amount: u32) -> Self {
        let mut next = self.clone();

        if let Some(slot) = self
            .index
            .get(&item)
            .and_then(|position| next.items.get_mut(*position))
        {
            *slot = slot.with_amount(amount);
        }

        next
    }
}
