//! Commit errors

use thiserror::Error;

use crate::{
    commit::{CommitState, report::PhaseReport},
    items::ItemId,
    pricing::PricingError,
    sales::{SaleId, StockLevel},
};

/// Why a commit attempt failed. The cart is never cleared when this is returned.
///
/// No compensation is attempted: sale records created before a failure remain persisted and are
/// listed here so a reconciling layer can act on them.
#[derive(Debug, Error)]
pub enum CommitError<E> {
    /// Nothing to commit; no request was sent.
    #[error("cannot commit an empty cart")]
    EmptyCart,

    /// A line total could not be computed; no request was sent.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// At least one sale record could not be created. Stock was not touched.
    #[error("failed to record {} of {} sales", .sales.failed().len(), .sales.len())]
    RecordingFailed {
        /// Per-line outcome of the recording phase
        sales: PhaseReport<SaleId, E>,
    },

    /// Every sale was recorded but at least one decrement failed.
    #[error("failed to decrement stock for {} of {} lines", .stock.failed().len(), .stock.len())]
    DecrementFailed {
        /// Sale records created by the first phase
        sales: Vec<(ItemId, SaleId)>,
        /// Per-line outcome of the decrement phase
        stock: PhaseReport<StockLevel, E>,
    },
}

impl<E> CommitError<E> {
    /// The state the attempt was in when it failed.
    pub fn failed_during(&self) -> CommitState {
        match self {
            Self::EmptyCart | Self::Pricing(_) => CommitState::Idle,
            Self::RecordingFailed { .. } => CommitState::RecordingSales,
            Self::DecrementFailed { .. } => CommitState::DecrementingStock,
        }
    }

    /// The first backend failure, in cart order, if the failure came from the backend.
    pub fn first_failure(&self) -> Option<&(ItemId, E)> {
        match self {
            Self::EmptyCart | Self::Pricing(_) => None,
            Self::RecordingFailed { sales } => sales.first_failure(),
            Self::DecrementFailed { stock, .. } => stock.first_failure(),
        }
    }

    /// Sale records that were persisted before the attempt failed.
    pub fn recorded_sales(&self) -> Vec<(ItemId, SaleId)> {
        match self {
            Self::EmptyCart | Self::Pricing(_) => Vec::new(),
            Self::RecordingFailed { sales } => sales.succeeded().to_vec(),
            Self::DecrementFailed { sales, .. } => sales.clone(),
        }
    }
}
