//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    commit::{
        CommitContext, CommitError, CommitObserver, CommitReceipt, CommitState, NoopObserver,
        PhaseReport, RecordingObserver, SalesBackend, StockDrift, commit,
    },
    items::{Item, ItemId},
    ledger::{Ledger, LedgerError},
    pricing::{PricingError, from_decimal, round_to_cents, to_decimal},
    register::{Checkout, CheckoutError, CheckoutStatus, Register, RegisterError},
    sales::{SaleDraft, SaleId, StockLevel, transaction_name},
};
