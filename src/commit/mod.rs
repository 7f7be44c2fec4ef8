//! Sale commit protocol
//!
//! A commit runs in two fan-out phases against a [`SalesBackend`]:
//!
//! 1. one "record sale" request per cart line, all in flight at once;
//! 2. only when every record succeeded, one "decrement stock" request per line.
//!
//! Either phase failing aborts the attempt with a [`CommitError`] carrying the phase reports.
//! Nothing is rolled back.

use std::fmt::{Display, Formatter, Result as FmtResult};

use futures_util::future::join_all;
use jiff::{Zoned, civil::Date};
use rusty_money::{Money, iso::Currency};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    cart::Cart,
    items::ItemId,
    ledger::Ledger,
    pricing::{PricingError, total_price},
    sales::{SaleDraft, SaleId, StockLevel, transaction_name},
};

mod errors;
mod observer;
mod report;

pub use errors::CommitError;
pub use observer::{CommitObserver, NoopObserver, RecordingObserver};
pub use report::PhaseReport;

/// Remote collaborator that persists sales and owns authoritative stock.
pub trait SalesBackend {
    /// Failure of a single request.
    type Error;

    /// Persists one sale record.
    async fn record_sale(&self, draft: &SaleDraft) -> Result<SaleId, Self::Error>;

    /// Decrements stock by `quantity`, floored at zero, returning the stored amount.
    async fn decrement_stock(&self, item: ItemId, quantity: u32)
    -> Result<StockLevel, Self::Error>;
}

/// Progress of a single commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitState {
    /// Nothing sent yet.
    Idle,
    /// Sale records are in flight.
    RecordingSales,
    /// Stock decrements are in flight.
    DecrementingStock,
    /// Both phases succeeded.
    Committed,
    /// The attempt was aborted.
    Failed,
}

impl Display for CommitState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Idle => "idle",
            Self::RecordingSales => "recording sales",
            Self::DecrementingStock => "decrementing stock",
            Self::Committed => "committed",
            Self::Failed => "failed",
        };

        f.write_str(label)
    }
}

/// Per-attempt values stamped onto every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitContext {
    /// Grouping key for the records of this attempt
    pub batch_uuid: Uuid,
    /// Transaction date
    pub date: Date,
}

impl CommitContext {
    /// A fresh batch stamped with today's local date.
    pub fn now() -> Self {
        Self {
            batch_uuid: Uuid::now_v7(),
            date: Zoned::now().date(),
        }
    }
}

/// Server stock that disagrees with what the ledger expected after a decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockDrift {
    /// Item whose stock drifted
    pub item: ItemId,
    /// Amount the cached ledger holds
    pub expected: u32,
    /// Amount the server stored
    pub actual: u32,
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitReceipt {
    /// Grouping key shared by the records
    pub batch_uuid: Uuid,
    /// Label shared by the records
    pub transaction_name: String,
    /// Sum of the recorded line totals
    pub total: Money<'static, Currency>,
    /// Sale id created for each line
    pub sales: Vec<(ItemId, SaleId)>,
    /// Stock stored by the server for each line
    pub stock: Vec<(ItemId, StockLevel)>,
    /// Lines where server stock differs from the cached ledger
    pub drift: Vec<StockDrift>,
}

/// Commits the cart's lines against `backend`.
///
/// `ledger` is the cached view after the cart's reservations; it is only used to detect drift.
///
/// # Errors
///
/// - [`CommitError::EmptyCart`]: the cart has no lines.
/// - [`CommitError::Pricing`]: a line total overflowed.
/// - [`CommitError::RecordingFailed`]: a sale record request failed; no stock was decremented.
/// - [`CommitError::DecrementFailed`]: a decrement request failed after all records were saved.
#[instrument(
    name = "commit",
    skip_all,
    fields(batch_uuid = %context.batch_uuid, lines = cart.len())
)]
pub async fn commit<B>(
    backend: &B,
    cart: &Cart,
    ledger: &Ledger,
    context: &CommitContext,
    observer: &mut dyn CommitObserver,
) -> Result<CommitReceipt, CommitError<B::Error>>
where
    B: SalesBackend + ?Sized,
{
    observer.on_state(CommitState::Idle);

    let result = run(backend, cart, ledger, context, observer).await;

    match &result {
        Ok(receipt) => {
            observer.on_state(CommitState::Committed);

            info!(
                total = %receipt.total,
                drift = receipt.drift.len(),
                "sale committed"
            );
        }
        Err(error) => {
            observer.on_state(CommitState::Failed);

            warn!(failed_during = %error.failed_during(), %error, "sale commit failed");
        }
    }

    result
}

async fn run<B>(
    backend: &B,
    cart: &Cart,
    ledger: &Ledger,
    context: &CommitContext,
    observer: &mut dyn CommitObserver,
) -> Result<CommitReceipt, CommitError<B::Error>>
where
    B: SalesBackend + ?Sized,
{
    if cart.is_empty() {
        return Err(CommitError::EmptyCart);
    }

    let drafts = cart
        .lines()
        .iter()
        .map(|line| SaleDraft::from_line(line, context.batch_uuid, context.date))
        .collect::<Result<Vec<_>, PricingError>>()?;

    let total = total_price(
        drafts.iter().map(|draft| (draft.total_sales(), 1)),
        cart.currency(),
    )?;

    observer.on_state(CommitState::RecordingSales);

    let sales: PhaseReport<SaleId, B::Error> = join_all(
        drafts
            .iter()
            .map(|draft| async move { (draft.item(), backend.record_sale(draft).await) }),
    )
    .await
    .into_iter()
    .collect();

    if !sales.is_complete() {
        return Err(CommitError::RecordingFailed { sales });
    }

    let (sales, _) = sales.into_parts();

    observer.on_state(CommitState::DecrementingStock);

    let stock: PhaseReport<StockLevel, B::Error> =
        join_all(cart.lines().iter().map(|line| async move {
            (
                line.item(),
                backend.decrement_stock(line.item(), line.quantity()).await,
            )
        }))
        .await
        .into_iter()
        .collect();

    if !stock.is_complete() {
        return Err(CommitError::DecrementFailed { sales, stock });
    }

    let (stock, _) = stock.into_parts();
    let drift = detect_drift(ledger, &stock);

    for drifted in &drift {
        warn!(
            item = %drifted.item,
            expected = drifted.expected,
            actual = drifted.actual,
            "server stock differs from cached ledger"
        );
    }

    Ok(CommitReceipt {
        batch_uuid: context.batch_uuid,
        transaction_name: transaction_name(context.date),
        total,
        sales,
        stock,
        drift,
    })
}

fn detect_drift(ledger: &Ledger, stock: &[(ItemId, StockLevel)]) -> Vec<StockDrift> {
    stock
        .iter()
        .filter_map(|(item, level)| {
            let expected = ledger.amount_of(*item).ok()?;

            (expected != level.amount).then_some(StockDrift {
                item: *item,
                expected,
                actual: level.amount,
            })
        })
        .collect()
}
