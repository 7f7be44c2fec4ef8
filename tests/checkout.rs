//! Checkout scenarios against an in-memory backend.
//!
//! The backend behaves like the HTTP API: sale records get sequential ids and stock decrements
//! are floored at zero.

use std::sync::Mutex;

use jiff::civil::date;
use rusty_money::{Money, iso::PHP};
use testresult::TestResult;
use uuid::Uuid;

use till::prelude::*;

#[derive(Debug, Default)]
struct InMemoryBackend {
    state: Mutex<State>,
    reject_sales_named: Option<&'static str>,
}

#[derive(Debug, Default)]
struct State {
    stock: Vec<(ItemId, u32)>,
    sales: Vec<SaleDraft>,
    decrements: usize,
}

impl InMemoryBackend {
    fn with_stock(stock: &[(i64, u32)]) -> Self {
        let backend = Self::default();

        if let Ok(mut state) = backend.state.lock() {
            state.stock = stock.iter().map(|(id, n)| (ItemId::new(*id), *n)).collect();
        }

        backend
    }

    fn stock_of(&self, item: ItemId) -> Option<u32> {
        let state = self.state.lock().ok()?;

        state.stock.iter().find(|(id, _)| *id == item).map(|(_, n)| *n)
    }

    fn sales(&self) -> Vec<SaleDraft> {
        self.state.lock().map(|s| s.sales.clone()).unwrap_or_default()
    }

    fn decrements(&self) -> usize {
        self.state.lock().map(|s| s.decrements).unwrap_or_default()
    }
}

impl SalesBackend for InMemoryBackend {
    type Error = String;

    async fn record_sale(&self, draft: &SaleDraft) -> Result<SaleId, Self::Error> {
        if self.reject_sales_named == Some(draft.sales_name()) {
            return Err("500 Internal Server Error".to_string());
        }

        let mut state = self.state.lock().map_err(|e| e.to_string())?;
        state.sales.push(draft.clone());

        let id = i64::try_from(state.sales.len()).map_err(|e| e.to_string())?;

        Ok(SaleId::new(id))
    }

    async fn decrement_stock(
        &self,
        item: ItemId,
        quantity: u32,
    ) -> Result<StockLevel, Self::Error> {
        let mut state = self.state.lock().map_err(|e| e.to_string())?;
        state.decrements += 1;

        let (_, amount) = state
            .stock
            .iter_mut()
            .find(|(id, _)| *id == item)
            .ok_or_else(|| format!("404 item {item} not found"))?;

        *amount = amount.saturating_sub(quantity);

        Ok(StockLevel {
            item,
            amount: *amount,
        })
    }
}

fn catalog() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(1), "Item A", Money::from_minor(1000, PHP), 5),
        Item::new(ItemId::new(2), "Item B", Money::from_minor(550, PHP), 5),
        Item::new(ItemId::new(3), "Item C", Money::from_minor(2500, PHP), 0),
    ]
}

fn context() -> CommitContext {
    CommitContext {
        batch_uuid: Uuid::now_v7(),
        date: date(2025, 1, 31),
    }
}

#[tokio::test]
async fn two_line_sale_totals_and_commits() -> TestResult {
    let backend = InMemoryBackend::with_stock(&[(1, 5), (2, 5), (3, 0)]);

    let register = Register::new(catalog(), PHP)
        .add(ItemId::new(1), 1)?
        .add(ItemId::new(2), 1)?
        .add(ItemId::new(1), 1)?;

    assert_eq!(register.cart().total()?, Money::from_minor(2550, PHP));

    let checkout = register
        .checkout(
            &backend,
            &Money::from_minor(3000, PHP),
            &context(),
            &mut NoopObserver,
        )
        .await?;

    assert_eq!(checkout.change, Money::from_minor(450, PHP));
    assert!(checkout.register.cart().is_empty());
    assert!(checkout.receipt.drift.is_empty());

    let sales = backend.sales();
    assert_eq!(sales.len(), 2);
    assert!(
        sales
            .iter()
            .all(|sale| sale.transaction_name() == "POS Sale - 2025-01-31")
    );
    assert_eq!(backend.stock_of(ItemId::new(1)), Some(3));
    assert_eq!(backend.stock_of(ItemId::new(2)), Some(4));

    Ok(())
}

#[test]
fn sold_out_item_cannot_be_added() {
    let register = Register::new(catalog(), PHP);

    let error = register.add(ItemId::new(3), 1).err();

    assert!(matches!(
        error,
        Some(RegisterError::Ledger(LedgerError::InsufficientStock {
            available: 0,
            ..
        }))
    ));
}

#[tokio::test]
async fn failed_second_record_keeps_cart_and_skips_decrements() -> TestResult {
    let backend = InMemoryBackend {
        reject_sales_named: Some("Item B"),
        ..InMemoryBackend::with_stock(&[(1, 5), (2, 5)])
    };

    let register = Register::new(catalog(), PHP)
        .add(ItemId::new(1), 2)?
        .add(ItemId::new(2), 1)?;

    let result = register
        .checkout(
            &backend,
            &Money::from_minor(3000, PHP),
            &context(),
            &mut NoopObserver,
        )
        .await;

    let Err(error) = result else {
        return Err("checkout should fail".into());
    };

    assert_eq!(error.status(), CheckoutStatus::CommitFailed);
    assert_eq!(backend.decrements(), 0);
    assert_eq!(register.cart().len(), 2);

    let CheckoutError::Commit(CommitError::RecordingFailed { sales }) = error else {
        return Err("expected a recording failure".into());
    };

    assert_eq!(sales.failed().len(), 1);

    Ok(())
}

#[tokio::test]
async fn short_payment_sends_nothing() -> TestResult {
    let backend = InMemoryBackend::with_stock(&[(1, 5)]);
    let register = Register::new(catalog(), PHP).add(ItemId::new(1), 2)?;

    let result = register
        .checkout(
            &backend,
            &Money::from_minor(1500, PHP),
            &context(),
            &mut NoopObserver,
        )
        .await;

    assert_eq!(
        result.err().as_ref().map(CheckoutError::status),
        Some(CheckoutStatus::InsufficientPayment)
    );
    assert!(backend.sales().is_empty());

    Ok(())
}

#[tokio::test]
async fn concurrent_register_shows_up_as_drift() -> TestResult {
    // Server stock already lower than what this register fetched.
    let backend = InMemoryBackend::with_stock(&[(1, 1)]);
    let register = Register::new(catalog(), PHP).add(ItemId::new(1), 3)?;

    let checkout = register
        .checkout(
            &backend,
            &Money::from_minor(3000, PHP),
            &context(),
            &mut NoopObserver,
        )
        .await?;

    assert_eq!(backend.stock_of(ItemId::new(1)), Some(0));
    assert_eq!(
        checkout.receipt.drift,
        [StockDrift {
            item: ItemId::new(1),
            expected: 2,
            actual: 0,
        }]
    );

    Ok(())
}

#[tokio::test]
async fn sold_units_stay_reserved_after_checkout() -> TestResult {
    let backend = InMemoryBackend::with_stock(&[(1, 5)]);
    let register = Register::new(catalog(), PHP).add(ItemId::new(1), 5)?;

    let checkout = register
        .checkout(
            &backend,
            &Money::from_minor(5000, PHP),
            &context(),
            &mut NoopObserver,
        )
        .await?;

    let next = checkout.register;

    assert_eq!(next.ledger().amount_of(ItemId::new(1))?, 0);
    assert_eq!(
        next.add(ItemId::new(1), 1)
            .err()
            .as_ref()
            .and_then(RegisterError::status),
        Some(CheckoutStatus::InsufficientStock)
    );

    Ok(())
}
