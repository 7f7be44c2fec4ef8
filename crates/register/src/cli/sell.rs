use std::{io, io::Write, path::PathBuf, time::Instant};

use clap::Args;
use tracing::{info, warn};

use till::prelude::*;
use till_register::{
    BackendError, HttpBackend,
    order::{Order, OrderError, OrderLine},
};

use super::render::{write_cart, write_checkout};

#[derive(Debug, Args)]
pub(crate) struct SellArgs {
    /// Order line as ITEM_ID:QUANTITY, repeatable
    #[arg(short, long = "line", value_name = "ID:QTY", conflicts_with = "order")]
    lines: Vec<OrderLine>,

    /// YAML order file with `lines` and `paid`
    #[arg(short, long)]
    order: Option<PathBuf>,

    /// Cash tendered; overrides `paid` from an order file
    #[arg(short, long)]
    paid: Option<String>,
}

impl SellArgs {
    fn into_order(self) -> Result<Order, OrderError> {
        let order = match self.order {
            Some(path) => {
                let mut order = Order::load(&path)?;

                if let Some(paid) = self.paid {
                    order.paid = paid;
                }

                order
            }
            None => Order {
                lines: self.lines,
                paid: self
                    .paid
                    .ok_or_else(|| OrderError::InvalidPayment("missing --paid".to_string()))?,
            },
        };

        if order.lines.is_empty() {
            return Err(OrderError::Empty);
        }

        Ok(order)
    }
}

/// Logs each commit transition.
#[derive(Debug, Default)]
struct LoggingObserver;

impl CommitObserver for LoggingObserver {
    fn on_state(&mut self, state: CommitState) {
        match state {
            CommitState::Failed => warn!(%state, "commit state changed"),
            _ => info!(%state, "commit state changed"),
        }
    }
}

fn status_message(status: CheckoutStatus) -> &'static str {
    match status {
        CheckoutStatus::Success => "Sale completed",
        CheckoutStatus::InsufficientStock => "Not enough stock",
        CheckoutStatus::InsufficientPayment => "Insufficient payment",
        CheckoutStatus::CommitFailed => "Sale could not be saved, the cart was kept",
    }
}

fn describe_failure(error: &CheckoutError<BackendError>) -> String {
    let mut message = format!("{}: {error}", status_message(error.status()));

    if let CheckoutError::Commit(commit) = error {
        if let Some((item, source)) = commit.first_failure() {
            message.push_str(&format!("\n  item {item}: {source}"));
        }

        for (item, sale) in commit.recorded_sales() {
            message.push_str(&format!("\n  sale {sale} for item {item} was already recorded"));
        }
    }

    message
}

pub(crate) async fn run(backend: &HttpBackend, args: SellArgs) -> Result<(), String> {
    let order = args.into_order().map_err(|error| error.to_string())?;

    let given = order
        .paid_in(backend.currency())
        .map_err(|error| error.to_string())?;

    let items = backend
        .fetch_items()
        .await
        .map_err(|error| format!("failed to fetch items: {error}"))?;

    let register = order
        .ring_up(&Register::new(items, backend.currency()))
        .map_err(|(line, error)| {
            let status = error.status().map_or("Cannot add item", status_message);

            format!("{status}: item {} x{}: {error}", line.item, line.quantity)
        })?;

    let mut out = io::stdout().lock();

    write_cart(&mut out, register.cart()).map_err(|error| error.to_string())?;

    let context = CommitContext::now();
    let started_at = Instant::now();

    let checkout = register
        .checkout(backend, &given, &context, &mut LoggingObserver)
        .await
        .map_err(|error| describe_failure(&error))?;

    write_checkout(&mut out, &checkout, started_at.elapsed()).map_err(|error| error.to_string())?;

    writeln!(out, " {}", status_message(CheckoutStatus::Success)).map_err(|error| error.to_string())
}
