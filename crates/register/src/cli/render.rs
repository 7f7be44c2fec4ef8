//! Table output for the terminal.

use std::{io, time::Duration};

use humanize_duration::{Truncate, prelude::DurationExt};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use till::prelude::*;

fn finish(builder: Builder, numeric_columns: std::ops::Range<usize>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric_columns), Alignment::right());

    table
}

pub(super) fn write_items<'a>(
    out: &mut impl io::Write,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Item", "Price", "Stock"]);

    for item in items {
        let stock = if item.in_stock() {
            item.amount().to_string()
        } else {
            "sold out".to_string()
        };

        builder.push_record([
            item.id().to_string(),
            item.name().to_string(),
            item.price().to_string(),
            stock,
        ]);
    }

    writeln!(out, "{}", finish(builder, 2..4))
}

pub(super) fn write_cart(out: &mut impl io::Write, cart: &Cart) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Item", "Price", "Qty", "Total"]);

    for line in cart.lines() {
        let total = line
            .total()
            .map_or_else(|error| error.to_string(), |total| total.to_string());

        builder.push_record([
            line.item().to_string(),
            line.name().to_string(),
            line.price().to_string(),
            line.quantity().to_string(),
            total,
        ]);
    }

    writeln!(out, "{}", finish(builder, 2..5))
}

pub(super) fn write_checkout(
    out: &mut impl io::Write,
    checkout: &Checkout,
    elapsed: Duration,
) -> io::Result<()> {
    let receipt = &checkout.receipt;

    writeln!(out, " {}", receipt.transaction_name)?;
    writeln!(out, " Batch:  {}", receipt.batch_uuid)?;
    writeln!(out, " Total:  {}", receipt.total)?;
    writeln!(out, " Change: {}", checkout.change)?;

    for (item, sale) in &receipt.sales {
        writeln!(out, " Sale {sale} recorded for item {item}")?;
    }

    for drift in &receipt.drift {
        writeln!(
            out,
            " Stock for item {} is {} on the server, expected {}",
            drift.item, drift.actual, drift.expected
        )?;
    }

    writeln!(
        out,
        " Committed in {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )
}
