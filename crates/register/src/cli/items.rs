use std::io;

use clap::Args;

use till::prelude::*;
use till_register::HttpBackend;

use super::render::write_items;

#[derive(Debug, Args)]
pub(crate) struct ItemsArgs {
    /// Only show items whose name contains this text
    #[arg(short, long)]
    search: Option<String>,
}

pub(crate) async fn run(backend: &HttpBackend, args: ItemsArgs) -> Result<(), String> {
    let items = backend
        .fetch_items()
        .await
        .map_err(|error| format!("failed to fetch items: {error}"))?;

    let ledger = Ledger::new(items);

    let mut out = io::stdout().lock();

    let written = match args.search.as_deref() {
        Some(query) => write_items(&mut out, ledger.search(query)),
        None => write_items(&mut out, ledger.items()),
    };

    written.map_err(|error| format!("failed to write items: {error}"))
}
