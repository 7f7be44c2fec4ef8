use clap::{Parser, Subcommand};
use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use till_register::{HttpBackend, config::RegisterConfig};

mod items;
mod render;
mod sell;

#[derive(Debug, Parser)]
#[command(name = "till-register", about = "Till register", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: RegisterConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog with cached stock
    Items(items::ItemsArgs),
    /// Ring up an order and commit it
    Sell(sell::SellArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let currency = self.config.currency().map_err(|error| error.to_string())?;

        let backend = HttpBackend::from_config(&self.config, currency)
            .map_err(|error| format!("failed to build http client: {error}"))?;

        match self.command {
            Commands::Items(args) => items::run(&backend, args).await,
            Commands::Sell(args) => sell::run(&backend, args).await,
        }
    }
}

pub(crate) fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till=info,till_register=info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
}
