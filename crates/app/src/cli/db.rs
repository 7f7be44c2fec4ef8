use std::io::Write;

use clap::{Args, Subcommand};
use sqlx::PgPool;

use till_app::database;

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply the bundled schema migrations
    Migrate,
}

pub(crate) async fn run(
    command: DbCommand,
    pool: &PgPool,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate => {
            database::migrate(pool)
                .await
                .map_err(|error| format!("failed to apply migrations: {error}"))?;

            writeln!(out, "migrations applied").map_err(write_failed)
        }
    }
}
