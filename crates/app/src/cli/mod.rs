use std::io::{self, Write};

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use till_app::database;

mod db;
mod tokens;

#[derive(Debug, Parser)]
#[command(name = "till-app", about = "Till back-office administration", long_about = None)]
pub(crate) struct Cli {
    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage API bearer tokens
    Token(tokens::TokenCommand),
    /// Database maintenance
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let database_url = self
            .database_url
            .ok_or("DATABASE_URL is not set; pass --database-url or add it to .env")?;

        let pool = database::connect(&database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let result = dispatch(self.command, &pool, &mut io::stdout().lock()).await;

        pool.close().await;

        result
    }
}

async fn dispatch(command: Commands, pool: &PgPool, out: &mut impl Write) -> Result<(), String> {
    match command {
        Commands::Token(command) => tokens::run(command, pool, out).await,
        Commands::Db(command) => db::run(command, pool, out).await,
    }
}

fn write_failed(error: io::Error) -> String {
    format!("failed to write output: {error}")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn database_url_is_accepted_after_the_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "till-app",
            "db",
            "migrate",
            "--database-url",
            "postgres://localhost/till",
        ])?;

        assert_eq!(cli.database_url.as_deref(), Some("postgres://localhost/till"));
        assert!(matches!(cli.command, Commands::Db(_)), "expected the db command");

        Ok(())
    }

    #[test]
    fn revoke_requires_a_uuid() {
        let result = Cli::try_parse_from(["till-app", "token", "revoke", "not-a-uuid"]);

        assert!(result.is_err(), "expected a parse error for a malformed uuid");
    }
}
