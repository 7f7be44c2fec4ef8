use std::io::Write;

use clap::{Args, Subcommand};
use sqlx::PgPool;
use uuid::Uuid;

use till_app::auth::{ApiTokenMetadata, IssuedApiToken, PgAuthService};

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a bearer token for a register or back-office client
    Create {
        /// Use this raw token instead of generating one
        #[arg(long)]
        token: Option<String>,
    },
    /// Show every issued token
    List,
    /// Stop a token from authenticating
    Revoke {
        /// Token UUID, as printed by `token create` or `token list`
        token_uuid: Uuid,
    },
}

pub(crate) async fn run(
    command: TokenCommand,
    pool: &PgPool,
    out: &mut impl Write,
) -> Result<(), String> {
    let service = PgAuthService::new(pool.clone());

    match command.command {
        TokenSubcommand::Create { token } => {
            let issued = service
                .issue_api_token(token)
                .await
                .map_err(|error| format!("failed to create token: {error}"))?;

            write_issued(out, &issued).map_err(write_failed)
        }
        TokenSubcommand::List => {
            let tokens = service
                .list_api_tokens()
                .await
                .map_err(|error| format!("failed to list tokens: {error}"))?;

            write_tokens(out, &tokens).map_err(write_failed)
        }
        TokenSubcommand::Revoke { token_uuid } => {
            let revoked = service
                .revoke_api_token(token_uuid)
                .await
                .map_err(|error| format!("failed to revoke token: {error}"))?;

            let outcome = if revoked { "revoked" } else { "was not active" };

            writeln!(out, "token {token_uuid} {outcome}").map_err(write_failed)
        }
    }
}

fn write_issued(out: &mut impl Write, issued: &IssuedApiToken) -> std::io::Result<()> {
    writeln!(out, "uuid:       {}", issued.metadata.uuid)?;
    writeln!(out, "created_at: {}", issued.metadata.created_at)?;
    writeln!(out, "token:      {}", issued.token)?;
    writeln!(out, "The raw token is not stored and cannot be shown again.")
}

fn write_tokens(out: &mut impl Write, tokens: &[ApiTokenMetadata]) -> std::io::Result<()> {
    if tokens.is_empty() {
        return writeln!(out, "no tokens issued");
    }

    for token in tokens {
        let last_used = token
            .last_used_at
            .map_or_else(|| "never".to_string(), |at| at.to_string());

        let state = token
            .revoked_at
            .map_or_else(|| "active".to_string(), |at| format!("revoked {at}"));

        writeln!(
            out,
            "{}  created {}  last used {last_used}  {state}",
            token.uuid, token.created_at
        )?;
    }

    Ok(())
}
