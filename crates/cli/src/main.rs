mod commands;
mod context;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use talentbook_domain::CommitMode;

use crate::commands::edit::{EditArgs, OnConflict};
use crate::commands::next_event::Scope;

#[derive(Parser)]
#[command(name = "talentbook")]
#[command(about = "Commit weekend-matrix imports and edit calendar events safely")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to environment, then talentbook.{json,toml})
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    credentials: Credentials,

    #[command(subcommand)]
    command: Commands,
}

/// How to obtain a session for commands that talk to the backend
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Access token of an existing session
    #[arg(long, env = "TALENTBOOK_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Email to sign in with
    #[arg(long, env = "TALENTBOOK_EMAIL", global = true)]
    pub email: Option<String>,

    /// Password to sign in with
    #[arg(long, env = "TALENTBOOK_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a talent/year batch of events to the weekend-matrix commit function
    Commit {
        /// Talent the events belong to
        #[arg(long)]
        talent: String,

        /// Calendar year the batch covers
        #[arg(long)]
        year: i32,

        /// `merge` keeps unlisted events, `replace` removes them
        #[arg(long, default_value = "merge")]
        mode: CommitMode,

        /// JSON file holding an array of calendar events
        #[arg(long)]
        file: PathBuf,
    },
    /// Show the next upcoming event
    NextEvent {
        #[arg(long, value_enum, default_value = "business")]
        scope: Scope,
    },
    /// Compare two `updated_at` timestamps the way a guarded save does
    Check {
        /// Timestamp captured when the edit started (RFC 3339)
        #[arg(long)]
        original: Option<String>,

        /// Timestamp currently stored (RFC 3339)
        #[arg(long)]
        current: Option<String>,
    },
    /// Edit a calendar event, refusing to overwrite newer changes
    Edit {
        #[command(flatten)]
        args: EditArgs,

        /// What to do when the event changed since `--since`
        #[arg(long, value_enum, default_value = "abort")]
        on_conflict: OnConflict,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init_logging(cli.json);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    match cli.command {
        Commands::Check { original, current } => {
            let config = context::load_optional_config(cli.config.as_deref())?;
            commands::check::run(original.as_deref(), current.as_deref(), config.as_ref())
        }
        Commands::Commit { talent, year, mode, file } => {
            let ctx = context::AppContext::connect(cli.config.as_deref(), &cli.credentials).await?;
            commands::commit::run(&ctx, talent, year, mode, &file).await
        }
        Commands::NextEvent { scope } => {
            let ctx = context::AppContext::connect(cli.config.as_deref(), &cli.credentials).await?;
            commands::next_event::run(&ctx, scope).await
        }
        Commands::Edit { args, on_conflict } => {
            let ctx = context::AppContext::connect(cli.config.as_deref(), &cli.credentials).await?;
            commands::edit::run(&ctx, args, on_conflict).await
        }
    }
}
