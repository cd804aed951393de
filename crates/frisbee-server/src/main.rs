//! The `frisbee` binary, serving the Ultimate Frisbee registry.
//!
//! Reads `frisbee.toml` (or the path given with `--config`) plus `UF_API_*`
//! environment variables, opens the SQLite store, and runs one of:
//!
//! ```text
//! frisbee serve     # HTTP API (default)
//! frisbee migrate   # apply the schema and exit
//! frisbee seed      # insert sample teams, people and memberships
//! ```

mod seed;
mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use frisbee_api::AppState;
use frisbee_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Ultimate Frisbee registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "frisbee.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
  /// Serve the HTTP API.
  Serve,
  /// Create or upgrade the database schema.
  Migrate,
  /// Insert sample data, skipping records that already exist.
  Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Load configuration.
  let server_cfg = ServerConfig::load(&cli.config).with_context(|| {
    format!("failed to load configuration from {:?}", cli.config)
  })?;

  // Initialise tracing.
  let level: LevelFilter = server_cfg
    .log
    .level
    .parse()
    .with_context(|| format!("invalid log level {:?}", server_cfg.log.level))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy(),
    )
    .init();

  // Open SQLite store; this also applies the schema.
  let store_path = &server_cfg.database.path;
  let store = SqliteStore::open(store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(store, &server_cfg).await,
    Command::Migrate => {
      let version = store
        .schema_version()
        .await
        .context("failed to read schema version")?;
      tracing::info!(version, path = ?store_path, "schema is up to date");
      Ok(())
    }
    Command::Seed => {
      let report = seed::run(&store).await.context("seeding failed")?;
      tracing::info!(
        created = report.created,
        skipped = report.skipped,
        "seeding finished"
      );
      Ok(())
    }
  }
}

async fn serve(
  store: SqliteStore,
  server_cfg: &ServerConfig,
) -> anyhow::Result<()> {
  let span = tracing::info_span!("api", version = env!("CARGO_PKG_VERSION"));
  let state = AppState::new(Arc::new(store), span);
  let app = frisbee_api::router(state, server_cfg.request_timeout());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
