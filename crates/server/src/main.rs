// crates/server/src/main.rs
//! FOKUS server binary.
//!
//! `fokus` (or `fokus serve`) opens the database and serves the API.
//! `fokus token --user-id <id>` prints a development bearer token.

use anyhow::{Context, Result};
use clap::Parser;
use fokus_core::llm::create_provider;
use fokus_db::Database;
use fokus_server::config::DEFAULT_LOG_FILTER;
use fokus_server::{create_app, init_metrics, AppState, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Some(Command::Token {
        user_id,
        email,
        ttl_hours,
    }) = &cli.command
    {
        let token = cli
            .auth_keys()
            .mint(user_id, email.as_deref(), chrono::Duration::hours(*ttl_hours))?;
        println!("{token}");
        return Ok(());
    }

    init_metrics();

    let db = match &cli.db_path {
        Some(path) => Database::new(path).await,
        None => Database::open_default().await,
    }
    .context("failed to open database")?;

    let llm_config = cli.llm_config();
    if llm_config.api_key.is_none() {
        tracing::warn!("HF_API_KEY not set; the coach will report that it is not configured");
    }
    let llm = create_provider(&llm_config)?;
    tracing::info!(provider = llm.name(), model = llm.model(), "Coach provider ready");

    let state = AppState::new(db, llm, cli.auth_keys());
    let app = create_app(state, cli.static_dir.clone());

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?;
    tracing::info!(addr = %listener.local_addr()?, "FOKUS server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
