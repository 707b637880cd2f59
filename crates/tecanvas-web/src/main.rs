use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tecanvas_application::ConnectionUseCase;
use tecanvas_core::SelectionState;
use tecanvas_infrastructure::{ApiRevision, BackendConfig, HttpBackendClient};
use tecanvas_web::{AppState, router};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "te-canvas-front")]
#[command(about = "Web front for connecting TimeEdit groups to Canvas courses", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Backend base URL (defaults to TE_CANVAS_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Backend API revision: current or legacy (defaults to TE_CANVAS_API_REVISION)
    #[arg(long)]
    api_revision: Option<ApiRevision>,

    /// Number of TE groups to list (defaults to TE_CANVAS_FETCH_LIMIT, then 100)
    #[arg(long)]
    fetch_limit: Option<u32>,

    /// Timeout in seconds for each backend request. No timeout when unset.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Cli {
    /// Environment first, then command-line flags on top.
    fn backend_config(&self) -> Result<BackendConfig> {
        let mut config = match &self.backend_url {
            Some(url) => BackendConfig::new(url.clone()).with_env_overrides()?,
            None => BackendConfig::try_from_env()?,
        };
        if let Some(revision) = self.api_revision {
            config = config.with_revision(revision);
        }
        if let Some(limit) = self.fetch_limit {
            config = config.with_fetch_limit(limit);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.backend_config()?;
    tracing::info!(
        "[Bootstrap] Backend: {} (API revision: {}, fetch limit: {})",
        config.base_url(),
        config.revision,
        config.fetch_limit
    );

    let client = Arc::new(HttpBackendClient::new(config));
    let usecase = ConnectionUseCase::new(client, SelectionState::new());
    let state = AppState::new(usecase).context("Failed to load page template")?;

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("Failed to bind {}", cli.listen))?;
    tracing::info!("[Bootstrap] Listening on {}", cli.listen);

    axum::serve(listener, router(state))
        .await
        .context("Server stopped")?;
    Ok(())
}
