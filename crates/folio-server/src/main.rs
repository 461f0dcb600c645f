//! Contact and chapter-addressing service.

use anyhow::{Context, Result};
use folio_server::config::{ServerConfig, load_config};
use folio_server::{AppState, router};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = load_config_with_bootstrap_logging(Path::new("conf/server.toml"));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    runtime.block_on(serve(config))
}

/// Logging has to exist before the config is read, but its level comes from
/// the config. `RUST_LOG` wins over both.
fn load_config_with_bootstrap_logging(path: &Path) -> ServerConfig {
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt().with_env_filter(EnvFilter::new("info")).finish(),
        || load_config(path),
    );
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
    config
}

async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    spawn_limiter_pruning(&state, config.rate_limit_window);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        %addr,
        rate_limit_max = config.rate_limit_max,
        rate_limit_window_secs = config.rate_limit_window.as_secs(),
        delivery_delay_ms = config.delivery_delay.as_millis() as u64,
        "Serving comic folio endpoints"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    info!("Server stopped");
    Ok(())
}

fn spawn_limiter_pruning(state: &AppState, window: std::time::Duration) {
    if window.is_zero() {
        return;
    }
    let limiter = state.limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(window);
        loop {
            interval.tick().await;
            let dropped = limiter.prune(Instant::now()).await;
            if dropped > 0 {
                debug!(dropped, "Pruned idle rate-limit entries");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C; shutting down");
}
