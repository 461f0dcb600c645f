//! Entry point for the comic folio desktop shell.
//!
//! - Parse the optional start path (`/`, `/<chapter>`).
//! - Load `conf/config.toml` and the cached preferences.
//! - Launch the GUI on the requested chapter.

mod app;
mod cache;
mod config;
mod contact;
mod content;
mod motion;
mod sound;
mod theme;

use crate::app::run_app;
use crate::cache::{load_preferences, preferences_path};
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use folio_core::{ChapterIndex, Route, resolve};
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns and clears the pending Ctrl+C request.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let start = parse_args()?;
    let config_path = PathBuf::from(CONFIG_PATH);
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        chapter = start.get(),
        level = %config.log_level,
        reduced_motion = %config.reduced_motion,
        endpoint = %config.contact_endpoint,
        "Starting comic folio"
    );

    if let Err(err) = ctrlc::set_handler(|| SIGINT_REQUESTED.store(true, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }

    let prefs_path = preferences_path();
    let stored = load_preferences(&prefs_path);
    run_app(config, config_path, start, stored, prefs_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<ChapterIndex> {
    let Some(path) = env::args().nth(1) else {
        return Ok(ChapterIndex::FIRST);
    };
    match resolve(&path) {
        Route::Redirect(index) => {
            info!(from = %path, to = index.get(), "Redirecting to the cover");
            Ok(index)
        }
        Route::Chapter(index) => Ok(index),
        Route::NotFound => Err(anyhow!(
            "Not found: {path} (usage: comic-folio [/<chapter 0-7>])"
        )),
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG set; keeping environment log filter");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
