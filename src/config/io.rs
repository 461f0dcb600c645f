use super::models::{AppConfig, MotionPreference};
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const MAX_CONTACT_TIMEOUT_SECS: f32 = 300.0;

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(|tables| sanitize(tables.into()))
}

pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// The `[accessibility]` setting currently on disk, if the file is readable.
pub fn read_motion_preference(path: &Path) -> Option<MotionPreference> {
    let contents = fs::read_to_string(path).ok()?;
    match parse_config(&contents) {
        Ok(config) => Some(config.reduced_motion),
        Err(err) => {
            debug!(path = %path.display(), "Skipping motion re-read: {err}");
            None
        }
    }
}

fn sanitize(mut config: AppConfig) -> AppConfig {
    let defaults = AppConfig::default();
    if !config.window_width.is_finite() || config.window_width < 320.0 {
        warn!(width = config.window_width, "Ignoring unusable window width");
        config.window_width = defaults.window_width;
    }
    if !config.window_height.is_finite() || config.window_height < 240.0 {
        warn!(height = config.window_height, "Ignoring unusable window height");
        config.window_height = defaults.window_height;
    }
    if !config.contact_timeout_secs.is_finite() || config.contact_timeout_secs <= 0.0 {
        config.contact_timeout_secs = defaults.contact_timeout_secs;
    } else if config.contact_timeout_secs > MAX_CONTACT_TIMEOUT_SECS {
        warn!(
            timeout = config.contact_timeout_secs,
            "Clamping contact timeout to {MAX_CONTACT_TIMEOUT_SECS}s"
        );
        config.contact_timeout_secs = MAX_CONTACT_TIMEOUT_SECS;
    }
    if config.contact_endpoint.trim().is_empty() {
        config.contact_endpoint = defaults.contact_endpoint;
    }
    config
}
