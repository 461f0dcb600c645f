use super::defaults;
use super::models::{AppConfig, LogLevel, MotionPreference};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    accessibility: AccessibilityConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    contact: ContactConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            reduced_motion: tables.accessibility.reduced_motion,
            key_next: tables.keys.next,
            key_previous: tables.keys.previous,
            key_first: tables.keys.first,
            key_last: tables.keys.last,
            key_toggle_sound: tables.keys.toggle_sound,
            key_safe_quit: tables.keys.safe_quit,
            contact_endpoint: tables.contact.endpoint,
            contact_timeout_secs: tables.contact.timeout_secs,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AccessibilityConfig {
    #[serde(default)]
    reduced_motion: MotionPreference,
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next")]
    next: String,
    #[serde(default = "defaults::default_key_previous")]
    previous: String,
    #[serde(default = "defaults::default_key_first")]
    first: String,
    #[serde(default = "defaults::default_key_last")]
    last: String,
    #[serde(default = "defaults::default_key_toggle_sound")]
    toggle_sound: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next: defaults::default_key_next(),
            previous: defaults::default_key_previous(),
            first: defaults::default_key_first(),
            last: defaults::default_key_last(),
            toggle_sound: defaults::default_key_toggle_sound(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContactConfig {
    #[serde(default = "defaults::default_contact_endpoint")]
    endpoint: String,
    #[serde(default = "defaults::default_contact_timeout_secs")]
    timeout_secs: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            endpoint: defaults::default_contact_endpoint(),
            timeout_secs: defaults::default_contact_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
