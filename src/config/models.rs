use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub window_pos_x: Option<f32>,
    pub window_pos_y: Option<f32>,
    pub reduced_motion: MotionPreference,
    pub key_next: String,
    pub key_previous: String,
    pub key_first: String,
    pub key_last: String,
    pub key_toggle_sound: String,
    pub key_safe_quit: String,
    pub contact_endpoint: String,
    pub contact_timeout_secs: f32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            reduced_motion: MotionPreference::default(),
            key_next: crate::config::defaults::default_key_next(),
            key_previous: crate::config::defaults::default_key_previous(),
            key_first: crate::config::defaults::default_key_first(),
            key_last: crate::config::defaults::default_key_last(),
            key_toggle_sound: crate::config::defaults::default_key_toggle_sound(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
            contact_endpoint: crate::config::defaults::default_contact_endpoint(),
            contact_timeout_secs: crate::config::defaults::default_contact_timeout_secs(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Where the reduced-motion preference comes from.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MotionPreference {
    /// Follow the host probe.
    #[default]
    System,
    Reduce,
    Full,
}

impl std::fmt::Display for MotionPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MotionPreference::System => "system",
            MotionPreference::Reduce => "reduce",
            MotionPreference::Full => "full",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
