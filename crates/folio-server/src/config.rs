//! Server configuration loaded from `conf/server.toml`.
//!
//! Every table is optional; missing or invalid entries fall back to defaults
//! so the service can still start.

use crate::rate_limit::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub rate_limit_max: usize,
    pub rate_limit_window: Duration,
    pub delivery_delay: Duration,
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ConfigTables::default().into()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigTables {
    #[serde(default)]
    server: ListenTable,
    #[serde(default)]
    contact: ContactTable,
    #[serde(default)]
    logging: LoggingTable,
}

#[derive(Debug, Clone, Deserialize)]
struct ListenTable {
    #[serde(default = "default_bind")]
    bind: IpAddr,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ListenTable {
    fn default() -> Self {
        ListenTable {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContactTable {
    #[serde(default = "default_rate_limit_max")]
    rate_limit_max: usize,
    #[serde(default = "default_rate_limit_window_secs")]
    rate_limit_window_secs: u64,
    #[serde(default = "default_delivery_delay_ms")]
    delivery_delay_ms: u64,
}

impl Default for ContactTable {
    fn default() -> Self {
        ContactTable {
            rate_limit_max: default_rate_limit_max(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            delivery_delay_ms: default_delivery_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingTable {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for LoggingTable {
    fn default() -> Self {
        LoggingTable {
            log_level: default_log_level(),
        }
    }
}

impl From<ConfigTables> for ServerConfig {
    fn from(tables: ConfigTables) -> Self {
        ServerConfig {
            bind: tables.server.bind,
            port: tables.server.port,
            rate_limit_max: tables.contact.rate_limit_max.max(1),
            rate_limit_window: Duration::from_secs(tables.contact.rate_limit_window_secs),
            delivery_delay: Duration::from_millis(tables.contact.delivery_delay_ms),
            log_level: tables.logging.log_level,
        }
    }
}

fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    8787
}

fn default_rate_limit_max() -> usize {
    DEFAULT_MAX_REQUESTS
}

fn default_rate_limit_window_secs() -> u64 {
    DEFAULT_WINDOW.as_secs()
}

fn default_delivery_delay_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn parse_config(contents: &str) -> Result<ServerConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(ServerConfig::from)
}

pub fn load_config(path: &Path) -> ServerConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded server config");
            data
        }
        Err(err) => {
            warn!(path = %path.display(), "Falling back to default server config: {err}");
            return ServerConfig::default();
        }
    };
    match parse_config(&contents) {
        Ok(config) => {
            debug!(?config, "Parsed server configuration");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid server config TOML: {err}");
            ServerConfig::default()
        }
    }
}
