//! Server settings.
//!
//! Each value is resolved with the priority chain
//!
//! 1. environment variable
//! 2. `[server]` table in `~/.config/player-stats/settings.toml`
//! 3. built-in default
//!
//! [`ServerSettings::resolve`] does the merging without touching the process
//! environment or the filesystem, so it can be exercised directly.

use std::path::PathBuf;
use std::time::Duration;

use player_stats_db::PoolConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_HOST: &str = "PLAYER_STATS_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DATABASE: &str = "PLAYER_STATS_DB";
pub const ENV_MAX_CONNECTIONS: &str = "PLAYER_STATS_MAX_CONNECTIONS";
pub const ENV_ACQUIRE_TIMEOUT_MS: &str = "PLAYER_STATS_ACQUIRE_TIMEOUT_MS";
pub const ENV_QUERY_TIMEOUT_MS: &str = "PLAYER_STATS_QUERY_TIMEOUT_MS";
pub const ENV_SHUTDOWN_DRAIN_MS: &str = "PLAYER_STATS_SHUTDOWN_DRAIN_MS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Resolved settings for the HTTP server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: usize,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
    pub shutdown_drain: Duration,
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SettingsFile {
    pub server: Option<ServerSection>,
}

/// `[server]` table. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub max_connections: Option<usize>,
    pub acquire_timeout_ms: Option<u64>,
    pub query_timeout_ms: Option<u64>,
    pub shutdown_drain_ms: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_path: default_database_path(),
            max_connections: 10,
            acquire_timeout: Duration::from_millis(5000),
            query_timeout: Duration::from_millis(10_000),
            shutdown_drain: Duration::from_millis(2000),
        }
    }
}

impl ServerSettings {
    /// Load settings from the real environment and settings file.
    pub fn load() -> Result<Self, SettingsError> {
        Self::resolve(|key| std::env::var(key).ok(), load_settings_file())
    }

    /// Merge `env` over `file` over the defaults.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        file: Option<ServerSection>,
    ) -> Result<Self, SettingsError> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let host = env(ENV_HOST).or(file.host).unwrap_or(defaults.host);
        let port = parse_env(&env, ENV_PORT)?
            .or(file.port)
            .unwrap_or(defaults.port);
        let database_path = env(ENV_DATABASE)
            .map(PathBuf::from)
            .or(file.database)
            .unwrap_or(defaults.database_path);
        let max_connections = parse_env(&env, ENV_MAX_CONNECTIONS)?
            .or(file.max_connections)
            .unwrap_or(defaults.max_connections);
        if max_connections == 0 {
            return Err(SettingsError::Invalid {
                key: ENV_MAX_CONNECTIONS,
                value: "0".to_string(),
            });
        }
        let acquire_timeout = parse_env(&env, ENV_ACQUIRE_TIMEOUT_MS)?
            .or(file.acquire_timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.acquire_timeout);
        let query_timeout = parse_env(&env, ENV_QUERY_TIMEOUT_MS)?
            .or(file.query_timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.query_timeout);
        let shutdown_drain = parse_env(&env, ENV_SHUTDOWN_DRAIN_MS)?
            .or(file.shutdown_drain_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.shutdown_drain);

        Ok(Self {
            host,
            port,
            database_path,
            max_connections,
            acquire_timeout,
            query_timeout,
            shutdown_drain,
        })
    }

    /// `host:port` for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            path: self.database_path.clone(),
            max_connections: self.max_connections,
            acquire_timeout: self.acquire_timeout,
            query_timeout: self.query_timeout,
        }
    }
}

/// Canonical path to the settings file: `~/.config/player-stats/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("player-stats").join("settings.toml")
}

/// Default database location: `<data dir>/player-stats/players.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("player-stats").join("players.db")
}

/// Parse the contents of a settings file.
pub fn parse_settings(contents: &str) -> Result<Option<ServerSection>, toml::de::Error> {
    let file: SettingsFile = toml::from_str(contents)?;
    Ok(file.server)
}

fn load_settings_file() -> Option<ServerSection> {
    let path = settings_path();
    let contents = std::fs::read_to_string(&path).ok()?;
    match parse_settings(&contents) {
        Ok(section) => section,
        Err(e) => {
            log::warn!("Ignoring malformed settings file {}: {e}", path.display());
            None
        }
    }
}

fn parse_env<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, SettingsError> {
    match env(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::Invalid { key, value }),
    }
}
