// src/config.rs
//
// Database configuration
//
// PRINCIPLES:
// - Read once at process start, then passed by value
// - Every knob has a default; only malformed values are errors
// - A `.env` file is optional
// - Parsing is separated from the environment so it can be tested

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::error::{AppError, AppResult};

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_POOL_SIZE: &str = "DB_POOL_SIZE";
pub const ENV_MIN_IDLE: &str = "DB_MIN_IDLE";
pub const ENV_CONNECTION_TIMEOUT: &str = "DB_CONNECTION_TIMEOUT";
pub const ENV_IDLE_TIMEOUT: &str = "DB_IDLE_TIMEOUT";
pub const ENV_MAX_LIFETIME: &str = "DB_MAX_LIFETIME";
pub const ENV_BUSY_TIMEOUT: &str = "DB_BUSY_TIMEOUT";

const DEFAULT_POOL_SIZE: u32 = 5;
const DEFAULT_MIN_IDLE: u32 = 1;
const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_IDLE_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_MAX_LIFETIME_MS: u64 = 10 * 60_000;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

const APP_DIR_NAME: &str = "cafe-store";
const DATABASE_FILE_NAME: &str = "cafe.db";

/// Connection and pool settings for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Upper bound on pooled connections
    pub pool_size: u32,

    /// Connections kept open while idle
    pub min_idle: u32,

    /// How long a checkout waits before failing with a pool error
    pub connection_timeout: Duration,

    pub idle_timeout: Duration,
    pub max_lifetime: Duration,

    /// How long a statement waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Default settings for a database at `path`
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            pool_size: DEFAULT_POOL_SIZE,
            min_idle: DEFAULT_MIN_IDLE,
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            max_lifetime: Duration::from_millis(DEFAULT_MAX_LIFETIME_MS),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Loads `.env` (if present) and reads settings from the process environment
    pub fn from_env() -> AppResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("event=config_load source=dotenv path={}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match non_blank(lookup(ENV_DATABASE_URL)) {
            Some(url) => parse_database_url(&url)?,
            None => default_database_path()?,
        };

        let config = Self {
            database_path,
            pool_size: parse_or(&lookup, ENV_POOL_SIZE, DEFAULT_POOL_SIZE)?,
            min_idle: parse_or(&lookup, ENV_MIN_IDLE, DEFAULT_MIN_IDLE)?,
            connection_timeout: parse_millis_or(
                &lookup,
                ENV_CONNECTION_TIMEOUT,
                DEFAULT_CONNECTION_TIMEOUT_MS,
            )?,
            idle_timeout: parse_millis_or(&lookup, ENV_IDLE_TIMEOUT, DEFAULT_IDLE_TIMEOUT_MS)?,
            max_lifetime: parse_millis_or(&lookup, ENV_MAX_LIFETIME, DEFAULT_MAX_LIFETIME_MS)?,
            busy_timeout: parse_millis_or(&lookup, ENV_BUSY_TIMEOUT, DEFAULT_BUSY_TIMEOUT_MS)?,
        };
        config.validate()?;

        debug!(
            "event=config_parsed database={} pool_size={} min_idle={}",
            config.database_path.display(),
            config.pool_size,
            config.min_idle
        );
        Ok(config)
    }

    /// Rejects settings the pool cannot be built from
    pub fn validate(&self) -> AppResult<()> {
        if self.pool_size == 0 {
            return Err(AppError::config(format!("{} must be at least 1", ENV_POOL_SIZE)));
        }
        if self.min_idle > self.pool_size {
            return Err(AppError::config(format!(
                "{} ({}) cannot exceed {} ({})",
                ENV_MIN_IDLE, self.min_idle, ENV_POOL_SIZE, self.pool_size
            )));
        }
        if self.connection_timeout.is_zero() {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                ENV_CONNECTION_TIMEOUT
            )));
        }
        Ok(())
    }
}

/// Turns a `DATABASE_URL` into a database file path.
///
/// Accepts `sqlite://path`, `sqlite:path` and bare paths. Other schemes
/// (`postgres://...`) are rejected rather than silently treated as files.
pub fn parse_database_url(url: &str) -> AppResult<PathBuf> {
    let trimmed = url.trim();

    let path = if let Some(rest) = trimmed.strip_prefix("sqlite://") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("sqlite:") {
        rest
    } else if let Some((scheme, _)) = trimmed.split_once("://") {
        return Err(AppError::config(format!(
            "Unsupported {} scheme '{}'",
            ENV_DATABASE_URL, scheme
        )));
    } else {
        trimmed
    };

    // Query parameters (`?mode=rwc`) carry no meaning for a file path
    let path = path.split_once('?').map_or(path, |(path, _)| path);

    if path.is_empty() {
        return Err(AppError::config(format!(
            "{} does not name a database file",
            ENV_DATABASE_URL
        )));
    }
    if path == ":memory:" {
        return Err(AppError::config(
            "In-memory databases cannot be shared across a connection pool",
        ));
    }

    Ok(Path::new(path).to_path_buf())
}

/// Database file in the platform data directory: {DATA_DIR}/cafe-store/cafe.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::config("Could not determine app data directory"))?;
    Ok(data_dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_blank(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {} '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}

fn parse_millis_or<F>(lookup: &F, key: &str, default_ms: u64) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, key, default_ms).map(Duration::from_millis)
}
