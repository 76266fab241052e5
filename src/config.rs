//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default file the book is persisted to.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Default minimum length of a `find` query.
pub const DEFAULT_FIND_MIN_LENGTH: usize = 3;

/// Default log filter when neither RUST_LOG nor LOG_LEVEL is set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Log filter from `LOG_LEVEL`, falling back to [`DEFAULT_LOG_LEVEL`].
///
/// Needs no other settings, so logging can start before the full
/// configuration is loaded and validated.
pub fn log_level_from_env() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the book is loaded from and saved to (default: address_book.json)
    pub book_path: PathBuf,

    /// Records per page when listing in parts (default: 2)
    pub page_size: usize,

    /// Shortest accepted `find` query (default: 3)
    pub find_min_length: usize,

    /// Log filter used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Persistence file (default: address_book.json)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 2)
    /// - `ADDRESS_BOOK_FIND_MIN_LENGTH`: Minimum find query length (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let find_min_length =
            Self::parse_env_usize("ADDRESS_BOOK_FIND_MIN_LENGTH", DEFAULT_FIND_MIN_LENGTH)?;

        let log_level = log_level_from_env();

        Ok(Config {
            book_path,
            page_size,
            find_min_length,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            find_min_length: DEFAULT_FIND_MIN_LENGTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
