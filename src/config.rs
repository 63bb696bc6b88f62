//! Checker configuration
//!
//! Defaults can be overridden from the environment:
//!
//! - `PWD_AUDIT_COMMON_PATH`: common password list
//!   (default: `./resources/passwords_common.txt`)
//! - `PWD_AUDIT_API_URL`: range API base URL
//! - `PWD_AUDIT_TIMEOUT_SECS`: breach lookup timeout in seconds (default: 5)

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::breach::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

pub const COMMON_PATH_ENV: &str = "PWD_AUDIT_COMMON_PATH";
pub const API_URL_ENV: &str = "PWD_AUDIT_API_URL";
pub const TIMEOUT_ENV: &str = "PWD_AUDIT_TIMEOUT_SECS";

pub const DEFAULT_COMMON_PATH: &str = "./resources/passwords_common.txt";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_AUDIT_TIMEOUT_SECS value {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub common_list_path: PathBuf,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            common_list_path: PathBuf::from(DEFAULT_COMMON_PATH),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CheckerConfig {
    /// Defaults overridden by any environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(COMMON_PATH_ENV) {
            config.common_list_path = PathBuf::from(path);
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }
}

/// Parses a whole number of seconds greater than zero.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(COMMON_PATH_ENV);
        remove_env(API_URL_ENV);
        remove_env(TIMEOUT_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = CheckerConfig::from_env().unwrap();
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.common_list_path, PathBuf::from("./resources/passwords_common.txt"));
        assert_eq!(config.api_url, "https://api.pwnedpasswords.com/range/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(COMMON_PATH_ENV, "/etc/myapp/common.txt");
        set_env(API_URL_ENV, "http://localhost:8080/range");
        set_env(TIMEOUT_ENV, "12");

        let config = CheckerConfig::from_env().unwrap();
        assert_eq!(config.common_list_path, PathBuf::from("/etc/myapp/common.txt"));
        assert_eq!(config.api_url, "http://localhost:8080/range");
        assert_eq!(config.timeout, Duration::from_secs(12));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        set_env(TIMEOUT_ENV, "soon");

        let result = CheckerConfig::from_env();
        assert_eq!(result, Err(ConfigError::InvalidTimeout("soon".to_string())));

        clear_env();
    }

    #[test]
    fn test_parse_timeout_rejects_zero() {
        assert!(parse_timeout("0").is_err());
        assert_eq!(parse_timeout(" 3 "), Ok(Duration::from_secs(3)));
    }
}
