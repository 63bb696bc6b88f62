//! Breach lookup over the k-anonymity range API.
//!
//! Only the first five hex characters of the SHA-1 digest leave the
//! process. The server answers with every suffix sharing that prefix and
//! the match is resolved locally.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use std::time::Duration;
use thiserror::Error;

use crate::types::BreachResult;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Number of hex characters sent to the range API.
pub const PREFIX_LEN: usize = 5;

/// Error text reported when the range API could not be reached.
pub const UNAVAILABLE_MESSAGE: &str = "could not connect to API";

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// Timeout, transport failure or non-2xx status. Not distinguished further.
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,
    #[error("malformed breach count {0:?}")]
    MalformedCount(String),
}

/// Remote range lookup. Returns the raw `SUFFIX:COUNT` body for a prefix.
pub trait RangeSource: Send + Sync {
    fn query_range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// Uppercase hex SHA-1 of the UTF-8 bytes of the password.
pub fn compute_digest(password: &str) -> String {
    format!("{:X}", Sha1::digest(password.as_bytes()))
}

/// Splits a digest into the prefix sent to the server and the suffix kept locally.
pub fn split_digest(digest: &str) -> (&str, &str) {
    digest.split_at(PREFIX_LEN.min(digest.len()))
}

/// Finds the count for `suffix` in a range response body.
///
/// Lines without a colon are skipped. Returns 0 when no line matches.
pub fn find_suffix_count(suffix: &str, body: &str) -> Result<u64, BreachError> {
    for line in body.lines() {
        let Some((line_suffix, count)) = line.split_once(':') else {
            continue;
        };
        if line_suffix.trim().eq_ignore_ascii_case(suffix) {
            let count = count.trim();
            return count
                .parse::<u64>()
                .map_err(|_| BreachError::MalformedCount(count.to_string()));
        }
    }
    Ok(0)
}

/// Range source backed by a blocking HTTP client with a hard timeout.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRangeSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BreachError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses a caller-built client; its timeout settings apply as-is.
    pub fn with_client(client: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

impl RangeSource for HttpRangeSource {
    fn query_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = self.url(prefix);

        #[cfg(feature = "tracing")]
        tracing::debug!("Querying breach range for prefix {}", prefix);

        self.client
            .get(&url)
            .header("Add-Padding", "true")
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach range request failed: {}", _e);
                BreachError::Unavailable
            })
    }
}

/// Orchestrates digest, range query and local suffix match.
pub struct BreachChecker {
    source: Box<dyn RangeSource>,
}

impl BreachChecker {
    pub fn new(source: impl RangeSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Checker against the public range API.
    pub fn http(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BreachError> {
        Ok(Self::new(HttpRangeSource::new(base_url, timeout)?))
    }

    /// Looks the password up. Never fails: lookup problems land in `BreachResult::error`.
    pub fn check(&self, password: &SecretString) -> BreachResult {
        match self.lookup(password.expose_secret()) {
            Ok(times_seen) => BreachResult::found(times_seen),
            Err(BreachError::Unavailable) => BreachResult::failed(UNAVAILABLE_MESSAGE),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach lookup failed: {}", e);
                BreachResult::failed(format!("unexpected error: {e}"))
            }
        }
    }

    fn lookup(&self, password: &str) -> Result<u64, BreachError> {
        let digest = compute_digest(password);
        let (prefix, suffix) = split_digest(&digest);
        let body = self.source.query_range(prefix)?;
        find_suffix_count(suffix, &body)
    }
}

/// In-memory range source answering every prefix with the same body.
#[cfg(test)]
pub(crate) struct FixedRange(pub Result<String, ()>);

#[cfg(test)]
impl RangeSource for FixedRange {
    fn query_range(&self, _prefix: &str) -> Result<String, BreachError> {
        self.0.clone().map_err(|_| BreachError::Unavailable)
    }
}
