//! Password strength auditing library
//!
//! Scores a password against length, character variety and pattern
//! criteria, checks it against a common password list, and looks it up in
//! a breach corpus through the k-anonymity range API (only a 5 character
//! SHA-1 prefix is ever sent).
//!
//! # Features
//!
//! - `async` (default): Enables channel-based validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-audit` binary
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_COMMON_PATH`: Custom path to the common password list
//!   (default: `./resources/passwords_common.txt`)
//! - `PWD_AUDIT_API_URL`: Range API base URL
//! - `PWD_AUDIT_TIMEOUT_SECS`: Breach lookup timeout (default: 5)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{CheckerConfig, Validator};
//! use secrecy::SecretString;
//!
//! // Build once at startup
//! let config = CheckerConfig::from_env().expect("Invalid configuration");
//! let validator = Validator::from_config(&config).expect("Failed to build HTTP client");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = validator.validate(&password);
//!
//! println!("Score: {}", report.score);
//! println!("Level: {}", report.level);
//! for suggestion in &report.suggestions {
//!     println!("{}", suggestion);
//! }
//! ```

pub mod analyzer;
pub mod breach;
mod common;
mod config;
mod evaluator;
mod input;
mod sections;
mod types;

// Public API
pub use breach::{BreachChecker, BreachError, HttpRangeSource, RangeSource};
pub use common::{CommonListError, CommonPasswords};
pub use config::{CheckerConfig, ConfigError};
pub use evaluator::{Validator, build_suggestions};
pub use input::{InputError, candidate};
pub use types::{
    BreachResult, ComplexityCriterion, Criteria, LengthCriterion, PatternCriterion, SecurityLevel,
    ValidationReport,
};

#[cfg(feature = "async")]
pub use evaluator::validate_tx;
