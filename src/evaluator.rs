//! Password validator - runs every criterion and assembles the report.

use secrecy::SecretString;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachError};
use crate::common::CommonPasswords;
use crate::config::CheckerConfig;
use crate::sections::{common_section, complexity_section, length_section, pattern_section};
use crate::types::{BreachResult, Criteria, SecurityLevel, ValidationReport};

/// Runs the criteria for one password at a time.
///
/// Holds the shared, read-only common password list and the breach
/// checker. Each call to [`Validator::validate`] builds an independent
/// report; nothing is shared between calls.
pub struct Validator {
    common: Arc<CommonPasswords>,
    breach: BreachChecker,
}

impl Validator {
    pub fn new(common: Arc<CommonPasswords>, breach: BreachChecker) -> Self {
        Self { common, breach }
    }

    /// Loads the common list (empty if unavailable) and connects the breach
    /// checker to the configured range API.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, BreachError> {
        let common = CommonPasswords::load_or_empty(&config.common_list_path);
        let breach = BreachChecker::http(config.api_url.clone(), config.timeout)?;
        Ok(Self::new(Arc::new(common), breach))
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Evaluates a password. Always returns a complete report.
    pub fn validate(&self, password: &SecretString) -> ValidationReport {
        let criteria = Criteria {
            length: length_section(password),
            complexity: complexity_section(password),
            patterns: pattern_section(password),
            common: common_section(password, &self.common),
            breach: self.breach_section(password),
        };

        let score = criteria.score();
        let level = SecurityLevel::classify(score, &criteria);
        let suggestions = build_suggestions(&criteria);

        #[cfg(feature = "tracing")]
        tracing::debug!("Password validated: score {} level {}", score, level);

        ValidationReport {
            score,
            level,
            criteria,
            suggestions,
        }
    }

    // A failing lookup must not take the other criteria down with it.
    fn breach_section(&self, password: &SecretString) -> BreachResult {
        catch_unwind(AssertUnwindSafe(|| self.breach.check(password))).unwrap_or_else(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "internal error".to_string());

            #[cfg(feature = "tracing")]
            tracing::error!("Breach check aborted: {}", reason);

            BreachResult::failed(format!("could not verify breaches: {reason}"))
        })
    }
}

/// Builds the ordered suggestion list for a set of criteria.
///
/// Order: breach warning, common warning, length, missing classes
/// (upper, lower, digit, special), patterns (numeric, alphabetic,
/// repetition), a confirmation if nothing was said, and finally the
/// breach lookup error note if any.
pub fn build_suggestions(criteria: &Criteria) -> Vec<String> {
    let mut suggestions = Vec::new();

    if criteria.breach.breached {
        suggestions.push(format!(
            "CRITICAL: This password has been found in {} data breaches. \
             Never use it and change it immediately.",
            criteria.breach.times_seen
        ));
    }

    if criteria.common {
        suggestions.push(
            "This password is on the list of most common passwords. \
             It is extremely vulnerable to attacks."
                .to_string(),
        );
    }

    let length = criteria.length.value;
    if length < 8 {
        suggestions.push("Your password is too short. Use at least 8 characters.".to_string());
    } else if length < 12 {
        suggestions.push("Consider using at least 12 characters for better security.".to_string());
    }

    let complexity = &criteria.complexity;
    let missing = [
        (complexity.has_upper, "Add UPPERCASE letters to increase complexity."),
        (complexity.has_lower, "Add lowercase letters to increase complexity."),
        (complexity.has_digit, "Add numbers to increase complexity."),
        (complexity.has_special, "Add special characters (!@#$%^&*) for better security."),
    ];
    suggestions.extend(
        missing
            .into_iter()
            .filter(|(present, _)| !present)
            .map(|(_, msg)| msg.to_string()),
    );

    let patterns = &criteria.patterns;
    let detected = [
        (patterns.numeric_sequence, "Avoid numeric sequences such as 123 or 456."),
        (patterns.alphabetic_sequence, "Avoid alphabetic sequences such as abc or xyz."),
        (patterns.repetition, "Avoid repeating the same character several times in a row."),
    ];
    suggestions.extend(
        detected
            .into_iter()
            .filter(|(found, _)| *found)
            .map(|(_, msg)| msg.to_string()),
    );

    if suggestions.is_empty() {
        suggestions.push("Excellent! Your password meets all security criteria.".to_string());
    }

    if let Some(error) = &criteria.breach.error {
        suggestions.push(format!("Note: {error}"));
    }

    suggestions
}

/// Validates on the blocking pool and sends the report through `tx`.
///
/// Nothing is sent if `token` is cancelled before the validation finishes.
#[cfg(feature = "async")]
pub async fn validate_tx(
    validator: Arc<Validator>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let task = tokio::task::spawn_blocking(move || validator.validate(&password));

    let report = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("Password validation cancelled");
            return;
        }
        joined = task => match joined {
            Ok(report) => report,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password validation task failed: {}", _e);
                return;
            }
        },
    };

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation report: {}", _e);
    }
}
