//! Credential input validation, applied before a password reaches the validator.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Password cannot be empty")]
    Empty,
}

/// Wraps raw input as a secret, rejecting empty and whitespace-only strings.
pub fn candidate(raw: String) -> Result<SecretString, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(SecretString::new(raw.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_candidate_rejects_empty() {
        assert_eq!(candidate(String::new()).err(), Some(InputError::Empty));
        assert_eq!(candidate(" \t\n".to_string()).err(), Some(InputError::Empty));
    }

    #[test]
    fn test_candidate_keeps_surrounding_spaces() {
        let secret = candidate(" pass word ".to_string()).unwrap();
        assert_eq!(secret.expose_secret(), " pass word ");
    }
}
