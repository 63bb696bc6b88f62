//! Common section - checks if password is in the common password list.

use crate::common::CommonPasswords;
use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password is on the list (case-insensitive).
///
/// Earns no points itself; a `false` result gates the not-common bonus.
pub fn common_section(password: &SecretString, list: &CommonPasswords) -> bool {
    list.contains(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_common_section_common_password() {
        let list = CommonPasswords::parse("password\n123456\nqwerty\n");
        assert!(common_section(&secret("password"), &list));
        assert!(common_section(&secret("QWERTY"), &list));
    }

    #[test]
    fn test_common_section_strong_password() {
        let list = CommonPasswords::parse("password\n123456\nqwerty\n");
        assert!(!common_section(&secret("CorrectHorseBatteryStaple!123"), &list));
    }

    #[test]
    fn test_common_section_empty_list() {
        assert!(!common_section(&secret("password"), &CommonPasswords::empty()));
    }
}
