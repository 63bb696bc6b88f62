//! Complexity section - checks for uppercase, lowercase, digits, special chars.

use crate::analyzer::{has_digit, has_lower, has_special, has_upper};
use crate::types::ComplexityCriterion;
use secrecy::{ExposeSecret, SecretString};

/// Scores the number of character classes present. Three or more classes meet the criterion.
pub fn complexity_section(password: &SecretString) -> ComplexityCriterion {
    let pwd = password.expose_secret();
    let has_upper = has_upper(pwd);
    let has_lower = has_lower(pwd);
    let has_digit = has_digit(pwd);
    let has_special = has_special(pwd);

    let class_count = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as u8;

    let points = match class_count {
        0 => 0,
        1 => 5,
        2 => 15,
        3 => 25,
        _ => 30,
    };

    ComplexityCriterion {
        has_upper,
        has_lower,
        has_digit,
        has_special,
        class_count,
        meets: class_count >= 3,
        points,
    }
}
