//! Length section - scores the password by character count.

use crate::types::LengthCriterion;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Scores length on a fixed step function.
///
/// | length | points |
/// |--------|--------|
/// | < 8    | 0 (not met) |
/// | 8-10   | 10     |
/// | 11-12  | 15     |
/// | 13-15  | 20     |
/// | > 15   | 25     |
pub fn length_section(password: &SecretString) -> LengthCriterion {
    let value = password.expose_secret().chars().count();
    let points = match value {
        0..MIN_LENGTH => 0,
        8..=10 => 10,
        11..=12 => 15,
        13..=15 => 20,
        _ => 25,
    };
    LengthCriterion {
        value,
        meets: value >= MIN_LENGTH,
        points,
    }
}
