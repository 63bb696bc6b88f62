//! Pattern analysis section - detects repetitive and sequential patterns.

use crate::analyzer::{detect_alphabetic_sequence, detect_numeric_sequence, detect_repetition};
use crate::types::PatternCriterion;
use secrecy::{ExposeSecret, SecretString};

/// Scores the password by how many pattern kinds it contains.
///
/// No pattern earns 20 points, one earns 10, two or more earn nothing.
pub fn pattern_section(password: &SecretString) -> PatternCriterion {
    let pwd = password.expose_secret();
    let mut criterion = PatternCriterion {
        numeric_sequence: detect_numeric_sequence(pwd),
        alphabetic_sequence: detect_alphabetic_sequence(pwd),
        repetition: detect_repetition(pwd),
        meets: false,
        points: 0,
    };

    let detected = criterion.detected();
    criterion.meets = detected == 0;
    criterion.points = match detected {
        0 => 20,
        1 => 10,
        _ => 0,
    };
    criterion
}
