//! Character class and pattern predicates.
//!
//! All functions are pure and run in linear time. Sequence and repetition
//! detectors look at fixed windows of three characters; longer runs are
//! not scored more severely.

/// Characters counted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const WINDOW: usize = 3;

pub fn has_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

pub fn has_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase)
}

pub fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(s: &str) -> bool {
    s.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// True if three consecutive digits step by one, up or down ("123", "321").
pub fn detect_numeric_sequence(s: &str) -> bool {
    let digits: Vec<Option<u32>> = s.chars().map(|c| c.to_digit(10)).collect();
    digits.windows(WINDOW).any(|w| match (w[0], w[1], w[2]) {
        (Some(a), Some(b), Some(c)) => is_step_run(a, b, c),
        _ => false,
    })
}

/// True if three consecutive letters are adjacent in code point order,
/// ignoring case ("abc", "CBA", "xYz").
pub fn detect_alphabetic_sequence(s: &str) -> bool {
    let lowered: Vec<char> = s.to_lowercase().chars().collect();
    lowered.windows(WINDOW).any(|w| {
        w.iter().all(|c| c.is_alphabetic()) && is_step_run(w[0] as u32, w[1] as u32, w[2] as u32)
    })
}

/// True if three consecutive characters are identical ("aaa", "!!!").
pub fn detect_repetition(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(WINDOW).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn is_step_run(a: u32, b: u32, c: u32) -> bool {
    let ascending = b.checked_sub(a) == Some(1) && c.checked_sub(b) == Some(1);
    let descending = a.checked_sub(b) == Some(1) && b.checked_sub(c) == Some(1);
    ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert!(has_upper("abcD"));
        assert!(!has_upper("abcd1!"));
        assert!(has_lower("ABCd"));
        assert!(!has_lower("ABC1!"));
        assert!(has_digit("abc7"));
        assert!(!has_digit("abc!"));
        assert!(has_special("abc?"));
        assert!(!has_special("abc1"));
    }

    #[test]
    fn test_special_set_is_fixed() {
        for c in SPECIAL_CHARS.chars() {
            assert!(has_special(&c.to_string()), "{c} should be special");
        }
        assert!(!has_special(" "));
        assert!(!has_special("~"));
        assert!(!has_special("€"));
    }

    #[test]
    fn test_numeric_sequence() {
        assert!(detect_numeric_sequence("123"));
        assert!(detect_numeric_sequence("pass321word"));
        assert!(detect_numeric_sequence("x789"));
        assert!(!detect_numeric_sequence("135"));
        assert!(!detect_numeric_sequence("12a3"));
        assert!(!detect_numeric_sequence("901"));
    }

    #[test]
    fn test_alphabetic_sequence() {
        assert!(detect_alphabetic_sequence("xyz"));
        assert!(detect_alphabetic_sequence("CBA"));
        assert!(detect_alphabetic_sequence("aBc"));
        assert!(!detect_alphabetic_sequence("abd"));
        assert!(!detect_alphabetic_sequence("ab1c"));
        assert!(!detect_alphabetic_sequence("123"));
    }

    #[test]
    fn test_repetition() {
        assert!(detect_repetition("aaa"));
        assert!(detect_repetition("x!!!y"));
        assert!(!detect_repetition("aabba"));
    }

    #[test]
    fn test_combined_patterns() {
        let pwd = "abc123!!!x";
        assert!(detect_numeric_sequence(pwd));
        assert!(detect_alphabetic_sequence(pwd));
        assert!(detect_repetition(pwd));

        assert!(!detect_numeric_sequence("xyz"));
        assert!(detect_alphabetic_sequence("xyz"));
        assert!(!detect_repetition("xyz"));
    }

    #[test]
    fn test_short_inputs_never_match() {
        for s in ["", "a", "12", "aa"] {
            assert!(!detect_numeric_sequence(s));
            assert!(!detect_alphabetic_sequence(s));
            assert!(!detect_repetition(s));
        }
    }
}
