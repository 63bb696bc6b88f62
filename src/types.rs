//! Report types produced by a validation call.

use std::fmt;

/// Points awarded for not appearing in the common-password list.
pub const NOT_COMMON_BONUS: u32 = 15;

/// Points awarded when the breach lookup did not report a match.
pub const NOT_BREACHED_BONUS: u32 = 10;

/// Length criterion: character count and the points it earns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthCriterion {
    pub value: usize,
    pub meets: bool,
    pub points: u32,
}

/// Character class criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityCriterion {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Number of classes present, 0 to 4.
    pub class_count: u8,
    pub meets: bool,
    pub points: u32,
}

/// Sequence and repetition criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCriterion {
    pub numeric_sequence: bool,
    pub alphabetic_sequence: bool,
    pub repetition: bool,
    pub meets: bool,
    pub points: u32,
}

impl PatternCriterion {
    /// Number of distinct pattern kinds detected.
    pub fn detected(&self) -> usize {
        [self.numeric_sequence, self.alphabetic_sequence, self.repetition]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Outcome of the breach lookup.
///
/// `error` is set only when the lookup could not complete. In that case
/// `breached` is `false` but means "unknown", not "confirmed clean".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreachResult {
    pub breached: bool,
    pub times_seen: u64,
    pub error: Option<String>,
}

impl BreachResult {
    /// Lookup completed; `times_seen` of zero means no match.
    pub fn found(times_seen: u64) -> Self {
        Self {
            breached: times_seen > 0,
            times_seen,
            error: None,
        }
    }

    /// Lookup could not complete.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            breached: false,
            times_seen: 0,
            error: Some(error.into()),
        }
    }
}

/// All criteria evaluated for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub length: LengthCriterion,
    pub complexity: ComplexityCriterion,
    pub patterns: PatternCriterion,
    pub common: bool,
    pub breach: BreachResult,
}

impl Criteria {
    /// Sum of criterion points plus the not-common and not-breached bonuses.
    pub fn score(&self) -> u32 {
        let mut score = self.length.points + self.complexity.points + self.patterns.points;
        if !self.common {
            score += NOT_COMMON_BONUS;
        }
        if !self.breach.breached {
            score += NOT_BREACHED_BONUS;
        }
        score
    }
}

/// Qualitative security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    VeryCompromised,
    Compromised,
    VeryWeak,
    Weak,
    Acceptable,
    Strong,
    VeryStrong,
}

impl SecurityLevel {
    /// Breach count from which a breached password is "Very Compromised".
    pub const HEAVY_BREACH_THRESHOLD: u64 = 100;

    /// Classifies a report. Breach and common-list overrides win over the score.
    pub fn classify(score: u32, criteria: &Criteria) -> Self {
        if criteria.breach.breached {
            if criteria.breach.times_seen >= Self::HEAVY_BREACH_THRESHOLD {
                return SecurityLevel::VeryCompromised;
            }
            return SecurityLevel::Compromised;
        }
        if criteria.common {
            return SecurityLevel::VeryWeak;
        }
        Self::from_score(score)
    }

    /// Score bands, inclusive upper bounds.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=30 => SecurityLevel::VeryWeak,
            31..=50 => SecurityLevel::Weak,
            51..=70 => SecurityLevel::Acceptable,
            71..=85 => SecurityLevel::Strong,
            _ => SecurityLevel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::VeryCompromised => "Very Compromised",
            SecurityLevel::Compromised => "Compromised",
            SecurityLevel::VeryWeak => "Very Weak",
            SecurityLevel::Weak => "Weak",
            SecurityLevel::Acceptable => "Acceptable",
            SecurityLevel::Strong => "Strong",
            SecurityLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one validation call. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub score: u32,
    pub level: SecurityLevel,
    pub criteria: Criteria,
    pub suggestions: Vec<String>,
}
