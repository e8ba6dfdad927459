//! Scoring vocabulary shared by the evaluator, the leaderboard and the aggregator.

use std::fmt;

/// Final classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// `score >= 4` is strong, `score >= 2` is medium, anything lower is weak.
    pub fn from_score(score: i64) -> Self {
        if score >= 4 {
            Strength::Strong
        } else if score >= 2 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Character classes contributing to the entropy pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharsetClass {
    pub const ALL: [CharsetClass; 4] = [
        CharsetClass::Lower,
        CharsetClass::Upper,
        CharsetClass::Digit,
        CharsetClass::Special,
    ];

    /// Size of the character space this class adds to the pool.
    pub fn pool_contribution(self) -> u32 {
        match self {
            CharsetClass::Lower => 26,
            CharsetClass::Upper => 26,
            CharsetClass::Digit => 10,
            CharsetClass::Special => 33,
        }
    }

    /// Anything outside `[A-Za-z0-9]` counts as special.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharsetClass::Lower => c.is_ascii_lowercase(),
            CharsetClass::Upper => c.is_ascii_uppercase(),
            CharsetClass::Digit => c.is_ascii_digit(),
            CharsetClass::Special => !c.is_ascii_alphanumeric(),
        }
    }

    pub fn present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.matches(c))
    }
}

/// Outcome of scoring a single password.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: i64,
    pub strength: Strength,
    pub comments: Vec<String>,
    pub entropy_bits: f64,
}
