//! Password analysis value types: score, strength tier and the analysis result.

use serde::Serialize;
use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 4;

/// Numeric password score, always in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Strength tier, ordered from weakest to strongest.
///
/// Serialized with the snake_case labels consumers expect
/// (`invalid`, `very_weak`, ... `very_strong`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// Over-length input; never produced by the score table.
    Invalid,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Fixed score table: `0:very_weak 1:weak 2:medium 3:strong 4:very_strong`.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Medium,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Invalid => "invalid",
            PasswordStrength::VeryWeak => "very_weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very_strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a password analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAnalysisResult {
    /// The password as given, or a truncated prefix for over-length input.
    pub password_echo: String,
    pub strength: PasswordStrength,
    pub score: PasswordScore,
    /// Improvement hints in the order the rules were checked.
    pub suggestions: Vec<String>,
}

impl PasswordAnalysisResult {
    pub fn is_invalid(&self) -> bool {
        self.strength == PasswordStrength::Invalid
    }
}
