//! Compatibility scoring
//!
//! The score is a pure function of the two names: concatenate, lower-case,
//! drop whitespace, sum the code points, and fold the sum into `[40, 100]`.
//! Summation is commutative, so swapping the names never changes the score.

use serde::{Deserialize, Serialize};

/// Number of distinct score values (`MAX - MIN + 1`)
const SPAN: u64 = 61;

/// Compatibility score between two names (Value Object)
///
/// Always within [`CompatibilityScore::MIN`]..=[`CompatibilityScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityScore(u8);

impl CompatibilityScore {
    pub const MIN: u8 = 40;
    pub const MAX: u8 = 100;

    /// Create a score, returning None if outside `[MIN, MAX]`
    pub fn try_new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Get the raw percentage value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the display band for this score
    pub fn tier(self) -> ScoreTier {
        match self.0 {
            0..60 => ScoreTier::Warm,
            60..85 => ScoreTier::Hot,
            _ => ScoreTier::Blazing,
        }
    }
}

impl std::fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Display band of a score, used to pick the gauge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Below 60
    Warm,
    /// 60 to 84
    Hot,
    /// 85 and above
    Blazing,
}

/// Compute the compatibility score of two names.
///
/// Total for any input, including empty and non-ASCII strings. Callers are
/// expected to reject empty names before getting here.
pub fn score(name1: &str, name2: &str) -> CompatibilityScore {
    let sum: u64 = name1
        .chars()
        .chain(name2.chars())
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .map(|c| u64::from(u32::from(c)))
        .sum();

    // (sum % 61) < 61, so the result fits in u8 and stays within [40, 100]
    CompatibilityScore((sum % SPAN) as u8 + CompatibilityScore::MIN)
}
