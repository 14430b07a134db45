//! A bounded 0..=100 score.

use crate::error::ScoreError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// An integer score in the inclusive range `0..=100`.
///
/// Values outside the range cannot be constructed, so any `Score` held by a
/// record or report already satisfies the range invariant. Deserialization
/// goes through the same check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Creates a score, rejecting anything above 100.
    pub fn new(value: u32) -> Result<Self, ScoreError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(ScoreError(value)),
        }
    }

    /// For compile-time constants. Fails const evaluation when out of range.
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= 100, "score out of range");
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The score as a percentage of the maximum, for progress bar widths.
    pub fn percent(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u32> for Score {
    type Error = ScoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Score::new(0).unwrap(), Score::ZERO);
        assert_eq!(Score::new(100).unwrap(), Score::MAX);
    }

    #[test]
    fn rejects_above_hundred() {
        assert_eq!(Score::new(101), Err(ScoreError(101)));
        assert_eq!(Score::new(256), Err(ScoreError(256)));
        assert_eq!(Score::new(u32::MAX), Err(ScoreError(u32::MAX)));
    }

    #[test]
    fn deserialization_enforces_range() {
        let ok: Score = serde_json::from_str("78").unwrap();
        assert_eq!(ok.value(), 78);
        assert!(serde_json::from_str::<Score>("150").is_err());
    }
}
