//! The result set produced by a score oracle.

use crate::error::FetchError;
use crate::pillar::Pillar;
use crate::score::Score;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Opaque identifier of an immutable off-system document, such as an IPFS CID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The first `len` characters followed by an ellipsis, for narrow cards.
    pub fn abbreviated(&self, len: usize) -> String {
        if self.0.chars().count() <= len {
            self.0.clone()
        } else {
            let head: String = self.0.chars().take(len).collect();
            format!("{head}...")
        }
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A verified score for one company, as returned by a [`crate::ScoreOracle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: Score,
    pub rank: String,
    pub content_hash: ContentHash,
    /// Environment, Social, Governance, in that order.
    pub pillar_scores: [Score; 3],
    pub verified: bool,
}

impl ScoreReport {
    pub fn pillar_score(&self, pillar: Pillar) -> Score {
        self.pillar_scores[pillar.index()]
    }

    /// Rejects reports that would break the record invariants once merged.
    ///
    /// A report claiming verification must reference a document.
    pub fn validated(self) -> Result<Self, FetchError> {
        if self.verified && self.content_hash.is_empty() {
            return Err(FetchError::InvalidReport(
                "verified report has an empty content hash".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(hash: &str, verified: bool) -> ScoreReport {
        ScoreReport {
            total_score: Score::new(50).unwrap(),
            rank: "Bronze".to_string(),
            content_hash: ContentHash::new(hash),
            pillar_scores: [Score::new(10).unwrap(), Score::new(20).unwrap(), Score::new(30).unwrap()],
            verified,
        }
    }

    #[test]
    fn pillar_scores_are_indexed_in_pillar_order() {
        let r = report("Qm1", true);
        assert_eq!(r.pillar_score(Pillar::Environment).value(), 10);
        assert_eq!(r.pillar_score(Pillar::Social).value(), 20);
        assert_eq!(r.pillar_score(Pillar::Governance).value(), 30);
    }

    #[test]
    fn verified_report_needs_a_hash() {
        assert!(report("Qm1", true).validated().is_ok());
        assert!(matches!(
            report("  ", true).validated(),
            Err(FetchError::InvalidReport(_))
        ));
        assert!(report("", false).validated().is_ok());
    }

    #[test]
    fn abbreviation_keeps_short_hashes() {
        let hash = ContentHash::new("QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco");
        assert_eq!(hash.abbreviated(20), "QmXoypizjW3WknFiJnKL...");
        assert_eq!(ContentHash::new("Qm").abbreviated(20), "Qm");
    }
}
