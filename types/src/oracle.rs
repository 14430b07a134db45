//! Defines the score oracle trait and the mock used in place of a contract read.

use crate::compat;
use crate::error::FetchError;
use crate::score::Score;
use crate::score_report::{ContentHash, ScoreReport};
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Identifies the company whose score is requested. The dashboard uses the
/// ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trait for any service that can provide a verified ESG score.
pub trait ScoreOracle {
    /// Fetches the latest verified score for `company`.
    async fn fetch_verified_score(&self, company: &CompanyId) -> Result<ScoreReport, FetchError>;
}

pub const MOCK_TOTAL_SCORE: Score = Score::from_const(78);
pub const MOCK_RANK: &str = "Silver Plus";
pub const MOCK_CONTENT_HASH: &str = "QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco";
pub const MOCK_PILLAR_SCORES: [Score; 3] = [
    Score::from_const(82),
    Score::from_const(68),
    Score::from_const(85),
];

/// Resolves the same report for every company after a fixed latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockScoreOracle {
    latency: Duration,
}

impl MockScoreOracle {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2500);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// The report every mock fetch resolves to.
    pub fn fixed_report() -> ScoreReport {
        ScoreReport {
            total_score: MOCK_TOTAL_SCORE,
            rank: MOCK_RANK.to_string(),
            content_hash: ContentHash::new(MOCK_CONTENT_HASH),
            pillar_scores: MOCK_PILLAR_SCORES,
            verified: true,
        }
    }
}

impl Default for MockScoreOracle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl ScoreOracle for MockScoreOracle {
    async fn fetch_verified_score(&self, company: &CompanyId) -> Result<ScoreReport, FetchError> {
        tracing::debug!("mock oracle: resolving {company} in {:?}", self.latency);
        compat::sleep(self.latency).await;
        Ok(Self::fixed_report())
    }
}
