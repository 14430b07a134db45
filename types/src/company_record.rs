//! The company record displayed on the dashboard.

use crate::pillar::{Pillar, PillarMetric};
use crate::score::Score;
use crate::score_report::{ContentHash, ScoreReport};
use serde::Deserialize;
use serde::Serialize;

/// Rank label shown until a verification result has been merged.
pub const PENDING_RANK: &str = "Checking...";

pub const INITIAL_NAME: &str = "VinFast Auto Ltd.";
pub const INITIAL_TICKER: &str = "VFS";
pub const NETWORK_LABEL: &str = "Polygon POS";

/// The record currently on display.
///
/// Fields are read through accessors. Mutation happens only through the
/// session operations, so that score fields are always replaced together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    name: String,
    ticker: String,
    score: Score,
    rank: String,
    network: String,
    content_hash: Option<ContentHash>,
    is_verified: bool,
    metrics: [PillarMetric; 3],
}

impl Default for CompanyRecord {
    fn default() -> Self {
        Self {
            name: INITIAL_NAME.to_string(),
            ticker: INITIAL_TICKER.to_string(),
            score: Score::ZERO,
            rank: PENDING_RANK.to_string(),
            network: NETWORK_LABEL.to_string(),
            content_hash: None,
            is_verified: false,
            metrics: Pillar::ALL.map(PillarMetric::new),
        }
    }
}

impl CompanyRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// True until a result has been merged into this record.
    pub fn is_rank_pending(&self) -> bool {
        self.rank == PENDING_RANK
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn content_hash(&self) -> Option<&ContentHash> {
        self.content_hash.as_ref()
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    /// The three pillar metrics in display order.
    pub fn metrics(&self) -> &[PillarMetric; 3] {
        &self.metrics
    }

    pub fn metric(&self, pillar: Pillar) -> &PillarMetric {
        &self.metrics[pillar.index()]
    }

    pub(crate) fn rename(&mut self, name: String, ticker: String) {
        self.name = name;
        self.ticker = ticker;
    }

    /// Replaces every verification-derived field from `report` in one step.
    pub(crate) fn apply_report(&mut self, report: &ScoreReport) {
        self.score = report.total_score;
        self.rank = report.rank.clone();
        self.content_hash = Some(report.content_hash.clone());
        self.is_verified = report.verified;
        for metric in &mut self.metrics {
            metric.set_value(report.pillar_score(metric.pillar()));
        }
    }
}
