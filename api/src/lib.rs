//! This crate contains all shared fullstack server functions.

pub mod oracle;
pub mod prefs;

use dioxus::prelude::*;
use greenscore_types::CompanyId;
use greenscore_types::ScoreReport;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Resolves a verified score for `company` on the server.
///
/// Backed by the mock oracle until a contract client exists; the latency
/// comes from the same env var the client-side mock uses.
#[post("/api/verified_score")]
pub async fn verified_score(company: CompanyId) -> Result<ScoreReport, ApiError> {
    use greenscore_types::MockScoreOracle;
    use greenscore_types::ScoreOracle;

    let prefs = UserPrefs::default();
    let oracle = MockScoreOracle::new(prefs.oracle().latency());
    let report = oracle.fetch_verified_score(&company).await?;

    let json = serde_json::to_string(&report)?;
    dioxus_logger::tracing::info!("verified_score for {}: {}", company, json);

    Ok(report)
}
