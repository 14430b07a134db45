//! Score oracle implementations selectable from the user's preferences.

use crate::prefs::oracle_preference::{OracleKind, OraclePreference};
use greenscore_types::CompanyId;
use greenscore_types::FetchError;
use greenscore_types::MockScoreOracle;
use greenscore_types::ScoreOracle;
use greenscore_types::ScoreReport;

/// Asks the `verified_score` server function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerScoreOracle;

impl ScoreOracle for ServerScoreOracle {
    async fn fetch_verified_score(&self, company: &CompanyId) -> Result<ScoreReport, FetchError> {
        crate::verified_score(company.clone())
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))
    }
}

/// The oracle chosen by [`OraclePreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredOracle {
    Mock(MockScoreOracle),
    Server(ServerScoreOracle),
}

impl From<&OraclePreference> for ConfiguredOracle {
    fn from(pref: &OraclePreference) -> Self {
        match pref.kind() {
            OracleKind::Mock => Self::Mock(MockScoreOracle::new(pref.latency())),
            OracleKind::Server => Self::Server(ServerScoreOracle),
        }
    }
}

impl ScoreOracle for ConfiguredOracle {
    async fn fetch_verified_score(&self, company: &CompanyId) -> Result<ScoreReport, FetchError> {
        match self {
            Self::Mock(oracle) => oracle.fetch_verified_score(company).await,
            Self::Server(oracle) => oracle.fetch_verified_score(company).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn preference_selects_the_oracle() {
        let mock = OraclePreference::new(OracleKind::Mock, Duration::from_millis(10));
        assert_eq!(
            ConfiguredOracle::from(&mock),
            ConfiguredOracle::Mock(MockScoreOracle::new(Duration::from_millis(10)))
        );

        let server = OraclePreference::new(OracleKind::Server, Duration::from_millis(10));
        assert_eq!(
            ConfiguredOracle::from(&server),
            ConfiguredOracle::Server(ServerScoreOracle)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn configured_mock_resolves_fixed_report() {
        let oracle = ConfiguredOracle::from(&OraclePreference::new(
            OracleKind::Mock,
            Duration::from_millis(2500),
        ));
        let report = oracle
            .fetch_verified_score(&CompanyId::new("VFS"))
            .await
            .unwrap();
        assert_eq!(report, MockScoreOracle::fixed_report());
    }
}
