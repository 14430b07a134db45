use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which score oracle the client talks to.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum OracleKind {
    /// Resolve the fixed mock report in the client after the latency.
    #[default]
    Mock,
    /// Ask the `verified_score` server function.
    Server,
}

/// Represents the user's score oracle preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OraclePreference {
    kind: OracleKind,
    latency_ms: u64,
}

impl OraclePreference {
    /// **Easy toggle:** the simulated chain read latency when no env var is set.
    pub const DEFAULT_LATENCY_MS: u64 = 2500;

    pub fn new(kind: OracleKind, latency: Duration) -> Self {
        Self {
            kind,
            latency_ms: u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Creates an OraclePreference instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables:
    /// - `GREENSCORE_ORACLE`: "mock" or "server" (case-insensitive).
    ///   defaults to mock
    /// - `GREENSCORE_ORACLE_LATENCY_MS`: simulated latency in milliseconds.
    ///   defaults to 2500
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let kind = lookup("GREENSCORE_ORACLE")
            .and_then(|s| OracleKind::from_str(s.trim()).ok())
            .unwrap_or_default();

        let latency_ms = lookup("GREENSCORE_ORACLE_LATENCY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_LATENCY_MS);

        Self { kind, latency_ms }
    }

    pub fn kind(&self) -> OracleKind {
        self.kind
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for OraclePreference {
    fn default() -> Self {
        Self::from_env()
    }
}
