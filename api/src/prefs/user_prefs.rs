use super::oracle_preference::OraclePreference;
use greenscore_types::IpfsGateway;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    oracle: OraclePreference,
    document_gateway: String,
}

impl UserPrefs {
    pub fn new(oracle: OraclePreference, document_gateway: impl Into<String>) -> Self {
        Self {
            oracle,
            document_gateway: document_gateway.into(),
        }
    }

    pub fn oracle(&self) -> &OraclePreference {
        &self.oracle
    }

    /// Base URL documents are resolved against.
    ///
    /// Read from `GREENSCORE_DOCUMENT_GATEWAY`, defaulting to the public IPFS gateway.
    pub fn document_gateway(&self) -> &str {
        &self.document_gateway
    }
}

impl UserPrefs {
    /// Builds prefs from variables read through `lookup`, falling back to
    /// the in-code defaults for anything unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let document_gateway = lookup("GREENSCORE_DOCUMENT_GATEWAY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| IpfsGateway::DEFAULT_BASE.to_string());

        Self {
            oracle: OraclePreference::from_lookup(&lookup),
            document_gateway,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}
