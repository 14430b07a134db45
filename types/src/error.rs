//! Error types for navigation, fetching and scores.

use crate::navigation::{Role, Tab, View};
use serde::Deserialize;
use serde::Serialize;

/// The session operations, named for error reporting and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    EnterAsInvestor,
    GoToRegister,
    BackToLanding,
    SubmitRegistration,
    Logout,
    SelectTab,
    Refresh,
}

/// A navigation operation was invoked from a state that does not allow it.
///
/// The session is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("cannot {operation} from the {from} view")]
    InvalidTransition { operation: Operation, from: View },

    #[error("the {tab} tab is not available to {role} sessions")]
    TabNotPermitted { tab: Tab, role: Role },
}

/// A score oracle could not produce a usable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FetchError {
    /// The oracle could not be reached or did not answer in time.
    #[error("score oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered with a report that cannot be merged.
    #[error("invalid score report: {0}")]
    InvalidReport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside 0..=100")]
pub struct ScoreError(pub u32);
