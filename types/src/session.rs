//! The navigation state machine and the company record it owns.
//!
//! Valid transitions:
//!
//! ```text
//! landing --go_to_register--> register --back_to_landing--> landing
//! landing --enter_as_investor--> dashboard
//! register --submit_registration--> dashboard
//! dashboard --logout--> landing
//! ```
//!
//! Anything else returns [`NavigationError::InvalidTransition`] and leaves the
//! session untouched.

use crate::company_record::CompanyRecord;
use crate::error::{FetchError, NavigationError, Operation};
use crate::fetcher::PendingRefresh;
use crate::navigation::{NavigationState, Role, Tab, View};
use crate::oracle::CompanyId;
use crate::score::Score;
use crate::score_report::{ContentHash, ScoreReport};
use serde::Deserialize;
use serde::Serialize;
use tracing::{info, warn};

/// The registration form as submitted. Empty fields are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registration {
    pub company_name: String,
    pub tax_id: String,
}

/// Identifies one in-flight refresh.
///
/// `epoch` changes on logout; completions carrying an older epoch are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshTicket {
    epoch: u64,
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum RefreshOutcome {
    /// The report was merged into the record.
    Applied,
    /// The oracle failed; the record was left as it was.
    Failed(FetchError),
    /// The session was logged out while the fetch was in flight.
    Discarded,
}

/// One entry of the session's verification history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationEvent {
    Applied {
        seq: u64,
        score: Score,
        rank: String,
        content_hash: ContentHash,
    },
    Failed {
        seq: u64,
        reason: String,
    },
}

impl VerificationEvent {
    pub fn seq(&self) -> u64 {
        match self {
            Self::Applied { seq, .. } | Self::Failed { seq, .. } => *seq,
        }
    }
}

/// All state behind the dashboard: navigation plus the displayed record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    navigation: NavigationState,
    record: CompanyRecord,
    epoch: u64,
    next_seq: u64,
    in_flight: usize,
    last_error: Option<FetchError>,
    history: Vec<VerificationEvent>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn record(&self) -> &CompanyRecord {
        &self.record
    }

    pub fn is_loading(&self) -> bool {
        self.navigation.is_loading
    }

    /// The error from the most recent failed refresh, cleared by a success.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Completed refreshes of this session, oldest first.
    pub fn history(&self) -> &[VerificationEvent] {
        &self.history
    }

    pub fn company_id(&self) -> CompanyId {
        CompanyId::new(self.record.ticker())
    }

    fn require_view(&self, operation: Operation, expected: View) -> Result<(), NavigationError> {
        let from = self.navigation.view;
        if from == expected {
            Ok(())
        } else {
            warn!("rejected {operation} from {from}");
            Err(NavigationError::InvalidTransition { operation, from })
        }
    }

    /// Enters the dashboard as a guest investor and starts a refresh.
    ///
    /// The returned [`PendingRefresh`] must be resolved by the caller; the
    /// session already reports `is_loading` when this returns.
    pub fn enter_as_investor(&mut self) -> Result<PendingRefresh, NavigationError> {
        self.require_view(Operation::EnterAsInvestor, View::Landing)?;
        self.navigation.role = Role::Guest;
        self.navigation.view = View::Dashboard;
        self.navigation.active_tab = Tab::Dashboard;
        info!("investor entered dashboard");
        Ok(self.start_refresh())
    }

    pub fn go_to_register(&mut self) -> Result<(), NavigationError> {
        self.require_view(Operation::GoToRegister, View::Landing)?;
        self.navigation.view = View::Register;
        Ok(())
    }

    pub fn back_to_landing(&mut self) -> Result<(), NavigationError> {
        self.require_view(Operation::BackToLanding, View::Register)?;
        self.navigation.view = View::Landing;
        Ok(())
    }

    /// Registers the business and opens its dashboard.
    ///
    /// Only the record's name and ticker change. No refresh is started: the
    /// score stays unverified until the user asks for one.
    pub fn submit_registration(&mut self, form: Registration) -> Result<(), NavigationError> {
        self.require_view(Operation::SubmitRegistration, View::Register)?;
        self.navigation.role = Role::Business;
        self.navigation.active_tab = Tab::Dashboard;
        self.record.rename(form.company_name, form.tax_id);
        self.navigation.view = View::Dashboard;
        info!("business '{}' registered", self.record.name());
        Ok(())
    }

    /// Returns to the landing screen with a fresh record.
    ///
    /// Fetches still in flight belong to the old epoch and will be discarded.
    pub fn logout(&mut self) -> Result<(), NavigationError> {
        self.require_view(Operation::Logout, View::Dashboard)?;
        if self.in_flight > 0 {
            info!("logout orphans {} pending refresh(es)", self.in_flight);
        }
        *self = Self {
            epoch: self.epoch + 1,
            next_seq: self.next_seq,
            ..Self::default()
        };
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), NavigationError> {
        self.require_view(Operation::SelectTab, View::Dashboard)?;
        let role = self.navigation.role;
        if !tab.is_visible_to(role) {
            warn!("rejected {tab} tab for {role}");
            return Err(NavigationError::TabNotPermitted { tab, role });
        }
        self.navigation.active_tab = tab;
        Ok(())
    }

    /// Starts a manual refresh from the dashboard.
    pub fn begin_refresh(&mut self) -> Result<PendingRefresh, NavigationError> {
        self.require_view(Operation::Refresh, View::Dashboard)?;
        Ok(self.start_refresh())
    }

    fn start_refresh(&mut self) -> PendingRefresh {
        let ticket = RefreshTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight += 1;
        self.navigation.is_loading = true;
        PendingRefresh::new(ticket, self.company_id())
    }

    /// Merges the result of the refresh identified by `ticket`.
    ///
    /// Within one epoch every completion is applied in arrival order, so the
    /// last one to arrive wins. `is_loading` clears once nothing is in flight.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<ScoreReport, FetchError>,
    ) -> RefreshOutcome {
        if ticket.epoch != self.epoch {
            warn!("discarding refresh #{} from a logged-out session", ticket.seq);
            return RefreshOutcome::Discarded;
        }

        self.in_flight = self.in_flight.saturating_sub(1);
        self.navigation.is_loading = self.in_flight > 0;

        match result.and_then(ScoreReport::validated) {
            Ok(report) => {
                self.record.apply_report(&report);
                self.last_error = None;
                info!(
                    "refresh #{} applied: score {} ({})",
                    ticket.seq, report.total_score, report.rank
                );
                self.history.push(VerificationEvent::Applied {
                    seq: ticket.seq,
                    score: report.total_score,
                    rank: report.rank,
                    content_hash: report.content_hash,
                });
                RefreshOutcome::Applied
            }
            Err(e) => {
                warn!("refresh #{} failed: {e}", ticket.seq);
                self.history.push(VerificationEvent::Failed {
                    seq: ticket.seq,
                    reason: e.to_string(),
                });
                self.last_error = Some(e.clone());
                RefreshOutcome::Failed(e)
            }
        }
    }
}
