//! Drives a refresh from initiation to merge.
//!
//! Initiation is synchronous: [`Session::enter_as_investor`] or
//! [`Session::begin_refresh`] flips `is_loading` and hands back a
//! [`PendingRefresh`]. Resolving it awaits the oracle without holding the
//! store, then merges the result in a single update.

use crate::error::NavigationError;
use crate::oracle::{CompanyId, ScoreOracle};
use crate::session::{RefreshOutcome, RefreshTicket, Session};
use std::sync::{Arc, Mutex};

/// Somewhere a [`Session`] lives that can be updated in place.
///
/// The UI implements this over its reactive signal; tests and servers can use
/// `Arc<Mutex<Session>>`.
pub trait SessionStore {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;

    /// A copy of the current session.
    fn snapshot(&self) -> Session {
        self.update(|session| session.clone())
    }
}

impl SessionStore for Arc<Mutex<Session>> {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard)
    }
}

/// A refresh that has been started but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending refresh keeps the session loading until it is resolved"]
pub struct PendingRefresh {
    ticket: RefreshTicket,
    company: CompanyId,
}

impl PendingRefresh {
    pub(crate) fn new(ticket: RefreshTicket, company: CompanyId) -> Self {
        Self { ticket, company }
    }

    pub fn ticket(&self) -> RefreshTicket {
        self.ticket
    }

    pub fn company(&self) -> &CompanyId {
        &self.company
    }

    /// Queries `oracle` and merges its answer into `store`.
    pub async fn resolve<S, O>(self, store: &S, oracle: &O) -> RefreshOutcome
    where
        S: SessionStore,
        O: ScoreOracle,
    {
        let result = oracle.fetch_verified_score(&self.company).await;
        store.update(|session| session.complete_refresh(self.ticket, result))
    }
}

/// Starts and resolves a manual refresh.
pub async fn refresh<S, O>(store: &S, oracle: &O) -> Result<RefreshOutcome, NavigationError>
where
    S: SessionStore,
    O: ScoreOracle,
{
    let pending = store.update(Session::begin_refresh)?;
    Ok(pending.resolve(store, oracle).await)
}

/// Enters the dashboard as an investor and resolves the triggered refresh.
pub async fn enter_as_investor<S, O>(
    store: &S,
    oracle: &O,
) -> Result<RefreshOutcome, NavigationError>
where
    S: SessionStore,
    O: ScoreOracle,
{
    let pending = store.update(Session::enter_as_investor)?;
    Ok(pending.resolve(store, oracle).await)
}
