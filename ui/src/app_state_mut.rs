//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use greenscore_types::NavigationError;
use greenscore_types::Session;
use greenscore_types::SessionStore;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The whole session lives in one `Signal`, so every operation re-renders
/// whatever read it. Components never touch session fields directly; they go
/// through [`SessionStore::update`] with one of the session's operations.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub session: Signal<Session>,
}

impl SessionStore for AppStateMut {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.session;
        let mut guard = session.write();
        f(&mut *guard)
    }
}

impl AppStateMut {
    /// Runs a navigation operation, logging it if the session rejects it.
    pub fn apply(&self, op: impl FnOnce(&mut Session) -> Result<(), NavigationError>) {
        if let Err(e) = self.update(op) {
            dioxus_logger::tracing::warn!("navigation rejected: {}", e);
        }
    }
}
