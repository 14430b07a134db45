use crate::app_state_mut::AppStateMut;
use dioxus::prelude::*;
use greenscore_types::NavigationError;
use greenscore_types::PendingRefresh;
use greenscore_types::Session;
use greenscore_types::SessionStore;

/// Starts refreshes and hands them to the app-level refresh coroutine.
///
/// The coroutine belongs to the top-level component, so a fetch started from
/// a screen that unmounts right after (the landing screen) still completes.
#[derive(Clone, Copy)]
pub struct Refresher {
    state: AppStateMut,
    tx: Coroutine<PendingRefresh>,
}

impl Refresher {
    /// Investor entry: switches to the dashboard and starts the fetch.
    pub fn enter_as_investor(&self) {
        self.start(Session::enter_as_investor);
    }

    /// Manual refresh from the dashboard.
    pub fn refresh(&self) {
        self.start(Session::begin_refresh);
    }

    fn start(&self, op: impl FnOnce(&mut Session) -> Result<PendingRefresh, NavigationError>) {
        match self.state.update(op) {
            Ok(pending) => {
                dioxus_logger::tracing::info!(
                    "refresh #{} started for {}",
                    pending.ticket().seq(),
                    pending.company()
                );
                self.tx.send(pending);
            }
            Err(e) => dioxus_logger::tracing::warn!("refresh rejected: {}", e),
        }
    }
}

pub fn use_refresher() -> Refresher {
    let state = use_context::<AppStateMut>();
    let tx = use_coroutine_handle::<PendingRefresh>();
    Refresher { state, tx }
}
