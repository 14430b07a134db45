//! End-to-end flows through the session and the fetch driver, on tokio's
//! paused clock.

use greenscore_types::company_record::CompanyRecord;
use greenscore_types::fetcher;
use greenscore_types::oracle::MOCK_CONTENT_HASH;
use greenscore_types::{
    CompanyId, FetchError, MockScoreOracle, Registration, RefreshOutcome, Role, Score,
    ScoreOracle, ScoreReport, Session, SessionStore, Tab, VerificationEvent, View,
};
use std::cell::Cell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Store = Arc<Mutex<Session>>;

fn new_store() -> Store {
    Arc::new(Mutex::new(Session::new()))
}

fn metric_values(session: &Session) -> Vec<u8> {
    session
        .record()
        .metrics()
        .iter()
        .map(|m| m.value().value())
        .collect()
}

/// Fails the first `failures` calls, then delegates to the mock.
struct FlakyOracle {
    failures: Cell<usize>,
    inner: MockScoreOracle,
}

impl ScoreOracle for FlakyOracle {
    async fn fetch_verified_score(&self, company: &CompanyId) -> Result<ScoreReport, FetchError> {
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(FetchError::Unavailable("node unreachable".into()));
        }
        self.inner.fetch_verified_score(company).await
    }
}

#[tokio::test(start_paused = true)]
async fn investor_sees_loading_then_mock_report() {
    let store = new_store();
    let oracle = MockScoreOracle::default();

    let pending = store.update(Session::enter_as_investor).unwrap();
    let snap = store.snapshot();
    assert_eq!(snap.navigation().view(), View::Dashboard);
    assert_eq!(snap.navigation().role(), Role::Guest);
    assert!(snap.is_loading());

    let observer = async {
        tokio::time::sleep(Duration::from_millis(2499)).await;
        let snap = store.snapshot();
        assert!(snap.is_loading());
        assert_eq!(snap.record(), &CompanyRecord::default());
    };
    let (outcome, ()) = tokio::join!(pending.resolve(&store, &oracle), observer);
    assert_eq!(outcome, RefreshOutcome::Applied);

    let snap = store.snapshot();
    assert!(!snap.is_loading());
    assert_eq!(snap.record().score().value(), 78);
    assert_eq!(snap.record().rank(), "Silver Plus");
    assert_eq!(metric_values(&snap), vec![82, 68, 85]);
    assert!(snap.record().is_verified());
    assert_eq!(
        snap.record().content_hash().map(|h| h.as_str()),
        Some(MOCK_CONTENT_HASH)
    );
}

#[tokio::test(start_paused = true)]
async fn business_path_needs_a_manual_refresh() {
    let store = new_store();
    let oracle = MockScoreOracle::default();

    store.update(|s| s.go_to_register()).unwrap();
    store
        .update(|s| {
            s.submit_registration(Registration {
                company_name: "Acme".into(),
                tax_id: "ACM".into(),
            })
        })
        .unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.navigation().role(), Role::Business);
    assert!(!snap.is_loading());
    assert_eq!(snap.record().score(), Score::ZERO);
    assert_eq!(metric_values(&snap), vec![0, 0, 0]);

    let outcome = fetcher::refresh(&store, &oracle).await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Applied);
    let snap = store.snapshot();
    assert_eq!(snap.record().name(), "Acme");
    assert_eq!(snap.record().score().value(), 78);
}

#[tokio::test(start_paused = true)]
async fn refresh_is_idempotent() {
    let store = new_store();
    let oracle = MockScoreOracle::default();

    fetcher::enter_as_investor(&store, &oracle).await.unwrap();
    let first = store.snapshot().record().clone();
    fetcher::refresh(&store, &oracle).await.unwrap();
    let second = store.snapshot().record().clone();

    assert_eq!(first, second);
    assert_eq!(store.snapshot().history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn stale_values_stay_visible_while_revalidating() {
    let store = new_store();
    let oracle = MockScoreOracle::default();
    fetcher::enter_as_investor(&store, &oracle).await.unwrap();

    let pending = store.update(Session::begin_refresh).unwrap();
    let snap = store.snapshot();
    assert!(snap.is_loading());
    assert_eq!(snap.record().score().value(), 78);
    assert!(snap.record().is_verified());

    pending.resolve(&store, &oracle).await;
    assert!(!store.snapshot().is_loading());
}

#[tokio::test(start_paused = true)]
async fn logout_during_fetch_discards_the_result() {
    let store = new_store();
    let oracle = MockScoreOracle::default();

    let pending = store.update(Session::enter_as_investor).unwrap();
    let logout = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        store.update(|s| s.logout()).unwrap();
    };
    let (outcome, ()) = tokio::join!(pending.resolve(&store, &oracle), logout);

    assert_eq!(outcome, RefreshOutcome::Discarded);
    let snap = store.snapshot();
    assert_eq!(snap.navigation().view(), View::Landing);
    assert_eq!(snap.record(), &CompanyRecord::default());
    assert!(!snap.is_loading());
}

#[tokio::test(start_paused = true)]
async fn overlapping_refreshes_clear_loading_only_at_the_end() {
    let store = new_store();
    let slow = MockScoreOracle::new(Duration::from_millis(3000));
    let fast = MockScoreOracle::new(Duration::from_millis(500));

    let first = store.update(Session::enter_as_investor).unwrap();
    let second = store.update(Session::begin_refresh).unwrap();

    let check = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let snap = store.snapshot();
        // fast one landed, slow one still running
        assert!(snap.record().is_verified());
        assert!(snap.is_loading());
    };
    let (a, b, ()) = tokio::join!(
        first.resolve(&store, &slow),
        second.resolve(&store, &fast),
        check
    );
    assert!(a.is_applied() && b.is_applied());
    assert!(!store.snapshot().is_loading());
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_shows_unverified_and_retry_succeeds() {
    let store = new_store();
    let oracle = FlakyOracle {
        failures: Cell::new(1),
        inner: MockScoreOracle::default(),
    };

    let outcome = fetcher::enter_as_investor(&store, &oracle).await.unwrap();
    assert!(outcome.is_failed());
    let snap = store.snapshot();
    assert!(!snap.record().is_verified());
    assert!(snap.record().content_hash().is_none());
    assert!(snap.last_error().is_some());
    assert!(!snap.is_loading());

    let outcome = fetcher::refresh(&store, &oracle).await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Applied);
    let snap = store.snapshot();
    assert!(snap.record().is_verified());
    assert!(snap.last_error().is_none());

    let history = snap.history();
    assert_eq!(history.len(), 2);
    match &history[0] {
        VerificationEvent::Failed { seq, reason } => {
            assert_eq!(*seq, 0);
            assert_eq!(reason, "score oracle unavailable: node unreachable");
        }
        other => panic!("expected a failed read first, got {other:?}"),
    }
    match &history[1] {
        VerificationEvent::Applied {
            seq,
            score,
            rank,
            content_hash,
        } => {
            assert_eq!(*seq, 1);
            assert_eq!(score.value(), 78);
            assert_eq!(rank, "Silver Plus");
            assert_eq!(content_hash.as_str(), MOCK_CONTENT_HASH);
        }
        other => panic!("expected the retry to be applied, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_outside_dashboard_is_rejected() {
    let store = new_store();
    let oracle = MockScoreOracle::new(Duration::ZERO);
    assert!(fetcher::refresh(&store, &oracle).await.is_err());
    assert!(!store.snapshot().is_loading());
}

#[test]
fn random_valid_walks_stay_in_known_views() {
    // deterministic LCG so the walk is reproducible
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut session = Session::new();
    let mut pending = Vec::new();

    for _ in 0..2_000 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let choice = (state >> 33) % 8;
        let before = session.clone();
        let result = match choice {
            0 => session.enter_as_investor().map(|p| pending.push(p)),
            1 => session.go_to_register(),
            2 => session.back_to_landing(),
            3 => session.submit_registration(Registration::default()),
            4 => session.logout(),
            5 => session.begin_refresh().map(|p| pending.push(p)),
            6 => session.select_tab(Tab::Analysis),
            _ => {
                if let Some(p) = pending.pop() {
                    session.complete_refresh(p.ticket(), Ok(MockScoreOracle::fixed_report()));
                }
                Ok(())
            }
        };
        if result.is_err() {
            assert_eq!(session, before);
        }
        if session.record().is_verified() {
            assert!(session.record().content_hash().is_some());
        }
        assert!(session.record().score() <= Score::MAX);
        if session.navigation().role().is_guest() {
            assert!(!session.navigation().active_tab().is_analysis());
        }
        assert!(matches!(
            session.navigation().view(),
            View::Landing | View::Register | View::Dashboard
        ));
    }
}
