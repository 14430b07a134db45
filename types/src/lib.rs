//! Domain types and the session state machine shared by the GreenScore
//! server functions and UI.
//!
//! Nothing in this crate depends on the UI toolkit. The presentation layer
//! reads [`Session`] snapshots and mutates them only through the session's
//! named operations, or through the [`fetcher`] driver for refreshes.

pub mod company_record;
pub mod compat;
pub mod document_store;
pub mod error;
pub mod fetcher;
pub mod navigation;
pub mod oracle;
pub mod pillar;
pub mod score;
pub mod score_report;
pub mod scoring;
pub mod session;

pub use company_record::CompanyRecord;
pub use document_store::{DocumentStore, IpfsGateway};
pub use error::{FetchError, NavigationError, Operation, ScoreError};
pub use fetcher::{PendingRefresh, SessionStore};
pub use navigation::{NavigationState, Role, SubView, Tab, View};
pub use oracle::{CompanyId, MockScoreOracle, ScoreOracle};
pub use pillar::{Pillar, PillarMetric};
pub use score::Score;
pub use score_report::{ContentHash, ScoreReport};
pub use session::{Registration, RefreshOutcome, RefreshTicket, Session, VerificationEvent};
