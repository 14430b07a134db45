use api::oracle::ConfiguredOracle;
use api::prefs::user_prefs::UserPrefs;
use greenscore_types::IpfsGateway;
use std::ops::Deref;
use std::sync::Arc;

/// Services fixed for the lifetime of the app, built from the user prefs.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub oracle: ConfiguredOracle,
    pub documents: IpfsGateway,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: &UserPrefs) -> Self {
        Self(Arc::new(AppStateData {
            oracle: ConfiguredOracle::from(prefs.oracle()),
            documents: IpfsGateway::new(prefs.document_gateway()),
        }))
    }
}
