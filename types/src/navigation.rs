//! Screens, roles and dashboard tabs.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Top-level screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Register,
    Dashboard,
}

/// Who is looking at the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// An investor browsing without an account.
    #[default]
    Guest,
    /// A company that went through registration.
    Business,
}

/// Dashboard sidebar tab.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Analysis,
    History,
}

impl Tab {
    pub fn is_visible_to(&self, role: Role) -> bool {
        match self {
            Self::Analysis => role.is_business(),
            Self::Dashboard | Self::History => true,
        }
    }

    /// Sidebar caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Overview",
            Self::Analysis => "Submit report",
            Self::History => "Chain history",
        }
    }

    /// The sidebar entries offered to `role`, in order.
    pub fn visible_to(role: Role) -> Vec<Tab> {
        Tab::iter().filter(|tab| tab.is_visible_to(role)).collect()
    }
}

/// The sub-view rendered inside the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum SubView {
    Overview,
    Analysis,
    History,
}

impl SubView {
    /// Picks the sub-view for a tab and role. A tab the role may not see
    /// falls back to the overview.
    pub fn dispatch(tab: Tab, role: Role) -> Self {
        if !tab.is_visible_to(role) {
            return Self::Overview;
        }
        match tab {
            Tab::Dashboard => Self::Overview,
            Tab::Analysis => Self::Analysis,
            Tab::History => Self::History,
        }
    }
}

/// Which screen is up, for whom, and whether a fetch is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub(crate) view: View,
    pub(crate) role: Role,
    pub(crate) active_tab: Tab,
    pub(crate) is_loading: bool,
}

impl NavigationState {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn sub_view(&self) -> SubView {
        SubView::dispatch(self.active_tab, self.role)
    }
}
