//! Local UI chrome state (sidebar, navbar menus, panels, filters).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `projects`) so rendering controls can evolve independently of backend
//! data. Nothing here is ever sent to the backend.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::projects::ModalMode;

pub const SIDEBAR_OPEN_WIDTH: u32 = 280;
pub const SIDEBAR_CLOSED_WIDTH: u32 = 64;

/// UI state for the dashboard and project workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub profile_menu_open: bool,
    pub modal: ModalMode,
    pub mobile_menu_open: bool,
    pub search_focused: bool,
    pub view: Option<ViewOption>,
    pub report: Option<ReportOption>,
    pub filter_open: bool,
    pub settings_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            profile_menu_open: false,
            modal: ModalMode::Closed,
            mobile_menu_open: false,
            search_focused: false,
            view: None,
            report: None,
            filter_open: false,
            settings_open: false,
        }
    }
}

impl UiState {
    pub fn sidebar_width(&self) -> u32 {
        if self.sidebar_open { SIDEBAR_OPEN_WIDTH } else { SIDEBAR_CLOSED_WIDTH }
    }

    /// Collapse or expand the sidebar. The profile menu only exists while
    /// expanded, so collapsing closes it.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if !self.sidebar_open {
            self.profile_menu_open = false;
        }
    }

    /// Close the navbar's overlay panels when the workspace unmounts.
    pub fn close_workspace_panels(&mut self) {
        self.settings_open = false;
        self.filter_open = false;
        self.mobile_menu_open = false;
    }
}

/// Navbar "View Options" dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewOption {
    Chart,
    Table,
    Card,
}

impl ViewOption {
    pub const ALL: [Self; 3] = [Self::Chart, Self::Table, Self::Card];

    pub fn value(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Card => "card",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Chart => "Chart View",
            Self::Table => "Table View",
            Self::Card => "Card View",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

/// Navbar "Report Options" dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportOption {
    Bug,
    TestCase,
}

impl ReportOption {
    pub const ALL: [Self; 2] = [Self::Bug, Self::TestCase];

    pub fn value(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::TestCase => "test-case",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::TestCase => "Test Case",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

/// Filter-panel values. Applied locally only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// "Check Status": `Pass` or `Fail`.
    pub status: Option<String>,
    /// "Requested Outcome": `Pass` or `Failed`.
    pub requested_outcome: Option<String>,
    pub avg_time: u32,
    pub min_time: u32,
    pub max_time: u32,
    pub med_time: u32,
}

pub const STATUS_OPTIONS: [&str; 2] = ["Pass", "Fail"];
pub const OUTCOME_OPTIONS: [&str; 2] = ["Pass", "Failed"];
/// Upper bound of every time slider, in seconds.
pub const TIME_SLIDER_MAX: u32 = 100;

impl Default for FilterState {
    fn default() -> Self {
        Self { status: None, requested_outcome: None, avg_time: 50, min_time: 10, max_time: 90, med_time: 60 }
    }
}

impl FilterState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clamp slider input to the accepted range.
    pub fn clamp_time(raw: &str) -> Option<u32> {
        raw.trim().parse::<u32>().ok().map(|v| v.min(TIME_SLIDER_MAX))
    }
}
