//! Shared state and action types for the frontend
//!
//! Panels receive `UiState` via borrowing and return `AppAction`s instead
//! of mutating state or talking to the backend directly. The app applies
//! the actions centrally after all panels have rendered.

use chrono::{DateTime, Local};

use crate::backend::DispatchAction;
use crate::demo::DemoRun;
use crate::layout::LayoutTemplate;
use crate::render::Theme;
use crate::types::{Selection, SyncStatus, TopologySnapshot};

/// Everything the panels read to render a frame.
pub struct UiState {
    /// Last successfully synced snapshot; None until the first sync lands
    pub snapshot: Option<TopologySnapshot>,
    pub selection: Selection,
    pub status: SyncStatus,
    /// Wall-clock time of the last successful sync
    pub last_sync: Option<DateTime<Local>>,
    /// Present only while a demo run is in flight
    pub demo: Option<DemoRun>,
    pub template: LayoutTemplate,
    pub theme: Theme,
    /// Server address, shown in the status bar
    pub server_url: String,
}

impl UiState {
    pub fn new(server_url: String) -> Self {
        Self {
            snapshot: None,
            selection: Selection::None,
            status: SyncStatus::default(),
            last_sync: None,
            demo: None,
            template: LayoutTemplate::default(),
            theme: Theme::default(),
            server_url,
        }
    }

    /// Whether a demo run currently owns the controls
    pub fn demo_active(&self) -> bool {
        self.demo.is_some()
    }
}

/// Actions any panel can emit.
///
/// Panels return `Vec<AppAction>` instead of mutating state directly, which
/// keeps panel logic testable and action handling in one place.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Select a node or link, or clear with `Selection::None`
    Select(Selection),
    /// Force a sync outside the periodic schedule
    SyncNow,
    /// Issue a mutating request to the server
    Dispatch(DispatchAction),
    /// Start the scripted demo
    RunDemo,
}
