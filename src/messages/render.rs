//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Utc};

use crate::app::state::ViewState;

/// Complete state needed by the UI to render one frame
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Which of the four views to draw
    pub view: ViewState,

    /// True while a user-triggered refresh has not yet settled
    pub is_refreshing: bool,

    /// Selected row in the populated list
    pub selected: usize,

    /// When the list was last successfully replaced
    pub last_updated: Option<DateTime<Utc>>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            view: ViewState::Loading {
                previous: Vec::new(),
            },
            is_refreshing: false,
            selected: 0,
            last_updated: None,
            show_help: false,
        }
    }
}

impl RenderState {
    /// True when the error view is the one being drawn
    pub fn error_shown(&self) -> bool {
        matches!(self.view, ViewState::Failed { .. })
    }
}
