//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Utc};

use crate::messages::RenderState;
use crate::models::Character;

/// The four mutually exclusive screen views, as one tagged type.
///
/// The source of truth for what the screen shows: exactly one variant is
/// live at a time, so contradictory flag combinations (loading with an
/// error, error with a list) are unrepresentable. `previous` retains the
/// last successfully loaded list across a fetch that is still in flight or
/// has failed; it is not rendered, but a later failure must not wipe it.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading { previous: Vec<Character> },
    Failed { message: String, previous: Vec<Character> },
    Empty,
    Loaded(Vec<Character>),
}

impl ViewState {
    /// The retained character list, regardless of which view is live
    pub fn characters(&self) -> &[Character] {
        match self {
            ViewState::Loading { previous } => previous,
            ViewState::Failed { previous, .. } => previous,
            ViewState::Empty => &[],
            ViewState::Loaded(items) => items,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }
}

/// Events that drive the view-state machine, one per fetch edge
#[derive(Debug, Clone)]
pub enum FetchEvent {
    Started,
    Succeeded(Vec<Character>),
    Failed(String),
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub view: ViewState,

    // Fetch tracking: every fetch gets a fresh generation, and only the
    // most recently issued one may settle the view.
    pub next_generation: u64,
    pub pending_generation: Option<u64>,

    // True while a user-triggered refresh is waiting to settle
    pub is_refreshing: bool,

    // List navigation
    pub selected: usize,

    pub last_updated: Option<DateTime<Utc>>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            view: ViewState::Loading {
                previous: Vec::new(),
            },
            next_generation: 1,
            pending_generation: None,
            is_refreshing: false,
            selected: 0,
            last_updated: None,
            show_help: false,
        }
    }

    /// Generate a unique fetch generation
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_generation;
        self.next_generation += 1;
        id
    }

    /// The single reducer for view transitions. All fetch edges pass
    /// through here so the variants stay the only reachable states.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Started => {
                let previous = self.view.characters().to_vec();
                self.view = ViewState::Loading { previous };
            }
            FetchEvent::Succeeded(items) => {
                self.view = if items.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Loaded(items)
                };
                self.selected = 0;
                self.last_updated = Some(Utc::now());
            }
            FetchEvent::Failed(message) => {
                let previous = self.view.characters().to_vec();
                self.view = ViewState::Failed { message, previous };
            }
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            view: self.view.clone(),
            is_refreshing: self.is_refreshing,
            selected: self.selected,
            last_updated: self.last_updated,
            show_help: self.show_help,
        }
    }
}
