//! # Futurama TUI
//!
//! A terminal browser for the Futurama character API: fetches the first page
//! of characters and renders one of four views (loading, error, empty, list)
//! with manual refresh and retry.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::Character;
pub use messages::{FetchOutcome, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
