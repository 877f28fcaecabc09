//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the characters endpoint
pub const CHARACTERS_URL: &str = "https://futuramaapi.com/api/characters";

/// Fixed query parameters for the character list fetch
pub const CHARACTERS_QUERY: &[(&str, &str)] = &[
    ("orderBy", "id"),
    ("orderByDirection", "asc"),
    ("page", "1"),
    ("size", "50"),
];

/// Avatar shown when a character has no image of its own
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://media.istockphoto.com/id/1162198273/es/vector/dise%C3%B1o-de-ilustraci%C3%B3n-vectorial-plana-icono-de-signo-de-interrogaci%C3%B3n.jpg";

/// The single user-facing message for any fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "There was a problem loading data from the API.";

/// Title shown in the screen's header bar
pub const SCREEN_TITLE: &str = "Futurama Characters";

/// HTTP client timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log file written to the working directory
pub const LOG_FILE: &str = "futurama-tui.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Futurama TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
