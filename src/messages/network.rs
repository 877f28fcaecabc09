//! Network messages - communication between App and Network layers

use crate::models::Character;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the first page of characters with the fixed query parameters.
    /// `generation` ties the eventual response back to the fetch that
    /// requested it; stale generations are discarded by the App layer.
    FetchCharacters { generation: u64 },

    /// Shutdown the network actor, aborting any in-flight fetch
    Shutdown,
}

/// What a settled fetch produced.
///
/// The error string is a diagnostic for the log; the user only ever sees the
/// fixed fetch-failure message.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(Vec<Character>),
    Failure(String),
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A fetch settled, successfully or not
    FetchCompleted {
        generation: u64,
        outcome: FetchOutcome,
    },
}

impl NetworkResponse {
    /// Get the fetch generation this response belongs to
    pub fn generation(&self) -> u64 {
        match self {
            NetworkResponse::FetchCompleted { generation, .. } => *generation,
        }
    }
}
