//! Command handlers - business logic for processing UI events

use crate::app::state::FetchEvent;
use crate::app::AppState;
use crate::constants::FETCH_ERROR_MESSAGE;
use crate::messages::{FetchOutcome, NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Fetching
    // ========================

    /// Begin a fetch: enter the loading view and hand back the network
    /// command. A fetch started while another is pending supersedes it;
    /// the older response will be discarded on arrival.
    pub fn start_fetch(&mut self) -> NetworkCommand {
        self.apply_fetch_event(FetchEvent::Started);

        let generation = self.next_id();
        self.pending_generation = Some(generation);

        NetworkCommand::FetchCharacters { generation }
    }

    /// Begin a user-triggered refresh. Identical to `start_fetch` except the
    /// refresh indicator stays up until this fetch (or one superseding it)
    /// settles.
    pub fn start_refresh(&mut self) -> NetworkCommand {
        self.is_refreshing = true;
        self.start_fetch()
    }

    /// Settle a fetch response. Responses from superseded generations are
    /// dropped so the view only ever reflects the most recently issued fetch.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_generation != Some(response.generation()) {
            tracing::debug!(
                generation = response.generation(),
                "Discarding stale fetch response"
            );
            return;
        }

        let NetworkResponse::FetchCompleted { outcome, .. } = response;
        match outcome {
            FetchOutcome::Success(items) => {
                self.apply_fetch_event(FetchEvent::Succeeded(items));
            }
            FetchOutcome::Failure(diagnostic) => {
                tracing::error!(error = %diagnostic, "Character fetch failed");
                self.apply_fetch_event(FetchEvent::Failed(String::from(FETCH_ERROR_MESSAGE)));
            }
        }

        // Cleared last: the fetch has settled, whatever the outcome.
        self.pending_generation = None;
        self.is_refreshing = false;
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_next(&mut self) {
        let len = self.view.characters().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.view.characters().len();
        self.selected = len.saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ViewState;
    use crate::models::Character;

    fn character(id: u64, name: &str) -> Character {
        Character {
            id,
            name: String::from(name),
            gender: String::from("Male"),
            species: String::from("HUMAN"),
            status: String::from("ALIVE"),
            image: None,
        }
    }

    fn completed(generation: u64, outcome: FetchOutcome) -> NetworkResponse {
        NetworkResponse::FetchCompleted { generation, outcome }
    }

    #[test]
    fn test_fetch_sets_loading_and_pending() {
        let mut state = AppState::new();
        let cmd = state.start_fetch();
        assert!(state.view.is_loading());
        let NetworkCommand::FetchCharacters { generation } = cmd else {
            panic!("expected FetchCharacters");
        };
        assert_eq!(state.pending_generation, Some(generation));
    }

    #[test]
    fn test_loading_true_strictly_between_start_and_settle() {
        let mut state = AppState::new();
        let NetworkCommand::FetchCharacters { generation } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        assert!(state.view.is_loading());

        state.handle_response(completed(
            generation,
            FetchOutcome::Success(vec![character(1, "Fry")]),
        ));
        assert!(!state.view.is_loading());
        assert_eq!(state.pending_generation, None);
    }

    #[test]
    fn test_failure_shows_fixed_message_and_keeps_list() {
        let mut state = AppState::new();
        let NetworkCommand::FetchCharacters { generation } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        state.handle_response(completed(
            generation,
            FetchOutcome::Success(vec![character(1, "Fry")]),
        ));

        let NetworkCommand::FetchCharacters { generation } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        state.handle_response(completed(
            generation,
            FetchOutcome::Failure(String::from("connection refused")),
        ));

        match &state.view {
            ViewState::Failed { message, previous } => {
                assert_eq!(message, FETCH_ERROR_MESSAGE);
                assert_eq!(previous.len(), 1);
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new();
        let NetworkCommand::FetchCharacters { generation: first } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        // A second fetch supersedes the first.
        let NetworkCommand::FetchCharacters { generation: second } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        assert_ne!(first, second);

        state.handle_response(completed(
            first,
            FetchOutcome::Success(vec![character(99, "Stale")]),
        ));
        assert!(state.view.is_loading(), "stale response must not settle");

        state.handle_response(completed(
            second,
            FetchOutcome::Success(vec![character(1, "Fry")]),
        ));
        assert_eq!(state.view.characters()[0].name, "Fry");
    }

    #[test]
    fn test_refresh_indicator_settles_exactly_once() {
        let mut state = AppState::new();
        let NetworkCommand::FetchCharacters { generation } = state.start_refresh() else {
            panic!("expected FetchCharacters");
        };
        assert!(state.is_refreshing);

        state.handle_response(completed(
            generation,
            FetchOutcome::Failure(String::from("timeout")),
        ));
        assert!(!state.is_refreshing);

        // A late duplicate must not flip the indicator back.
        state.handle_response(completed(
            generation,
            FetchOutcome::Success(Vec::new()),
        ));
        assert!(!state.is_refreshing);
        assert!(matches!(state.view, ViewState::Failed { .. }));
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut state = AppState::new();
        let NetworkCommand::FetchCharacters { generation } = state.start_fetch() else {
            panic!("expected FetchCharacters");
        };
        state.handle_response(completed(
            generation,
            FetchOutcome::Success(vec![character(1, "Fry"), character(2, "Leela")]),
        ));

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 1);
        state.select_first();
        assert_eq!(state.selected, 0);
    }
}
