//! Command handlers - state transitions driven by UI events

use tracing::{debug, info};

use crate::app::state::{AppState, Mode};
use crate::messages::UiEvent;

/// What the event loop should do after an event
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    Quit,
}

impl AppState {
    /// Apply a UI event. Every event is accepted; out-of-range requests are no-ops.
    pub fn handle_event(&mut self, event: UiEvent) -> Control {
        match event {
            UiEvent::CharInput(c) => self.enter_char(c),
            UiEvent::Backspace => self.delete_char(),
            UiEvent::Up => self.cursor_up(),
            UiEvent::Down => self.cursor_down(),
            UiEvent::Enter => self.select_entry(),
            UiEvent::Escape => return self.escape(),
            UiEvent::Interrupt => {
                info!("interrupted");
                return Control::Quit;
            }
        }
        Control::Continue
    }

    // ========================
    // Filter editing
    // ========================

    pub fn enter_char(&mut self, c: char) {
        if self.mode != Mode::Listing {
            return;
        }
        self.filter_text.push(c);
        self.cursor = 0;
        debug!(filter = %self.filter_text, "filter changed");
    }

    pub fn delete_char(&mut self) {
        if self.mode != Mode::Listing {
            return;
        }
        if self.filter_text.pop().is_some() {
            self.cursor = 0;
            debug!(filter = %self.filter_text, "filter changed");
        }
    }

    // ========================
    // Navigation
    // ========================

    pub fn cursor_up(&mut self) {
        if self.mode == Mode::Listing && self.cursor > 0 {
            self.cursor -= 1;
            debug!(cursor = self.cursor, "cursor moved");
        }
    }

    pub fn cursor_down(&mut self) {
        if self.mode != Mode::Listing {
            return;
        }
        let len = self.filtered_view().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
            debug!(cursor = self.cursor, "cursor moved");
        }
    }

    /// Open the entry under the cursor in Detail mode.
    ///
    /// The filtered entry is mapped back to the first structurally equal
    /// entry in the master list.
    pub fn select_entry(&mut self) {
        if self.mode != Mode::Listing {
            return;
        }
        let Some(selected) = self.filtered_view().get(self.cursor).map(|ep| (*ep).clone()) else {
            return;
        };
        let Some(index) = self.entries().iter().position(|ep| *ep == selected) else {
            return;
        };
        self.viewing_index = index;
        self.mode = Mode::Detail;
        debug!(index, endpoint = %selected, "viewing endpoint");
    }

    /// Back out one level: Detail -> Listing, clear filter, or quit.
    pub fn escape(&mut self) -> Control {
        match self.mode {
            Mode::Detail => {
                self.mode = Mode::Listing;
                debug!("back to listing");
                Control::Continue
            }
            Mode::Listing if !self.filter_text.is_empty() => {
                self.filter_text.clear();
                self.cursor = 0;
                debug!("filter cleared");
                Control::Continue
            }
            Mode::Listing => {
                info!("quit requested");
                Control::Quit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Endpoint;

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert_eq!(state.handle_event(UiEvent::CharInput(c)), Control::Continue);
        }
    }

    fn assert_cursor_in_bounds(state: &AppState) {
        let len = state.filtered_view().len();
        assert!(state.cursor() < len.max(1), "cursor {} len {}", state.cursor(), len);
    }

    #[test]
    fn test_typing_appends_and_resets_cursor() {
        let mut state = AppState::new();
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Down);
        assert_eq!(state.cursor(), 2);

        let mut typed = String::new();
        for c in "/us".chars() {
            state.handle_event(UiEvent::CharInput(c));
            typed.push(c);
            assert_eq!(state.filter_text(), typed);
            assert_eq!(state.cursor(), 0);
        }
    }

    #[test]
    fn test_backspace() {
        let mut state = AppState::new();
        type_str(&mut state, "get");
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Backspace);
        assert_eq!(state.filter_text(), "ge");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_backspace_on_empty_filter_is_noop() {
        let mut state = AppState::new();
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Backspace);
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_up_at_top_is_noop() {
        let mut state = AppState::new();
        state.handle_event(UiEvent::Up);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_down_stops_at_last_item() {
        let mut state = AppState::new();
        for _ in 0..10 {
            state.handle_event(UiEvent::Down);
            assert_cursor_in_bounds(&state);
        }
        assert_eq!(state.cursor(), 4);
        state.handle_event(UiEvent::Up);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_enter_opens_detail_at_filtered_position() {
        let mut state = AppState::new();
        type_str(&mut state, "users");
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Enter);
        assert_eq!(state.mode(), Mode::Detail);
        assert_eq!(state.viewing(), Some(&Endpoint::new("POST", "/users")));
    }

    #[test]
    fn test_escape_from_detail_keeps_filter_and_cursor() {
        let mut state = AppState::new();
        type_str(&mut state, "post");
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Enter);
        assert_eq!(state.viewing(), Some(&Endpoint::new("POST", "/login")));

        assert_eq!(state.handle_event(UiEvent::Escape), Control::Continue);
        assert_eq!(state.mode(), Mode::Listing);
        assert_eq!(state.filter_text(), "post");
        assert_eq!(state.cursor(), 1);
        assert!(state.viewing().is_none());
    }

    #[test]
    fn test_detail_ignores_other_input() {
        let mut state = AppState::new();
        state.handle_event(UiEvent::Down);
        state.handle_event(UiEvent::Enter);
        for event in [
            UiEvent::CharInput('x'),
            UiEvent::Backspace,
            UiEvent::Up,
            UiEvent::Down,
            UiEvent::Enter,
        ] {
            assert_eq!(state.handle_event(event), Control::Continue);
        }
        assert_eq!(state.mode(), Mode::Detail);
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.viewing(), Some(&Endpoint::new("POST", "/")));
    }

    #[test]
    fn test_interrupt_quits_in_any_mode() {
        let mut state = AppState::new();
        type_str(&mut state, "abc");
        assert_eq!(state.handle_event(UiEvent::Interrupt), Control::Quit);

        let mut state = AppState::new();
        state.handle_event(UiEvent::Enter);
        assert_eq!(state.mode(), Mode::Detail);
        assert_eq!(state.handle_event(UiEvent::Interrupt), Control::Quit);
    }

    #[test]
    fn test_duplicate_entries_resolve_to_first_match() {
        let mut state = AppState::with_entries(vec![
            Endpoint::new("GET", "/a"),
            Endpoint::new("GET", "/b"),
            Endpoint::new("GET", "/b"),
        ]);
        type_str(&mut state, "/b");
        state.handle_event(UiEvent::Down);
        assert_eq!(state.cursor(), 1);
        state.handle_event(UiEvent::Enter);
        assert_eq!(state.viewing_index, 1);
    }

    #[test]
    fn test_empty_catalog_is_safe() {
        let mut state = AppState::with_entries(Vec::new());
        for event in [UiEvent::Down, UiEvent::Up, UiEvent::Enter] {
            state.handle_event(event);
            assert_eq!(state.cursor(), 0);
            assert_eq!(state.mode(), Mode::Listing);
        }
    }

    #[test]
    fn test_cursor_invariant_under_mixed_input() {
        let mut state = AppState::new();
        let events = [
            UiEvent::Down,
            UiEvent::Down,
            UiEvent::Down,
            UiEvent::CharInput('s'),
            UiEvent::Down,
            UiEvent::Down,
            UiEvent::Down,
            UiEvent::Down,
            UiEvent::Backspace,
            UiEvent::Down,
            UiEvent::Enter,
            UiEvent::Escape,
            UiEvent::CharInput('q'),
            UiEvent::Down,
            UiEvent::Up,
            UiEvent::Escape,
            UiEvent::Up,
        ];
        for event in events {
            state.handle_event(event);
            assert_cursor_in_bounds(&state);
        }
    }

    #[test]
    fn test_scenario_select_login() {
        let mut state = AppState::new();
        type_str(&mut state, "login");
        assert_eq!(state.filtered_view(), vec![&Endpoint::new("POST", "/login")]);
        assert_eq!(state.cursor(), 0);

        state.handle_event(UiEvent::Enter);
        assert_eq!(state.mode(), Mode::Detail);
        let shown = state.viewing().unwrap();
        assert_eq!(shown.method, "POST");
        assert_eq!(shown.path, "/login");
    }

    #[test]
    fn test_scenario_no_matches() {
        let mut state = AppState::new();
        type_str(&mut state, "zzz");
        assert!(state.filtered_view().is_empty());
        assert!(state.to_render_state().to_text().contains("No matching endpoints."));

        for event in [UiEvent::Enter, UiEvent::Down, UiEvent::Up] {
            assert_eq!(state.handle_event(event), Control::Continue);
            assert_eq!(state.mode(), Mode::Listing);
            assert_eq!(state.cursor(), 0);
            assert_eq!(state.filter_text(), "zzz");
        }
    }

    #[test]
    fn test_scenario_escape_quits_with_empty_filter() {
        let mut state = AppState::new();
        assert_eq!(state.handle_event(UiEvent::Escape), Control::Quit);
    }

    #[test]
    fn test_scenario_escape_clears_filter() {
        let mut state = AppState::new();
        type_str(&mut state, "GET");
        state.handle_event(UiEvent::Down);
        assert_eq!(state.cursor(), 1);

        assert_eq!(state.handle_event(UiEvent::Escape), Control::Continue);
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.filtered_view().len(), 5);
    }
}
