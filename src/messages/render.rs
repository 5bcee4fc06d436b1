//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::Mode;
use crate::constants::{
    APP_TITLE, BLANK_MARKER, CURSOR_MARKER, DETAIL_HINT, LISTING_HINT, NO_MATCHES, SEARCH_LABEL,
};
use crate::models::Endpoint;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    pub mode: Mode,
    pub filter_text: String,
    /// Filtered view, in catalog order
    pub rows: Vec<Endpoint>,
    pub cursor: usize,
    /// Set only in Detail mode
    pub detail: Option<Endpoint>,
}

impl RenderState {
    /// Marker column for a listing row
    pub fn marker(&self, row: usize) -> &'static str {
        if row == self.cursor {
            CURSOR_MARKER
        } else {
            BLANK_MARKER
        }
    }

    pub fn hint(&self) -> &'static str {
        match self.mode {
            Mode::Listing => LISTING_HINT,
            Mode::Detail => DETAIL_HINT,
        }
    }

    /// Plain-text frame, one line per row
    pub fn to_text(&self) -> String {
        let mut s = format!("{APP_TITLE}\n\n");

        match (&self.mode, &self.detail) {
            (Mode::Detail, Some(ep)) => {
                s.push_str(&format!("Method: {}\nPath: {}\n", ep.method, ep.path));
            }
            _ => {
                s.push_str(&format!("{SEARCH_LABEL}{}\n\n", self.filter_text));
                if self.rows.is_empty() {
                    s.push_str(NO_MATCHES);
                    s.push('\n');
                } else {
                    for (i, ep) in self.rows.iter().enumerate() {
                        s.push_str(&format!("{} {}\n", self.marker(i), ep));
                    }
                }
            }
        }

        s.push('\n');
        s.push_str(self.hint());
        s.push('\n');
        s
    }
}
