//! Application state - single source of truth for the browser

use crate::messages::render::RenderState;
use crate::models::{default_catalog, Endpoint};

/// Display mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Listing,
    Detail,
}

/// Complete browser state.
///
/// Fields are private so every mutation goes through the guarded
/// transitions in `commands.rs`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master list, never mutated after construction
    entries: Vec<Endpoint>,
    pub(super) filter_text: String,
    /// Index into the filtered view
    pub(super) cursor: usize,
    /// Index into `entries`; only read while in Detail mode
    pub(super) viewing_index: usize,
    pub(super) mode: Mode,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_entries(default_catalog())
    }

    pub fn with_entries(entries: Vec<Endpoint>) -> Self {
        AppState {
            entries,
            filter_text: String::new(),
            cursor: 0,
            viewing_index: 0,
            mode: Mode::Listing,
        }
    }

    pub fn entries(&self) -> &[Endpoint] {
        &self.entries
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Entries matching the filter, in catalog order
    pub fn filtered_view(&self) -> Vec<&Endpoint> {
        if self.filter_text.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|ep| ep.matches(&self.filter_text))
            .collect()
    }

    /// The endpoint shown in Detail mode, `None` while listing
    pub fn viewing(&self) -> Option<&Endpoint> {
        match self.mode {
            Mode::Detail => self.entries.get(self.viewing_index),
            Mode::Listing => None,
        }
    }

    /// Snapshot for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            filter_text: self.filter_text.clone(),
            rows: self.filtered_view().into_iter().cloned().collect(),
            cursor: self.cursor,
            detail: self.viewing().cloned(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
