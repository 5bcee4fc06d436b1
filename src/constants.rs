//! Application constants
//!
//! Centralized location for display strings and logging defaults.

/// Title shown at the top of every frame
pub const APP_TITLE: &str = "TAPI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix for the line echoing the filter text
pub const SEARCH_LABEL: &str = "Search: ";

/// Shown instead of the list when nothing matches the filter
pub const NO_MATCHES: &str = "No matching endpoints.";

pub const LISTING_HINT: &str = "Press ESC to quit/clear search. Enter to view.";
pub const DETAIL_HINT: &str = "Press ESC to go back.";

/// Marker for the row under the cursor; other rows get a blank of the same width
pub const CURSOR_MARKER: &str = ">";
pub const BLANK_MARKER: &str = " ";

/// Directory name under the user cache dir holding the log file
pub const LOG_DIR_NAME: &str = "tapi";
pub const LOG_FILE_NAME: &str = "tapi.log";
