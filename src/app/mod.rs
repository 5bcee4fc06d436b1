//! App layer - central state management and command processing
//!
//! The App state receives UI events, applies the guarded transitions,
//! and produces render state for the UI.

pub mod state;
pub mod commands;

pub use state::{AppState, Mode};
pub use commands::Control;
