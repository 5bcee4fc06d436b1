//! # TAPI
//!
//! A terminal browser for a fixed catalog of API endpoints.
//!
//! ## Features
//! - Live case-insensitive filtering by path or method
//! - Cursor navigation over the filtered list
//! - Detail view for the selected endpoint
//!
//! ## Architecture
//! - UI Layer (Ratatui) - draws a `RenderState`
//! - App Layer - state machine applying `UiEvent`s
//! - Models - the endpoint catalog

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod constants;

// Re-export commonly used types
pub use models::{default_catalog, Endpoint};
pub use messages::{RenderState, UiEvent};
pub use app::{AppState, Control, Mode};
