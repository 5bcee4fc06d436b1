//! Message types passed between the terminal, the App layer, and the UI.
//!
//! Key events become `UiEvent`s on the way in; `RenderState` snapshots go out.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::RenderState;
