//! Input handling: platform-agnostic events and the click state machine
//! that turns presses and releases into single and double clicks.

/// Platform-agnostic input events.
pub mod event;
/// Multi-click state machine and mouse position tracking.
pub mod mouse;

pub use event::{InputEvent, MouseButton};
pub use mouse::{ClickResult, ClickTracker};
