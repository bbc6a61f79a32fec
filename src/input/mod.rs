//! Input handling: event types, key actions, and the input processor that
//! turns raw window events into camera rig calls.

/// Platform-agnostic input events.
pub mod event;
/// Rig actions that can be bound to keys.
pub mod keyboard;
/// Routes events to the camera rig.
pub mod processor;

#[cfg(feature = "viewer")]
pub use event::key_code;
pub use event::{InputEvent, MouseButton, Touches};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
