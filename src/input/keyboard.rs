use serde::{Deserialize, Serialize};

/// Rig-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_follow = "KeyO"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch between the automatic rig and third-person vehicle follow.
    ToggleFollow,
    /// Switch between the automatic rig and manual orbit control.
    ToggleOrbit,
}
