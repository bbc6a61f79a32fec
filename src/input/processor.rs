//! Converts platform events into camera rig calls.
//!
//! The `InputProcessor` owns all transient input state (pressed button,
//! cursor tracking, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the
//! [`CameraRig`](crate::camera::CameraRig).

use glam::Vec2;

use super::event::{InputEvent, MouseButton, Touches};
use super::keyboard::KeyAction;
use crate::camera::mode::CameraMode;
use crate::camera::orbit::OrbitGesture;
use crate::camera::CameraRig;
use crate::options::KeybindingOptions;

/// Routes [`InputEvent`]s and key presses to a [`CameraRig`].
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(&mut rig, event);
///
/// if let Some(action) = input_processor.handle_key_press(&mut rig, "KeyO") {
///     log::debug!("ran {action:?}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Button currently held, if any.
    pressed: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Last pointer position in physical pixels.
    pointer: Vec2,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Last pointer position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether a mouse button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Run the action bound to `key` on the rig, returning it.
    pub fn handle_key_press(
        &self,
        rig: &mut CameraRig,
        key: &str,
    ) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(key)?;
        rig.handle_key_action(action);
        Some(action)
    }

    /// Apply one input event to the rig.
    pub fn handle_event(&mut self, rig: &mut CameraRig, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_pointer_moved(rig, Vec2::new(x, y));
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(rig, button, pressed);
            }
            InputEvent::Wheel { delta_y } => rig.wheel(delta_y),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
            }
            InputEvent::TouchStart { touches } => match touches {
                Touches::One(position) => {
                    self.pointer = position;
                    self.pressed = Some(MouseButton::Left);
                    rig.pointer_down(position);
                }
                Touches::Two(..) => {
                    if let Some(spread) = touches.spread() {
                        rig.pinch_start(spread);
                    }
                }
                Touches::Many => {}
            },
            InputEvent::TouchMove { touches } => match touches {
                Touches::One(position) => {
                    self.handle_pointer_moved(rig, position);
                }
                Touches::Two(..) => {
                    if let Some(spread) = touches.spread() {
                        rig.pinch_move(spread);
                    }
                }
                Touches::Many => {}
            },
            InputEvent::TouchEnd => {
                self.pressed = None;
                rig.pointer_up();
                rig.pinch_end();
            }
        }
    }

    /// Pointer moved: feed the pan controller, and the orbit controller
    /// while dragging in orbit mode.
    fn handle_pointer_moved(&mut self, rig: &mut CameraRig, position: Vec2) {
        let delta = position - self.pointer;
        self.pointer = position;

        if let Some(button) = self.pressed {
            if rig.mode() == CameraMode::ManualOrbit {
                let pans = self.shift_pressed || button != MouseButton::Left;
                let gesture = if pans {
                    OrbitGesture::Pan(delta)
                } else {
                    OrbitGesture::Rotate(delta)
                };
                rig.orbit_gesture(gesture);
            }
        }
        rig.pointer_move(position);
    }

    /// Button press/release. Only the primary button drags the pan.
    fn handle_mouse_button(
        &mut self,
        rig: &mut CameraRig,
        button: MouseButton,
        pressed: bool,
    ) {
        if pressed {
            self.pressed = Some(button);
            if button == MouseButton::Left {
                rig.pointer_down(self.pointer);
            }
            return;
        }

        if self.pressed == Some(button) {
            self.pressed = None;
        }
        if button == MouseButton::Left {
            rig.pointer_up();
        }
    }
}
