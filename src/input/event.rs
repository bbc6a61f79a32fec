use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into calls on the [`CameraRig`](crate::camera::CameraRig).
///
/// # Example
///
/// ```ignore
/// input_processor.handle_event(
///     &mut rig,
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, browser convention (positive = scroll down = zoom out).
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// Fingers touched the surface.
    TouchStart {
        /// All fingers currently down.
        touches: Touches,
    },
    /// Fingers moved.
    TouchMove {
        /// All fingers currently down.
        touches: Touches,
    },
    /// A finger was lifted.
    TouchEnd,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Fingers on a touch surface, by count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Touches {
    /// Single finger: drag.
    One(Vec2),
    /// Two fingers: pinch.
    Two(Vec2, Vec2),
    /// Three or more fingers: ignored by the rig.
    Many,
}

impl Touches {
    /// Distance between the two fingers of a pinch.
    #[must_use]
    pub fn spread(&self) -> Option<f32> {
        match self {
            Self::Two(a, b) => Some(a.distance(*b)),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it is one the rig listens to.
    ///
    /// Touch events need multi-finger bookkeeping and are not translated
    /// here; key presses go through [`key_code`].
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    // One wheel line is roughly 100 pixels in browsers
                    MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(Self::Wheel { delta_y })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                })
            }
            _ => None,
        }
    }
}

/// Key string for a pressed physical key (`"KeyO"`, `"Escape"`, ...).
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_code(event: &winit::event::KeyEvent) -> Option<String> {
    use winit::event::ElementState;
    use winit::keyboard::PhysicalKey;

    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_is_finger_distance() {
        let touches = Touches::Two(Vec2::new(0.0, 0.0), Vec2::new(60.0, 80.0));
        assert_eq!(touches.spread(), Some(100.0));
        assert_eq!(Touches::One(Vec2::ZERO).spread(), None);
        assert_eq!(Touches::Many.spread(), None);
    }
}
