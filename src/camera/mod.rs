//! Camera system for the driving world.
//!
//! Provides the [`CameraRig`] orchestrator and the controllers it blends:
//! angle presets, zoom, ray-cast panning, manual orbit, vehicle follow and
//! additive impulses.

/// Named view directions with eased transitions.
pub mod angle;
/// Core camera struct, pose and GPU uniform types.
pub mod core;
/// Third-person vehicle follow.
pub mod follow;
/// Stackable additive offsets such as camera shake.
pub mod impulse;
/// The mode enum arbitrating who owns the pose.
pub mod mode;
/// Manual orbit control trait and the built-in free orbit.
pub mod orbit;
/// Grab-and-drag panning against a ground plane.
pub mod pan;
/// Rays, planes and the bounded hit plane.
pub mod ray;
/// The orchestrating camera rig.
pub mod rig;
/// Scroll and pinch zoom.
pub mod zoom;

pub use self::core::{Camera, CameraPose, CameraUniform};
pub use impulse::{CameraImpulse, ImpulseStack, ShakeImpulse};
pub use mode::CameraMode;
pub use orbit::{FreeOrbit, OrbitControl, OrbitGesture};
pub use pan::CursorHint;
pub use rig::CameraRig;
