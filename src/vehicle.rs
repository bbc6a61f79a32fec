//! The tracked vehicle as seen by the camera: a polled pose source.
//!
//! The physics side owns the vehicle and publishes its chassis pose; the rig
//! only reads it once per tick. [`VehicleHandle`] is the shared cell both
//! sides hold on the single render thread.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// Chassis position and heading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehiclePose {
    /// World position of the chassis.
    pub position: Vec3,
    /// Yaw around +Z in radians (0 = facing +X).
    pub heading: f32,
}

impl VehiclePose {
    /// Create a pose.
    #[must_use]
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}

/// Chassis-frame motion, used for telemetry only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleMotion {
    /// Velocity in the chassis frame.
    pub local_speed: Vec3,
    /// Acceleration in the chassis frame.
    pub local_acceleration: Vec3,
}

/// Anything the rig can poll for a vehicle pose.
pub trait VehicleSource {
    /// Current pose, or `None` while the vehicle does not exist yet.
    fn pose(&self) -> Option<VehiclePose>;

    /// Current motion, if the source tracks it.
    fn motion(&self) -> Option<VehicleMotion> {
        None
    }
}

#[derive(Debug, Default)]
struct VehicleState {
    pose: Option<VehiclePose>,
    motion: Option<VehicleMotion>,
}

/// Cloneable, single-threaded vehicle cell shared by physics and camera.
#[derive(Debug, Clone, Default)]
pub struct VehicleHandle {
    state: Rc<RefCell<VehicleState>>,
}

impl VehicleHandle {
    /// Create an empty handle (no vehicle yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the chassis pose.
    pub fn set_pose(&self, pose: VehiclePose) {
        self.state.borrow_mut().pose = Some(pose);
    }

    /// Publish chassis-frame motion.
    pub fn set_motion(&self, motion: VehicleMotion) {
        self.state.borrow_mut().motion = Some(motion);
    }

    /// Remove the vehicle (e.g. while the world reloads).
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.pose = None;
        state.motion = None;
    }
}

impl VehicleSource for VehicleHandle {
    fn pose(&self) -> Option<VehiclePose> {
        self.state.borrow().pose
    }

    fn motion(&self) -> Option<VehicleMotion> {
        self.state.borrow().motion
    }
}

/// Below this chassis-frame speed the vehicle counts as parked.
const SPEED_THRESHOLD: f32 = 0.01;
/// Minimum seconds between two telemetry lines.
const LOG_INTERVAL: f32 = 0.5;

/// Throttled debug logging of vehicle motion.
#[derive(Debug, Clone, Default)]
pub struct VehicleTelemetry {
    last_log: Option<f32>,
}

impl VehicleTelemetry {
    /// Log the vehicle's motion if it is moving and the interval elapsed.
    ///
    /// Returns whether a line was emitted.
    pub fn observe(
        &mut self,
        elapsed: f32,
        pose: &VehiclePose,
        motion: &VehicleMotion,
    ) -> bool {
        let moving = motion.local_speed.x.abs() > SPEED_THRESHOLD
            || motion.local_speed.y.abs() > SPEED_THRESHOLD;
        let due = self
            .last_log
            .is_none_or(|last| elapsed - last > LOG_INTERVAL);
        if !(moving && due) {
            return false;
        }

        log::debug!(
            "vehicle moving: speed=({:.2}, {:.2}) accel=({:.2}, {:.2}) \
             position=({:.2}, {:.2}, {:.2})",
            motion.local_speed.x,
            motion.local_speed.y,
            motion.local_acceleration.x,
            motion.local_acceleration.y,
            pose.position.x,
            pose.position.y,
            pose.position.z,
        );
        self.last_log = Some(elapsed);
        true
    }
}
