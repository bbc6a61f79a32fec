//! The camera rig: one owner for every input that moves the camera.
//!
//! Input callbacks only record intent on the rig's controllers. [`tick`]
//! consumes it in a fixed order:
//!
//! 1. vehicle observation (telemetry, angle zones)
//! 2. angle transition
//! 3. zoom easing
//! 4. pan easing, with at most one ray cast against the ground plane
//! 5. the base pose for the current [`CameraMode`]
//! 6. impulse offsets on top of the base pose
//! 7. camera and uniform refresh
//!
//! A failing stage is logged and holds the previous pose; it never aborts
//! the tick.
//!
//! [`tick`]: CameraRig::tick

use glam::{Vec2, Vec3};

use crate::camera::angle::AnglePresets;
use crate::camera::core::{Camera, CameraPose, CameraUniform};
use crate::camera::follow::FollowController;
use crate::camera::impulse::{CameraImpulse, ImpulseStack, ShakeImpulse};
use crate::camera::mode::CameraMode;
use crate::camera::orbit::{FreeOrbit, OrbitControl, OrbitGesture};
use crate::camera::pan::{CursorHint, PanController};
use crate::camera::zoom::ZoomController;
use crate::error::RigError;
use crate::input::KeyAction;
use crate::options::{Options, ShakeOptions, DEFAULT_ANGLE};
use crate::util::frame_timing::Tick;
use crate::util::smoothing::Smoothing;
use crate::vehicle::{VehiclePose, VehicleSource, VehicleTelemetry};
use crate::viewport::Viewport;
use crate::zones::{ZoneEvent, ZoneTracker};

/// Camera controller blending angle, zoom, pan, orbit and follow.
pub struct CameraRig {
    camera: Camera,
    uniform: CameraUniform,
    viewport: Viewport,
    mode: CameraMode,
    smoothing: Smoothing,

    target: Vec3,
    target_eased: Vec3,
    target_easing: f32,
    /// Pose before impulses; what the next tick's ray casts see.
    base_pose: CameraPose,

    angles: AnglePresets,
    zoom: ZoomController,
    pan: PanController,
    orbit: Box<dyn OrbitControl>,
    follow: FollowController,

    vehicle: Option<Box<dyn VehicleSource>>,
    telemetry: VehicleTelemetry,
    zones: ZoneTracker,

    impulses: ImpulseStack,
    shake: ShakeOptions,
}

impl CameraRig {
    /// Build a rig at rest, looking at the origin.
    #[must_use]
    pub fn new(options: &Options, viewport: Viewport) -> Self {
        let angles = AnglePresets::new(&options.angles);
        let zoom = ZoomController::new(&options.zoom);
        let base_pose = CameraPose::new(
            angles.direction() * zoom.distance(),
            Vec3::ZERO,
        );

        let camera = Camera {
            eye: base_pose.eye,
            target: base_pose.target,
            up: Vec3::Z,
            aspect: viewport.aspect(),
            fovy: options.camera.fovy,
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            camera,
            uniform,
            viewport,
            mode: CameraMode::RigControlled,
            smoothing: options.rig.smoothing(),
            target: Vec3::ZERO,
            target_eased: Vec3::ZERO,
            target_easing: options.rig.target_easing,
            base_pose,
            angles,
            zoom,
            pan: PanController::new(&options.pan),
            orbit: Box::new(FreeOrbit::new(&options.orbit)),
            follow: FollowController::new(&options.follow),
            vehicle: None,
            telemetry: VehicleTelemetry::default(),
            zones: ZoneTracker::new(&options.zones),
            impulses: ImpulseStack::new(),
            shake: options.shake.clone(),
        }
    }

    /// Replace the built-in [`FreeOrbit`] controller.
    #[must_use]
    pub fn with_orbit_control(mut self, orbit: Box<dyn OrbitControl>) -> Self {
        self.orbit = orbit;
        if self.mode == CameraMode::ManualOrbit {
            self.orbit.attach(self.base_pose);
        }
        self
    }

    /// Attach the vehicle the follow mode and zones track.
    #[must_use]
    pub fn with_vehicle(
        mut self,
        vehicle: impl VehicleSource + 'static,
    ) -> Self {
        self.vehicle = Some(Box::new(vehicle));
        self
    }

    /// Attach, replace or remove the tracked vehicle.
    pub fn set_vehicle(&mut self, vehicle: Option<Box<dyn VehicleSource>>) {
        self.vehicle = vehicle;
    }

    // -- Tick --

    /// Advance the rig by one frame.
    pub fn tick(&mut self, tick: Tick) {
        let dt = if tick.delta.is_finite() {
            tick.delta.max(0.0)
        } else {
            0.0
        };

        let vehicle = self.observe_vehicle(tick.elapsed);

        self.angles.tick(dt);
        self.zoom
            .tick(self.smoothing.factor(self.zoom.easing(), dt));
        let shown = self.camera.with_pose(self.base_pose);
        self.pan
            .tick(&shown, self.smoothing.factor(self.pan.easing(), dt));

        match self.compose_base_pose(dt, vehicle) {
            Ok(Some(pose)) if pose.is_valid() => self.base_pose = pose,
            Ok(Some(_)) => {
                let e = RigError::NonFinite("composed pose");
                log::error!("camera {} update failed: {e}", self.mode);
            }
            Ok(None) => {}
            Err(e) => log::error!("camera {} update failed: {e}", self.mode),
        }

        let offset = self.impulses.advance(dt);
        let pose = self.base_pose.translated(offset);
        self.camera = self.camera.with_pose(pose);
        self.uniform.update_view_proj(&self.camera);
    }

    /// Poll the vehicle, log its motion and fire zone transitions.
    fn observe_vehicle(&mut self, elapsed: f32) -> Option<VehiclePose> {
        let source = self.vehicle.as_ref()?;
        let pose = source.pose()?;
        if let Some(motion) = source.motion() {
            let _ = self.telemetry.observe(elapsed, &pose, &motion);
        }

        for event in self.zones.update(pose.position.truncate()) {
            match event {
                ZoneEvent::Entered(index) => {
                    if let Some(zone) = self.zones.zone(index) {
                        self.angles.set(&zone.angle);
                    }
                }
                ZoneEvent::Left(_) => self.angles.set(DEFAULT_ANGLE),
            }
        }
        Some(pose)
    }

    /// Pose written by the active mode, or `None` to hold the last one.
    fn compose_base_pose(
        &mut self,
        dt: f32,
        vehicle: Option<VehiclePose>,
    ) -> Result<Option<CameraPose>, RigError> {
        match self.mode {
            CameraMode::RigControlled => {
                let factor = self.smoothing.factor(self.target_easing, dt);
                self.target_eased += (self.target - self.target_eased) * factor;

                let eye = self.target_eased
                    + self.angles.direction() * self.zoom.distance();
                let pan = self.pan.value().extend(0.0);
                let pose = CameraPose::new(eye, self.target_eased);
                Ok(Some(pose.translated(pan)))
            }
            CameraMode::ManualOrbit => self.orbit.update(dt).map(Some),
            CameraMode::FollowingVehicle => {
                let Some(vehicle) = vehicle else {
                    log::trace!("no vehicle to follow, holding camera");
                    return Ok(None);
                };
                if !vehicle.is_finite() {
                    return Err(RigError::NonFinite("vehicle pose"));
                }
                let factor =
                    self.smoothing.factor(self.follow.smooth_factor(), dt);
                let pose = self.follow.follow(self.base_pose, &vehicle, factor);
                self.target = pose.target;
                self.target_eased = pose.target;
                Ok(Some(pose))
            }
        }
    }

    // -- Modes --

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch modes, running exit and entry side effects.
    ///
    /// Leaving follow resets the look-at target to the origin and zeroes the
    /// pan. Entering follow disables pan. Entering orbit hands the current
    /// pose to the orbit controller.
    pub fn set_mode(&mut self, mode: CameraMode) {
        let previous = self.mode;
        if previous == mode {
            return;
        }

        if previous == CameraMode::FollowingVehicle {
            self.target = Vec3::ZERO;
            self.pan.reset();
        }
        match mode {
            CameraMode::RigControlled => {}
            CameraMode::ManualOrbit => self.orbit.attach(self.base_pose),
            CameraMode::FollowingVehicle => self.pan.disable(),
        }

        self.mode = mode;
        log::info!("camera mode: {previous} -> {mode}");
    }

    /// Enter follow mode, or return to the rig if already following.
    pub fn toggle_follow(&mut self) {
        self.set_mode(self.mode.toggled(CameraMode::FollowingVehicle));
    }

    /// Enter manual orbit, or return to the rig if already orbiting.
    pub fn toggle_orbit(&mut self) {
        self.set_mode(self.mode.toggled(CameraMode::ManualOrbit));
    }

    /// Run a bound keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ToggleFollow => self.toggle_follow(),
            KeyAction::ToggleOrbit => self.toggle_orbit(),
        }
    }

    // -- Input --

    /// Pointer pressed at a screen position (pixels).
    pub fn pointer_down(&mut self, screen: Vec2) {
        let shown = self.camera.with_pose(self.base_pose);
        self.pan.down(screen, &self.viewport, &shown);
    }

    /// Pointer moved to a screen position (pixels).
    pub fn pointer_move(&mut self, screen: Vec2) {
        self.pan.move_to(screen, &self.viewport);
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.pan.up();
    }

    /// Scroll wheel delta (positive = zoom out).
    pub fn wheel(&mut self, delta_y: f32) {
        if let Err(e) = self.zoom.wheel(delta_y) {
            log::warn!("ignoring wheel input: {e}");
            return;
        }
        if self.mode == CameraMode::ManualOrbit {
            self.orbit.handle_gesture(OrbitGesture::Zoom(delta_y));
        }
    }

    /// Second finger landed with the given finger distance.
    pub fn pinch_start(&mut self, spread: f32) {
        self.zoom.begin_pinch(spread);
    }

    /// Pinch fingers moved to the given distance.
    pub fn pinch_move(&mut self, spread: f32) {
        if let Err(e) = self.zoom.pinch(spread) {
            log::warn!("ignoring pinch input: {e}");
        }
    }

    /// Pinch gesture ended.
    pub fn pinch_end(&mut self) {
        self.zoom.end_pinch();
    }

    /// Forward a gesture to the orbit controller. Ignored outside orbit mode.
    pub fn orbit_gesture(&mut self, gesture: OrbitGesture) {
        if self.mode == CameraMode::ManualOrbit {
            self.orbit.handle_gesture(gesture);
        }
    }

    // -- Targets --

    /// Start a transition to the named angle preset.
    pub fn set_angle(&mut self, name: &str) {
        self.angles.set(name);
    }

    /// Set the point the rig eases its look-at toward.
    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        } else {
            log::warn!("ignoring non-finite camera target {target}");
        }
    }

    /// Point the rig eases its look-at toward.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Eased look-at point.
    #[must_use]
    pub fn target_eased(&self) -> Vec3 {
        self.target_eased
    }

    // -- Effects --

    /// Layer an impulse on top of the rig's pose from the next tick on.
    pub fn add_impulse(&mut self, impulse: Box<dyn CameraImpulse>) {
        self.impulses.push(impulse);
    }

    /// Fire the configured camera shake.
    pub fn shake(&mut self) {
        self.add_impulse(Box::new(ShakeImpulse::new(&self.shake)));
    }

    /// Live impulses.
    #[must_use]
    pub fn impulses(&self) -> &ImpulseStack {
        &self.impulses
    }

    // -- Viewport --

    /// Track a new viewport size. Only the projection aspect changes.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() {
            log::debug!("ignoring degenerate viewport {viewport:?}");
            return;
        }
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.uniform.update_view_proj(&self.camera);
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // -- Accessors --

    /// Camera as shown this frame, impulses included.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// GPU-ready uniform for the shown camera.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Shown eye and target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Pose before impulses.
    #[must_use]
    pub fn base_pose(&self) -> CameraPose {
        self.base_pose
    }

    /// Cursor the host should display.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.pan.cursor()
    }

    /// Angle presets.
    #[must_use]
    pub fn angles(&self) -> &AnglePresets {
        &self.angles
    }

    /// Mutable angle presets, e.g. to insert presets at runtime.
    pub fn angles_mut(&mut self) -> &mut AnglePresets {
        &mut self.angles
    }

    /// Zoom controller.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// Pan controller.
    #[must_use]
    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    /// Mutable pan controller, e.g. to enable or disable panning.
    pub fn pan_mut(&mut self) -> &mut PanController {
        &mut self.pan
    }

    /// Follow controller.
    #[must_use]
    pub fn follow(&self) -> &FollowController {
        &self.follow
    }

    /// Mutable follow controller.
    pub fn follow_mut(&mut self) -> &mut FollowController {
        &mut self.follow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ZoneOptions;
    use crate::util::smoothing::SmoothingMode;
    use crate::vehicle::VehicleHandle;

    const FPS: f32 = 60.0;

    fn rig() -> CameraRig {
        CameraRig::new(&Options::default(), Viewport::new(800.0, 600.0))
    }

    fn run(rig: &mut CameraRig, frames: std::ops::Range<u64>) {
        run_at(rig, FPS, frames);
    }

    fn run_at(rig: &mut CameraRig, fps: f32, frames: std::ops::Range<u64>) {
        for frame in frames {
            rig.tick(Tick::fixed(frame, fps));
        }
    }

    #[test]
    fn projects_scenario_converges() {
        let mut rig = rig();
        rig.set_angle("projects");
        run(&mut rig, 0..300);

        assert_eq!(rig.zoom().distance(), 21.5);
        let expected = rig.target_eased()
            + Vec3::new(0.38, -1.4, 1.63).normalize() * 21.5;
        assert!(rig.pose().eye.abs_diff_eq(expected, 1e-3));
        assert_eq!(rig.pose().target, Vec3::ZERO);
    }

    #[test]
    fn target_is_eased() {
        let mut rig = rig();
        rig.set_target(Vec3::new(10.0, 0.0, 0.0));
        rig.tick(Tick::fixed(0, FPS));
        assert!((rig.target_eased().x - 1.5).abs() < 1e-5);

        run(&mut rig, 1..400);
        assert!(rig.pose().target.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), 1e-3));
    }

    #[test]
    fn orbit_owns_the_pose_exclusively() {
        let mut quiet = rig();
        let mut busy = rig();
        quiet.toggle_orbit();
        busy.toggle_orbit();
        busy.pan_mut().enable();

        for frame in 0..60 {
            quiet.tick(Tick::fixed(frame, FPS));

            busy.set_angle("projects");
            busy.set_target(Vec3::new(frame as f32, 3.0, 0.0));
            busy.pinch_start(100.0);
            busy.pinch_move(40.0);
            busy.pointer_down(Vec2::new(400.0, 300.0));
            busy.pointer_move(Vec2::new(100.0, 500.0));
            busy.tick(Tick::fixed(frame, FPS));
        }

        assert_eq!(quiet.mode(), CameraMode::ManualOrbit);
        assert!(quiet.pose().eye.abs_diff_eq(busy.pose().eye, 1e-5));
        assert!(quiet.pose().target.abs_diff_eq(busy.pose().target, 1e-5));
    }

    #[test]
    fn orbit_gestures_only_reach_orbit_mode() {
        let mut rig = rig();
        run(&mut rig, 0..2);
        let rest = rig.pose();

        rig.orbit_gesture(OrbitGesture::Rotate(Vec2::new(200.0, 0.0)));
        rig.toggle_orbit();
        run(&mut rig, 2..3);
        assert!(rig.pose().eye.abs_diff_eq(rest.eye, 1e-4));

        rig.orbit_gesture(OrbitGesture::Rotate(Vec2::new(200.0, 0.0)));
        run(&mut rig, 3..4);
        assert!(!rig.pose().eye.abs_diff_eq(rest.eye, 1e-2));
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut rig = rig();
        rig.toggle_orbit();
        rig.toggle_follow();
        assert_eq!(rig.mode(), CameraMode::FollowingVehicle);
        rig.toggle_orbit();
        assert_eq!(rig.mode(), CameraMode::ManualOrbit);
        rig.toggle_orbit();
        assert_eq!(rig.mode(), CameraMode::RigControlled);
    }

    #[test]
    fn follow_writes_pose_directly() {
        let vehicle = VehicleHandle::new();
        vehicle.set_pose(VehiclePose::new(Vec3::new(20.0, -4.0, 0.5), 0.7));
        let mut rig = rig().with_vehicle(vehicle.clone());

        rig.handle_key_action(KeyAction::ToggleFollow);
        run(&mut rig, 0..1);

        let expected = rig
            .follow()
            .solve(&VehiclePose::new(Vec3::new(20.0, -4.0, 0.5), 0.7));
        assert!(rig.pose().eye.abs_diff_eq(expected.eye, 1e-5));
        assert!(rig.pose().target.abs_diff_eq(expected.target, 1e-5));
        assert_eq!(rig.target(), expected.target);
        assert_eq!(rig.target_eased(), expected.target);
    }

    #[test]
    fn follow_holds_pose_without_vehicle() {
        let vehicle = VehicleHandle::new();
        vehicle.set_pose(VehiclePose::new(Vec3::new(5.0, 5.0, 0.0), 0.0));
        let mut rig = rig().with_vehicle(vehicle.clone());
        rig.toggle_follow();
        run(&mut rig, 0..1);
        let held = rig.pose();

        vehicle.clear();
        run(&mut rig, 1..10);
        assert_eq!(rig.pose(), held);

        let mut detached = self::rig();
        let before = detached.pose();
        detached.toggle_follow();
        run(&mut detached, 0..5);
        assert!(detached.pose().eye.abs_diff_eq(before.eye, 1e-5));
    }

    #[test]
    fn follow_smoothing_uses_time_scaled_factor() {
        let mut options = Options::default();
        options.rig.smoothing = SmoothingMode::TimeScaled;
        options.follow.smoothing = true;
        let vehicle = VehicleHandle::new();
        let car = VehiclePose::new(Vec3::new(30.0, 10.0, 0.5), 1.0);
        vehicle.set_pose(car);
        let mut rig = CameraRig::new(&options, Viewport::new(800.0, 600.0))
            .with_vehicle(vehicle);
        rig.toggle_follow();

        // A zero-length tick moves nothing
        let before = rig.pose();
        rig.tick(Tick::new(0.0, 0.0));
        assert_eq!(rig.pose().eye, before.eye);

        // One reference frame eases by exactly the configured constant
        rig.tick(Tick::new(1.0 / FPS, 1.0 / FPS));
        let solved = rig.follow().solve(&car);
        let expected = before.eye.lerp(solved.eye, 0.1);
        assert!(rig.pose().eye.abs_diff_eq(expected, 1e-2));

        // Converges the same way at half the frame rate
        run_at(&mut rig, 30.0, 0..120);
        assert!(rig.pose().eye.abs_diff_eq(solved.eye, 1e-2));
    }

    #[test]
    fn non_finite_vehicle_holds_pose() {
        let vehicle = VehicleHandle::new();
        vehicle.set_pose(VehiclePose::new(Vec3::new(5.0, 5.0, 0.0), 0.0));
        let mut rig = rig().with_vehicle(vehicle.clone());
        rig.toggle_follow();
        run(&mut rig, 0..1);
        let held = rig.pose();

        vehicle.set_pose(VehiclePose::new(Vec3::new(f32::NAN, 0.0, 0.0), 0.0));
        run(&mut rig, 1..3);
        assert_eq!(rig.pose(), held);
    }

    #[test]
    fn leaving_follow_resets_target_and_pan() {
        let vehicle = VehicleHandle::new();
        vehicle.set_pose(VehiclePose::new(Vec3::new(-7.0, 12.0, 1.0), 2.0));
        let mut rig = rig().with_vehicle(vehicle);
        rig.pan_mut().enable();
        rig.set_target(Vec3::new(3.0, 4.0, 5.0));

        rig.toggle_follow();
        assert!(!rig.pan().is_enabled());
        run(&mut rig, 0..10);
        assert_ne!(rig.target(), Vec3::ZERO);

        rig.toggle_follow();
        assert_eq!(rig.mode(), CameraMode::RigControlled);
        assert_eq!(rig.target(), Vec3::ZERO);
        assert_eq!(rig.pan().target_value(), Vec2::ZERO);
    }

    #[test]
    fn pan_drag_shifts_pose_without_rotating() {
        let mut rig = rig();
        run(&mut rig, 0..2);
        let rest = rig.pose();

        rig.pan_mut().enable();
        rig.pointer_down(Vec2::new(400.0, 300.0));
        rig.pointer_move(Vec2::new(300.0, 300.0));
        run(&mut rig, 2..3);
        rig.pointer_up();
        run(&mut rig, 3..300);

        let pose = rig.pose();
        assert!(!pose.eye.abs_diff_eq(rest.eye, 1e-2));
        let view = pose.eye - pose.target;
        assert!(view.abs_diff_eq(rest.eye - rest.target, 1e-3));
        assert_eq!(pose.eye.z, rest.eye.z);
    }

    #[test]
    fn shake_settles_back_to_rest() {
        let mut rig = rig();
        run(&mut rig, 0..5);
        let rest = rig.pose();

        let shake = ShakeImpulse::with_seed(&ShakeOptions::default(), 9);
        rig.add_impulse(Box::new(shake));
        run(&mut rig, 5..10);
        assert_ne!(rig.pose(), rest);
        assert_eq!(rig.base_pose(), rest);

        run(&mut rig, 10..120);
        assert!(rig.impulses().is_empty());
        assert!(rig.pose().eye.abs_diff_eq(rest.eye, 1e-6));
    }

    #[test]
    fn zones_switch_angles() {
        let options = Options {
            zones: vec![ZoneOptions {
                center: [50.0, 0.0],
                half_extents: [10.0, 10.0],
                angle: "projects".to_owned(),
            }],
            ..Options::default()
        };
        let vehicle = VehicleHandle::new();
        vehicle.set_pose(VehiclePose::new(Vec3::ZERO, 0.0));
        let mut rig = CameraRig::new(&options, Viewport::new(800.0, 600.0))
            .with_vehicle(vehicle.clone());

        run(&mut rig, 0..1);
        assert!(!rig.angles().is_transitioning());

        vehicle.set_pose(VehiclePose::new(Vec3::new(48.0, 2.0, 0.0), 0.0));
        run(&mut rig, 1..200);
        assert_eq!(rig.angles().value(), Vec3::new(0.38, -1.4, 1.63));

        vehicle.set_pose(VehiclePose::new(Vec3::new(0.0, 0.0, 0.0), 0.0));
        run(&mut rig, 200..400);
        assert_eq!(rig.angles().value(), Vec3::new(1.135, -1.45, 1.15));
    }

    #[test]
    fn resize_changes_aspect_only() {
        let mut rig = rig();
        run(&mut rig, 0..3);
        let pose = rig.pose();
        rig.resize(Viewport::new(1000.0, 500.0));
        assert_eq!(rig.camera().aspect, 2.0);
        assert_eq!(rig.uniform().aspect, 2.0);
        assert_eq!(rig.pose(), pose);

        rig.resize(Viewport::new(0.0, 500.0));
        assert_eq!(rig.camera().aspect, 2.0);
    }

    #[test]
    fn bad_input_is_ignored() {
        let mut rig = rig();
        rig.wheel(f32::INFINITY);
        rig.set_target(Vec3::NAN);
        rig.tick(Tick::new(f32::NAN, f32::NAN));
        assert!(rig.pose().is_valid());
        assert_eq!(rig.zoom().target_value(), 0.5);
    }
}
