//! Headless drivecam demo.
//!
//! Drives a scripted vehicle around a circle at a fixed 60 fps, switches
//! through the camera modes, fires a shake and logs the camera pose as JSON
//! once per simulated second. Pass an options TOML as the first argument to
//! try a preset; run with `RUST_LOG=info` (or `debug` for telemetry).

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use drivecam::camera::{CameraPose, OrbitGesture};
use drivecam::vehicle::{VehicleHandle, VehicleMotion, VehiclePose};
use drivecam::{CameraMode, CameraRig, Options, Tick, Viewport};
use glam::{Vec2, Vec3};
use serde::Serialize;

const FPS: f32 = 60.0;
const SECONDS: u64 = 20;
const TRACK_RADIUS: f32 = 30.0;
/// Radians per second around the track.
const ANGULAR_SPEED: f32 = 0.3;

#[derive(Serialize)]
struct PoseLine {
    second: u64,
    mode: CameraMode,
    pose: CameraPose,
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                return;
            }
        },
        None => Options::default(),
    };

    run(&options);
}

/// Vehicle on the circular track `elapsed` seconds in.
fn scripted_vehicle(elapsed: f32) -> (VehiclePose, VehicleMotion) {
    let angle = elapsed * ANGULAR_SPEED;
    let position = Vec3::new(
        TRACK_RADIUS * angle.cos(),
        TRACK_RADIUS * angle.sin(),
        0.5,
    );
    let speed = TRACK_RADIUS * ANGULAR_SPEED;
    let motion = VehicleMotion {
        local_speed: Vec3::new(speed, 0.0, 0.0),
        local_acceleration: Vec3::new(0.0, speed * ANGULAR_SPEED, 0.0),
    };
    (VehiclePose::new(position, angle + FRAC_PI_2), motion)
}

fn run(options: &Options) {
    let vehicle = VehicleHandle::new();
    let mut rig = CameraRig::new(options, Viewport::new(1280.0, 720.0))
        .with_vehicle(vehicle.clone());

    let frames = SECONDS * FPS as u64;
    for frame in 0..frames {
        let tick = Tick::fixed(frame, FPS);
        let (pose, motion) = scripted_vehicle(tick.elapsed);
        vehicle.set_pose(pose);
        vehicle.set_motion(motion);

        match frame {
            60 => rig.set_angle("projects"),
            180 => rig.toggle_follow(),
            480 => rig.shake(),
            720 => rig.toggle_orbit(),
            721..=840 => {
                rig.orbit_gesture(OrbitGesture::Rotate(Vec2::new(2.0, 0.5)));
            }
            960 => rig.toggle_orbit(),
            _ => {}
        }

        rig.tick(tick);

        if frame % FPS as u64 == 0 {
            log_pose(frame / FPS as u64, &rig);
        }
    }
}

fn log_pose(second: u64, rig: &CameraRig) {
    let line = PoseLine {
        second,
        mode: rig.mode(),
        pose: rig.pose(),
    };
    match serde_json::to_string(&line) {
        Ok(json) => log::info!("{json}"),
        Err(e) => log::error!("failed to serialize camera pose: {e}"),
    }
}
