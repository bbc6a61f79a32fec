//! Frame clock producing the ticks that drive the rig.

use web_time::{Duration, Instant};

/// One frame's worth of time, as handed to [`CameraRig::tick`].
///
/// [`CameraRig::tick`]: crate::camera::rig::CameraRig::tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    /// Seconds since the clock started (monotonically increasing).
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

impl Tick {
    /// Build a tick from explicit times.
    #[must_use]
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// The `frame`-th tick of a fixed-rate loop.
    #[must_use]
    pub fn fixed(frame: u64, fps: f32) -> Self {
        let delta = if fps > 0.0 { 1.0 / fps } else { 0.0 };
        Self {
            elapsed: frame as f32 * delta,
            delta,
        }
    }
}

/// Frame clock with FPS calculation and optional frame limiting
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Clock start
    started: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            started: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Returns true if enough time has passed since the last tick.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Advance the clock and return the tick for this frame.
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        Tick {
            elapsed: now.duration_since(self.started).as_secs_f32(),
            delta,
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ticks_advance_elapsed() {
        let t = Tick::fixed(120, 60.0);
        assert!((t.elapsed - 2.0).abs() < 1e-5);
        assert!((t.delta - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(Tick::fixed(5, 0.0).delta, 0.0);
    }

    #[test]
    fn clock_ticks_are_monotonic() {
        let mut clock = FrameClock::new(0);
        assert!(clock.should_tick());
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed >= a.elapsed);
        assert!(b.delta >= 0.0);
        assert!(clock.fps() > 0.0);
    }
}
