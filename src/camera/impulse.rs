//! Additive camera perturbations layered on top of the rig's own pose.
//!
//! Effects such as the rocket-launch shake never write the camera directly.
//! They are pushed onto an [`ImpulseStack`]; every tick the rig sums the live
//! offsets and translates its computed pose by the total, so neither side
//! fights the other.

use std::fmt;

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::ShakeOptions;
use crate::util::easing::EasingFunction;

/// A time-limited offset added to the camera eye and target.
pub trait CameraImpulse: fmt::Debug {
    /// Advance by `dt` seconds and return this tick's offset, or `None`
    /// once the impulse is spent.
    fn advance(&mut self, dt: f32) -> Option<Vec3>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ShakePhase {
    Jolting { remaining: u32 },
    Settling { from: Vec2, elapsed: f32 },
    Done,
}

/// Random-walk shake followed by an eased return to rest.
///
/// Each tick of the jolt phase adds a random step of up to half the
/// strength on X and Y. Afterwards the offset eases back to zero.
#[derive(Debug, Clone)]
pub struct ShakeImpulse {
    offset: Vec2,
    strength: f32,
    settle_duration: f32,
    phase: ShakePhase,
    rng: StdRng,
}

impl ShakeImpulse {
    /// Shake seeded from the operating system.
    #[must_use]
    pub fn new(options: &ShakeOptions) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Deterministic shake for replays and tests.
    #[must_use]
    pub fn with_seed(options: &ShakeOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: &ShakeOptions, rng: StdRng) -> Self {
        Self {
            offset: Vec2::ZERO,
            strength: options.strength,
            settle_duration: options.settle_duration.max(0.0),
            phase: ShakePhase::Jolting {
                remaining: options.jolts,
            },
            rng,
        }
    }

    fn jolt(&mut self) -> Vec2 {
        let x = self.rng.random::<f32>() - 0.5;
        let y = self.rng.random::<f32>() - 0.5;
        Vec2::new(x, y) * self.strength
    }
}

impl CameraImpulse for ShakeImpulse {
    fn advance(&mut self, dt: f32) -> Option<Vec3> {
        match self.phase {
            ShakePhase::Jolting { remaining } if remaining > 0 => {
                let step = self.jolt();
                self.offset += step;
                self.phase = ShakePhase::Jolting {
                    remaining: remaining - 1,
                };
            }
            ShakePhase::Jolting { .. } => {
                self.phase = ShakePhase::Settling {
                    from: self.offset,
                    elapsed: 0.0,
                };
                return self.advance(dt);
            }
            ShakePhase::Settling { from, elapsed } => {
                let elapsed = elapsed + dt.max(0.0);
                let t = if self.settle_duration > 0.0 {
                    elapsed / self.settle_duration
                } else {
                    1.0
                };
                if t >= 1.0 {
                    self.offset = Vec2::ZERO;
                    self.phase = ShakePhase::Done;
                } else {
                    let eased = EasingFunction::QuadraticOut.evaluate(t);
                    self.offset = from.lerp(Vec2::ZERO, eased);
                    self.phase = ShakePhase::Settling { from, elapsed };
                }
            }
            ShakePhase::Done => return None,
        }
        Some(self.offset.extend(0.0))
    }
}

/// Live impulses, summed every tick.
#[derive(Debug, Default)]
pub struct ImpulseStack {
    impulses: Vec<Box<dyn CameraImpulse>>,
}

impl ImpulseStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an impulse; it contributes from the next tick on.
    pub fn push(&mut self, impulse: Box<dyn CameraImpulse>) {
        self.impulses.push(impulse);
    }

    /// Advance every impulse, drop the spent ones, return the summed offset.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let mut total = Vec3::ZERO;
        self.impulses.retain_mut(|impulse| match impulse.advance(dt) {
            Some(offset) if offset.is_finite() => {
                total += offset;
                true
            }
            Some(_) => {
                log::warn!("dropping camera impulse with non-finite offset");
                false
            }
            None => false,
        });
        total
    }

    /// Number of live impulses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.impulses.len()
    }

    /// Whether no impulse is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.impulses.is_empty()
    }

    /// Drop every impulse at once.
    pub fn clear(&mut self) {
        self.impulses.clear();
    }
}
