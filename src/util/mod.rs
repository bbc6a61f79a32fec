//! Shared utilities for the camera rig.
//!
//! Helpers for frame timing, easing curves, and exponential smoothing.

pub mod easing;
pub mod frame_timing;
pub mod smoothing;
