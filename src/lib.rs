// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera rig for a drivable-car 3D world.
//!
//! Drivecam blends several camera inputs into a single pose per frame:
//! eased look-at tracking, scroll and pinch zoom, grab-and-drag panning
//! resolved by ray casting against a ground plane, a manual orbit mode and a
//! rigid third-person vehicle follow. Additive impulses (camera shake) are
//! layered on top.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the orchestrator, advanced once per frame
//! - [`input::InputProcessor`] - routes window events to the rig
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`vehicle::VehicleHandle`] - shared cell the physics side publishes
//!   the chassis pose into
//!
//! # Frame model
//!
//! Input callbacks only record intent. [`camera::CameraRig::tick`] consumes
//! it in a fixed order, so the expensive ground-plane ray cast runs at most
//! once per frame no matter how many pointer events arrived.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
pub mod vehicle;
pub mod viewport;
pub mod zones;

pub use camera::{CameraMode, CameraPose, CameraRig};
pub use error::RigError;
pub use options::Options;
pub use util::frame_timing::{FrameClock, Tick};
pub use viewport::Viewport;
