//! Centralized camera rig options with TOML preset support.
//!
//! All tweakable settings (projection, easing, zoom, pan, angle presets,
//! orbit, follow, shake, zones, keybindings) are consolidated here. Options
//! serialize to/from TOML so a tuned rig can be saved as a preset.

mod angles;
mod camera;
mod controls;
mod effects;
mod keybindings;
mod modes;

use std::path::Path;

pub use angles::{AngleOptions, DEFAULT_ANGLE};
pub use camera::CameraOptions;
pub use controls::{PanOptions, RigOptions, ZoomOptions};
pub use effects::{ShakeOptions, ZoneOptions};
pub use keybindings::KeybindingOptions;
pub use modes::{FollowOptions, OrbitOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection parameters.
    pub camera: CameraOptions,
    /// Target easing and smoothing policy.
    pub rig: RigOptions,
    /// Scroll/pinch zoom.
    pub zoom: ZoomOptions,
    /// Drag panning.
    pub pan: PanOptions,
    /// Angle presets and transitions.
    pub angles: AngleOptions,
    /// Manual orbit mode.
    pub orbit: OrbitOptions,
    /// Vehicle follow mode.
    pub follow: FollowOptions,
    /// Camera shake impulse.
    pub shake: ShakeOptions,
    /// Angle zones along the drive.
    #[schemars(skip)]
    pub zones: Vec<ZoneOptions>,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, RigError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the rig cannot run with.
    pub fn validate(&self) -> Result<(), RigError> {
        let unit = |value: f32| (0.0..=1.0).contains(&value);

        check(
            unit(self.rig.target_easing),
            "rig.target_easing must be in [0, 1]",
        )?;
        check(
            self.rig.reference_fps.is_finite() && self.rig.reference_fps > 0.0,
            "rig.reference_fps must be finite and positive",
        )?;
        check(unit(self.zoom.easing), "zoom.easing must be in [0, 1]")?;
        check(unit(self.pan.easing), "pan.easing must be in [0, 1]")?;
        check(
            unit(self.follow.smooth_factor),
            "follow.smooth_factor must be in [0, 1]",
        )?;
        check(
            unit(self.zoom.initial_value),
            "zoom.initial_value must be in [0, 1]",
        )?;
        check(
            self.zoom.min_distance > 0.0,
            "zoom.min_distance must be positive",
        )?;
        check(
            self.zoom.amplitude >= 0.0,
            "zoom.amplitude must not be negative",
        )?;
        check(
            self.zoom.wheel_sensitivity.is_finite(),
            "zoom.wheel_sensitivity must be finite",
        )?;
        check(self.pan.plane_size > 0.0, "pan.plane_size must be positive")?;
        check(
            self.camera.znear > 0.0 && self.camera.zfar > self.camera.znear,
            "camera clip planes must satisfy 0 < znear < zfar",
        )?;
        check(
            self.camera.fovy > 0.0 && self.camera.fovy < 180.0,
            "camera.fovy must be in (0, 180)",
        )?;
        check(
            self.angles.transition_duration >= 0.0,
            "angles.transition_duration must not be negative",
        )?;
        check(
            !self.angles.presets.is_empty(),
            "angles.presets must not be empty",
        )?;
        for (name, direction) in &self.angles.presets {
            let finite = direction.iter().all(|c| c.is_finite());
            let nonzero = direction.iter().any(|c| *c != 0.0);
            if !(finite && nonzero) {
                return Err(RigError::InvalidOptions(format!(
                    "angle preset '{name}' must be a finite non-zero vector"
                )));
            }
        }
        check(
            self.orbit.min_distance > 0.0
                && self.orbit.max_distance >= self.orbit.min_distance,
            "orbit distances must satisfy 0 < min_distance <= max_distance",
        )?;
        check(
            self.shake.settle_duration >= 0.0,
            "shake.settle_duration must not be negative",
        )?;
        Ok(())
    }
}

fn check(condition: bool, message: &str) -> Result<(), RigError> {
    if condition {
        Ok(())
    } else {
        Err(RigError::InvalidOptions(message.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[zoom]
initial_value = 0.3
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.zoom.initial_value, 0.3);
        // Everything else should be default
        assert_eq!(opts.zoom.min_distance, 14.0);
        assert_eq!(opts.rig.target_easing, 0.15);
        assert_eq!(opts.angles.presets.len(), 2);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn invalid_easing_is_rejected() {
        let toml_str = r"
[pan]
easing = 1.5
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, RigError::InvalidOptions(_)));
    }

    #[test]
    fn bad_reference_fps_is_rejected() {
        for value in ["nan", "inf", "0.0", "-60.0"] {
            let toml_str = format!(
                "[rig]\nsmoothing = \"time_scaled\"\nreference_fps = {value}\n"
            );
            let err = Options::from_toml_str(&toml_str).unwrap_err();
            assert!(matches!(err, RigError::InvalidOptions(_)), "{value}");
        }
    }

    #[test]
    fn zero_preset_is_rejected() {
        let mut opts = Options::default();
        let _ = opts.angles.presets.insert("flat".into(), [0.0, 0.0, 0.0]);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[zoom\nmin_distance = ").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::ToggleFollow)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ToggleOrbit)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_survive_loading() {
        let toml_str = r#"
[keybindings.bindings]
toggle_follow = "KeyF"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyF"),
            Some(KeyAction::ToggleFollow)
        );
        assert_eq!(opts.keybindings.lookup("KeyO"), None);
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ToggleOrbit)
        );
    }

    #[test]
    fn rebinding_onto_a_default_key_does_not_double_bind() {
        let toml_str = r#"
[keybindings.bindings]
toggle_follow = "KeyC"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ToggleFollow)
        );
        let bindings = &opts.keybindings.bindings;
        assert!(!bindings.contains_key(&KeyAction::ToggleOrbit));
    }

    #[test]
    fn zones_parse_from_array_of_tables() {
        let toml_str = r#"
[[zones]]
center = [40.0, -10.0]
half_extents = [20.0, 10.0]
angle = "projects"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.zones.len(), 1);
        assert_eq!(opts.zones[0].center, [40.0, -10.0]);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir().join(format!(
            "drivecam-presets-{}",
            std::process::id()
        ));
        let path = dir.join("tight.toml");
        let mut opts = Options::default();
        opts.zoom.min_distance = 9.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.zoom.min_distance, 9.0);
        assert_eq!(Options::list_presets(&dir), vec!["tight".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("zoom"));
        assert!(props.contains_key("pan"));
        assert!(props.contains_key("follow"));

        // Skipped sections should be absent
        assert!(!props.contains_key("zones"));
        assert!(!props.contains_key("keybindings"));

        let zoom = &props["zoom"]["properties"];
        assert!(zoom.get("min_distance").is_some());
        assert!(zoom.get("initial_value").is_none());
    }
}
