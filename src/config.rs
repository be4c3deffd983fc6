//! Viewer settings with TOML file support.
//!
//! Every section uses `#[serde(default)]`, so a file only needs the values it
//! overrides. Without a file the built-in defaults reproduce the stock scene.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub wheel: WheelConfig,
    pub scene: SceneConfig,
}

impl ViewerConfig {
    /// Loads a config file. Missing fields use defaults; out-of-range values
    /// are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ViewerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values the renderer and scene cannot work with: an empty
    /// window, a depth range `perspective` rejects, or a degenerate wheel.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(
                "window",
                format!("size must be non-zero, got {}x{}", self.window.width, self.window.height),
            ));
        }

        let ProjectionConfig { znear, zfar } = self.projection;
        if !(znear.is_finite() && znear > 0.0) {
            return Err(invalid("projection.znear", format!("must be positive, got {znear}")));
        }
        if !(zfar.is_finite() && zfar > znear) {
            return Err(invalid(
                "projection.zfar",
                format!("must be greater than znear ({znear}), got {zfar}"),
            ));
        }

        let wheel = &self.wheel;
        if !(wheel.radius.is_finite() && wheel.radius > 0.0) {
            return Err(invalid("wheel.radius", format!("must be positive, got {}", wheel.radius)));
        }
        if wheel.cabins == 0 {
            return Err(invalid("wheel.cabins", "needs at least one cabin".into()));
        }
        if !(wheel.max_speed.is_finite() && wheel.max_speed >= 0.0) {
            return Err(invalid(
                "wheel.max_speed",
                format!("must be zero or more, got {}", wheel.max_speed),
            ));
        }

        let camera = &self.camera;
        for (field, value) in [
            ("camera.walk_speed", camera.walk_speed),
            ("camera.sprint_multiplier", camera.sprint_multiplier),
            ("camera.mouse_sensitivity", camera.mouse_sensitivity),
            ("camera.cursor_scale", camera.cursor_scale),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }
        Ok(())
    }

    /// Writes the config as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ViewerError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)
    }
}

fn invalid(field: &'static str, reason: String) -> ViewerError {
    ViewerError::InvalidSetting { field, reason }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ferris-view".into(),
            width: 1920,
            height: 1080,
        }
    }
}

/// Input-to-motion rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Free camera speed in units per second.
    pub walk_speed: f32,
    /// Speed factor while sprinting.
    pub sprint_multiplier: f32,
    /// Degrees of yaw/pitch per unit of (scaled) mouse travel.
    pub mouse_sensitivity: f32,
    /// Applied to raw mouse motion before the camera's own sensitivity.
    pub cursor_scale: f32,
    /// Orbit camera angular speed in radians per second.
    pub orbit_rate: f32,
    /// Orbit radius change in units per second.
    pub radius_speed: f32,
    /// Orbit center height change in units per second.
    pub center_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 0.1,
            cursor_scale: 0.5,
            orbit_rate: 1.0,
            radius_speed: 5.0,
            center_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    pub znear: f32,
    pub zfar: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub radius: f32,
    pub cabins: u32,
    /// Radians per second at startup.
    pub angular_speed: f32,
    /// Speed change per second while a speed key is held.
    pub speed_step: f32,
    pub max_speed: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            cabins: 8,
            angular_speed: 0.35,
            speed_step: 0.5,
            max_speed: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub clear_color: [f32; 3],
    pub shininess: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3],
            shininess: 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ViewerConfig = toml::from_str(
            r"
[camera]
walk_speed = 8.0

[wheel]
cabins = 12
",
        )
        .unwrap();

        assert_eq!(config.camera.walk_speed, 8.0);
        assert_eq!(config.camera.orbit_rate, 1.0);
        assert_eq!(config.wheel.cabins, 12);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: ViewerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("ferris-view-config-{}", std::process::id()));
        let path = dir.join("viewer.toml");

        let mut config = ViewerConfig::default();
        config.projection.zfar = 250.0;
        config.window.title = "wheel".into();
        config.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ViewerConfig::load(Path::new("/nonexistent/ferris-view.toml")).unwrap_err();
        assert!(matches!(err, ViewerError::ConfigRead { .. }));
        assert!(err.to_string().contains("ferris-view.toml"));
    }

    #[test]
    fn test_bad_value_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("ferris-view-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[wheel]\ncabins = \"many\"\n").unwrap();

        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ViewerError::ConfigParse { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    fn load_str(name: &str, content: &str) -> Result<ViewerConfig> {
        let dir = std::env::temp_dir().join(format!("ferris-view-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("viewer.toml");
        std::fs::write(&path, content).unwrap();
        let result = ViewerConfig::load(&path);
        std::fs::remove_dir_all(&dir).unwrap();
        result
    }

    fn rejected_field(result: Result<ViewerConfig>) -> &'static str {
        match result {
            Err(ViewerError::InvalidSetting { field, .. }) => field,
            other => panic!("expected an invalid setting, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        ViewerConfig::default().validate().unwrap();
    }

    #[test]
    fn test_load_rejects_bad_depth_range() {
        let zero_near = load_str("znear", "[projection]\nznear = 0.0\n");
        assert_eq!(rejected_field(zero_near), "projection.znear");

        let negative_near = load_str("negnear", "[projection]\nznear = -1.0\n");
        assert_eq!(rejected_field(negative_near), "projection.znear");

        let far_before_near = load_str("zfar", "[projection]\nznear = 10.0\nzfar = 5.0\n");
        assert_eq!(rejected_field(far_before_near), "projection.zfar");

        let equal = load_str("zequal", "[projection]\nznear = 1.0\nzfar = 1.0\n");
        assert_eq!(rejected_field(equal), "projection.zfar");
    }

    #[test]
    fn test_load_rejects_empty_window() {
        let result = load_str("window", "[window]\nwidth = 0\n");
        assert_eq!(rejected_field(result), "window");
    }

    #[test]
    fn test_load_rejects_degenerate_wheel() {
        let negative = load_str("radius", "[wheel]\nradius = -3.0\n");
        assert_eq!(rejected_field(negative), "wheel.radius");

        let empty = load_str("cabins", "[wheel]\ncabins = 0\n");
        assert_eq!(rejected_field(empty), "wheel.cabins");
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut config = ViewerConfig::default();
        config.projection.zfar = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = ViewerConfig::default();
        config.camera.mouse_sensitivity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = load_str("message", "[projection]\nznear = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("projection.znear"));
    }
}
