//! Scene configuration module
//!
//! Figure defaults, camera, arrow decoration and background, loaded from a
//! RON file in the OS configuration directory.

mod manager;

pub use manager::{ConfigError, ConfigManager, parse_config};

use serde::{Deserialize, Serialize};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Defaults applied when building figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FigureConfig {
    /// Gap between connected anchors
    pub spacer: f32,
    /// Show anchor markers on every part
    pub show_markers: bool,
    /// Insert joint nodes at connections
    pub use_joints: bool,
    /// Part color (RGBA)
    pub color: [f32; 4],
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            spacer: 0.0,
            show_markers: true,
            use_joints: false,
            color: WHITE,
        }
    }
}

/// Orthographic camera looking down -Z
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    pub orthographic_scale: f32,
    pub z_position: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orthographic_scale: 4.0,
            z_position: 8.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

/// Forward (+Z) reference arrow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArrowConfig {
    pub enabled: bool,
    pub length: f32,
    pub shaft_radius: f32,
    pub color: [f32; 4],
    pub position: [f32; 3],
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            length: 1.0,
            shaft_radius: 0.02,
            color: [1.0, 0.8, 0.0, 1.0],
            position: [0.0, 1.5, 1.0],
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Background color (RGBA)
    #[serde(default = "default_background")]
    pub background: [f32; 4],
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub arrow: ArrowConfig,
}

fn default_background() -> [f32; 4] {
    WHITE
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            background: WHITE,
            figure: FigureConfig::default(),
            camera: CameraConfig::default(),
            arrow: ArrowConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SceneConfig = ron::from_str("(version: 1, figure: (spacer: 0.05, show_markers: false, use_joints: true, color: (1.0, 0.0, 0.0, 1.0)))").unwrap();

        assert_eq!(config.figure.spacer, 0.05);
        assert!(config.figure.use_joints);
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.background, WHITE);
    }
}
