//! Scene description handed to a renderer
//!
//! The scene flattens a figure into world-space placements and adds the
//! camera and the forward arrow from the configuration.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use stick_core::{ConnectionPoint, Figure, Node, Pose};

use crate::config::{ArrowConfig, CameraConfig, SceneConfig};
use crate::error::SceneError;

/// Output format for scene export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Ron,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Part,
    Joint,
}

/// Anchor marker in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldMarker {
    pub anchor: ConnectionPoint,
    pub position: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

/// A figure node with its local and world placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<String>,
    /// Capsule radius and cylinder height, parts only
    pub capsule: Option<(f32, f32)>,
    pub color: Option<[f32; 4]>,
    pub local: Pose,
    pub world: Pose,
    pub markers: Vec<WorldMarker>,
}

/// Orthographic camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoCamera {
    pub scale: f32,
    pub position: Vec3,
    pub z_near: f32,
    pub z_far: f32,
}

impl From<&CameraConfig> for OrthoCamera {
    fn from(config: &CameraConfig) -> Self {
        Self {
            scale: config.orthographic_scale,
            position: Vec3::new(0.0, 0.0, config.z_position),
            z_near: config.z_near,
            z_far: config.z_far,
        }
    }
}

/// Piece of the arrow, in the arrow's own frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArrowSegment {
    Cylinder { radius: f32, height: f32, offset: Vec3 },
    Cone { bottom_radius: f32, height: f32, offset: Vec3 },
}

/// Reference arrow pointing forward (+Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub pose: Pose,
    pub color: [f32; 4],
    pub shaft: ArrowSegment,
    pub head: ArrowSegment,
}

impl Arrow {
    /// Build along +Y (shaft 80% of the length, cone the rest), then tip onto +Z
    pub fn new(config: &ArrowConfig) -> Self {
        let length = config.length;
        Self {
            pose: Pose::new(Vec3::from(config.position), Quat::from_rotation_x(FRAC_PI_2)),
            color: config.color,
            shaft: ArrowSegment::Cylinder {
                radius: config.shaft_radius,
                height: length * 0.8,
                offset: Vec3::new(0.0, length * 0.4, 0.0),
            },
            head: ArrowSegment::Cone {
                bottom_radius: config.shaft_radius * 2.5,
                height: length * 0.2,
                offset: Vec3::new(0.0, length * 0.9, 0.0),
            },
        }
    }

    /// Direction the arrow points in world space
    pub fn direction(&self) -> Vec3 {
        self.pose.rotation * Vec3::Y
    }
}

/// Everything a renderer needs to draw a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub name: String,
    pub background: [f32; 4],
    /// Attached nodes, depth-first from the root
    pub nodes: Vec<PlacedNode>,
    pub camera: OrthoCamera,
    pub arrow: Option<Arrow>,
}

impl SceneDescription {
    pub fn build(figure: &Figure, config: &SceneConfig) -> Self {
        let nodes: Vec<PlacedNode> = figure
            .world_transforms()
            .into_iter()
            .filter_map(|(id, world)| {
                let node = figure.node(id)?;
                let parent = figure
                    .parent_of(id)
                    .and_then(|p| figure.node(p))
                    .map(|p| p.name().to_string());

                let (kind, capsule, color, markers) = match node {
                    Node::Part(part) => {
                        let markers = part
                            .anchor_markers()
                            .into_iter()
                            .map(|m| WorldMarker {
                                anchor: m.point,
                                position: world.transform_point3(m.position),
                                radius: m.radius,
                                color: m.color.rgba(),
                            })
                            .collect();
                        (
                            NodeKind::Part,
                            Some((part.radius(), part.height())),
                            Some(part.color),
                            markers,
                        )
                    }
                    Node::Joint(_) => (NodeKind::Joint, None, None, Vec::new()),
                };

                Some(PlacedNode {
                    name: node.name().to_string(),
                    kind,
                    parent,
                    capsule,
                    color,
                    local: *node.pose(),
                    world: Pose::from(world),
                    markers,
                })
            })
            .collect();

        tracing::info!("Scene '{}' has {} placed nodes", figure.name, nodes.len());

        Self {
            name: figure.name.clone(),
            background: config.background,
            nodes,
            camera: OrthoCamera::from(&config.camera),
            arrow: config.arrow.enabled.then(|| Arrow::new(&config.arrow)),
        }
    }

    pub fn node(&self, name: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn export(&self, format: ExportFormat) -> Result<String, SceneError> {
        match format {
            ExportFormat::Ron => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                    .map_err(|e| SceneError::Serialize(e.to_string()))
            }
            ExportFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| SceneError::Serialize(e.to_string()))
            }
        }
    }
}
