//! Figure description files
//!
//! A description lists the parts of a figure and the ordered connections
//! between them. Building one is two-phase: every part and anchor is
//! validated first, then the parts are connected in order.

use std::collections::HashMap;
use std::path::Path;

use glam::Quat;
use serde::{Deserialize, Serialize};
use stick_core::{AnatomicalAxis, ConnectOptions, ConnectionPoint, Figure, FigureError, Part};

use crate::config::FigureConfig;
use crate::error::SceneError;

/// Shape and look of one part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDescription {
    pub name: String,
    pub radius: f32,
    pub height: f32,
    /// Falls back to the configured figure color
    #[serde(default)]
    pub color: Option<[f32; 4]>,
    #[serde(default)]
    pub axis: AnatomicalAxis,
    /// Falls back to the configured marker setting
    #[serde(default)]
    pub show_markers: Option<bool>,
}

impl PartDescription {
    pub fn new(name: impl Into<String>, radius: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            radius,
            height,
            color: None,
            axis: AnatomicalAxis::Transverse,
            show_markers: None,
        }
    }
}

/// One parent-to-child connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescription {
    pub parent: String,
    /// Anchor label ("Y2") or anatomical name ("inferior")
    pub parent_anchor: String,
    pub child: String,
    pub child_anchor: String,
    /// Pre-rotation of the child, XYZ Euler angles in degrees
    #[serde(default)]
    pub rotation_deg: Option<[f32; 3]>,
    /// Falls back to the configured spacer
    #[serde(default)]
    pub spacer: Option<f32>,
    /// Falls back to the configured joint setting
    #[serde(default)]
    pub joint: Option<bool>,
}

impl ConnectionDescription {
    pub fn new(
        parent: impl Into<String>,
        parent_anchor: ConnectionPoint,
        child: impl Into<String>,
        child_anchor: ConnectionPoint,
    ) -> Self {
        Self {
            parent: parent.into(),
            parent_anchor: parent_anchor.label().to_string(),
            child: child.into(),
            child_anchor: child_anchor.label().to_string(),
            rotation_deg: None,
            spacer: None,
            joint: None,
        }
    }

    pub fn rotated(mut self, degrees: [f32; 3]) -> Self {
        self.rotation_deg = Some(degrees);
        self
    }

    fn options(&self, defaults: &FigureConfig) -> ConnectOptions {
        let mut options = ConnectOptions::new()
            .spacer(self.spacer.unwrap_or(defaults.spacer))
            .joint(self.joint.unwrap_or(defaults.use_joints));
        if let Some([x, y, z]) = self.rotation_deg {
            options = options.rotation(Quat::from_euler(
                glam::EulerRot::XYZ,
                x.to_radians(),
                y.to_radians(),
                z.to_radians(),
            ));
        }
        options
    }
}

/// A whole figure: parts, root and connection order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureDescription {
    pub name: String,
    /// Name of the root part
    pub root: String,
    pub parts: Vec<PartDescription>,
    pub connections: Vec<ConnectionDescription>,
}

impl FigureDescription {
    /// The default stick figure: head, neck, shoulder bar, torso and two arms
    pub fn stick_figure() -> Self {
        use ConnectionPoint::*;

        let quarter_turn = [0.0, 0.0, 90.0];
        let undo_quarter_turn = [0.0, 0.0, -90.0];

        Self {
            name: "StickFigure".to_string(),
            root: "Head".to_string(),
            parts: vec![
                PartDescription::new("Head", 0.5, 1.0),
                PartDescription::new("Neck", 0.1, 0.4),
                PartDescription::new("Shoulders", 0.1, 2.0),
                PartDescription::new("Torso", 0.4, 3.0),
                PartDescription::new("LeftArm", 0.1, 2.0),
                PartDescription::new("RightArm", 0.1, 2.0),
            ],
            connections: vec![
                // Head sits atop the neck
                ConnectionDescription::new("Head", Y2, "Neck", Y1),
                // Shoulder bar lies horizontally under the neck
                ConnectionDescription::new("Neck", Y2, "Shoulders", X2).rotated(quarter_turn),
                // Torso hangs from the bar, turned back upright
                ConnectionDescription::new("Shoulders", X1, "Torso", Y1)
                    .rotated(undo_quarter_turn),
                // Arms hang from both ends of the bar
                ConnectionDescription::new("Shoulders", Y1, "LeftArm", Y1)
                    .rotated(undo_quarter_turn),
                ConnectionDescription::new("Shoulders", Y2, "RightArm", Y1)
                    .rotated(undo_quarter_turn),
            ],
        }
    }

    /// Parse a description from RON text
    pub fn from_ron(text: &str) -> Result<Self, SceneError> {
        ron::from_str(text).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Load a description from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SceneError::Io(e.to_string()))?;
        let description = Self::from_ron(&text)?;
        tracing::info!("Loaded figure description '{}' from {:?}", description.name, path);
        Ok(description)
    }

    /// Serialize the description as pretty RON
    pub fn to_ron(&self) -> Result<String, SceneError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))
    }

    /// Build the figure
    pub fn build(&self, defaults: &FigureConfig) -> Result<Figure, SceneError> {
        // Phase one: shapes and anchors
        let mut parts: HashMap<&str, Part> = HashMap::new();
        for desc in &self.parts {
            let part = Part::with_axis(&desc.name, desc.radius, desc.height, desc.axis)?
                .with_color(desc.color.unwrap_or(defaults.color))
                .with_markers(desc.show_markers.unwrap_or(defaults.show_markers));
            if parts.insert(desc.name.as_str(), part).is_some() {
                return Err(FigureError::DuplicateName(desc.name.clone()).into());
            }
        }

        let mut plan = Vec::with_capacity(self.connections.len());
        for conn in &self.connections {
            for name in [&conn.parent, &conn.child] {
                if !parts.contains_key(name.as_str()) {
                    return Err(SceneError::UnknownPart(name.clone()));
                }
            }
            let parent_anchor: ConnectionPoint = conn.parent_anchor.parse()?;
            let child_anchor: ConnectionPoint = conn.child_anchor.parse()?;
            plan.push((conn, parent_anchor, child_anchor));
        }

        // Phase two: placement
        let root = parts
            .remove(self.root.as_str())
            .ok_or_else(|| SceneError::UnknownPart(self.root.clone()))?;
        let mut figure = Figure::new(&self.name, root);
        for desc in &self.parts {
            if let Some(part) = parts.remove(desc.name.as_str()) {
                figure.add_part(part)?;
            }
        }

        for (conn, parent_anchor, child_anchor) in plan {
            let lookup = |name: &String| {
                figure
                    .find_id_by_name(name)
                    .ok_or_else(|| SceneError::UnknownPart(name.clone()))
            };
            let parent_id = lookup(&conn.parent)?;
            let child_id = lookup(&conn.child)?;
            figure.connect(
                parent_id,
                parent_anchor,
                child_id,
                child_anchor,
                conn.options(defaults),
            )?;
        }

        tracing::info!(
            "Built figure '{}' with {} parts and {} joints",
            figure.name,
            figure.part_count(),
            figure.joint_count()
        );
        Ok(figure)
    }
}
