//! Joint nodes and connection options

use glam::Quat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::anchor::ConnectionPoint;
use crate::types::Pose;

/// Zero-mass marker node placed exactly at a parent anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub id: Uuid,
    pub name: String,
    /// Pose in the parent part's frame
    pub pose: Pose,
}

impl Joint {
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pose,
        }
    }

    /// Name given to the joint between two parts
    pub fn name_for(parent: &str, child: &str) -> String {
        format!("{parent}_to_{child}_joint")
    }
}

/// Record of one parent-to-child connection, returned by `Figure::connect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointHandle {
    pub name: String,
    /// Joint node inserted between parent and child, if any
    pub joint: Option<Uuid>,
    pub parent: Uuid,
    pub parent_anchor: ConnectionPoint,
    pub child: Uuid,
    pub child_anchor: ConnectionPoint,
    pub spacer: f32,
}

/// Options for `Figure::connect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectOptions {
    /// Rotation applied to the child before it is placed
    pub pre_rotation: Option<Quat>,
    /// Gap between the two anchors along the parent anchor's direction
    pub spacer: f32,
    /// Insert a joint node at the parent anchor
    pub joint: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            pre_rotation: None,
            spacer: 0.0,
            joint: false,
        }
    }
}

impl ConnectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate the child before placement
    pub fn rotation(mut self, rotation: Quat) -> Self {
        self.pre_rotation = Some(rotation);
        self
    }

    /// Rotate the child before placement by XYZ Euler angles in radians
    pub fn rotation_xyz(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pre_rotation = Some(Quat::from_euler(glam::EulerRot::XYZ, x, y, z));
        self
    }

    pub fn spacer(mut self, spacer: f32) -> Self {
        self.spacer = spacer;
        self
    }

    /// Attach the child through a joint node
    pub fn with_joint(mut self) -> Self {
        self.joint = true;
        self
    }

    pub fn joint(mut self, joint: bool) -> Self {
        self.joint = joint;
        self
    }
}
