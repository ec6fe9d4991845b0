//! Pose type definition

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pose (position and orientation) of a node in its parent's frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation,
        }
    }

    /// Create a pose from roll, pitch, yaw in radians
    pub fn from_rpy(position: Vec3, rpy: [f32; 3]) -> Self {
        Self {
            position,
            rotation: Quat::from_euler(EulerRot::XYZ, rpy[0], rpy[1], rpy[2]),
        }
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Roll, pitch, yaw in radians
    pub fn rpy(&self) -> [f32; 3] {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        [x, y, z]
    }

    /// Map a point from this pose's local frame into the parent frame
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }
}

impl From<Mat4> for Pose {
    fn from(matrix: Mat4) -> Self {
        let (_, rotation, position) = matrix.to_scale_rotation_translation();
        Self { position, rotation }
    }
}
