//! Anatomical axis of a body part

use std::f32::consts::FRAC_PI_2;

use glam::Quat;
use serde::{Deserialize, Serialize};

/// Direction of a part's long axis when it is first created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnatomicalAxis {
    /// Vertical (Y-axis)
    #[default]
    Transverse,
    /// Horizontal, left-right (X-axis)
    Sagittal,
    /// Front-back (Z-axis)
    Coronal,
}

impl AnatomicalAxis {
    /// Initial rotation that lays the capsule's Y axis along this axis
    pub fn rotation(&self) -> Quat {
        match self {
            AnatomicalAxis::Transverse => Quat::IDENTITY,
            AnatomicalAxis::Sagittal => Quat::from_rotation_z(FRAC_PI_2),
            AnatomicalAxis::Coronal => Quat::from_rotation_x(FRAC_PI_2),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnatomicalAxis::Transverse => "Transverse",
            AnatomicalAxis::Sagittal => "Sagittal",
            AnatomicalAxis::Coronal => "Coronal",
        }
    }

    pub fn all() -> &'static [AnatomicalAxis] {
        &[
            AnatomicalAxis::Transverse,
            AnatomicalAxis::Sagittal,
            AnatomicalAxis::Coronal,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_long_axis_direction() {
        let along = |axis: AnatomicalAxis| axis.rotation() * Vec3::Y;

        assert!((along(AnatomicalAxis::Transverse) - Vec3::Y).length() < 1e-6);
        assert!((along(AnatomicalAxis::Sagittal) - Vec3::NEG_X).length() < 1e-6);
        assert!((along(AnatomicalAxis::Coronal) - Vec3::Z).length() < 1e-6);
    }
}
