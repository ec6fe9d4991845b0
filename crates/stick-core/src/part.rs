//! Capsule body part definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::anchor::{ConnectionPoint, MarkerColor};
use crate::error::FigureError;
use crate::types::{AnatomicalAxis, Pose};

/// Radius of the spheres marking a part's anchors
pub const MARKER_RADIUS: f32 = 0.025;

/// A rigid body segment shaped as a capsule (cylinder + two hemispherical caps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    /// Cap radius
    radius: f32,
    /// Length of the cylindrical section, excluding the caps
    height: f32,
    /// Material color (RGBA), opaque to the connector
    pub color: [f32; 4],
    /// Long-axis orientation the part was created with
    axis: AnatomicalAxis,
    /// Emit anchor markers for rendering
    pub show_markers: bool,
    /// Pose in the parent's frame
    pub pose: Pose,
}

impl Part {
    /// Create a new vertical part, validating the capsule shape
    pub fn new(name: impl Into<String>, radius: f32, height: f32) -> Result<Self, FigureError> {
        Self::with_axis(name, radius, height, AnatomicalAxis::Transverse)
    }

    /// Create a new part whose long axis starts along `axis`
    pub fn with_axis(
        name: impl Into<String>,
        radius: f32,
        height: f32,
        axis: AnatomicalAxis,
    ) -> Result<Self, FigureError> {
        let name = name.into();
        let valid = radius.is_finite() && height.is_finite() && radius > 0.0 && height >= 0.0;
        if !valid {
            return Err(FigureError::InvalidShape {
                name,
                radius,
                height,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            radius,
            height,
            color: [1.0, 1.0, 1.0, 1.0],
            axis,
            show_markers: false,
            pose: Pose::from_rotation(axis.rotation()),
        })
    }

    /// Set the material color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable anchor markers
    pub fn with_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn axis(&self) -> AnatomicalAxis {
        self.axis
    }

    /// Distance from the center to a cap pole
    pub fn axial_extent(&self) -> f32 {
        self.height / 2.0 + self.radius
    }

    /// Distance from the center to the equator
    pub fn radial_extent(&self) -> f32 {
        self.radius
    }

    /// Total pole-to-pole length
    pub fn total_length(&self) -> f32 {
        self.height + 2.0 * self.radius
    }

    /// Local-space position of an anchor on the capsule surface
    pub fn anchor_local(&self, point: ConnectionPoint) -> Vec3 {
        let r = self.radial_extent();
        let a = self.axial_extent();

        match point {
            ConnectionPoint::X1 => Vec3::new(-r, 0.0, 0.0),
            ConnectionPoint::X2 => Vec3::new(r, 0.0, 0.0),
            ConnectionPoint::Y1 => Vec3::new(0.0, a, 0.0),
            ConnectionPoint::Y2 => Vec3::new(0.0, -a, 0.0),
            ConnectionPoint::Z1 => Vec3::new(0.0, 0.0, r),
            ConnectionPoint::Z2 => Vec3::new(0.0, 0.0, -r),
        }
    }

    /// Outward unit vector of an anchor in local space
    pub fn direction_vector(&self, point: ConnectionPoint) -> Vec3 {
        point.direction()
    }

    /// Markers for all six anchors, or none if markers are disabled
    pub fn anchor_markers(&self) -> Vec<AnchorMarker> {
        if !self.show_markers {
            return Vec::new();
        }

        ConnectionPoint::ALL
            .into_iter()
            .map(|point| AnchorMarker {
                point,
                position: self.anchor_local(point),
                radius: MARKER_RADIUS,
                color: point.marker_color(),
            })
            .collect()
    }
}

/// Small sphere drawn at an anchor for debugging connections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorMarker {
    pub point: ConnectionPoint,
    /// Position relative to part origin
    pub position: Vec3,
    pub radius: f32,
    pub color: MarkerColor,
}
