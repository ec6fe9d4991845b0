//! Connection points on a capsule part

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::FigureError;

/// One of six axis-aligned anchor labels in a part's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionPoint {
    /// Left side (-X)
    X1,
    /// Right side (+X)
    X2,
    /// Top cap pole (+Y)
    Y1,
    /// Bottom cap pole (-Y)
    Y2,
    /// Front (+Z)
    Z1,
    /// Back (-Z)
    Z2,
}

/// Marker color category for an anchor, by axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerColor {
    Red,
    Blue,
    Yellow,
}

impl MarkerColor {
    /// RGBA color used when rendering the marker
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            MarkerColor::Red => [1.0, 0.23, 0.19, 1.0],
            MarkerColor::Blue => [0.0, 0.48, 1.0, 1.0],
            MarkerColor::Yellow => [1.0, 0.8, 0.0, 1.0],
        }
    }
}

impl ConnectionPoint {
    pub const ALL: [ConnectionPoint; 6] = [
        ConnectionPoint::X1,
        ConnectionPoint::X2,
        ConnectionPoint::Y1,
        ConnectionPoint::Y2,
        ConnectionPoint::Z1,
        ConnectionPoint::Z2,
    ];

    /// Outward unit vector along the anchor's axis
    pub fn direction(&self) -> Vec3 {
        match self {
            ConnectionPoint::X1 => Vec3::NEG_X,
            ConnectionPoint::X2 => Vec3::X,
            ConnectionPoint::Y1 => Vec3::Y,
            ConnectionPoint::Y2 => Vec3::NEG_Y,
            ConnectionPoint::Z1 => Vec3::Z,
            ConnectionPoint::Z2 => Vec3::NEG_Z,
        }
    }

    /// The anchor on the other end of the same axis
    pub fn opposite(&self) -> ConnectionPoint {
        match self {
            ConnectionPoint::X1 => ConnectionPoint::X2,
            ConnectionPoint::X2 => ConnectionPoint::X1,
            ConnectionPoint::Y1 => ConnectionPoint::Y2,
            ConnectionPoint::Y2 => ConnectionPoint::Y1,
            ConnectionPoint::Z1 => ConnectionPoint::Z2,
            ConnectionPoint::Z2 => ConnectionPoint::Z1,
        }
    }

    /// True for the anchors at the cap poles
    pub fn is_axial(&self) -> bool {
        matches!(self, ConnectionPoint::Y1 | ConnectionPoint::Y2)
    }

    pub fn marker_color(&self) -> MarkerColor {
        match self {
            ConnectionPoint::Y1 | ConnectionPoint::Y2 => MarkerColor::Red,
            ConnectionPoint::X1 | ConnectionPoint::X2 => MarkerColor::Blue,
            ConnectionPoint::Z1 | ConnectionPoint::Z2 => MarkerColor::Yellow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionPoint::X1 => "X1",
            ConnectionPoint::X2 => "X2",
            ConnectionPoint::Y1 => "Y1",
            ConnectionPoint::Y2 => "Y2",
            ConnectionPoint::Z1 => "Z1",
            ConnectionPoint::Z2 => "Z2",
        }
    }

    /// Anatomical name of the anchor
    pub fn anatomical_name(&self) -> &'static str {
        match self {
            ConnectionPoint::X1 => "left",
            ConnectionPoint::X2 => "right",
            ConnectionPoint::Y1 => "superior",
            ConnectionPoint::Y2 => "inferior",
            ConnectionPoint::Z1 => "anterior",
            ConnectionPoint::Z2 => "posterior",
        }
    }
}

impl fmt::Display for ConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConnectionPoint {
    type Err = FigureError;

    /// Accepts both the axis labels and the anatomical names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(&text) || p.anatomical_name() == text)
            .ok_or_else(|| FigureError::UnknownAnchor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_and_opposed() {
        for point in ConnectionPoint::ALL {
            let dir = point.direction();
            assert!((dir.length() - 1.0).abs() < 1e-6);
            assert_eq!(point.opposite().direction(), -dir);
            assert_eq!(point.opposite().opposite(), point);
        }
    }

    #[test]
    fn test_parse_labels_and_aliases() {
        assert_eq!("Y1".parse::<ConnectionPoint>(), Ok(ConnectionPoint::Y1));
        assert_eq!("z2".parse::<ConnectionPoint>(), Ok(ConnectionPoint::Z2));
        assert_eq!(" inferior ".parse::<ConnectionPoint>(), Ok(ConnectionPoint::Y2));
        assert_eq!("Left".parse::<ConnectionPoint>(), Ok(ConnectionPoint::X1));
    }

    #[test]
    fn test_parse_unknown_anchor() {
        let result = "W3".parse::<ConnectionPoint>();
        assert!(matches!(result, Err(FigureError::UnknownAnchor(ref s)) if s == "W3"));
    }

    #[test]
    fn test_marker_colors_by_axis() {
        assert_eq!(ConnectionPoint::Y2.marker_color(), MarkerColor::Red);
        assert_eq!(ConnectionPoint::X1.marker_color(), MarkerColor::Blue);
        assert_eq!(ConnectionPoint::Z1.marker_color(), MarkerColor::Yellow);
    }
}
