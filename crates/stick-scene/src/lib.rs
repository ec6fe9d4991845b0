//! Stick Figure Scene Assembly
//!
//! This crate builds complete stick figure scenes on top of `stick-core`:
//! - Scene configuration stored as RON
//! - Figure description files (parts + connections)
//! - The default stick figure
//! - Scene export (world placements, markers, camera, arrow) as RON or JSON

pub mod config;
pub mod description;
pub mod error;
pub mod scene;

pub use config::{
    ArrowConfig, CameraConfig, ConfigError, ConfigManager, FigureConfig, SceneConfig,
};
pub use description::{ConnectionDescription, FigureDescription, PartDescription};
pub use error::SceneError;
pub use scene::{Arrow, ExportFormat, OrthoCamera, PlacedNode, SceneDescription, WorldMarker};
