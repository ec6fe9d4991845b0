//! Scene assembly errors

use stick_core::FigureError;

use crate::config::ConfigError;

/// Errors that can occur while assembling or exporting a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Unknown part in figure description: {0}")]
    UnknownPart(String),

    #[error(transparent)]
    Figure(#[from] FigureError),

    #[error("Figure failed validation: {0:?}")]
    Validation(Vec<FigureError>),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse figure description: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
