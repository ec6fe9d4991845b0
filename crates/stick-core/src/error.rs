//! Figure construction errors

use uuid::Uuid;

/// Figure-related errors
///
/// Every connector error is raised before the figure is touched, so a
/// failed call leaves the figure exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FigureError {
    #[error("Invalid shape for part '{name}': radius {radius}, height {height}")]
    InvalidShape {
        name: String,
        radius: f32,
        height: f32,
    },
    #[error("Part is already attached: {0}")]
    AlreadyAttached(String),
    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),
    #[error("Spacer must be a non-negative distance, got {0}")]
    NegativeSpacer(f32),
    #[error("Part cannot be connected to itself: {0}")]
    SelfConnection(String),
    #[error("Parent part is not attached to the figure: {0}")]
    DetachedParent(String),
    #[error("Node not found: {0}")]
    NodeNotFound(Uuid),
    #[error("Node is not a part: {0}")]
    NotAPart(Uuid),
    #[error("Name already used in figure: {0}")]
    DuplicateName(String),
    #[error("Node ID already used in figure: {0}")]
    DuplicateId(Uuid),
    #[error("Node reached twice while walking the figure: {0}")]
    Cycle(Uuid),
    #[error("Root node has a parent: {0}")]
    RootHasParent(Uuid),
    #[error("Orphaned part: {0}")]
    OrphanedPart(Uuid),
    #[error("Dangling reference to node: {0}")]
    DanglingReference(Uuid),
}
