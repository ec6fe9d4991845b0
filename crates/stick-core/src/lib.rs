//! Stick Figure Core Data Structures
//!
//! This crate contains the core data structures for building stick figures:
//! - Part: capsule body segment with six surface anchors
//! - ConnectionPoint: anchor labels on a part
//! - Figure: scene graph of parts and joints
//! - Connector: placement of a child part so two anchors coincide

pub mod anchor;
pub mod error;
pub mod figure;
pub mod part;
pub mod types;

pub use anchor::*;
pub use error::*;
pub use figure::*;
pub use part::*;
pub use types::*;
