//! Core type definitions

mod axis;
mod pose;

pub use axis::*;
pub use pose::*;
