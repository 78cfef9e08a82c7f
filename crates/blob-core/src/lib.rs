//! Core outline types for the contour nesting engine.
//!
//! This crate provides the node types consumed by `blob-nest`:
//! - Geometry primitives (bounding boxes, winding numbers)
//! - Polygonal outlines with owned child lists
//! - Chain-coded outlines as produced by connected-component tracing
//! - The `Nested` trait the forest builder is written against
//! - Error types

pub mod chain;
pub mod errors;
pub mod geometry;
pub mod nested;
pub mod outline;

pub use chain::{ChainBlob, ChainCode, ChainOutline};
pub use errors::*;
pub use geometry::BoundingBox;
pub use nested::{clone_forest, drop_forest, forest_eq, node_count, Nested};
pub use outline::Outline;

/// Re-exported so callers can build vertices without naming glam directly.
pub use glam::{IVec2, Vec2};
