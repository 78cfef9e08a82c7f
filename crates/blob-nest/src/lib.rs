//! Contour nesting for OCR blobs.
//!
//! This crate organizes traced outlines into a forest that records which
//! shapes are holes inside which other shapes, so later stages can tell ink
//! from background (the counter of "O", the two bowls of "8") and treat a
//! glyph as one unit.
//!
//! # Pipeline Overview
//!
//! Outlines reach a [`Blob`] along one of two routes:
//! 1. **From the tracer**: chain-coded outlines arrive already nested in a
//!    [`ChainBlob`](blob_core::ChainBlob). [`approximate_outlines`] turns each
//!    one into a polygon, keeping the tree shape and dropping degenerate
//!    outlines together with their subtrees.
//! 2. **From an unordered list**: polygons with no known nesting (for
//!    example read back with [`io::read_blob_json`]) are inserted one at a
//!    time by [`build_forest`], each under its tightest enclosing outline.
//!
//! # Example
//!
//! ```
//! use blob_nest::Blob;
//! use blob_core::{Outline, Vec2};
//!
//! let blob = Blob::from_outlines(vec![
//!     Outline::rect(Vec2::new(2.0, 2.0), Vec2::new(8.0, 8.0)),
//!     Outline::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)),
//! ]);
//! assert_eq!(blob.outlines().len(), 1);
//! assert_eq!(blob.outlines()[0].children.len(), 1);
//! ```

pub mod approx;
pub mod blob;
pub mod config;
pub mod error;
pub mod forest;
pub mod io;
pub mod plot;
pub mod svg;

pub use approx::{approximate_outlines, Approximator, DouglasPeucker};
pub use blob::Blob;
pub use config::NestConfig;
pub use error::{NestError, Result};
pub use forest::{build_forest, insert_outline};
pub use plot::{plot_outlines, Color, Plotter};
pub use svg::SvgPlotter;
