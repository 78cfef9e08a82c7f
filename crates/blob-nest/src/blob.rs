//! The polygonal blob: one glyph's forest of outlines.

use blob_core::{node_count, BoundingBox, ChainBlob, Outline, Vec2};
use log::debug;

use crate::approx::{approximate_outlines, Approximator, DouglasPeucker};
use crate::config::NestConfig;
use crate::error::Result;
use crate::forest::build_forest;
use crate::plot::{plot_outlines, Color, Plotter};

/// A glyph made of nested polygonal outlines.
///
/// The top-level list holds the roots of the forest (e.g. the dot and the
/// stem of "i"); holes hang below the outline that encloses them. No two
/// outlines in the same list enclose each other.
#[derive(Debug, Default, PartialEq)]
pub struct Blob {
    outlines: Vec<Outline>,
}

impl Blob {
    /// An empty blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a blob from outlines in arbitrary order, nesting them by
    /// containment.
    pub fn from_outlines(outlines: Vec<Outline>) -> Self {
        let count = outlines.len();
        let outlines = build_forest(outlines);
        debug!("nested {count} outlines into {} roots", outlines.len());
        Self { outlines }
    }

    /// Build a blob by approximating each outline of a chain-coded blob,
    /// keeping the tracer's nesting.
    pub fn from_chain_blob<A>(cblob: &ChainBlob, approximator: &A) -> Self
    where
        A: Approximator + ?Sized,
    {
        Self {
            outlines: approximate_outlines(&cblob.outlines, approximator),
        }
    }

    /// Like [`Blob::from_chain_blob`], using a [`DouglasPeucker`]
    /// approximator built from `config`.
    pub fn from_chain_blob_with_config(cblob: &ChainBlob, config: &NestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_chain_blob(cblob, &DouglasPeucker::from_config(config)))
    }

    /// Top-level outlines.
    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    /// Mutable access to the top-level outlines.
    ///
    /// Callers that add or reshape outlines are responsible for keeping the
    /// nesting valid.
    pub fn outlines_mut(&mut self) -> &mut Vec<Outline> {
        &mut self.outlines
    }

    pub fn into_outlines(self) -> Vec<Outline> {
        self.outlines
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// Number of outlines at every depth.
    pub fn outline_count(&self) -> usize {
        node_count(&self.outlines)
    }

    /// Union of the top-level outline boxes.
    ///
    /// Children lie inside their parents, so they never widen it.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bounds = BoundingBox::EMPTY;
        for outline in &self.outlines {
            bounds += outline.bounding_box();
        }
        bounds
    }

    /// Signed ink area: holes subtract through their negative winding.
    pub fn area(&self) -> f32 {
        self.outlines.iter().map(Outline::area).sum()
    }

    /// Move the blob by a vector.
    pub fn translate(&mut self, offset: Vec2) {
        for outline in &mut self.outlines {
            outline.translate(offset);
        }
    }

    /// Scale about the origin by a uniform factor.
    pub fn scale(&mut self, factor: f32) {
        for outline in &mut self.outlines {
            outline.scale(factor);
        }
    }

    /// Scale about the origin by separate x and y factors.
    pub fn scale_xy(&mut self, factors: Vec2) {
        for outline in &mut self.outlines {
            outline.scale_xy(factors);
        }
    }

    /// Rotate 90 degrees anticlockwise about the origin.
    pub fn rotate_quarter(&mut self) {
        self.rotate(Vec2::new(0.0, 1.0));
    }

    /// Rotate about the origin by `(cos a, sin a)` for an anticlockwise
    /// angle `a`.
    pub fn rotate(&mut self, rotation: Vec2) {
        for outline in &mut self.outlines {
            outline.rotate(rotation);
        }
    }

    /// Draw the blob: top-level outlines in `blob_color`, holes and
    /// everything nested deeper in `child_color`.
    pub fn plot<P>(&self, plotter: &mut P, blob_color: Color, child_color: Color)
    where
        P: Plotter + ?Sized,
    {
        plot_outlines(&self.outlines, plotter, blob_color, child_color);
    }
}

impl Clone for Blob {
    fn clone(&self) -> Self {
        Self {
            outlines: self.outlines.clone(),
        }
    }

    /// Release the current forest, then deep-copy `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.outlines.clear();
        self.outlines.extend(source.outlines.iter().cloned());
    }
}

impl From<Vec<Outline>> for Blob {
    fn from(outlines: Vec<Outline>) -> Self {
        Self::from_outlines(outlines)
    }
}
