//! Polygonal outlines.
//!
//! An [`Outline`] is a closed polygon plus the outlines nested directly
//! inside it. Holes are traced with the opposite winding to their parent,
//! so their signed area is negative and summing areas down the tree gives
//! the ink area of the whole shape.

use glam::Vec2;

use crate::errors::OutlineError;
use crate::geometry::{signed_area, winding_number, BoundingBox};
use crate::nested::{clone_forest, drop_forest, forest_eq, Nested};

/// A closed polygonal outline and the outlines it directly encloses.
///
/// Cloning, comparing and dropping walk the tree with a work list, so
/// arbitrarily deep nesting is safe.
#[derive(Debug)]
pub struct Outline {
    /// Polygon vertices; the closing edge back to the first vertex is implied.
    vertices: Vec<Vec2>,
    /// Cached bounding box of `vertices`.
    bounds: BoundingBox,
    /// Outlines nested directly inside this one.
    pub children: Vec<Outline>,
}

impl Outline {
    /// Create an outline from polygon vertices.
    ///
    /// A repeated closing vertex (`first == last`) is dropped.
    pub fn new(mut vertices: Vec<Vec2>) -> Result<Self, OutlineError> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(OutlineError::NonFiniteVertex { index });
        }
        if vertices.len() < 3 {
            return Err(OutlineError::TooFewVertices {
                count: vertices.len(),
            });
        }

        Ok(Self::from_vertices(vertices))
    }

    /// Axis-aligned rectangle, wound counter-clockwise.
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Self::from_vertices(vec![
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ])
    }

    /// Copy of this outline without its children.
    fn shallow_copy(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            bounds: self.bounds,
            children: Vec::new(),
        }
    }

    fn from_vertices(vertices: Vec<Vec2>) -> Self {
        let bounds = BoundingBox::from_points(vertices.iter().copied());
        Self {
            vertices,
            bounds,
            children: Vec::new(),
        }
    }

    /// Attach a child outline, builder style.
    pub fn with_child(mut self, child: Outline) -> Self {
        self.children.push(child);
        self
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Signed area of this outline's own boundary, ignoring children.
    pub fn signed_area(&self) -> f32 {
        signed_area(&self.vertices)
    }

    /// Signed area including all nested outlines.
    pub fn area(&self) -> f32 {
        let mut total = 0.0;
        let mut pending = vec![self];
        while let Some(outline) = pending.pop() {
            total += outline.signed_area();
            pending.extend(&outline.children);
        }
        total
    }

    /// Winding number of this outline's boundary around a point.
    pub fn winding_number(&self, point: Vec2) -> i32 {
        winding_number(&self.vertices, point)
    }

    /// Check if a point lies inside this outline's boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds.contains(&BoundingBox::new(point, point)) && self.winding_number(point) != 0
    }

    /// Check if `other` lies strictly inside this outline.
    ///
    /// The bounding box of `other` must fit inside ours without being
    /// identical, and every vertex of `other` must have a non-zero winding
    /// number. Identical boxes never enclose each other, which keeps the
    /// relation antisymmetric.
    pub fn encloses(&self, other: &Outline) -> bool {
        if self.bounds == other.bounds || !self.bounds.contains(&other.bounds) {
            return false;
        }
        other.vertices.iter().all(|&v| self.contains_point(v))
    }

    /// Move the outline and its children by a vector.
    pub fn translate(&mut self, offset: Vec2) {
        self.map_vertices(|v| v + offset);
    }

    /// Scale about the origin by a uniform factor.
    pub fn scale(&mut self, factor: f32) {
        self.map_vertices(|v| v * factor);
    }

    /// Scale about the origin by separate x and y factors.
    pub fn scale_xy(&mut self, factors: Vec2) {
        self.map_vertices(|v| v * factors);
    }

    /// Rotate about the origin.
    ///
    /// `rotation` is `(cos a, sin a)` for an anticlockwise angle `a`; the
    /// vertices are multiplied by it as complex numbers.
    pub fn rotate(&mut self, rotation: Vec2) {
        self.map_vertices(|v| rotation.rotate(v));
    }

    fn map_vertices(&mut self, f: impl Fn(Vec2) -> Vec2) {
        let mut pending = vec![self];
        while let Some(outline) = pending.pop() {
            for vertex in &mut outline.vertices {
                *vertex = f(*vertex);
            }
            outline.bounds = BoundingBox::from_points(outline.vertices.iter().copied());
            pending.extend(outline.children.iter_mut());
        }
    }
}

impl Clone for Outline {
    fn clone(&self) -> Self {
        let mut copy = self.shallow_copy();
        copy.children = clone_forest(&self.children, Outline::shallow_copy);
        copy
    }
}

impl PartialEq for Outline {
    fn eq(&self, other: &Self) -> bool {
        forest_eq(
            std::slice::from_ref(self),
            std::slice::from_ref(other),
            |a, b| a.vertices == b.vertices && a.bounds == b.bounds,
        )
    }
}

impl Drop for Outline {
    fn drop(&mut self) {
        drop_forest(&mut self.children);
    }
}

impl Nested for Outline {
    fn encloses(&self, other: &Self) -> bool {
        Outline::encloses(self, other)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}
