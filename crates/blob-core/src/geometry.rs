//! Geometry primitives shared by polygonal and chain-coded outlines.

use glam::Vec2;

/// Axis-aligned bounding box in float coordinates.
///
/// A box with `min > max` on either axis is empty. `BoundingBox::default()`
/// is the empty box, which is the identity for [`BoundingBox::union`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Vec2,
    max: Vec2,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// The empty box.
    pub const EMPTY: Self = Self {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    /// Create a box from two opposite corners, in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point, or the empty box.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut bounds = Self::EMPTY;
        for point in points {
            bounds.include_point(point);
        }
        bounds
    }

    /// Grow the box to include a point.
    pub fn include_point(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Check if the box holds no points.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Bottom-left corner.
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Top-right corner.
    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Compute union (bounding box) with another box.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Check if this box fully contains another (edges may touch).
    ///
    /// Empty boxes contain nothing and are contained by nothing.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }
}

impl std::ops::AddAssign for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.union(&rhs);
    }
}

/// Signed area of a closed polygon (shoelace formula).
///
/// Counter-clockwise polygons in a y-up frame are positive.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let n = polygon.len();
    let mut sum = 0.0f64;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        sum += a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64;
    }
    (sum / 2.0) as f32
}

/// Winding number of a closed polygon around a point.
///
/// Zero means the point is outside. Counter-clockwise loops count +1.
pub fn winding_number(polygon: &[Vec2], point: Vec2) -> i32 {
    if polygon.len() < 3 {
        return 0;
    }

    let n = polygon.len();
    let mut winding = 0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y <= point.y {
            if b.y > point.y && is_left(a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && is_left(a, b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Positive if `point` is left of the directed line `a -> b`.
fn is_left(a: Vec2, b: Vec2, point: Vec2) -> f32 {
    (b - a).perp_dot(point - a)
}
