//! Chain-coded outlines.
//!
//! A chain outline is a start point on the pixel-corner lattice followed by
//! unit steps around the boundary of a connected region. The tracer that
//! produces them already knows which outline sits inside which, so chain
//! outlines arrive with their child lists filled in.

use glam::{IVec2, Vec2};

use crate::errors::OutlineError;
use crate::geometry::{winding_number, BoundingBox};
use crate::nested::{clone_forest, drop_forest, forest_eq, Nested};

/// Direction codes for 4-connected boundary steps (y up).
/// 0=E, 1=N, 2=W, 3=S
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChainCode {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl ChainCode {
    /// Decode a raw step code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::East),
            1 => Some(Self::North),
            2 => Some(Self::West),
            3 => Some(Self::South),
            _ => None,
        }
    }

    /// Unit displacement of this step.
    pub fn step(self) -> IVec2 {
        match self {
            Self::East => IVec2::new(1, 0),
            Self::North => IVec2::new(0, 1),
            Self::West => IVec2::new(-1, 0),
            Self::South => IVec2::new(0, -1),
        }
    }
}

/// A closed chain-coded outline and the outlines it directly encloses.
#[derive(Debug)]
pub struct ChainOutline {
    start: IVec2,
    steps: Vec<ChainCode>,
    bounds: BoundingBox,
    /// Outlines nested directly inside this one, as found by the tracer.
    pub children: Vec<ChainOutline>,
}

impl ChainOutline {
    /// Create a chain outline, checking that the steps return to `start`.
    pub fn new(start: IVec2, steps: Vec<ChainCode>) -> Result<Self, OutlineError> {
        if steps.is_empty() {
            return Err(OutlineError::EmptyChain);
        }

        let end = steps.iter().fold(start, |pos, code| pos + code.step());
        if end != start {
            return Err(OutlineError::OpenChain {
                start: (start.x, start.y),
                end: (end.x, end.y),
            });
        }

        let mut outline = Self {
            start,
            steps,
            bounds: BoundingBox::EMPTY,
            children: Vec::new(),
        };
        outline.bounds = BoundingBox::from_points(outline.points().map(|p| p.as_vec2()));
        Ok(outline)
    }

    /// Create a chain outline from raw step codes.
    pub fn from_codes(start: IVec2, codes: &[u8]) -> Result<Self, OutlineError> {
        let steps = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                ChainCode::from_code(code).ok_or(OutlineError::InvalidChainCode { index, code })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(start, steps)
    }

    fn shallow_copy(&self) -> Self {
        Self {
            start: self.start,
            steps: self.steps.clone(),
            bounds: self.bounds,
            children: Vec::new(),
        }
    }

    /// Attach a child outline, builder style.
    pub fn with_child(mut self, child: ChainOutline) -> Self {
        self.children.push(child);
        self
    }

    pub fn start(&self) -> IVec2 {
        self.start
    }

    pub fn steps(&self) -> &[ChainCode] {
        &self.steps
    }

    /// Number of steps around the boundary.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Lattice points visited, starting at `start`, one per step.
    ///
    /// The final step back to `start` is not repeated.
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.steps.iter().scan(self.start, |pos, code| {
            let current = *pos;
            *pos += code.step();
            Some(current)
        })
    }

    /// Visited points as float vertices.
    pub fn vertices(&self) -> Vec<Vec2> {
        self.points().map(|p| p.as_vec2()).collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Signed area in lattice units, counter-clockwise positive.
    pub fn signed_area(&self) -> i64 {
        let mut sum = 0i64;
        let mut pos = self.start;
        for code in &self.steps {
            let next = pos + code.step();
            sum += pos.x as i64 * next.y as i64 - next.x as i64 * pos.y as i64;
            pos = next;
        }
        sum / 2
    }

    /// Check if `other` lies strictly inside this outline.
    ///
    /// Same rule as [`crate::Outline::encloses`], applied to the traced
    /// lattice points.
    pub fn encloses(&self, other: &ChainOutline) -> bool {
        if self.bounds == other.bounds || !self.bounds.contains(&other.bounds) {
            return false;
        }
        let polygon = self.vertices();
        other
            .points()
            .all(|p| winding_number(&polygon, p.as_vec2()) != 0)
    }
}

impl Nested for ChainOutline {
    fn encloses(&self, other: &Self) -> bool {
        ChainOutline::encloses(self, other)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}

impl Clone for ChainOutline {
    fn clone(&self) -> Self {
        let mut copy = self.shallow_copy();
        copy.children = clone_forest(&self.children, ChainOutline::shallow_copy);
        copy
    }
}

impl PartialEq for ChainOutline {
    fn eq(&self, other: &Self) -> bool {
        forest_eq(
            std::slice::from_ref(self),
            std::slice::from_ref(other),
            |a, b| a.start == b.start && a.steps == b.steps,
        )
    }
}

impl Drop for ChainOutline {
    fn drop(&mut self) {
        drop_forest(&mut self.children);
    }
}

/// The chain-coded aggregate handed over by the tracer: one connected
/// component's top-level outlines, already nested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainBlob {
    pub outlines: Vec<ChainOutline>,
}

impl ChainBlob {
    pub fn new(outlines: Vec<ChainOutline>) -> Self {
        Self { outlines }
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// Union of the top-level outline boxes.
    pub fn bounding_box(&self) -> BoundingBox {
        self.outlines
            .iter()
            .fold(BoundingBox::EMPTY, |acc, o| acc.union(&o.bounding_box()))
    }
}
