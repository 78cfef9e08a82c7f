//! Polygonal approximation of chain-coded outline trees.
//!
//! The tracer hands over chain outlines that are already correctly nested,
//! so converting a tree only needs to approximate each node and keep the
//! shape of the tree. No containment tests are made here.

use blob_core::{node_count, ChainCode, ChainOutline, Outline, Vec2};
use log::debug;

use crate::config::NestConfig;

/// Turns one chain-coded outline into a polygon.
///
/// Returning `None` marks the outline as degenerate; it is dropped from the
/// result together with everything nested inside it. The returned outline
/// should have no children of its own: the tree transform fills those in.
pub trait Approximator {
    fn approximate(&self, chain: &ChainOutline) -> Option<Outline>;
}

impl<F> Approximator for F
where
    F: Fn(&ChainOutline) -> Option<Outline>,
{
    fn approximate(&self, chain: &ChainOutline) -> Option<Outline> {
        self(chain)
    }
}

/// Convert a chain-coded forest into a polygonal forest of the same shape.
///
/// Sibling order is preserved. Outlines the approximator rejects are
/// dropped along with their whole subtree.
pub fn approximate_outlines<A>(chains: &[ChainOutline], approximator: &A) -> Vec<Outline>
where
    A: Approximator + ?Sized,
{
    // Preorder arena of kept outlines, each with its parent's arena index.
    let mut arena: Vec<(Outline, Option<usize>)> = Vec::new();
    let mut pending: Vec<(&ChainOutline, Option<usize>)> =
        chains.iter().rev().map(|chain| (chain, None)).collect();

    while let Some((chain, parent)) = pending.pop() {
        match approximator.approximate(chain) {
            Some(outline) => {
                debug_assert!(
                    outline.children.is_empty(),
                    "approximator returned an outline with children"
                );
                let index = arena.len();
                arena.push((outline, parent));
                pending.extend(chain.children.iter().rev().map(|child| (child, Some(index))));
            }
            None => {
                debug!(
                    "dropping degenerate outline at {} with {} nested outlines",
                    chain.start(),
                    node_count(&chain.children)
                );
            }
        }
    }

    // Descendants sit after their parent in the arena, so popping from the
    // back completes each subtree before it is attached. Children arrive in
    // reverse order and are flipped once complete.
    let mut roots = Vec::new();
    while let Some((mut outline, parent)) = arena.pop() {
        outline.children.reverse();
        match parent {
            Some(parent) => arena[parent].0.children.push(outline),
            None => roots.push(outline),
        }
    }
    roots.reverse();
    roots
}

/// Douglas-Peucker polygon approximation of chain outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DouglasPeucker {
    /// Maximum distance a dropped point may lie from the kept edge.
    pub tolerance: f32,
    /// Minimum vertex count for a non-degenerate polygon.
    pub min_vertices: usize,
    /// Absolute areas at or below this are degenerate.
    pub min_area: f32,
}

impl Default for DouglasPeucker {
    fn default() -> Self {
        Self::from_config(&NestConfig::default())
    }
}

impl DouglasPeucker {
    /// Approximator with the given tolerance and default degeneracy limits.
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    pub fn from_config(config: &NestConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            min_vertices: config.min_vertices,
            min_area: config.min_area,
        }
    }
}

impl Approximator for DouglasPeucker {
    fn approximate(&self, chain: &ChainOutline) -> Option<Outline> {
        let corners = corner_points(chain);
        if corners.len() < 3 {
            return None;
        }

        let vertices = simplify_closed(&corners, self.tolerance);
        if vertices.len() < self.min_vertices.max(3) {
            return None;
        }

        let outline = Outline::new(vertices).ok()?;
        if outline.signed_area().abs() <= self.min_area {
            return None;
        }
        Some(outline)
    }
}

/// Points where the chain changes direction; straight runs collapse to
/// their end points.
fn corner_points(chain: &ChainOutline) -> Vec<Vec2> {
    let steps = chain.steps();
    let Some(&last) = steps.last() else {
        return Vec::new();
    };

    let mut previous: ChainCode = last;
    let mut corners = Vec::new();
    for (point, &code) in chain.points().zip(steps) {
        if code != previous {
            corners.push(point.as_vec2());
        }
        previous = code;
    }
    corners
}

/// Simplify a closed polygon by splitting it at the vertex farthest from
/// the first one and simplifying both halves as open polylines.
fn simplify_closed(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let anchor = points[0];
    let split = points
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| {
            a.1.distance_squared(anchor)
                .total_cmp(&b.1.distance_squared(anchor))
        })
        .map(|(i, _)| i)
        .unwrap_or(points.len() / 2);

    let mut closing: Vec<Vec2> = points[split..].to_vec();
    closing.push(anchor);

    let mut result = douglas_peucker(&points[..=split], tolerance);
    // The split vertex opens the second half; the anchor closes it.
    result.pop();
    result.extend(douglas_peucker(&closing, tolerance));
    result.pop();
    result
}

/// Douglas-Peucker line simplification, with an explicit range stack.
fn douglas_peucker(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut ranges = vec![(0usize, points.len() - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }

        // Find the point with maximum distance from the chord
        let mut max_dist = 0.0f32;
        let mut max_idx = first;
        for i in first + 1..last {
            let dist = perpendicular_distance(points[i], points[first], points[last]);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            keep[max_idx] = true;
            ranges.push((first, max_idx));
            ranges.push((max_idx, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(&point, kept)| kept.then_some(point))
        .collect()
}

/// Calculate perpendicular distance from point to the line through a chord.
fn perpendicular_distance(point: Vec2, line_start: Vec2, line_end: Vec2) -> f32 {
    let chord = line_end - line_start;
    let len = chord.length();

    if len < 1e-6 {
        // Chord is a point
        return point.distance(line_start);
    }

    chord.perp_dot(point - line_start).abs() / len
}
