//! Containment forest construction.
//!
//! Outlines arrive in no particular order (for example after being read
//! back from a file that does not record nesting). Each one is inserted
//! into the forest built so far so that every outline ends up as a direct
//! child of the tightest outline enclosing it, and no two siblings enclose
//! one another.

use blob_core::Nested;
use log::trace;

/// How a new outline relates to an existing sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// The new outline encloses the sibling.
    Encloses,
    /// The sibling encloses the new outline.
    EnclosedBy,
}

/// Build a forest from outlines in arbitrary order.
///
/// Ownership of every outline moves into the returned top-level list.
pub fn build_forest<T, I>(outlines: I) -> Vec<T>
where
    T: Nested,
    I: IntoIterator<Item = T>,
{
    let mut forest = Vec::new();
    for outline in outlines {
        insert_outline(outline, &mut forest);
    }
    forest
}

/// Place one outline into a sibling list at the level its nesting requires.
///
/// The list is scanned once from the front. The first sibling related to
/// `outline` decides the outcome:
/// - if `outline` encloses it, `outline` takes that position, the sibling
///   becomes its child, and every later sibling also enclosed by `outline`
///   is moved under it too;
/// - if the sibling encloses `outline`, the same scan continues in the
///   sibling's child list.
///
/// An outline related to nothing is appended as a new sibling.
pub fn insert_outline<T: Nested>(outline: T, siblings: &mut Vec<T>) {
    let mut level = siblings;
    let mut depth = 0usize;

    loop {
        match find_relation(&outline, level) {
            Some((index, Relation::Encloses)) => {
                trace!("adopting sibling {index} at depth {depth}");
                adopt(outline, level, index);
                return;
            }
            Some((index, Relation::EnclosedBy)) => {
                trace!("descending into sibling {index} at depth {depth}");
                depth += 1;
                level = level[index].children_mut();
            }
            None => {
                trace!("appending as sibling {} at depth {depth}", level.len());
                level.push(outline);
                return;
            }
        }
    }
}

/// Find the first sibling enclosing or enclosed by `outline`.
fn find_relation<T: Nested>(outline: &T, siblings: &[T]) -> Option<(usize, Relation)> {
    for (index, sibling) in siblings.iter().enumerate() {
        if outline.encloses(sibling) {
            debug_assert!(
                !sibling.encloses(outline),
                "enclosure predicate reported mutual enclosure"
            );
            return Some((index, Relation::Encloses));
        }
        if sibling.encloses(outline) {
            return Some((index, Relation::EnclosedBy));
        }
    }
    None
}

/// Put `outline` at `index`, making the sibling there its child, then move
/// every later sibling it also encloses under it.
///
/// Siblings before `index` were already found unrelated to `outline`.
fn adopt<T: Nested>(outline: T, siblings: &mut Vec<T>, index: usize) {
    let displaced = std::mem::replace(&mut siblings[index], outline);
    siblings[index].children_mut().push(displaced);

    let mut next = index + 1;
    while next < siblings.len() {
        if siblings[index].encloses(&siblings[next]) {
            let sibling = siblings.remove(next);
            siblings[index].children_mut().push(sibling);
        } else {
            next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_core::{Outline, Vec2};

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Outline {
        Outline::rect(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// A node whose predicate claims enclosure in both directions.
    #[derive(Default)]
    struct Tangled {
        children: Vec<Tangled>,
    }

    impl Nested for Tangled {
        fn encloses(&self, _other: &Self) -> bool {
            true
        }

        fn children(&self) -> &[Self] {
            &self.children
        }

        fn children_mut(&mut self) -> &mut Vec<Self> {
            &mut self.children
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "mutual enclosure")]
    fn test_mutual_enclosure_panics() {
        let mut forest = vec![Tangled::default()];
        insert_outline(Tangled::default(), &mut forest);
    }

    #[test]
    fn test_build_forest_empty() {
        let forest: Vec<Outline> = build_forest(Vec::new());
        assert!(forest.is_empty());
    }

    #[test]
    fn test_build_forest_disjoint_roots() {
        let forest = build_forest(vec![
            square(0.0, 0.0, 10.0, 10.0),
            square(20.0, 0.0, 30.0, 10.0),
        ]);

        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|o| o.children.is_empty()));
        assert_eq!(forest[0].bounding_box().min(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_three_level_nesting_out_of_order() {
        let a = square(0.0, 0.0, 100.0, 100.0);
        let b = square(10.0, 10.0, 90.0, 90.0);
        let c = square(40.0, 40.0, 60.0, 60.0);

        let forest = build_forest(vec![c.clone(), a.clone(), b.clone()]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].vertices(), a.vertices());
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].vertices(), b.vertices());
        assert_eq!(forest[0].children[0].children.len(), 1);
        assert_eq!(forest[0].children[0].children[0].vertices(), c.vertices());
        assert!(forest[0].children[0].children[0].children.is_empty());
    }

    #[test]
    fn test_insert_adopts_several_siblings() {
        // Two holes of "8" already placed, then the outer outline arrives.
        let mut forest = vec![
            square(2.0, 2.0, 8.0, 8.0),
            square(50.0, 0.0, 60.0, 10.0),
            square(2.0, 12.0, 8.0, 18.0),
        ];

        insert_outline(square(0.0, 0.0, 10.0, 20.0), &mut forest);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].bounding_box().max(), Vec2::new(10.0, 20.0));
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[0].bounding_box().min(), Vec2::new(2.0, 2.0));
        assert_eq!(forest[0].children[1].bounding_box().min(), Vec2::new(2.0, 12.0));
        assert_eq!(forest[1].bounding_box().min(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_insert_descends_to_tightest_parent() {
        let mut forest = vec![square(0.0, 0.0, 100.0, 100.0).with_child(square(10.0, 10.0, 50.0, 50.0))];

        insert_outline(square(20.0, 20.0, 30.0, 30.0), &mut forest);
        insert_outline(square(60.0, 60.0, 70.0, 70.0), &mut forest);

        let root = &forest[0];
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children.len(), 1);
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn test_insert_between_parent_and_child() {
        let mut forest = vec![square(0.0, 0.0, 100.0, 100.0).with_child(square(40.0, 40.0, 60.0, 60.0))];

        insert_outline(square(10.0, 10.0, 90.0, 90.0), &mut forest);

        let root = &forest[0];
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].bounding_box().min(), Vec2::new(10.0, 10.0));
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(
            root.children[0].children[0].bounding_box().min(),
            Vec2::new(40.0, 40.0)
        );
    }
}
