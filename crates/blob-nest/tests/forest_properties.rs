//! Property tests for containment forest construction.

use blob_core::{Outline, Vec2};
use blob_nest::build_forest;
use proptest::prelude::*;
use proptest::sample::Index;

/// Lay out a random tree of rectangles. `picks[i]` chooses the parent of
/// node `i + 1` among the virtual root (0) and the nodes before it.
fn layout(picks: &[Index]) -> Vec<Outline> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); picks.len() + 1];
    for (i, pick) in picks.iter().enumerate() {
        children[pick.index(i + 1)].push(i + 1);
    }
    build_level(&children, 0, Vec2::ZERO, Vec2::splat(10_000.0))
}

fn build_level(children: &[Vec<usize>], slot: usize, min: Vec2, max: Vec2) -> Vec<Outline> {
    let nodes = &children[slot];
    let width = (max.x - min.x) / nodes.len().max(1) as f32;
    let margin = Vec2::new(width / 10.0, (max.y - min.y) / 10.0);

    nodes
        .iter()
        .enumerate()
        .map(|(j, &node)| {
            let cell_min = Vec2::new(min.x + width * j as f32, min.y) + margin;
            let cell_max = Vec2::new(min.x + width * (j + 1) as f32, max.y) - margin;
            let mut outline = Outline::rect(cell_min, cell_max);
            outline.children = build_level(children, node, cell_min, cell_max);
            outline
        })
        .collect()
}

/// Every outline of a forest with its child list emptied, parents first.
fn flatten(forest: &[Outline]) -> Vec<Outline> {
    let mut flat = Vec::new();
    for outline in forest {
        let mut node = outline.clone();
        node.children.clear();
        flat.push(node);
        flat.extend(flatten(&outline.children));
    }
    flat
}

/// Order-insensitive description of a forest's shape.
fn canonical(forest: &[Outline]) -> Vec<String> {
    let mut level: Vec<String> = forest
        .iter()
        .map(|o| {
            let bounds = o.bounding_box();
            format!(
                "{:?}-{:?}[{}]",
                bounds.min(),
                bounds.max(),
                canonical(&o.children).join(",")
            )
        })
        .collect();
    level.sort();
    level
}

fn assert_siblings_disjoint(siblings: &[Outline]) {
    for (i, a) in siblings.iter().enumerate() {
        for b in &siblings[i + 1..] {
            assert!(!a.encloses(b) && !b.encloses(a), "siblings enclose each other");
        }
        assert_siblings_disjoint(&a.children);
    }
}

/// Each child is enclosed by its parent and by no other outline that the
/// parent encloses.
fn assert_immediate_parents(forest: &[Outline]) {
    let all = flatten(forest);
    let mut pending: Vec<&Outline> = forest.iter().collect();
    while let Some(parent) = pending.pop() {
        for child in &parent.children {
            assert!(parent.encloses(child), "child escapes its parent");
            assert!(
                !all.iter().any(|m| parent.encloses(m) && m.encloses(child)),
                "child has a tighter enclosing outline than its parent"
            );
            pending.push(child);
        }
    }
}

fn nested_squares() -> impl Strategy<Value = (Vec<Outline>, Vec<Outline>)> {
    prop::collection::vec(any::<Index>(), 1..12)
        .prop_map(|picks| layout(&picks))
        .prop_flat_map(|tree| {
            let flat = flatten(&tree);
            (Just(tree), Just(flat).prop_shuffle())
        })
}

proptest! {
    #[test]
    fn test_any_insertion_order_rebuilds_the_tree((tree, shuffled) in nested_squares()) {
        let forest = build_forest(shuffled);
        prop_assert_eq!(canonical(&forest), canonical(&tree));
    }

    #[test]
    fn test_forest_invariants_hold((_tree, shuffled) in nested_squares()) {
        let count = shuffled.len();
        let forest = build_forest(shuffled);

        assert_siblings_disjoint(&forest);
        assert_immediate_parents(&forest);
        prop_assert_eq!(blob_core::node_count(&forest), count);
    }
}

#[test]
fn test_three_level_insertion_order_c_a_b() {
    let a = Outline::rect(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
    let b = Outline::rect(Vec2::new(5.0, 5.0), Vec2::new(25.0, 25.0));
    let c = Outline::rect(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));

    let forest = build_forest(vec![c.clone(), a.clone(), b.clone()]);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].vertices(), a.vertices());
    assert_eq!(forest[0].children.len(), 1);
    assert_eq!(forest[0].children[0].vertices(), b.vertices());
    assert_eq!(forest[0].children[0].children.len(), 1);
    assert_eq!(forest[0].children[0].children[0].vertices(), c.vertices());
}
