//! End-to-end tests: chain blob to polygonal blob, storage, and drawing.

use blob_core::{ChainBlob, ChainCode, ChainOutline, IVec2, Vec2};
use blob_nest::io::{read_blob_json, write_outlines_json};
use blob_nest::{approximate_outlines, Blob, Color, DouglasPeucker, SvgPlotter};

/// Counter-clockwise pixel-edge square.
fn square(x: i32, y: i32, size: usize) -> ChainOutline {
    steps(x, y, size, [ChainCode::East, ChainCode::North, ChainCode::West, ChainCode::South])
}

/// Clockwise pixel-edge square, as the tracer reports a hole.
fn hole(x: i32, y: i32, size: usize) -> ChainOutline {
    steps(x, y, size, [ChainCode::North, ChainCode::East, ChainCode::South, ChainCode::West])
}

fn steps(x: i32, y: i32, size: usize, sides: [ChainCode; 4]) -> ChainOutline {
    let steps = sides
        .iter()
        .flat_map(|&code| std::iter::repeat(code).take(size))
        .collect();
    ChainOutline::new(IVec2::new(x, y), steps).unwrap()
}

/// A glyph shaped like "8" next to a dot: two holes in one outline, plus
/// an island inside the first hole.
fn eight_and_dot() -> ChainBlob {
    ChainBlob::new(vec![
        square(0, 0, 40)
            .with_child(hole(5, 5, 12).with_child(square(8, 8, 5)))
            .with_child(hole(22, 22, 12)),
        square(50, 0, 6),
    ])
}

#[test]
fn test_chain_blob_to_blob_mirrors_structure() {
    let cblob = eight_and_dot();
    let blob = Blob::from_chain_blob(&cblob, &DouglasPeucker::default());

    assert_eq!(blob.outline_count(), 5);
    assert_eq!(blob.outlines().len(), 2);
    assert_eq!(blob.outlines()[0].children.len(), 2);
    assert_eq!(blob.outlines()[0].children[0].children.len(), 1);
    assert!(blob.outlines()[0].children[1].children.is_empty());
    assert_eq!(blob.bounding_box(), cblob.bounding_box());

    // 1600 - 144 + 25 - 144 + 36
    assert_eq!(blob.area(), 1373.0);
}

#[test]
fn test_degenerate_middle_level_drops_subtree() {
    let cblob = ChainBlob::new(vec![square(0, 0, 30).with_child(
        // A one-pixel hole cannot survive approximation.
        hole(10, 10, 1).with_child(square(20, 20, 5)),
    )]);

    let outlines = approximate_outlines(&cblob.outlines, &DouglasPeucker::default());

    assert_eq!(outlines.len(), 1);
    assert!(outlines[0].children.is_empty());
}

#[test]
fn test_json_round_trip_rebuilds_nesting() {
    let blob = Blob::from_chain_blob(&eight_and_dot(), &DouglasPeucker::default());

    let json = write_outlines_json(&blob).unwrap();
    let restored = read_blob_json(&json).unwrap();

    assert_eq!(restored, blob);
}

#[test]
fn test_copy_survives_source_transform() {
    let original = Blob::from_chain_blob(&eight_and_dot(), &DouglasPeucker::default());
    let mut copy = original.clone();

    copy.rotate_quarter();
    copy.translate(Vec2::new(1.0, 1.0));

    assert_eq!(original.bounding_box().min(), Vec2::new(0.0, 0.0));
    assert_eq!(original.bounding_box().max(), Vec2::new(56.0, 40.0));
    assert_ne!(copy, original);
}

#[test]
fn test_plot_to_svg() {
    let blob = Blob::from_chain_blob(&eight_and_dot(), &DouglasPeucker::default());

    let mut plotter = SvgPlotter::new();
    blob.plot(&mut plotter, Color::BLACK, Color::RED);
    let svg = plotter.finish();

    assert_eq!(plotter.len(), 5);
    assert_eq!(svg.matches("#000000").count(), 2);
    assert_eq!(svg.matches("#ff0000").count(), 3);
}

#[test]
fn test_deeply_nested_json_blob() {
    const DEPTH: usize = 100_000;

    // Concentric squares, innermost first: every insertion adopts the root.
    let records: Vec<String> = (1..=DEPTH)
        .map(|r| format!(r#"{{"vertices":[[-{r},-{r}],[{r},-{r}],[{r},{r}],[-{r},{r}]]}}"#))
        .collect();
    let json = format!("[{}]", records.join(","));

    let mut blob = read_blob_json(&json).unwrap();
    assert_eq!(blob.outlines().len(), 1);
    assert_eq!(blob.outline_count(), DEPTH);
    assert!(blob.area() > 0.0);

    let copy = blob.clone();
    assert_eq!(copy, blob);

    blob.rotate_quarter();
    let mut plotter = SvgPlotter::new();
    blob.plot(&mut plotter, Color::BLACK, Color::RED);
    assert_eq!(plotter.len(), DEPTH);

    assert_eq!(write_outlines_json(&copy).unwrap().matches("vertices").count(), DEPTH);
}
