//! SVG output for outline forests.

use blob_core::{BoundingBox, Outline, Vec2};

use crate::plot::{Color, Plotter};

/// A [`Plotter`] that collects outlines into an SVG document.
///
/// Outline coordinates are y-up; the document flips them so shapes appear
/// the right way up.
#[derive(Debug, Clone, Default)]
pub struct SvgPlotter {
    polygons: Vec<(Vec<Vec2>, Color)>,
    bounds: BoundingBox,
    stroke_width: Option<f32>,
}

impl SvgPlotter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width used for every polygon (default 1).
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Number of polygons drawn so far.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Render everything drawn so far.
    pub fn finish(&self) -> String {
        let (origin, width, height) = if self.bounds.is_empty() {
            (Vec2::ZERO, 1.0, 1.0)
        } else {
            (
                self.bounds.min(),
                self.bounds.width().max(1.0),
                self.bounds.height().max(1.0),
            )
        };
        let top = origin.y + height;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
            width, height, width, height
        ));

        let stroke_width = self.stroke_width.unwrap_or(1.0);
        for (vertices, color) in &self.polygons {
            let points: Vec<String> = vertices
                .iter()
                .map(|v| format!("{},{}", v.x - origin.x, top - v.y))
                .collect();
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                points.join(" "),
                color.to_hex(),
                stroke_width
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Plotter for SvgPlotter {
    fn draw_outline(&mut self, outline: &Outline, color: Color) {
        self.bounds += outline.bounding_box();
        self.polygons.push((outline.vertices().to_vec(), color));
    }
}
