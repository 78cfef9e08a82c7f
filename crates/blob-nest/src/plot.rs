//! Drawing traversal for outline forests.
//!
//! Rendering itself belongs to whoever implements [`Plotter`]; this module
//! only fixes the walk order and which color each outline gets.

use blob_core::Outline;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a new color from RGB values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to hexadecimal string (e.g., "#ff5500" or "#ff550080" with alpha).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Something that can draw a single outline boundary.
pub trait Plotter {
    /// Draw the boundary of `outline` only; children are visited separately.
    fn draw_outline(&mut self, outline: &Outline, color: Color);
}

/// Draw a forest: each outline in `color`, everything nested below it in
/// `child_color`.
///
/// A parent is always drawn before its children.
pub fn plot_outlines<P>(outlines: &[Outline], plotter: &mut P, color: Color, child_color: Color)
where
    P: Plotter + ?Sized,
{
    let mut pending: Vec<(&Outline, Color)> =
        outlines.iter().rev().map(|outline| (outline, color)).collect();
    while let Some((outline, color)) = pending.pop() {
        plotter.draw_outline(outline, color);
        pending.extend(outline.children.iter().rev().map(|child| (child, child_color)));
    }
}
