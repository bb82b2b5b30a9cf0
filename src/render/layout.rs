//! # Bar Layout
//!
//! Places every element of an encoded symbol as a filled rectangle, left to
//! right:
//!
//! ```text
//! quiet | normal guard | left half | central guard | right half | normal guard
//!         B W B          24 elems    W B W B W       24 elems     B W B
//! ```
//!
//! Spaces are emitted as white rectangles too, so the output is a complete
//! tiling of the symbol area: 3 + 24 + 5 + 24 + 3 = 59 rectangles.
//!
//! The cursor is kept in whole modules and converted to a coordinate only
//! when a rectangle is emitted, so coordinates don't drift.

use std::fmt;

use super::metrics::PhysicalMetrics;
use crate::symbology::{Encoded, HalfPattern};

/// Number of rectangles in a rendered symbol.
pub const RECTANGLE_COUNT: usize = 3 + 24 + 5 + 24 + 3;

const NORMAL_GUARD: [Color; 3] = [Color::Black, Color::White, Color::Black];
const CENTRAL_GUARD: [Color; 5] = [
    Color::White,
    Color::Black,
    Color::White,
    Color::Black,
    Color::White,
];

/// Fill colour of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// TikZ colour name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }

    /// Colour of element `index` in a half that starts with `first`.
    fn alternating(first: Color, index: usize) -> Color {
        match (first, index % 2) {
            (c, 0) => c,
            (Color::Black, _) => Color::White,
            (Color::White, _) => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An axis-aligned filled rectangle in physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x_start: f64,
    pub x_end: f64,
    /// Bottom edge: 0 for guard bars, the data bar floor otherwise
    pub y_start: f64,
    /// Top edge (the guard height)
    pub y_end: f64,
    pub color: Color,
}

impl Rectangle {
    pub fn width(&self) -> f64 {
        self.x_end - self.x_start
    }

    pub fn height(&self) -> f64 {
        self.y_end - self.y_start
    }
}

/// Lays out an encoded symbol using a fixed set of metrics.
///
/// A `Layout` holds no per-symbol state; each [`Layout::render`] call starts
/// a fresh cursor.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    metrics: &'a PhysicalMetrics,
}

impl<'a> Layout<'a> {
    pub fn new(metrics: &'a PhysicalMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &PhysicalMetrics {
        self.metrics
    }

    /// Rectangles for the whole symbol in drawing order.
    pub fn render(&self, encoded: &Encoded) -> Vec<Rectangle> {
        let mut cursor = Cursor {
            metrics: self.metrics,
            modules: 0,
            out: Vec::with_capacity(RECTANGLE_COUNT),
        };

        cursor.guard(&NORMAL_GUARD);
        cursor.half(&encoded.left, Color::White);
        cursor.guard(&CENTRAL_GUARD);
        cursor.half(&encoded.right, Color::Black);
        cursor.guard(&NORMAL_GUARD);

        tracing::debug!(
            rectangles = cursor.out.len(),
            modules = cursor.modules,
            "laid out EAN-13 symbol"
        );
        cursor.out
    }
}

/// Running x position, in modules from the end of the begin quiet zone.
struct Cursor<'a> {
    metrics: &'a PhysicalMetrics,
    modules: u32,
    out: Vec<Rectangle>,
}

impl Cursor<'_> {
    fn push(&mut self, width: u8, y_start: f64, color: Color) {
        let end = self.modules + width as u32;
        self.out.push(Rectangle {
            x_start: self.metrics.x_at(self.modules),
            x_end: self.metrics.x_at(end),
            y_start,
            y_end: self.metrics.guard_height,
            color,
        });
        self.modules = end;
    }

    /// One-module bars down to the baseline.
    fn guard(&mut self, colors: &[Color]) {
        for &color in colors {
            self.push(1, 0.0, color);
        }
    }

    /// One data element, stopping at the data bar floor.
    fn module(&mut self, width: u8, color: Color) {
        self.push(width, self.metrics.data_bar_floor(), color);
    }

    fn half(&mut self, pattern: &HalfPattern, first: Color) {
        for (i, &width) in pattern.widths().iter().enumerate() {
            self.module(width, Color::alternating(first, i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::metrics::SYMBOL_MODULES;
    use crate::symbology::Ean13;

    fn render(code: &str) -> Vec<Rectangle> {
        let metrics = PhysicalMetrics::EAN13;
        Layout::new(&metrics).render(&Ean13::new(code).unwrap().encode())
    }

    #[test]
    fn test_rectangle_count() {
        for code in ["978272349971", "000000000000", "123456789012"] {
            assert_eq!(render(code).len(), 59);
        }
        assert_eq!(RECTANGLE_COUNT, 59);
    }

    #[test]
    fn test_guard_colors() {
        let rects = render("978272349971");
        let colors = |range: std::ops::Range<usize>| {
            rects[range].iter().map(|r| r.color).collect::<Vec<_>>()
        };
        assert_eq!(colors(0..3), NORMAL_GUARD);
        assert_eq!(colors(27..32), CENTRAL_GUARD);
        assert_eq!(colors(56..59), NORMAL_GUARD);
    }

    #[test]
    fn test_half_color_alternation() {
        let rects = render("978272349971");
        // Left half starts at index 3, right half at 32
        assert_eq!(rects[3].color, Color::White);
        assert_eq!(rects[4].color, Color::Black);
        assert_eq!(rects[32].color, Color::Black);
        assert_eq!(rects[33].color, Color::White);
        // Adjacent elements never share a colour
        for pair in rects.windows(2) {
            assert_ne!(pair[0].color, pair[1].color);
        }
    }

    #[test]
    fn test_rectangles_are_contiguous() {
        let metrics = PhysicalMetrics::EAN13;
        let rects = render("590123412345");
        assert_eq!(rects[0].x_start, metrics.quiet_zone_begin);
        for pair in rects.windows(2) {
            assert_eq!(pair[0].x_end, pair[1].x_start);
        }
        let last = rects.last().unwrap();
        assert_eq!(last.x_end, metrics.x_at(SYMBOL_MODULES));
    }

    #[test]
    fn test_heights() {
        let metrics = PhysicalMetrics::EAN13;
        let rects = render("978272349971");
        for (i, r) in rects.iter().enumerate() {
            assert_eq!(r.y_end, metrics.guard_height);
            let is_guard = i < 3 || (27..32).contains(&i) || i >= 56;
            if is_guard {
                assert_eq!(r.y_start, 0.0);
                assert!((r.width() - metrics.module_width).abs() < 1e-9);
            } else {
                assert_eq!(r.y_start, metrics.data_bar_floor());
                assert!((r.height() - metrics.standard_height).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_module_widths_follow_pattern() {
        let metrics = PhysicalMetrics::EAN13;
        let code = Ean13::new("978272349971").unwrap();
        let encoded = code.encode();
        let rects = Layout::new(&metrics).render(&encoded);
        for (r, &w) in rects[3..27].iter().zip(encoded.left.widths()) {
            assert!((r.width() - w as f64 * metrics.module_width).abs() < 1e-9);
        }
        for (r, &w) in rects[32..56].iter().zip(encoded.right.widths()) {
            assert!((r.width() - w as f64 * metrics.module_width).abs() < 1e-9);
        }
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::White.name(), "white");
    }
}
