//! # TikZ Output
//!
//! Serializes laid-out rectangles as TikZ fill statements:
//!
//! ```text
//! \begin{tikzpicture}
//! \fill[black] (0.3630,2.4500) rectangle (0.3960,0.0000);
//! \fill[white] (0.3960,2.4500) rectangle (0.4290,0.0000);
//! ...
//! \end{tikzpicture}
//! ```
//!
//! Each rectangle is given by its top-left and bottom-right corners.
//! Coordinates use a fixed precision so the text is stable across runs.

use std::fmt::Write;

use super::layout::{Layout, Rectangle};
use super::metrics::{PhysicalMetrics, SYMBOL_MODULES};
use crate::symbology::Ean13;

pub const BEGIN: &str = "\\begin{tikzpicture}\n";
pub const END: &str = "\\end{tikzpicture}\n";

/// Decimal places for coordinates.
const PRECISION: usize = 4;

/// Append one `\fill` statement for `rect`.
pub fn write_fill(out: &mut String, rect: &Rectangle) {
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "\\fill[{}] ({:.p$},{:.p$}) rectangle ({:.p$},{:.p$});",
        rect.color,
        rect.x_start,
        rect.y_end,
        rect.x_end,
        rect.y_start,
        p = PRECISION
    );
}

/// Wrap rectangles in a `tikzpicture` environment.
pub fn picture(rects: &[Rectangle]) -> String {
    let mut out = String::with_capacity(BEGIN.len() + END.len() + rects.len() * 64);
    out.push_str(BEGIN);
    for rect in rects {
        write_fill(&mut out, rect);
    }
    out.push_str(END);
    out
}

/// Builder for the TikZ picture of one barcode.
///
/// ## Example
///
/// ```
/// use ean13_tikz::render::TikzPicture;
/// use ean13_tikz::symbology::Ean13;
///
/// let code = Ean13::new("978272349971")?;
/// let tikz = TikzPicture::new(&code).caption(true).render();
/// assert!(tikz.starts_with("\\begin{tikzpicture}"));
/// assert!(tikz.contains("{9 782723 499712}"));
/// # Ok::<(), ean13_tikz::error::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TikzPicture<'a> {
    code: &'a Ean13,
    metrics: PhysicalMetrics,
    caption: bool,
}

impl<'a> TikzPicture<'a> {
    /// Default metrics, no caption.
    pub fn new(code: &'a Ean13) -> Self {
        Self {
            code,
            metrics: PhysicalMetrics::EAN13,
            caption: false,
        }
    }

    pub fn metrics(mut self, metrics: PhysicalMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Print the human-readable code under the bars.
    pub fn caption(mut self, enabled: bool) -> Self {
        self.caption = enabled;
        self
    }

    /// Rectangles only, without serialization.
    pub fn rectangles(&self) -> Vec<Rectangle> {
        Layout::new(&self.metrics).render(&self.code.encode())
    }

    pub fn render(&self) -> String {
        let rects = self.rectangles();
        let mut out = picture(&rects);

        if self.caption {
            let center = self.metrics.quiet_zone_begin
                + SYMBOL_MODULES as f64 * self.metrics.module_width / 2.0;
            let mut node = String::new();
            let _ = writeln!(
                node,
                "\\node[anchor=north,font=\\ttfamily] at ({:.p$},0) {{{}}};",
                center,
                self.code,
                p = PRECISION
            );
            out.insert_str(out.len() - END.len(), &node);
        }

        out
    }
}
