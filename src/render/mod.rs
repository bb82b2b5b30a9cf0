//! # Rendering
//!
//! Converts encoded module widths into positioned rectangles and then into
//! TikZ drawing statements.
//!
//! ```text
//! Encoded → Layout (rectangles) → TikZ text
//! ```
//!
//! ## Module Structure
//!
//! - [`metrics`]: physical dimensions, with JSON overrides
//! - [`layout`]: guard zones, data modules and colour alternation
//! - [`tikz`]: `\fill` statement serialization

pub mod layout;
pub mod metrics;
pub mod tikz;

pub use layout::{Color, Layout, Rectangle};
pub use metrics::PhysicalMetrics;
pub use tikz::TikzPicture;
