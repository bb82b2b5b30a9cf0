//! # ean13-tikz - EAN-13 Barcodes as TikZ
//!
//! Computes the check digit and bar pattern of an EAN-13 retail barcode and
//! renders it as TikZ `\fill` rectangles for embedding in LaTeX documents.
//!
//! ## Quick Start
//!
//! ```
//! use ean13_tikz::{Ean13, TikzPicture};
//!
//! let code = Ean13::new("978272349971")?;
//! assert_eq!(code.check_digit(), 2);
//!
//! let tikz = TikzPicture::new(&code).render();
//! assert_eq!(tikz.matches("\\fill").count(), 59);
//! # Ok::<(), ean13_tikz::Ean13Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Validation, check digit, parity tables, module patterns |
//! | [`render`] | Physical metrics, bar layout, TikZ serialization |
//! | [`latex`] | Standalone document wrapper and compiler invocation |
//! | [`error`] | Error types |

pub mod error;
pub mod latex;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use error::{Ean13Error, ValidationError};
pub use render::{PhysicalMetrics, TikzPicture};
pub use symbology::Ean13;
