//! # Physical Metrics
//!
//! Dimensions of the printed symbol, in TikZ units (centimetres unless the
//! surrounding picture scales them).
//!
//! ```text
//!  quiet    guard       data bars              guard    quiet
//! ├─begin─┤ ▌ ▌ ▌▌▌ ▌▌ ▌ ▌▌  ...  ▌▌ ▌ ▌ ▌ ▌ ├──end──┤
//!           ┬                                  ┬  guard_height
//!           │  ┬ standard_height               │
//!           │  │                               │
//!           │  ┴ data_bar_floor                │
//!           ┴──────────────────────────────────┴  0
//! ```
//!
//! Guard bars run from `guard_height` down to 0. Data bars run from
//! `guard_height` down to [`PhysicalMetrics::data_bar_floor`], so they are
//! `standard_height` tall and end just above the guard bar extensions.
//!
//! ## Overrides
//!
//! Any subset of the fields can be overridden from JSON:
//!
//! ```
//! use ean13_tikz::render::PhysicalMetrics;
//!
//! let metrics = PhysicalMetrics::from_json(r#"{"module_width": 0.05}"#)?;
//! assert_eq!(metrics.module_width, 0.05);
//! assert_eq!(metrics.guard_height, PhysicalMetrics::EAN13.guard_height);
//! # Ok::<(), ean13_tikz::Ean13Error>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Ean13Error;

/// Total symbol width in modules, guards included (3 + 42 + 5 + 42 + 3).
pub const SYMBOL_MODULES: u32 = 95;

/// Physical dimensions used by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalMetrics {
    /// Blank margin before the start guard
    pub quiet_zone_begin: f64,

    /// Blank margin after the end guard
    pub quiet_zone_end: f64,

    /// Height of data bars
    pub standard_height: f64,

    /// Height of guard bars (taller than data bars)
    pub guard_height: f64,

    /// Width of one module (the X-dimension)
    pub module_width: f64,
}

impl PhysicalMetrics {
    /// Default EAN-13 metrics.
    pub const EAN13: Self = Self {
        quiet_zone_begin: 0.363,
        quiet_zone_end: 0.231,
        standard_height: 2.285,
        guard_height: 2.450,
        module_width: 0.033,
    };

    /// Lower edge of data bars: how far guard bars extend below them.
    #[inline]
    pub const fn data_bar_floor(&self) -> f64 {
        self.guard_height - self.standard_height
    }

    /// Width of the full symbol including both quiet zones.
    pub fn total_width(&self) -> f64 {
        self.quiet_zone_begin + SYMBOL_MODULES as f64 * self.module_width + self.quiet_zone_end
    }

    /// x-coordinate after `modules` modules, measured from the left edge.
    #[inline]
    pub fn x_at(&self, modules: u32) -> f64 {
        self.quiet_zone_begin + modules as f64 * self.module_width
    }

    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Ean13Error> {
        let metrics: Self = serde_json::from_str(json)
            .map_err(|e| Ean13Error::Config(format!("Invalid metrics JSON: {}", e)))?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Load overrides from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Ean13Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            Ean13Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading metrics");
        Self::from_json(&json)
    }

    /// Check that the metrics describe a drawable symbol.
    pub fn validate(&self) -> Result<(), Ean13Error> {
        let fields = [
            ("quiet_zone_begin", self.quiet_zone_begin),
            ("quiet_zone_end", self.quiet_zone_end),
            ("standard_height", self.standard_height),
            ("guard_height", self.guard_height),
            ("module_width", self.module_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Ean13Error::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.module_width <= 0.0 {
            return Err(Ean13Error::Config("module_width must be positive".into()));
        }
        if self.standard_height <= 0.0 {
            return Err(Ean13Error::Config("standard_height must be positive".into()));
        }
        if self.guard_height < self.standard_height {
            return Err(Ean13Error::Config(format!(
                "guard_height ({}) must not be less than standard_height ({})",
                self.guard_height, self.standard_height
            )));
        }
        Ok(())
    }
}

impl Default for PhysicalMetrics {
    fn default() -> Self {
        Self::EAN13
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = PhysicalMetrics::default();
        assert_eq!(m, PhysicalMetrics::EAN13);
        assert!((m.data_bar_floor() - 0.165).abs() < 1e-9);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_total_width() {
        let m = PhysicalMetrics::EAN13;
        // 0.363 + 95 * 0.033 + 0.231
        assert!((m.total_width() - 3.729).abs() < 1e-9);
    }

    #[test]
    fn test_x_at() {
        let m = PhysicalMetrics::EAN13;
        assert_eq!(m.x_at(0), 0.363);
        assert!((m.x_at(3) - 0.462).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json() {
        let m = PhysicalMetrics::from_json(r#"{"guard_height": 3.0, "standard_height": 2.5}"#)
            .unwrap();
        assert_eq!(m.guard_height, 3.0);
        assert_eq!(m.standard_height, 2.5);
        assert_eq!(m.module_width, 0.033);
        assert!((m.data_bar_floor() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = PhysicalMetrics::from_json(r#"{"x_dimension": 0.1}"#).unwrap_err();
        assert!(matches!(err, Ean13Error::Config(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{"module_width": 0}"#,
            r#"{"quiet_zone_begin": -1}"#,
            r#"{"guard_height": 1.0}"#,
            r#"{"standard_height": 0}"#,
        ] {
            let err = PhysicalMetrics::from_json(json).unwrap_err();
            assert!(matches!(err, Ean13Error::Config(_)), "{}", json);
        }
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        fs::write(&path, r#"{"quiet_zone_end": 0.5}"#).unwrap();
        let m = PhysicalMetrics::from_file(&path).unwrap();
        assert_eq!(m.quiet_zone_end, 0.5);

        let missing = PhysicalMetrics::from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(Ean13Error::Config(_))));
    }
}
