//! # Drawing Scale and Length Text
//!
//! A detail is drawn with independent horizontal and vertical factors: spans
//! run to several metres while the section depth is a few decimetres, so the
//! elevation is usually compressed horizontally (e.g. 1:100) and much less
//! vertically (e.g. 1:20).
//!
//! ## Example
//!
//! ```rust
//! use detail_core::units::{format_length, Scale};
//! use detail_core::point::Point;
//!
//! let scale = Scale::new(100.0, 20.0).unwrap();
//! assert_eq!(scale.apply(Point::new(295.0, -40.0)), Point::new(2.95, -2.0));
//! assert_eq!(format_length(8.5), "8.5");
//! assert_eq!(format_length(17.0), "17");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, DetailResult};
use crate::point::Point;

/// Non-uniform drawing scale. Coordinates are divided by these factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Scale {
    /// 1:1, model units equal drawing units
    pub const UNIT: Scale = Scale {
        horizontal: 1.0,
        vertical: 1.0,
    };

    /// Create a validated scale (both factors finite and positive)
    pub fn new(horizontal: f64, vertical: f64) -> DetailResult<Self> {
        Ok(Scale {
            horizontal: require_positive("scale.horizontal", horizontal)?,
            vertical: require_positive("scale.vertical", vertical)?,
        })
    }

    pub fn is_unit(&self) -> bool {
        self.horizontal == 1.0 && self.vertical == 1.0
    }

    /// Scale a horizontal length
    pub fn x(&self, value: f64) -> f64 {
        value / self.horizontal
    }

    /// Scale a vertical length
    pub fn y(&self, value: f64) -> f64 {
        value / self.vertical
    }

    pub fn apply(&self, p: Point) -> Point {
        p.scale(self.horizontal, self.vertical)
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::UNIT
    }
}

impl TryFrom<(f64, f64)> for Scale {
    type Error = crate::errors::DetailError;

    fn try_from((horizontal, vertical): (f64, f64)) -> DetailResult<Self> {
        Scale::new(horizontal, vertical)
    }
}

/// Format a model length for labels: integers print without a fraction,
/// everything else keeps up to four decimals.
pub fn format_length(value: f64) -> String {
    let rounded = (value * 1e4).round() / 1e4;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
