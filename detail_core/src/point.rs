//! # Point
//!
//! The atomic element of every polyline the engine produces.
//!
//! ```rust
//! use detail_core::point::Point;
//!
//! let p = Point::new(295.0, -40.0) + Point::new(5.0, 0.0);
//! assert_eq!(p.scale(100.0, 20.0), Point::new(3.0, -2.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::errors::{DetailError, DetailResult};

/// A 2D coordinate in model (or scaled drawing) units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point without validation (internal derivations).
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point from caller-provided values, rejecting NaN/infinite.
    pub fn try_new(x: f64, y: f64) -> DetailResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DetailError::invalid_geometry(
                "point",
                format!("({}, {})", x, y),
                "Coordinates must be finite",
            ));
        }
        Ok(Point { x, y })
    }

    /// Divide x by the horizontal factor and y by the vertical factor.
    pub fn scale(self, horizontal: f64, vertical: f64) -> Point {
        Point::new(self.x / horizontal, self.y / vertical)
    }

    /// Component-wise comparison within an absolute tolerance
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Compare two point sequences element by element.
pub fn points_approx_eq(a: &[Point], b: &[Point], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.approx_eq(q, eps))
}
