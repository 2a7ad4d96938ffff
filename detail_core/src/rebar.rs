//! # Reinforcing Bars
//!
//! Supplementary bars placed on a beam line. A bar is either straight or
//! L-bent; the shape tag selects how its path is traced.
//!
//! ```text
//! Straight, left-aligned         L-bent, left          L-bent, right
//!
//! insert ●──────────────        ●──────────          ●──────────┐
//!                               │                    insert     │
//!                               ┘ leg                           leg
//! ```
//!
//! The leg direction is chosen by the caller: top bars hook downward into the
//! section, bottom bars hook upward.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, DetailError, DetailResult};
use crate::point::Point;

/// Horizontal alignment of a bar relative to its insertion point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Bar shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RebarShape {
    /// Single horizontal segment
    #[default]
    Straight,
    /// Horizontal run with a vertical leg at one end
    LBent,
}

/// A supplementary reinforcing bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebar {
    /// Length of the horizontal run (model units)
    pub length: f64,

    /// Insertion point (model units)
    pub insert: Point,

    #[serde(default)]
    pub h_align: HAlign,

    #[serde(default)]
    pub shape: RebarShape,
}

impl Rebar {
    /// Create a straight bar.
    ///
    /// `Left` extends rightward from `insert`, `Right` extends leftward and
    /// `Center` splits the bar about `insert`.
    pub fn straight(length: f64, insert: impl Into<Point>, h_align: HAlign) -> DetailResult<Self> {
        Rebar::build(length, insert.into(), h_align, RebarShape::Straight)
    }

    /// Create an L-bent bar.
    ///
    /// The horizontal run always starts at `insert` and extends rightward;
    /// `h_align` names the end that carries the vertical leg.
    pub fn l_bent(length: f64, insert: impl Into<Point>, h_align: HAlign) -> DetailResult<Self> {
        Rebar::build(length, insert.into(), h_align, RebarShape::LBent)
    }

    fn build(length: f64, insert: Point, h_align: HAlign, shape: RebarShape) -> DetailResult<Self> {
        let rebar = Rebar {
            length,
            insert,
            h_align,
            shape,
        };
        rebar.validate()?;
        Ok(rebar)
    }

    /// Validate a bar, e.g. one obtained through deserialization
    pub fn validate(&self) -> DetailResult<()> {
        require_positive("rebar.length", self.length)?;
        Point::try_new(self.insert.x, self.insert.y)?;
        if self.shape == RebarShape::LBent && self.h_align == HAlign::Center {
            return Err(DetailError::unsupported(
                "An L-bent bar needs its leg at the left or right end, not centered",
            ));
        }
        Ok(())
    }

    /// x range `(start, end)` of the horizontal run
    pub fn x_extent(&self) -> (f64, f64) {
        let x = self.insert.x;
        match (self.shape, self.h_align) {
            (RebarShape::LBent, _) | (RebarShape::Straight, HAlign::Left) => (x, x + self.length),
            (RebarShape::Straight, HAlign::Right) => (x - self.length, x),
            (RebarShape::Straight, HAlign::Center) => (x - self.length / 2.0, x + self.length / 2.0),
        }
    }

    /// Far endpoint of the horizontal run, seen from the insertion point
    pub fn end_point(&self) -> Point {
        let (start, end) = self.x_extent();
        let x = if start == self.insert.x { end } else { start };
        Point::new(x, self.insert.y)
    }

    /// Bar path from left to right. `leg` is the signed vertical leg length
    /// used by L-bent bars (negative points down).
    pub fn path(&self, leg: f64) -> Vec<Point> {
        let (start, end) = self.x_extent();
        let y = self.insert.y;
        match (self.shape, self.h_align) {
            (RebarShape::Straight, _) => vec![Point::new(start, y), Point::new(end, y)],
            (RebarShape::LBent, HAlign::Right) => vec![
                Point::new(start, y),
                Point::new(end, y),
                Point::new(end, y + leg),
            ],
            // Center is rejected at construction
            (RebarShape::LBent, _) => vec![
                Point::new(start, y + leg),
                Point::new(start, y),
                Point::new(end, y),
            ],
        }
    }
}
