//! # Single-Span Beam Geometry
//!
//! A [`Beam`] is one span of a beam line: the concrete between two axes,
//! with the column stubs that support it at either end.
//!
//! ## Coordinates
//!
//! - x runs along the beam line; the span's left axis sits at `dx`
//! - y = 0 is the top face of the beam, `-height` the bottom face
//! - Column stubs extend `col_extend_dist` above the top face and below the
//!   bottom face
//!
//! ```text
//!        ┃   ┃                                   ┃   ┃
//!   ━━━━━┛   ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛   ┗━━━━  top polyline
//!             |   |                        |   |           stirrup ticks
//!   ━━━━━┓   ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓   ┏━━━━  bot polyline
//!        ┃   ┃                                   ┃   ┃
//!        dx                                      dx + length
//! ```
//!
//! A column width of 0 on a face means no column there: the face line runs
//! flush to the axis instead of stepping into a stub. An end with no column
//! on either face is a console: the beam overhangs that axis by
//! `console_extend_dist` and is closed by a plain vertical edge.

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, DetailError, DetailResult};
use crate::point::Point;

/// Column widths at the two ends of one beam face
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EndWidths {
    pub left: f64,
    pub right: f64,
}

impl EndWidths {
    pub fn new(left: f64, right: f64) -> Self {
        EndWidths { left, right }
    }
}

/// Column widths supporting a span, top and bottom faces independently
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamSupports {
    pub bot: EndWidths,
    pub top: EndWidths,
}

impl BeamSupports {
    /// Widest column at the left end
    pub fn left(&self) -> f64 {
        self.bot.left.max(self.top.left)
    }

    /// Widest column at the right end
    pub fn right(&self) -> f64 {
        self.bot.right.max(self.top.right)
    }

    pub fn is_left_console(&self) -> bool {
        self.left() == 0.0
    }

    pub fn is_right_console(&self) -> bool {
        self.right() == 0.0
    }
}

/// Drafting offsets, already expressed in the beam's units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamOffsets {
    pub first_stirrup_dist: f64,
    pub col_extend_dist: f64,
    pub console_extend_dist: f64,
    pub stirrup_dy: f64,
}

/// Geometry model of one span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub columns_width: BeamSupports,

    /// Dense stirrup zone lengths `[left, right]`; `None` for a uniform span
    pub stirrup_len: Option<Vec<f64>>,

    /// x of the span's left axis
    pub dx: f64,

    pub offsets: BeamOffsets,
}

impl Beam {
    /// Create a validated beam.
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        columns_width: BeamSupports,
        stirrup_len: Option<Vec<f64>>,
        dx: f64,
        offsets: BeamOffsets,
    ) -> DetailResult<Self> {
        let beam = Beam::assemble(length, width, height, columns_width, stirrup_len, dx, offsets);
        beam.validate()?;
        Ok(beam)
    }

    /// Build without validation; used for re-scaled copies of validated input.
    pub(crate) fn assemble(
        length: f64,
        width: f64,
        height: f64,
        columns_width: BeamSupports,
        stirrup_len: Option<Vec<f64>>,
        dx: f64,
        offsets: BeamOffsets,
    ) -> Self {
        Beam {
            length,
            width,
            height,
            columns_width,
            stirrup_len,
            dx,
            offsets,
        }
    }

    pub fn validate(&self) -> DetailResult<()> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        if !self.dx.is_finite() {
            return Err(DetailError::invalid_geometry("dx", self.dx.to_string(), "Must be finite"));
        }

        let cw = &self.columns_width;
        require_non_negative("columns_width.bot.left", cw.bot.left)?;
        require_non_negative("columns_width.bot.right", cw.bot.right)?;
        require_non_negative("columns_width.top.left", cw.top.left)?;
        require_non_negative("columns_width.top.right", cw.top.right)?;

        require_non_negative("first_stirrup_dist", self.offsets.first_stirrup_dist)?;
        require_non_negative("col_extend_dist", self.offsets.col_extend_dist)?;
        require_non_negative("console_extend_dist", self.offsets.console_extend_dist)?;
        require_non_negative("stirrup_dy", self.offsets.stirrup_dy)?;

        if cw.is_left_console() && cw.is_right_console() {
            return Err(DetailError::unsupported(
                "A span needs a column at one end at least; both ends are consoles",
            ));
        }

        let run = self.stirrup_run();
        if run <= 0.0 {
            return Err(DetailError::invalid_geometry(
                "length",
                self.length.to_string(),
                "Span is too short for its supports and stirrup offsets",
            ));
        }

        if let Some(zones) = &self.stirrup_len {
            if zones.len() != 2 {
                return Err(DetailError::unsupported(format!(
                    "Stirrup zones are given as [left, right]; got {} values",
                    zones.len()
                )));
            }
            for zone in zones {
                require_positive("stirrup_len", *zone)?;
            }
            if zones[0] + zones[1] >= run {
                return Err(DetailError::invalid_geometry(
                    "stirrup_len",
                    format!("{:?}", zones),
                    "Dense zones leave no middle zone in the stirrup run",
                ));
            }
        }
        Ok(())
    }

    /// Distance between the left and right support faces
    pub fn clear_length(&self) -> f64 {
        self.length - self.columns_width.left() / 2.0 - self.columns_width.right() / 2.0
    }

    /// Length covered by stirrups, between the first and last one
    pub fn stirrup_run(&self) -> f64 {
        self.clear_length() - 2.0 * self.offsets.first_stirrup_dist
    }

    fn left_x(&self) -> f64 {
        self.dx
    }

    fn right_x(&self) -> f64 {
        self.dx + self.length
    }

    /// x where the beam ends on the left: the axis, or the console tip
    fn left_end_x(&self) -> f64 {
        if self.columns_width.is_left_console() {
            self.left_x() - self.offsets.console_extend_dist
        } else {
            self.left_x()
        }
    }

    fn right_end_x(&self) -> f64 {
        if self.columns_width.is_right_console() {
            self.right_x() + self.offsets.console_extend_dist
        } else {
            self.right_x()
        }
    }

    /// Top face, stepping up into the column stubs above the beam
    pub fn top_polyline_points(&self) -> Vec<Point> {
        self.face_polyline(self.columns_width.top, 0.0, self.offsets.col_extend_dist)
    }

    /// Bottom face, stepping down into the column stubs below the beam
    pub fn bot_polyline_points(&self) -> Vec<Point> {
        self.face_polyline(
            self.columns_width.bot,
            -self.height,
            -self.height - self.offsets.col_extend_dist,
        )
    }

    fn face_polyline(&self, widths: EndWidths, y_face: f64, y_stub: f64) -> Vec<Point> {
        let mut points = Vec::with_capacity(4);
        if widths.left > 0.0 {
            let x = self.left_x() + widths.left / 2.0;
            points.push(Point::new(x, y_stub));
            points.push(Point::new(x, y_face));
        } else {
            points.push(Point::new(self.left_end_x(), y_face));
        }
        if widths.right > 0.0 {
            let x = self.right_x() - widths.right / 2.0;
            points.push(Point::new(x, y_face));
            points.push(Point::new(x, y_stub));
        } else {
            points.push(Point::new(self.right_end_x(), y_face));
        }
        points
    }

    /// Outer contour closing the beam at its left end
    pub fn left_edge_polyline(&self) -> Vec<Point> {
        let cw = &self.columns_width;
        if cw.is_left_console() {
            return self.console_edge(self.left_end_x());
        }
        self.edge_polyline(self.left_x(), -1.0, cw.top.left, cw.bot.left)
    }

    /// Outer contour closing the beam at its right end
    pub fn right_edge_polyline(&self) -> Vec<Point> {
        let cw = &self.columns_width;
        if cw.is_right_console() {
            return self.console_edge(self.right_end_x());
        }
        self.edge_polyline(self.right_x(), 1.0, cw.top.right, cw.bot.right)
    }

    fn console_edge(&self, x: f64) -> Vec<Point> {
        vec![Point::new(x, 0.0), Point::new(x, -self.height)]
    }

    /// Traces top stub, beam end and bottom stub on the outer side of the
    /// axis at `x_axis`. `side` is -1 for the left end, +1 for the right end.
    fn edge_polyline(&self, x_axis: f64, side: f64, top: f64, bot: f64) -> Vec<Point> {
        let ext = self.offsets.col_extend_dist;
        let h = self.height;
        let x_end = x_axis + side * top.max(bot) / 2.0;

        let mut points = Vec::with_capacity(6);
        if top > 0.0 {
            let x = x_axis + side * top / 2.0;
            points.push(Point::new(x, ext));
            points.push(Point::new(x, 0.0));
        } else {
            points.push(Point::new(x_axis, 0.0));
        }
        if points.last().map(|p| p.x) != Some(x_end) {
            points.push(Point::new(x_end, 0.0));
        }
        points.push(Point::new(x_end, -h));
        if bot > 0.0 {
            let x = x_axis + side * bot / 2.0;
            if x != x_end {
                points.push(Point::new(x, -h));
            }
            points.push(Point::new(x, -h - ext));
        } else if x_end != x_axis {
            points.push(Point::new(x_axis, -h));
        }
        points
    }

    /// x positions of the drawn stirrup ticks: both ends of the stirrup run
    /// and the inner ends of the dense zones. Empty without zones.
    pub fn stirrup_xs(&self) -> Vec<f64> {
        let Some(zones) = &self.stirrup_len else {
            return Vec::new();
        };
        let start = self.left_x() + self.columns_width.left() / 2.0 + self.offsets.first_stirrup_dist;
        let end = self.right_x() - self.columns_width.right() / 2.0 - self.offsets.first_stirrup_dist;
        let left_zone = zones.first().copied().unwrap_or(0.0);
        let right_zone = zones.last().copied().unwrap_or(0.0);
        vec![start, start + left_zone, end - right_zone, end]
    }

    /// Stirrup ticks as vertical two-point segments
    pub fn stirrup_points(&self) -> Vec<Vec<Point>> {
        let y_top = -self.offsets.stirrup_dy;
        let y_bot = -self.height + self.offsets.stirrup_dy;
        self.stirrup_xs()
            .into_iter()
            .map(|x| vec![Point::new(x, y_top), Point::new(x, y_bot)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> BeamOffsets {
        BeamOffsets {
            first_stirrup_dist: 5.0,
            col_extend_dist: 13.75,
            console_extend_dist: 20.0,
            stirrup_dy: 1.25,
        }
    }

    fn supports(bot: (f64, f64), top: (f64, f64)) -> BeamSupports {
        BeamSupports {
            bot: EndWidths::new(bot.0, bot.1),
            top: EndWidths::new(top.0, top.1),
        }
    }

    fn interior_span() -> Beam {
        Beam::new(
            540.0,
            40.0,
            40.0,
            supports((45.0, 40.0), (45.0, 40.0)),
            Some(vec![85.0, 85.0]),
            295.0,
            offsets(),
        )
        .unwrap()
    }

    #[test]
    fn test_top_polyline_steps_into_columns() {
        let beam = interior_span();
        assert_eq!(
            beam.top_polyline_points(),
            vec![
                Point::new(317.5, 13.75),
                Point::new(317.5, 0.0),
                Point::new(815.0, 0.0),
                Point::new(815.0, 13.75),
            ]
        );
    }

    #[test]
    fn test_bot_polyline_steps_into_columns() {
        let beam = interior_span();
        assert_eq!(
            beam.bot_polyline_points(),
            vec![
                Point::new(317.5, -53.75),
                Point::new(317.5, -40.0),
                Point::new(815.0, -40.0),
                Point::new(815.0, -53.75),
            ]
        );
    }

    #[test]
    fn test_console_end_overhangs_axis() {
        let beam = Beam::new(
            204.0,
            40.0,
            45.0,
            supports((0.0, 45.0), (0.0, 45.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap();
        let top = beam.top_polyline_points();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], Point::new(-20.0, 0.0));
        assert_eq!(beam.bot_polyline_points()[0], Point::new(-20.0, -45.0));
        assert_eq!(
            beam.left_edge_polyline(),
            vec![Point::new(-20.0, 0.0), Point::new(-20.0, -45.0)]
        );
        // the stirrup run still starts at the axis
        assert_eq!(beam.stirrup_run(), 204.0 - 22.5 - 10.0);
    }

    #[test]
    fn test_right_console_overhangs_axis() {
        let beam = Beam::new(
            350.0,
            40.0,
            45.0,
            supports((40.0, 0.0), (40.0, 0.0)),
            None,
            624.0,
            offsets(),
        )
        .unwrap();
        assert_eq!(beam.top_polyline_points().last(), Some(&Point::new(994.0, 0.0)));
        assert_eq!(
            beam.right_edge_polyline(),
            vec![Point::new(994.0, 0.0), Point::new(994.0, -45.0)]
        );
    }

    #[test]
    fn test_one_missing_face_runs_flush() {
        // column below only: the top face stops at the axis, no overhang
        let beam = Beam::new(
            350.0,
            50.0,
            40.0,
            supports((40.0, 50.0), (40.0, 0.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap();
        assert_eq!(beam.top_polyline_points().last(), Some(&Point::new(350.0, 0.0)));
    }

    #[test]
    fn test_left_edge_traces_outer_column_face() {
        let beam = Beam::new(
            295.0,
            40.0,
            40.0,
            supports((45.0, 45.0), (40.0, 45.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap();
        assert_eq!(
            beam.left_edge_polyline(),
            vec![
                Point::new(-20.0, 13.75),
                Point::new(-20.0, 0.0),
                Point::new(-22.5, 0.0),
                Point::new(-22.5, -40.0),
                Point::new(-22.5, -53.75),
            ]
        );
    }

    #[test]
    fn test_right_edge_column_below_only() {
        let beam = Beam::new(
            350.0,
            50.0,
            40.0,
            supports((40.0, 50.0), (0.0, 0.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap();
        assert_eq!(
            beam.right_edge_polyline(),
            vec![
                Point::new(350.0, 0.0),
                Point::new(375.0, 0.0),
                Point::new(375.0, -40.0),
                Point::new(375.0, -53.75),
            ]
        );
    }

    #[test]
    fn test_stirrup_points_follow_zones() {
        let beam = interior_span();
        // run starts at 295 + 22.5 + 5, ends at 835 - 20 - 5
        assert_eq!(beam.stirrup_xs(), vec![322.5, 407.5, 725.0, 810.0]);
        let ticks = beam.stirrup_points();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], vec![Point::new(322.5, -1.25), Point::new(322.5, -38.75)]);
    }

    #[test]
    fn test_no_zones_no_ticks() {
        let beam = Beam::new(
            295.0,
            40.0,
            40.0,
            supports((45.0, 45.0), (40.0, 45.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap();
        assert!(beam.stirrup_points().is_empty());
        assert_eq!(beam.stirrup_run(), 240.0);
    }

    #[test]
    fn test_both_ends_console_unsupported() {
        let err = Beam::new(
            300.0,
            40.0,
            40.0,
            supports((0.0, 0.0), (0.0, 0.0)),
            None,
            0.0,
            offsets(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_invalid_dimensions() {
        let cw = supports((40.0, 40.0), (40.0, 40.0));
        assert!(Beam::new(0.0, 40.0, 40.0, cw, None, 0.0, offsets()).is_err());
        assert!(Beam::new(300.0, 40.0, -1.0, cw, None, 0.0, offsets()).is_err());
        let negative = supports((-1.0, 40.0), (40.0, 40.0));
        assert!(Beam::new(300.0, 40.0, 40.0, negative, None, 0.0, offsets()).is_err());
    }

    #[test]
    fn test_zones_must_fit() {
        let cw = supports((40.0, 40.0), (40.0, 40.0));
        // run = 300 - 40 - 10 = 250
        let err = Beam::new(300.0, 40.0, 40.0, cw, Some(vec![125.0, 125.0]), 0.0, offsets()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        let err = Beam::new(300.0, 40.0, 40.0, cw, Some(vec![50.0]), 0.0, offsets()).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_equality_by_attributes() {
        assert_eq!(interior_span(), interior_span());
        let mut other = interior_span();
        other.dx = 0.0;
        assert_ne!(interior_span(), other);
    }
}
