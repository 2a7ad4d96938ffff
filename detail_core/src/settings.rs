//! # Drafting Settings
//!
//! Every fixed distance the derivations use (covers, leg lengths, annotation
//! heights) lives in [`DetailSettings`]. Values are in model units, the same
//! units as the span lengths of the input; the aggregator scales them together
//! with the geometry.
//!
//! ## Example
//!
//! ```rust
//! use detail_core::settings::DetailSettings;
//!
//! // Missing fields fall back to the defaults
//! let settings: DetailSettings = serde_json::from_str(r#"{ "rebar_cover": 3.0 }"#).unwrap();
//! assert_eq!(settings.rebar_cover, 3.0);
//! assert_eq!(settings.rebar_end_leg, 6.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, DetailResult};

/// Drafting constants for a beam detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSettings {
    /// Distance from a support face to the first stirrup
    pub first_stirrup_dist: f64,

    /// Height of the column stubs drawn above and below the beam
    pub col_extend_dist: f64,

    /// How far the beam runs past an axis that has no column
    pub console_extend_dist: f64,

    /// Inset of a stirrup tick from the top and bottom faces
    pub stirrup_dy: f64,

    /// Distance from the beam face to the main rebar run
    pub rebar_cover: f64,

    /// Length of the vertical end legs of main and L-bent bars
    pub rebar_end_leg: f64,

    /// Inset of the main rebar ends from the outer face of the end supports
    pub rebar_side_cover: f64,

    /// y of the upper end of the axis lines (beam top face is y = 0)
    pub axis_top: f64,

    /// How far the axis lines run below the deepest beam
    pub axis_below_beam: f64,

    /// Radius of the axis identifier circle sitting on top of each axis line
    pub axis_circle_radius: f64,

    /// How far the span dimension line sits below the deepest beam
    pub dim_below_beam: f64,

    /// Horizontal distance between an axis and a supplementary bar leader
    pub leader_offset: f64,
}

impl Default for DetailSettings {
    fn default() -> Self {
        DetailSettings {
            first_stirrup_dist: 5.0,
            col_extend_dist: 13.75,
            console_extend_dist: 20.0,
            stirrup_dy: 1.25,
            rebar_cover: 2.0,
            rebar_end_leg: 6.0,
            rebar_side_cover: 6.0,
            axis_top: 42.0,
            axis_below_beam: 50.0,
            axis_circle_radius: 10.0,
            dim_below_beam: 30.0,
            leader_offset: 10.0,
        }
    }
}

impl DetailSettings {
    /// Validate that every distance is finite and non-negative
    pub fn validate(&self) -> DetailResult<()> {
        let fields = [
            ("first_stirrup_dist", self.first_stirrup_dist),
            ("col_extend_dist", self.col_extend_dist),
            ("console_extend_dist", self.console_extend_dist),
            ("stirrup_dy", self.stirrup_dy),
            ("rebar_cover", self.rebar_cover),
            ("rebar_end_leg", self.rebar_end_leg),
            ("rebar_side_cover", self.rebar_side_cover),
            ("axis_top", self.axis_top),
            ("axis_below_beam", self.axis_below_beam),
            ("axis_circle_radius", self.axis_circle_radius),
            ("dim_below_beam", self.dim_below_beam),
            ("leader_offset", self.leader_offset),
        ];
        for (field, value) in fields {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}
