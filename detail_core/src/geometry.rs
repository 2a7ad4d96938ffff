//! # Geometry Snapshot
//!
//! Plain, renderer-agnostic output of a beam line: ordered point sequences
//! and label strings, serializable to JSON for whatever draws them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DetailResult;
use crate::point::Point;
use crate::scale_beam_type::ScaleBeamType;
use crate::units::Scale;

/// Every derived property of a [`ScaleBeamType`] at one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamTypeGeometry {
    /// Groups all of this beam line's output under one named unit
    pub uid: Uuid,
    pub scale: Scale,

    // === Axes ===
    pub axes_dist: Vec<f64>,
    pub axes_text: Vec<String>,
    pub axes_polyline_points: Vec<Vec<Point>>,
    pub center_of_axis_circle_points: Vec<Point>,
    pub axis_circle_radius: f64,

    // === Dimensions ===
    pub axes_dim_points: Vec<Vec<Point>>,
    pub spans_len_text: Vec<String>,
    pub center_of_beams_dist: Vec<f64>,
    pub beams_dimensions_text: Vec<String>,

    // === Outline ===
    pub top_polylines_points: Vec<Vec<Point>>,
    pub bot_polylines_points: Vec<Vec<Point>>,
    pub edges_polyline_points: Vec<Vec<Point>>,

    // === Reinforcement ===
    pub top_main_rebar_points: Vec<Point>,
    pub bot_main_rebar_points: Vec<Point>,
    pub top_add_rebars: Vec<Vec<Point>>,
    pub bot_add_rebars: Vec<Vec<Point>>,
    pub top_rebar_target_points: Vec<Point>,
    pub bot_rebar_target_points: Vec<Point>,

    // === Stirrups ===
    pub stirrups_points: Vec<Vec<Vec<Point>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stirrups_text: Vec<String>,
}

impl BeamTypeGeometry {
    pub fn from_beam_type(beam_type: &ScaleBeamType) -> Self {
        BeamTypeGeometry {
            uid: beam_type.uid(),
            scale: beam_type.scale(),
            axes_dist: beam_type.axes_dist(),
            axes_text: beam_type.axes_text(),
            axes_polyline_points: beam_type.axes_polyline_points(),
            center_of_axis_circle_points: beam_type.center_of_axis_circle_points(),
            axis_circle_radius: beam_type.axis_circle_radius(),
            axes_dim_points: beam_type.axes_dim_points(),
            spans_len_text: beam_type.spans_len_text(),
            center_of_beams_dist: beam_type.center_of_beams_dist(),
            beams_dimensions_text: beam_type.beams_dimensions_text(),
            top_polylines_points: beam_type.top_polylines_points(),
            bot_polylines_points: beam_type.bot_polylines_points(),
            edges_polyline_points: beam_type.edges_polyline_points(),
            top_main_rebar_points: beam_type.top_main_rebar_points().to_vec(),
            bot_main_rebar_points: beam_type.bot_main_rebar_points().to_vec(),
            top_add_rebars: beam_type.top_add_rebars(),
            bot_add_rebars: beam_type.bot_add_rebars(),
            top_rebar_target_points: beam_type.top_rebar_target_points(),
            bot_rebar_target_points: beam_type.bot_rebar_target_points(),
            stirrups_points: beam_type.stirrups_points(),
            stirrups_text: beam_type.stirrups_text(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> DetailResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously produced by [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> DetailResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale_beam_type::{AxisName, BeamTypeInput, ColumnsWidth};

    fn console_line() -> ScaleBeamType {
        // cantilever at C1, roof columns below only
        let input = BeamTypeInput {
            spans_len: vec![204.0, 420.0, 350.0],
            beams_dimension: vec![(40.0, 45.0), (40.0, 45.0), (40.0, 45.0)],
            columns_width: ColumnsWidth {
                bot: vec![0.0, 45.0, 40.0, 50.0],
                top: vec![0.0, 45.0, 40.0, 45.0],
            },
            stirrups_len: vec![None, Some(vec![85.0, 85.0]), Some(vec![85.0, 85.0])],
            axes_name: vec![
                AxisName::new("C", 1),
                AxisName::new("D", 1),
                AxisName::new("E", 1),
                AxisName::new("F", 1),
            ],
            ..Default::default()
        };
        ScaleBeamType::unscaled(input).unwrap()
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let line = console_line();
        let geometry = line.geometry();
        assert_eq!(geometry.uid, line.uid());
        assert_eq!(geometry.axes_dist, vec![0.0, 204.0, 624.0, 974.0]);
        assert_eq!(geometry.axes_text, vec!["C1", "D1", "E1", "F1"]);
        assert_eq!(geometry.top_polylines_points.len(), 3);
        assert_eq!(geometry.stirrups_points[0].len(), 0);
        assert_eq!(geometry.stirrups_points[1].len(), 4);
        assert!(geometry.stirrups_text.is_empty());
        // console start: the outline overhangs C1 and the main bar stops
        // inside the free end
        assert_eq!(geometry.top_polylines_points[0][0], Point::new(-20.0, 0.0));
        assert_eq!(geometry.top_main_rebar_points[0], Point::new(-14.0, -8.0));
    }

    #[test]
    fn test_json_round_trip() {
        let mut line = console_line();
        line.set_scale(Scale::new(100.0, 25.0).unwrap()).unwrap();
        let geometry = line.geometry();
        let json = geometry.to_json().unwrap();
        assert!(json.contains("\"axes_text\""));
        assert!(!json.contains("stirrups_text"));
        let parsed = BeamTypeGeometry::from_json(&json).unwrap();
        assert_eq!(parsed, geometry);
    }

    #[test]
    fn test_invalid_json() {
        let err = BeamTypeGeometry::from_json("{").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
