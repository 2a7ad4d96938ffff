//! # Beam Line Detail
//!
//! [`ScaleBeamType`] composes the spans of one continuous beam line into a
//! single elevation detail: axes, outlines, stirrups, main and supplementary
//! bars, dimension lines and labels.
//!
//! ## Notation
//!
//! - N spans share N+1 axes, numbered 0 to N left to right
//! - Axis 0 sits at x = 0; y = 0 is the top face of the beams
//! - Inputs are in model units; every coordinate output is divided by the
//!   horizontal (x) and vertical (y) factors of the current [`Scale`]
//! - Text labels always use the unscaled model values
//!
//! ```text
//!   (A1)         (B1)                        (C1)
//!    |            |                           |
//!   ━┛ ┗━━━━━━━━━━┛ ┗━━━━━━━━━━━━━━━━━━━━━━━━━┛ ┗━
//!   ━┓ ┏━━━━━━━━━━┓ ┏━━━━━━━━━━━━━━━━━━━━━━━━━┓ ┏━
//!    |<---295---->|<----------540------------>|
//! ```
//!
//! ## Example
//!
//! ```rust
//! use detail_core::{AxisName, BeamTypeInput, ColumnsWidth, Scale, ScaleBeamType};
//!
//! let input = BeamTypeInput {
//!     spans_len: vec![295.0, 540.0],
//!     beams_dimension: vec![(40.0, 40.0), (40.0, 40.0)],
//!     columns_width: ColumnsWidth {
//!         bot: vec![45.0, 45.0, 40.0],
//!         top: vec![40.0, 45.0, 40.0],
//!     },
//!     stirrups_len: vec![None, Some(vec![85.0, 85.0])],
//!     stirrup_at: vec![vec![8.5], vec![8.5, 17.0, 8.5]],
//!     stirrup_size: vec![8, 8],
//!     axes_name: vec![AxisName::new("A", 1), AxisName::new("B", 1), AxisName::new("C", 1)],
//!     ..Default::default()
//! };
//!
//! let detail = ScaleBeamType::new(input, Scale::new(100.0, 20.0).unwrap()).unwrap();
//! assert_eq!(detail.axes_text(), vec!["A1", "B1", "C1"]);
//! assert_eq!(detail.stirrups_text(), vec!["29~8@8.5", "11~8@8.5", "18~8@17", "11~8@8.5"]);
//! ```

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beam::{Beam, BeamOffsets, BeamSupports, EndWidths};
use crate::errors::{require_non_negative, require_positive, DetailError, DetailResult};
use crate::geometry::BeamTypeGeometry;
use crate::point::Point;
use crate::rebar::Rebar;
use crate::settings::DetailSettings;
use crate::stirrups;
use crate::units::{format_length, Scale};

// =============================================================================
// INPUT
// =============================================================================

/// Axis identifier, e.g. `A1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisName {
    pub letter: String,
    pub number: u32,
}

impl AxisName {
    pub fn new(letter: impl Into<String>, number: u32) -> Self {
        AxisName {
            letter: letter.into(),
            number,
        }
    }

    /// Label drawn in the axis circle
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl From<(&str, u32)> for AxisName {
    fn from((letter, number): (&str, u32)) -> Self {
        AxisName::new(letter, number)
    }
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

/// Column widths per axis, bottom and top faces independently.
///
/// A width of 0 means no column on that face of the axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnsWidth {
    /// Columns below the beams, one per axis
    pub bot: Vec<f64>,
    /// Columns above the beams, one per axis
    pub top: Vec<f64>,
}

impl ColumnsWidth {
    /// Widest column at an axis
    pub(crate) fn widest(&self, axis: usize) -> f64 {
        self.bot[axis].max(self.top[axis])
    }

    /// No column on either face of the axis
    pub(crate) fn is_console(&self, axis: usize) -> bool {
        self.widest(axis) == 0.0
    }

    /// Supports of the span between `axis` and `axis + 1`
    pub(crate) fn span_supports(&self, span: usize) -> BeamSupports {
        BeamSupports {
            bot: EndWidths::new(self.bot[span], self.bot[span + 1]),
            top: EndWidths::new(self.top[span], self.top[span + 1]),
        }
    }
}

/// Everything needed to draw one beam line, in model units.
///
/// ## Span/Axis Relationship
///
/// For N spans there are N+1 axes:
///
/// - `spans_len`, `beams_dimension`, `stirrups_len`: N entries
/// - `columns_width.bot`, `columns_width.top`, `axes_name`: N+1 entries
/// - `stirrup_at`, `stirrup_size`: N entries, or both empty for no schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamTypeInput {
    /// Span lengths, axis to axis
    pub spans_len: Vec<f64>,

    /// `(width, height)` section of each span
    pub beams_dimension: Vec<(f64, f64)>,

    pub columns_width: ColumnsWidth,

    /// Dense stirrup zones `[left, right]` per span, `None` for uniform spacing
    pub stirrups_len: Vec<Option<Vec<f64>>>,

    /// Stirrup spacing per zone: one value for a uniform span, three
    /// (left, middle, right) for a span with dense zones
    #[serde(default)]
    pub stirrup_at: Vec<Vec<f64>>,

    /// Stirrup bar diameter per span
    #[serde(default)]
    pub stirrup_size: Vec<u32>,

    pub axes_name: Vec<AxisName>,

    #[serde(default)]
    pub top_add_rebars: Vec<Rebar>,

    #[serde(default)]
    pub bot_add_rebars: Vec<Rebar>,
}

impl BeamTypeInput {
    pub fn span_count(&self) -> usize {
        self.spans_len.len()
    }

    pub fn axis_count(&self) -> usize {
        self.spans_len.len() + 1
    }

    /// Check that every per-span and per-axis sequence lines up
    fn validate_shape(&self) -> DetailResult<()> {
        let spans = self.span_count();
        if spans == 0 {
            return Err(DetailError::shape_mismatch("spans_len", 1, 0));
        }
        let axes = spans + 1;

        let checks = [
            ("beams_dimension", spans, self.beams_dimension.len()),
            ("stirrups_len", spans, self.stirrups_len.len()),
            ("columns_width.bot", axes, self.columns_width.bot.len()),
            ("columns_width.top", axes, self.columns_width.top.len()),
            ("axes_name", axes, self.axes_name.len()),
        ];
        for (field, expected, actual) in checks {
            if expected != actual {
                return Err(DetailError::shape_mismatch(field, expected, actual));
            }
        }

        if self.stirrup_at.is_empty() {
            return Ok(());
        }
        if self.stirrup_at.len() != spans {
            return Err(DetailError::shape_mismatch("stirrup_at", spans, self.stirrup_at.len()));
        }
        if self.stirrup_size.len() != spans {
            return Err(DetailError::shape_mismatch("stirrup_size", spans, self.stirrup_size.len()));
        }
        for (i, (spacings, zones)) in self.stirrup_at.iter().zip(&self.stirrups_len).enumerate() {
            let expected = if zones.is_some() { 3 } else { 1 };
            if spacings.len() != expected {
                return Err(DetailError::shape_mismatch(format!("stirrup_at[{}]", i), expected, spacings.len()));
            }
        }
        Ok(())
    }

    /// Validate the input as a whole
    pub fn validate(&self) -> DetailResult<()> {
        self.validate_shape()?;

        for (i, span) in self.spans_len.iter().enumerate() {
            require_positive(&format!("spans_len[{}]", i), *span)?;
        }
        for (i, (width, height)) in self.beams_dimension.iter().enumerate() {
            require_positive(&format!("beams_dimension[{}].width", i), *width)?;
            require_positive(&format!("beams_dimension[{}].height", i), *height)?;
        }
        for (i, (bot, top)) in self.columns_width.bot.iter().zip(&self.columns_width.top).enumerate() {
            require_non_negative(&format!("columns_width.bot[{}]", i), *bot)?;
            require_non_negative(&format!("columns_width.top[{}]", i), *top)?;
        }

        // Interior axes carry two spans and must have a column
        for axis in 1..self.span_count() {
            if self.columns_width.is_console(axis) {
                return Err(DetailError::unsupported(format!(
                    "Interior axis {} has no column on either face",
                    self.axes_name[axis]
                )));
            }
        }

        for (i, spacings) in self.stirrup_at.iter().enumerate() {
            for spacing in spacings {
                require_positive(&format!("stirrup_at[{}]", i), *spacing)?;
            }
        }
        for (i, size) in self.stirrup_size.iter().enumerate() {
            if *size == 0 {
                return Err(DetailError::invalid_geometry(
                    format!("stirrup_size[{}]", i),
                    "0",
                    "Stirrup diameter must be positive",
                ));
            }
        }

        for rebar in self.top_add_rebars.iter().chain(&self.bot_add_rebars) {
            rebar.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// SCALE BEAM TYPE
// =============================================================================

/// A continuous beam line detail drawn at a (possibly non-uniform) scale.
///
/// Constructed once from validated input. The only mutation afterwards is
/// [`set_scale`](ScaleBeamType::set_scale), which drops the cached spans.
#[derive(Debug, Clone)]
pub struct ScaleBeamType {
    uid: Uuid,
    input: BeamTypeInput,
    settings: DetailSettings,
    scale: Scale,
    beams: OnceCell<Vec<Beam>>,
}

impl ScaleBeamType {
    /// Create a detail with the default drafting settings
    pub fn new(input: BeamTypeInput, scale: Scale) -> DetailResult<Self> {
        ScaleBeamType::with_settings(input, scale, DetailSettings::default())
    }

    /// Create a 1:1 detail
    pub fn unscaled(input: BeamTypeInput) -> DetailResult<Self> {
        ScaleBeamType::new(input, Scale::UNIT)
    }

    /// Create a detail with explicit drafting settings.
    ///
    /// Every span is built and validated here, so no accessor can fail later.
    pub fn with_settings(input: BeamTypeInput, scale: Scale, settings: DetailSettings) -> DetailResult<Self> {
        input.validate()?;
        settings.validate()?;
        // Scale::new validates, but the fields are public
        let scale = Scale::new(scale.horizontal, scale.vertical)?;

        let raw_axes = axes_positions(&input.spans_len);
        for span in 0..input.span_count() {
            let beam = build_beam(&input, &settings, &raw_axes, Scale::UNIT, span);
            beam.validate().map_err(|e| match e {
                DetailError::InvalidGeometry { field, value, reason } => {
                    DetailError::invalid_geometry(format!("spans[{}].{}", span, field), value, reason)
                }
                other => other,
            })?;
        }

        let last = input.span_count();
        let line_start = raw_axes[0] - outer_reach(&input, &settings, 0);
        let line_end = raw_axes[last] + outer_reach(&input, &settings, last);
        for rebar in input.top_add_rebars.iter().chain(&input.bot_add_rebars) {
            let (start, end) = rebar.x_extent();
            if start < line_start || end > line_end {
                crate::log::warn!(start, end, line_start, line_end, "supplementary bar extends past the beam line");
            }
        }

        let uid = Uuid::new_v4();
        crate::log::debug!(
            %uid,
            spans = input.span_count(),
            horizontal = scale.horizontal,
            vertical = scale.vertical,
            "built beam type"
        );

        Ok(ScaleBeamType {
            uid,
            input,
            settings,
            scale,
            beams: OnceCell::new(),
        })
    }

    /// Use a specific identifier
    pub fn with_uid(mut self, uid: Uuid) -> Self {
        self.uid = uid;
        self
    }

    /// Identifier grouping this beam line's output in a renderer
    pub fn uid(&self) -> Uuid {
        self.uid
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Change the drawing scale; all derived geometry follows.
    ///
    /// An invalid scale is rejected and the current one kept.
    pub fn set_scale(&mut self, scale: Scale) -> DetailResult<()> {
        let scale = Scale::new(scale.horizontal, scale.vertical)?;
        crate::log::debug!(
            uid = %self.uid,
            horizontal = scale.horizontal,
            vertical = scale.vertical,
            "rescaled beam type"
        );
        self.scale = scale;
        self.beams = OnceCell::new();
        Ok(())
    }

    pub fn settings(&self) -> &DetailSettings {
        &self.settings
    }

    pub fn input(&self) -> &BeamTypeInput {
        &self.input
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.input.span_count()
    }

    /// Always false: construction requires one span at least
    pub fn is_empty(&self) -> bool {
        self.input.spans_len.is_empty()
    }

    // -------------------------------------------------------------------------
    // Scaled inputs
    // -------------------------------------------------------------------------

    pub fn spans_len(&self) -> Vec<f64> {
        self.input.spans_len.iter().map(|l| self.scale.x(*l)).collect()
    }

    /// Span lengths as dimension text, unscaled
    pub fn spans_len_text(&self) -> Vec<String> {
        self.input.spans_len.iter().map(|l| format_length(*l)).collect()
    }

    pub fn beams_dimension(&self) -> Vec<(f64, f64)> {
        self.input
            .beams_dimension
            .iter()
            .map(|(w, h)| (self.scale.x(*w), self.scale.y(*h)))
            .collect()
    }

    pub fn columns_width(&self) -> ColumnsWidth {
        let cw = &self.input.columns_width;
        ColumnsWidth {
            bot: cw.bot.iter().map(|w| self.scale.x(*w)).collect(),
            top: cw.top.iter().map(|w| self.scale.x(*w)).collect(),
        }
    }

    pub fn stirrups_len(&self) -> Vec<Option<Vec<f64>>> {
        self.input
            .stirrups_len
            .iter()
            .map(|zones| zones.as_ref().map(|z| z.iter().map(|l| self.scale.x(*l)).collect()))
            .collect()
    }

    pub fn axes_name(&self) -> &[AxisName] {
        &self.input.axes_name
    }

    pub fn stirrup_at(&self) -> &[Vec<f64>] {
        &self.input.stirrup_at
    }

    pub fn stirrup_size(&self) -> &[u32] {
        &self.input.stirrup_size
    }

    pub fn is_start_console(&self) -> bool {
        self.input.columns_width.is_console(0)
    }

    pub fn is_end_console(&self) -> bool {
        self.input.columns_width.is_console(self.len())
    }

    fn raw_max_height(&self) -> f64 {
        self.input
            .beams_dimension
            .iter()
            .map(|(_, h)| *h)
            .fold(0.0, f64::max)
    }

    /// Tallest section of the line
    pub fn max_beams_height(&self) -> f64 {
        self.scale.y(self.raw_max_height())
    }

    // -------------------------------------------------------------------------
    // Spans
    // -------------------------------------------------------------------------

    /// One [`Beam`] per span, in scaled units
    pub fn beams(&self) -> &[Beam] {
        self.beams.get_or_init(|| {
            let raw_axes = axes_positions(&self.input.spans_len);
            (0..self.len())
                .map(|span| build_beam(&self.input, &self.settings, &raw_axes, self.scale, span))
                .collect()
        })
    }

    pub fn top_polylines_points(&self) -> Vec<Vec<Point>> {
        self.beams().iter().map(Beam::top_polyline_points).collect()
    }

    pub fn bot_polylines_points(&self) -> Vec<Vec<Point>> {
        self.beams().iter().map(Beam::bot_polyline_points).collect()
    }

    /// Stirrup ticks of every span
    pub fn stirrups_points(&self) -> Vec<Vec<Vec<Point>>> {
        self.beams().iter().map(Beam::stirrup_points).collect()
    }

    /// Outer contours at both ends of the line: `[start, end]`
    pub fn edges_polyline_points(&self) -> Vec<Vec<Point>> {
        let beams = self.beams();
        match (beams.first(), beams.last()) {
            (Some(first), Some(last)) => vec![first.left_edge_polyline(), last.right_edge_polyline()],
            _ => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Axes and dimensions
    // -------------------------------------------------------------------------

    fn raw_axes_dist(&self) -> Vec<f64> {
        axes_positions(&self.input.spans_len)
    }

    /// x of every axis
    pub fn axes_dist(&self) -> Vec<f64> {
        self.raw_axes_dist().into_iter().map(|x| self.scale.x(x)).collect()
    }

    /// Vertical reference line of every axis, bottom to top
    pub fn axes_polyline_points(&self) -> Vec<Vec<Point>> {
        let y_bot = -(self.raw_max_height() + self.settings.axis_below_beam);
        let y_top = self.settings.axis_top;
        self.raw_axes_dist()
            .into_iter()
            .map(|x| {
                vec![
                    self.scale.apply(Point::new(x, y_bot)),
                    self.scale.apply(Point::new(x, y_top)),
                ]
            })
            .collect()
    }

    /// Centre of each axis identifier circle
    pub fn center_of_axis_circle_points(&self) -> Vec<Point> {
        let y = self.settings.axis_top + self.settings.axis_circle_radius;
        self.raw_axes_dist()
            .into_iter()
            .map(|x| self.scale.apply(Point::new(x, y)))
            .collect()
    }

    /// Radius of the axis identifier circles, horizontally scaled
    pub fn axis_circle_radius(&self) -> f64 {
        self.scale.x(self.settings.axis_circle_radius)
    }

    pub fn axes_text(&self) -> Vec<String> {
        self.input.axes_name.iter().map(AxisName::text).collect()
    }

    /// x of the middle of every span
    pub fn center_of_beams_dist(&self) -> Vec<f64> {
        self.raw_axes_dist()
            .iter()
            .zip(&self.input.spans_len)
            .map(|(x, l)| self.scale.x(x + l / 2.0))
            .collect()
    }

    /// y of the span dimension line
    pub fn base_dim(&self) -> f64 {
        self.scale.y(-(self.raw_max_height() + self.settings.dim_below_beam))
    }

    /// One dimension line per span, axis to axis
    pub fn axes_dim_points(&self) -> Vec<Vec<Point>> {
        let y = -(self.raw_max_height() + self.settings.dim_below_beam);
        self.raw_axes_dist()
            .windows(2)
            .map(|pair| {
                vec![
                    self.scale.apply(Point::new(pair[0], y)),
                    self.scale.apply(Point::new(pair[1], y)),
                ]
            })
            .collect()
    }

    /// Section label per span, e.g. `40X60`
    pub fn beams_dimensions_text(&self) -> Vec<String> {
        self.input
            .beams_dimension
            .iter()
            .map(|(w, h)| format!("{}X{}", format_length(*w), format_length(*h)))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Main bars
    // -------------------------------------------------------------------------

    /// x range of the main bars, inset from the outer faces of the line ends
    fn main_rebar_extent(&self) -> (f64, f64) {
        let axes = self.raw_axes_dist();
        let last = self.len();
        let side = self.settings.rebar_side_cover;
        let start = axes[0] - (outer_reach(&self.input, &self.settings, 0) - side);
        let end = axes[last] + (outer_reach(&self.input, &self.settings, last) - side);
        (start, end)
    }

    fn main_rebar(&self, y: f64, leg: f64) -> [Point; 4] {
        let (x1, x2) = self.main_rebar_extent();
        [
            self.scale.apply(Point::new(x1, y + leg)),
            self.scale.apply(Point::new(x1, y)),
            self.scale.apply(Point::new(x2, y)),
            self.scale.apply(Point::new(x2, y + leg)),
        ]
    }

    /// Continuous top bar with its end legs turned down
    pub fn top_main_rebar_points(&self) -> [Point; 4] {
        self.main_rebar(-self.settings.rebar_cover, -self.settings.rebar_end_leg)
    }

    /// Continuous bottom bar with its end legs turned up
    pub fn bot_main_rebar_points(&self) -> [Point; 4] {
        self.main_rebar(
            -self.raw_max_height() + self.settings.rebar_cover,
            self.settings.rebar_end_leg,
        )
    }

    // -------------------------------------------------------------------------
    // Supplementary bars
    // -------------------------------------------------------------------------

    /// Supplementary bars as given, in model units
    pub fn raw_top_add_rebars(&self) -> &[Rebar] {
        &self.input.top_add_rebars
    }

    pub fn raw_bot_add_rebars(&self) -> &[Rebar] {
        &self.input.bot_add_rebars
    }

    fn add_rebar_paths(&self, rebars: &[Rebar], leg: f64) -> Vec<Vec<Point>> {
        rebars
            .iter()
            .map(|rebar| self.scale.apply_all(&rebar.path(leg)))
            .collect()
    }

    /// Top supplementary bar paths, legs turned down
    pub fn top_add_rebars(&self) -> Vec<Vec<Point>> {
        self.add_rebar_paths(&self.input.top_add_rebars, -self.settings.rebar_end_leg)
    }

    /// Bottom supplementary bar paths, legs turned up
    pub fn bot_add_rebars(&self) -> Vec<Vec<Point>> {
        self.add_rebar_paths(&self.input.bot_add_rebars, self.settings.rebar_end_leg)
    }

    /// Distance between an axis and a leader, horizontally scaled
    pub fn leader_offset(&self) -> f64 {
        self.scale.x(self.settings.leader_offset)
    }

    /// Point a bar's leader should aim at: beside the axis nearest to the
    /// bar's insertion point, at the bar's elevation.
    pub fn rebar_target_point(&self, rebar: &Rebar) -> Point {
        let axis = self
            .raw_axes_dist()
            .into_iter()
            .min_by(|a, b| (a - rebar.insert.x).abs().total_cmp(&(b - rebar.insert.x).abs()))
            .unwrap_or(0.0);
        self.scale
            .apply(Point::new(axis - self.settings.leader_offset, rebar.insert.y))
    }

    pub fn top_rebar_target_points(&self) -> Vec<Point> {
        self.input.top_add_rebars.iter().map(|r| self.rebar_target_point(r)).collect()
    }

    pub fn bot_rebar_target_points(&self) -> Vec<Point> {
        self.input.bot_add_rebars.iter().map(|r| self.rebar_target_point(r)).collect()
    }

    // -------------------------------------------------------------------------
    // Stirrup schedule
    // -------------------------------------------------------------------------

    /// Zone lengths of every span's stirrup run, unscaled
    pub fn stirrups_dist(&self) -> Vec<Vec<f64>> {
        let raw_axes = self.raw_axes_dist();
        (0..self.len())
            .map(|span| {
                let beam = build_beam(&self.input, &self.settings, &raw_axes, Scale::UNIT, span);
                stirrups::zone_lengths(beam.stirrup_run(), beam.stirrup_len.as_deref())
            })
            .collect()
    }

    /// Stirrup count of every zone of every span; empty without a schedule
    pub fn stirrups_count(&self) -> Vec<Vec<usize>> {
        if self.input.stirrup_at.is_empty() {
            return Vec::new();
        }
        self.stirrups_dist()
            .iter()
            .zip(&self.input.stirrup_at)
            .map(|(lengths, spacings)| stirrups::zone_counts(lengths, spacings))
            .collect()
    }

    /// Schedule lines, one per zone in span order, e.g. `18~8@17`
    pub fn stirrups_text(&self) -> Vec<String> {
        let mut text = Vec::new();
        for ((counts, spacings), size) in self
            .stirrups_count()
            .iter()
            .zip(&self.input.stirrup_at)
            .zip(&self.input.stirrup_size)
        {
            for (count, spacing) in counts.iter().zip(spacings) {
                text.push(stirrups::schedule_text(*count, *size, *spacing));
            }
        }
        text
    }

    /// Snapshot of every derived property at the current scale
    pub fn geometry(&self) -> BeamTypeGeometry {
        BeamTypeGeometry::from_beam_type(self)
    }
}

/// Cumulative axis positions, starting at 0
pub(crate) fn axes_positions(spans_len: &[f64]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(spans_len.len() + 1);
    let mut cumulative = 0.0;
    positions.push(cumulative);
    for span in spans_len {
        cumulative += span;
        positions.push(cumulative);
    }
    positions
}

/// Distance from an end axis to the outer face of the line: half the widest
/// column, or the overhang at a console end
fn outer_reach(input: &BeamTypeInput, settings: &DetailSettings, axis: usize) -> f64 {
    if input.columns_width.is_console(axis) {
        settings.console_extend_dist
    } else {
        input.columns_width.widest(axis) / 2.0
    }
}

/// Build one span at the given scale. Input must already be shape-validated.
fn build_beam(input: &BeamTypeInput, settings: &DetailSettings, raw_axes: &[f64], scale: Scale, span: usize) -> Beam {
    let (width, height) = input.beams_dimension[span];
    let raw = input.columns_width.span_supports(span);
    let columns_width = BeamSupports {
        bot: EndWidths::new(scale.x(raw.bot.left), scale.x(raw.bot.right)),
        top: EndWidths::new(scale.x(raw.top.left), scale.x(raw.top.right)),
    };
    let stirrup_len = input.stirrups_len[span]
        .as_ref()
        .map(|zones| zones.iter().map(|l| scale.x(*l)).collect());
    let offsets = BeamOffsets {
        first_stirrup_dist: scale.x(settings.first_stirrup_dist),
        col_extend_dist: scale.y(settings.col_extend_dist),
        console_extend_dist: scale.x(settings.console_extend_dist),
        stirrup_dy: scale.y(settings.stirrup_dy),
    };
    Beam::assemble(
        scale.x(input.spans_len[span]),
        scale.x(width),
        scale.y(height),
        columns_width,
        stirrup_len,
        scale.x(raw_axes[span]),
        offsets,
    )
}
