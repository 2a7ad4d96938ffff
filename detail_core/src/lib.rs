//! # detail_core - Continuous Beam Detail Geometry Engine
//!
//! `detail_core` computes the 2D layout of a reinforced-concrete continuous
//! beam elevation detail: axes, beam outlines, column stubs, stirrup ticks and
//! schedules, main and supplementary bars and their leader targets. It only
//! produces coordinates and label text; drawing them (DXF, SVG, ...) is left
//! to the caller.
//!
//! ## Design Philosophy
//!
//! - **Validate once**: all errors surface when a detail is constructed;
//!   every accessor afterwards is infallible
//! - **Pure derivation**: geometry is a function of the input and the scale
//! - **JSON-First**: inputs, settings and geometry snapshots implement
//!   Serialize/Deserialize
//!
//! ## Quick Start
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
//!     axes_name: vec![AxisName::new("A", 1), AxisName::new("B", 1), AxisName::new("C", 1)],
//!     ..Default::default()
//! };
//!
//! let mut detail = ScaleBeamType::unscaled(input).unwrap();
//! assert_eq!(detail.axes_dist(), vec![0.0, 295.0, 835.0]);
//!
//! // Same line at 1:100 horizontally, 1:20 vertically
//! detail.set_scale(Scale::new(100.0, 20.0).unwrap()).unwrap();
//! let json = detail.geometry().to_json().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`scale_beam_type`] - Beam line aggregator and its input types
//! - [`beam_type`] - 1:1 variant
//! - [`beam`] - Single-span geometry
//! - [`rebar`] - Supplementary bars
//! - [`stirrups`] - Stirrup zones, counts and schedule text
//! - [`geometry`] - Serializable geometry snapshot
//! - [`settings`] - Drafting constants
//! - [`point`], [`units`] - Coordinates and scale
//! - [`errors`] - Structured error types

pub mod beam;
pub mod beam_type;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod point;
pub mod rebar;
pub mod scale_beam_type;
pub mod settings;
pub mod stirrups;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, BeamOffsets, BeamSupports, EndWidths};
pub use beam_type::BeamType;
pub use errors::{DetailError, DetailResult};
pub use geometry::BeamTypeGeometry;
pub use point::Point;
pub use rebar::{HAlign, Rebar, RebarShape};
pub use scale_beam_type::{AxisName, BeamTypeInput, ColumnsWidth, ScaleBeamType};
pub use settings::DetailSettings;
pub use units::Scale;
