//! # Stirrup Schedule
//!
//! Splits each span's stirrup run into zones and counts the stirrups in
//! each zone.
//!
//! A span without dense zones has one zone covering the whole run. A span
//! with dense zones `[left, right]` has three: the two dense end zones and
//! the sparser middle zone that takes whatever length is left.
//!
//! ## Counting
//!
//! - An end zone (or a single zone) owns both of its end stirrups:
//!   `floor(d / s) + 1`
//! - The middle zone shares its end stirrups with the dense zones and only
//!   counts the ones strictly inside: `ceil(d / s) - 1`
//!
//! ```rust
//! use detail_core::stirrups::{zone_counts, schedule_text};
//!
//! let counts = zone_counts(&[85.0, 317.5, 85.0], &[8.5, 17.0, 8.5]);
//! assert_eq!(counts, vec![11, 18, 11]);
//! assert_eq!(schedule_text(counts[1], 8, 17.0), "18~8@17");
//! ```

use crate::units::format_length;

const COUNT_EPS: f64 = 1e-9;

/// Zone lengths of a stirrup run
pub fn zone_lengths(run: f64, zones: Option<&[f64]>) -> Vec<f64> {
    match zones {
        Some([left, right]) => vec![*left, run - left - right, *right],
        _ => vec![run],
    }
}

/// Stirrups in an end zone (or in a span with a single zone)
pub fn end_zone_count(length: f64, spacing: f64) -> usize {
    (length / spacing + COUNT_EPS).floor() as usize + 1
}

/// Stirrups strictly inside a middle zone
pub fn middle_zone_count(length: f64, spacing: f64) -> usize {
    ((length / spacing - COUNT_EPS).ceil() as usize).saturating_sub(1)
}

/// Count the stirrups of every zone in a span. `spacings` has one entry per zone.
pub fn zone_counts(lengths: &[f64], spacings: &[f64]) -> Vec<usize> {
    let zones = lengths.len();
    lengths
        .iter()
        .zip(spacings)
        .enumerate()
        .map(|(i, (length, spacing))| {
            if zones > 2 && i > 0 && i + 1 < zones {
                middle_zone_count(*length, *spacing)
            } else {
                end_zone_count(*length, *spacing)
            }
        })
        .collect()
}

/// One schedule line: `{count}~{diameter}@{spacing}`
pub fn schedule_text(count: usize, diameter: u32, spacing: f64) -> String {
    format!("{}~{}@{}", count, diameter, format_length(spacing))
}
