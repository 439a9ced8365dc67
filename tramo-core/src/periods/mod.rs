//! Period utilities over ordinal/boolean sample sequences.
//!
//! Modules include:
//! - `ordinal`: map timestamps to day ordinals, collapsing same-day samples
//! - `dates`: calendar-day expansion and thinning helpers
//! - `fill`: synthesize values for ordinals missing between samples
//! - `detect`: the run-detection state machine producing a `PeriodSet`
//! - `edit`: join/delete periods of an existing `PeriodSet`
//! - `margins`: initial-margin trimming and cooloff joins on top of detection
//! - `group`: sequential condition-based grouping, one week by default
/// Calendar-day helpers.
pub mod dates;
/// Run detection.
pub mod detect;
/// Copy-on-write period edits.
pub mod edit;
/// Gap filling.
pub mod fill;
/// Condition-based grouping of ordered items.
pub mod group;
/// Margin and cooloff post-processing.
pub mod margins;
/// Timestamp to ordinal mapping.
pub mod ordinal;

use crate::types::{Ordinal, TramoError};

/// Validate a parallel ordinal/value pair of slices: equal length and strictly
/// increasing ordinals.
pub(crate) fn check_samples<V>(ordinals: &[Ordinal], values: &[V]) -> Result<(), TramoError> {
    if ordinals.len() != values.len() {
        return Err(TramoError::InvalidArg(format!(
            "ordinals and values differ in length: {} vs {}",
            ordinals.len(),
            values.len()
        )));
    }
    if let Some(w) = ordinals.windows(2).find(|w| w[1] <= w[0]) {
        return Err(TramoError::InvalidArg(format!(
            "ordinals must be strictly increasing: {} followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}
