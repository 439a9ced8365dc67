//! tramo-core
//!
//! Synchronous engine that turns sparse, irregularly sampled boolean signals
//! into periods, and merges independently detected interval lists.
//!
//! - `periods`: ordinal mapping, gap filling, run detection, period editing and
//!   margin/cooloff post-processing, plus grouping of ordered dates.
//! - `intervals`: merging sorted interval lists with subset/overlap/join
//!   tie-breaks, and keyed interval lookup.
//! - `types`: re-exports of the value types from `tramo-types`.
//!
//! Every function here is a pure function of its inputs: results are new
//! values and arguments are never mutated.
#![warn(missing_docs)]

/// Interval merging and keyed lookup.
pub mod intervals;
/// Period extraction and editing over ordinal/boolean sequences.
pub mod periods;
pub mod types;

pub use intervals::lookup::{
    contains_interval, find_interval_by_date, find_interval_by_date_strict, select_by_interval,
};
pub use intervals::merge::{join_touching, join_within, merge_intervals, merge_touching};
pub use periods::dates::{covered_dates, fill_dates, unify_dates};
pub use periods::detect::{
    compute_periods, compute_periods_filled, compute_periods_from, compute_periods_indexed,
    compute_periods_simple,
};
pub use periods::edit::{delete_period, join_periods_by_distance, join_specific_periods};
pub use periods::fill::fill_gaps;
pub use periods::group::{group_by, group_by_week, within_days, within_week};
pub use periods::margins::compute_periods_with_margins;
pub use periods::ordinal::{
    CalendarDay, OrdinalSeries, dates_to_ordinals, dates_to_ordinals_with_values,
};
pub use types::*;
