//! Re-export of the value types from `tramo-types`.
// Consolidated re-exports so downstream crates can depend on `tramo-core` only

pub use tramo_types::{DuplicatePolicy, FillMode, MarginConfig, TramoConfig, TramoError};

pub use tramo_types::{Interval, KeyedInterval, MergeStats, MergedInterval, MergedIntervalSet};

pub use tramo_types::{Ordinal, PeriodSet, PeriodSummary};

pub use tramo_types::{Admission, AdmissionReport, EntityPeriods, Episode, SignalReport};
