//! Tramo value types, configuration primitives and errors shared by every crate
//! in the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod interval;
mod period;
mod reports;

pub use config::{DuplicatePolicy, FillMode, MarginConfig, TramoConfig};
pub use error::TramoError;
pub use interval::{Interval, KeyedInterval, MergeStats, MergedInterval, MergedIntervalSet};
pub use period::{Ordinal, PeriodSet, PeriodSummary};
pub use reports::{Admission, AdmissionReport, EntityPeriods, Episode, SignalReport};
