//! Tramo turns irregularly sampled per-entity signals into periods and merges
//! per-entity episode intervals into admissions.
//!
//! Overview
//! - Wraps the synchronous engine in `tramo_core` with per-entity fan-out on
//!   Tokio's blocking pool.
//! - Groups input by entity key; output is ordered by entity, and
//!   chronologically within an entity.
//! - Collects per-entity failures as warnings tagged with the entity instead of
//!   failing the batch.
//!
//! Key behaviors and trade-offs
//! - Gap filling: `true_between` (default) only bridges days between two positive
//!   samples; `last` and `always_true` can inflate periods over long silences.
//! - Margins: an initial margin drops a first period that starts too close to
//!   the first sample, where the run may have started before observation.
//! - Cooloff: joins periods separated by short gaps; joined durations span the
//!   bridged gap while `days` keeps counting positive days only.
//! - Admissions: overlapping and nested episodes always merge; disjoint ones merge
//!   when the gap fits `join_gap` (touching only by default).
//! - Concurrency: at most `max_concurrency` entities in flight; an optional
//!   request timeout bounds the whole batch.
//!
//! Examples
//! Detecting periods for two patients:
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use tramo::{FillMode, Tramo};
//!
//! let tramo = Tramo::builder()
//!     .fill_mode(FillMode::TrueBetween)
//!     .initial_margin(2)
//!     .cooloff(1)
//!     .build()?;
//! let day = |d| Utc.with_ymd_and_hms(2024, 5, d, 8, 0, 0).unwrap();
//! let report = tramo
//!     .signals()
//!     .samples("p1", vec![(day(1), false), (day(3), true), (day(4), true)])
//!     .samples("p2", vec![(day(2), true), (day(9), false)])
//!     .run()
//!     .await?;
//! for entry in &report.entries {
//!     println!("{}: {} days in {} periods", entry.entity, entry.periods.days, entry.periods.periods);
//! }
//! ```
//!
//! Merging episodes into admissions:
//! ```rust,ignore
//! use std::time::Duration;
//! use tramo::{Episode, Tramo};
//!
//! let tramo = Tramo::builder().join_gap(Duration::from_secs(86_400)).build()?;
//! let report = tramo.admissions().episodes(episodes).run().await?;
//! println!("{} admissions, {:?}", report.admissions.len(), report.stats.to_map());
//! ```
#![warn(missing_docs)]

mod batch;
pub(crate) mod core;

pub use batch::admissions::AdmissionsBuilder;
pub use batch::signals::SignalsBuilder;
pub use batch::util::join_with_deadline;
pub use core::{Tramo, TramoBuilder};

// Re-export core types for convenience
pub use tramo_core::{
    Admission, AdmissionReport, DuplicatePolicy, EntityPeriods, Episode, FillMode, Interval,
    MarginConfig, MergeStats, MergedInterval, MergedIntervalSet, Ordinal, PeriodSet,
    PeriodSummary, SignalReport, TramoConfig, TramoError,
};
