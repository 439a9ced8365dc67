//! Configuration types shared across the engine and the orchestrator.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TramoError;
use crate::period::Ordinal;

/// Policy for synthesizing values at ordinals missing between two samples.
///
/// For a gap between consecutive samples `prev` and `curr` (with
/// `curr - prev > 1`), every ordinal strictly between them receives a value
/// chosen by the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FillMode {
    /// Carry the value of `prev` forward.
    Last,
    /// True only when both flanking samples are true.
    #[default]
    TrueBetween,
    /// Always false.
    AlwaysFalse,
    /// Always true.
    AlwaysTrue,
    /// Like `TrueBetween`, but gaps with `curr - prev > threshold` are filled
    /// with false even when both flanks are true.
    TrueBetweenThreshold {
        /// Widest `curr - prev` distance that may still be bridged.
        threshold: Ordinal,
    },
}

impl FillMode {
    /// Canonical mode name, as accepted by [`FillMode::from_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::TrueBetween => "true_between",
            Self::AlwaysFalse => "always_false",
            Self::AlwaysTrue => "always_true",
            Self::TrueBetweenThreshold { .. } => "true_between_threshold",
        }
    }

    /// Parse a mode from its name; `threshold` is only used by
    /// `true_between_threshold`.
    ///
    /// # Errors
    /// Returns `InvalidMode` naming the string if it is not a known mode, and
    /// `InvalidArg` if `true_between_threshold` is requested without a threshold.
    pub fn from_name(name: &str, threshold: Option<Ordinal>) -> Result<Self, TramoError> {
        match name {
            "last" => Ok(Self::Last),
            "true_between" => Ok(Self::TrueBetween),
            "always_false" => Ok(Self::AlwaysFalse),
            "always_true" => Ok(Self::AlwaysTrue),
            "true_between_threshold" => threshold
                .map(|threshold| Self::TrueBetweenThreshold { threshold })
                .ok_or_else(|| {
                    TramoError::InvalidArg("true_between_threshold requires a threshold".into())
                }),
            other => Err(TramoError::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for FillMode {
    type Err = TramoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, None)
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueBetweenThreshold { threshold } => {
                write!(f, "{}({threshold})", self.name())
            }
            other => f.write_str(other.name()),
        }
    }
}

/// How samples that fall on the same calendar day are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Keep the first value seen for a day; later samples for that day are dropped.
    #[default]
    KeepFirst,
    /// Keep the day at its first position but with the last value seen for it.
    KeepLast,
    /// Do not deduplicate.
    KeepAll,
}

/// Post-processing applied on top of plain period detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarginConfig {
    /// A leading period whose preceding gap is smaller than this is discarded.
    pub initial_margin: Ordinal,
    /// Periods separated by a gap of at most this many days are joined; 0 disables.
    pub cooloff: Ordinal,
    /// Gap filling applied to the samples before detection.
    pub fill_mode: FillMode,
    /// Origin the first period's gap is measured from; defaults to the first ordinal.
    pub origin: Option<Ordinal>,
}

/// Global configuration for the `Tramo` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TramoConfig {
    /// Collapsing of same-day samples when mapping timestamps to ordinals.
    pub duplicates: DuplicatePolicy,
    /// Gap filling, margin and cooloff applied per entity signal.
    pub margins: MarginConfig,
    /// Maximum distance between one episode's end and the next one's start for
    /// them to be joined into the same admission. `None` joins touching
    /// episodes only.
    pub join_gap: Option<Duration>,
    /// Maximum number of entities computed concurrently.
    pub max_concurrency: usize,
    /// Optional overall deadline for a batch.
    pub request_timeout: Option<Duration>,
}

impl Default for TramoConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            margins: MarginConfig::default(),
            join_gap: None,
            max_concurrency: 8,
            request_timeout: None,
        }
    }
}
