//! Period statistics produced by detection and transformed by the editors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Integer day index relative to a dataset-local origin.
pub type Ordinal = i64;

/// Aggregate statistics of the positive runs found in a sample sequence.
///
/// The per-period vectors are parallel: entry `i` of `starts`, `ends`,
/// `durations` and `gap_before` all describe period `i`, in chronological order.
///
/// For detector output `sum(durations) == days` and
/// `max(durations) == max_consec_days`. Joining periods makes a duration span
/// the bridged gap while `days` and `max_consec_days` keep counting positive
/// days only; `run_lengths` keeps the positive runs behind each period so a
/// later delete can give back exactly those days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSet {
    /// Total positive days across all periods.
    pub days: i64,
    /// Number of periods.
    pub periods: usize,
    /// Length of the longest run of positive days.
    pub max_consec_days: i64,
    /// First ordinal of each period.
    pub starts: Vec<Ordinal>,
    /// Last ordinal of each period.
    pub ends: Vec<Ordinal>,
    /// Length in days of each period.
    pub durations: Vec<i64>,
    /// Days strictly between the previous period's end (or the origin) and
    /// this period's start.
    #[serde(alias = "intervals")]
    pub gap_before: Vec<i64>,
    /// Lengths of the positive runs inside each period, one entry per run.
    ///
    /// Detection yields a single run per period. Empty means "not tracked",
    /// read as one run of `durations[i]` per period.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_lengths: Vec<Vec<i64>>,
}

/// Compact view of a [`PeriodSet`] without the per-period breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Total positive days.
    pub days: i64,
    /// Number of periods.
    pub periods: usize,
    /// Length of the longest run.
    pub max_consec_days: i64,
}

impl PeriodSet {
    /// A set with no periods.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there are no periods.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.periods == 0
    }

    /// Drop the per-period breakdown.
    #[must_use]
    pub const fn summary(&self) -> PeriodSummary {
        PeriodSummary {
            days: self.days,
            periods: self.periods,
            max_consec_days: self.max_consec_days,
        }
    }

    /// Iterate `(start, end)` pairs in chronological order.
    pub fn spans(&self) -> impl Iterator<Item = (Ordinal, Ordinal)> + '_ {
        self.starts.iter().copied().zip(self.ends.iter().copied())
    }

    /// Check the structural invariants shared by every set, edited or not:
    /// parallel vectors of length `periods`, `starts[i] <= ends[i]` and
    /// `ends[i] < starts[i + 1]`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let n = self.periods;
        if self.starts.len() != n
            || self.ends.len() != n
            || self.durations.len() != n
            || self.gap_before.len() != n
            || !(self.run_lengths.is_empty() || self.run_lengths.len() == n)
        {
            return false;
        }
        if self.spans().any(|(s, e)| s > e) {
            return false;
        }
        self.ends
            .iter()
            .zip(self.starts.iter().skip(1))
            .all(|(end, next_start)| end < next_start)
    }

    /// Render the set as an ordered key/value record for tabular assembly.
    ///
    /// Keys are `days`, `periods`, then (when `extended`) `intervals`,
    /// `durations`, `starts`, `ends`, and finally `max_consec_days`, each
    /// prefixed verbatim with `prefix`.
    #[must_use]
    pub fn to_record(&self, prefix: &str, extended: bool) -> Vec<(String, Value)> {
        let key = |name: &str| format!("{prefix}{name}");
        let mut out = vec![
            (key("days"), Value::from(self.days)),
            (key("periods"), Value::from(self.periods)),
        ];
        if extended {
            out.push((key("intervals"), Value::from(self.gap_before.clone())));
            out.push((key("durations"), Value::from(self.durations.clone())));
            out.push((key("starts"), Value::from(self.starts.clone())));
            out.push((key("ends"), Value::from(self.ends.clone())));
        }
        out.push((key("max_consec_days"), Value::from(self.max_consec_days)));
        out
    }
}

impl From<&PeriodSet> for PeriodSummary {
    fn from(set: &PeriodSet) -> Self {
        set.summary()
    }
}
