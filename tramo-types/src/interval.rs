//! Interval values consumed and produced by the interval merger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A closed `[start, end]` interval over an ordered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    /// Inclusive start.
    pub start: T,
    /// Inclusive end.
    pub end: T,
}

impl<T> Interval<T> {
    /// Construct an interval; ordering is validated by the merger, not here.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self { start, end }
    }
}

/// One merged interval and the input intervals it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedInterval<T> {
    /// Merged boundaries.
    pub interval: Interval<T>,
    /// Input indices absorbed into this interval, in input order.
    pub members: Vec<usize>,
    /// Index of the chronologically first constituent.
    pub first: usize,
    /// Index of the constituent that determined the current end.
    pub last: usize,
}

impl<T> MergedInterval<T> {
    /// Start a merged interval from a single input interval.
    #[must_use]
    pub fn new(interval: Interval<T>, index: usize) -> Self {
        Self {
            interval,
            members: vec![index],
            first: index,
            last: index,
        }
    }

    /// Number of input intervals absorbed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a merged interval holds at least its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Counts of how incoming intervals were absorbed during a merge.
///
/// Clean joins (touching or within the join condition) are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeStats {
    /// Intervals entirely inside the accumulating interval.
    pub subset: usize,
    /// Intervals that started inside and extended the accumulating interval.
    pub overlap: usize,
}

impl MergeStats {
    /// Render as a map holding only the non-zero counters.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        if self.subset > 0 {
            out.insert("subset", self.subset);
        }
        if self.overlap > 0 {
            out.insert("overlap", self.overlap);
        }
        out
    }

    /// Sum two stats counters.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            subset: self.subset + other.subset,
            overlap: self.overlap + other.overlap,
        }
    }
}

/// Output of merging one sorted interval list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedIntervalSet<T> {
    /// Merged intervals in chronological order.
    pub merged: Vec<MergedInterval<T>>,
    /// Absorption counters.
    pub stats: MergeStats,
}

impl<T> Default for MergedIntervalSet<T> {
    fn default() -> Self {
        Self {
            merged: Vec::new(),
            stats: MergeStats::default(),
        }
    }
}

impl<T: Clone> MergedIntervalSet<T> {
    /// Merged boundaries only.
    #[must_use]
    pub fn intervals(&self) -> Vec<Interval<T>> {
        self.merged.iter().map(|m| m.interval.clone()).collect()
    }

    /// Consumed input indices per merged interval.
    #[must_use]
    pub fn correspondences(&self) -> Vec<Vec<usize>> {
        self.merged.iter().map(|m| m.members.clone()).collect()
    }
}

/// A keyed interval row, e.g. an admission of one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedInterval<K, T> {
    /// Entity the interval belongs to.
    pub key: K,
    /// Inclusive start.
    pub start: T,
    /// Inclusive end.
    pub end: T,
}

impl<K, T> KeyedInterval<K, T> {
    /// Construct a keyed interval row.
    pub const fn new(key: K, start: T, end: T) -> Self {
        Self { key, start, end }
    }
}

impl<K, T: PartialOrd> KeyedInterval<K, T> {
    /// True when `at` lies within `[start, end]`, bounds included.
    pub fn contains(&self, at: &T) -> bool {
        self.start <= *at && *at <= self.end
    }
}
