use core::ops::Sub;

use crate::types::{Interval, MergeStats, MergedInterval, MergedIntervalSet, TramoError};

/// Default join condition: the accumulated interval ends exactly where the
/// incoming one starts.
pub fn join_touching<T: PartialEq>(cur: &Interval<T>, incoming: &Interval<T>) -> bool {
    cur.end == incoming.start
}

/// Join condition accepting a gap of at most `max_gap` between the accumulated
/// interval's end and the incoming start.
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use tramo_core::{Interval, join_within, merge_intervals};
///
/// let t = |d, h| Utc.with_ymd_and_hms(2023, 1, d, h, 0, 0).unwrap();
/// let ivs = [Interval::new(t(1, 13), t(2, 13)), Interval::new(t(3, 10), t(4, 10))];
/// let merged = merge_intervals(ivs, join_within(TimeDelta::days(1))).unwrap();
/// assert_eq!(merged.intervals(), vec![Interval::new(t(1, 13), t(4, 10))]);
/// ```
pub fn join_within<T, D>(max_gap: D) -> impl Fn(&Interval<T>, &Interval<T>) -> bool
where
    T: Sub<Output = D> + Clone,
    D: PartialOrd,
{
    move |cur, incoming| incoming.start.clone() - cur.end.clone() <= max_gap
}

/// Merge intervals sorted by start.
///
/// For each incoming interval against the accumulating one:
/// - starting before the accumulated end and ending inside it: a subset, absorbed
///   without moving the boundary;
/// - starting before the accumulated end and ending after it: an overlap, the
///   end moves and the incoming interval becomes the boundary-determiner;
/// - otherwise, if `join_condition(accumulated, incoming)` holds: joined like an
///   overlap but not counted in the stats;
/// - otherwise the accumulated interval is closed and a new one starts.
///
/// ```
/// use tramo_core::{Interval, merge_touching};
///
/// let merged = merge_touching([(1, 4), (2, 3), (4, 6), (8, 9)]).unwrap();
/// assert_eq!(merged.intervals(), vec![Interval::new(1, 6), Interval::new(8, 9)]);
/// assert_eq!(merged.correspondences(), vec![vec![0, 1, 2], vec![3]]);
/// assert_eq!(merged.stats.subset, 1);
/// ```
///
/// # Errors
/// Returns `InvalidArg` if an interval ends before it starts or the input is
/// not sorted by start.
pub fn merge_intervals<T, I, F>(
    intervals: I,
    mut join_condition: F,
) -> Result<MergedIntervalSet<T>, TramoError>
where
    T: PartialOrd + Clone,
    I: IntoIterator,
    I::Item: Into<Interval<T>>,
    F: FnMut(&Interval<T>, &Interval<T>) -> bool,
{
    let mut out: MergedIntervalSet<T> = MergedIntervalSet::default();
    let mut stats = MergeStats::default();
    let mut cur: Option<MergedInterval<T>> = None;
    let mut prev_start: Option<T> = None;

    for (n, item) in intervals.into_iter().enumerate() {
        let incoming: Interval<T> = item.into();
        if incoming.end < incoming.start {
            return Err(TramoError::InvalidArg(format!(
                "interval {n} ends before it starts"
            )));
        }
        if prev_start.as_ref().is_some_and(|p| *p > incoming.start) {
            return Err(TramoError::InvalidArg(format!(
                "intervals must be sorted by start; interval {n} is out of order"
            )));
        }
        prev_start = Some(incoming.start.clone());

        cur = Some(match cur.take() {
            None => MergedInterval::new(incoming, n),
            Some(mut acc) => {
                if incoming.start < acc.interval.end {
                    acc.members.push(n);
                    if incoming.end <= acc.interval.end {
                        stats.subset += 1;
                    } else {
                        stats.overlap += 1;
                        acc.interval.end = incoming.end;
                        acc.last = n;
                    }
                    acc
                } else if join_condition(&acc.interval, &incoming) {
                    acc.members.push(n);
                    acc.interval.end = incoming.end;
                    acc.last = n;
                    acc
                } else {
                    out.merged.push(acc);
                    MergedInterval::new(incoming, n)
                }
            }
        });
    }
    out.merged.extend(cur);
    out.stats = stats;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        merged = out.merged.len(),
        subset = stats.subset,
        overlap = stats.overlap,
        "merged interval list"
    );

    Ok(out)
}

/// [`merge_intervals`] with [`join_touching`].
///
/// # Errors
/// Same conditions as [`merge_intervals`].
pub fn merge_touching<T, I>(intervals: I) -> Result<MergedIntervalSet<T>, TramoError>
where
    T: PartialOrd + Clone,
    I: IntoIterator,
    I::Item: Into<Interval<T>>,
{
    merge_intervals(intervals, |cur, incoming| join_touching(cur, incoming))
}
