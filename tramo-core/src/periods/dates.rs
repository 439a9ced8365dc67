use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::ordinal::CalendarDay;
use crate::types::Interval;

/// Every calendar day from `start` to `end`, inclusive.
///
/// Returns an empty vector when `end` precedes `start`.
#[must_use]
pub fn fill_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Sorted, de-duplicated union of the calendar days covered by `intervals`.
#[must_use]
pub fn covered_dates<D: CalendarDay>(intervals: &[Interval<D>]) -> Vec<NaiveDate> {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    for iv in intervals {
        days.extend(fill_dates(iv.start.calendar_day(), iv.end.calendar_day()));
    }
    days.into_iter().collect()
}

/// Thin a set of timestamps so that kept samples are spread out.
///
/// Sorts a copy of `dates`, always keeps the first one, and keeps every later
/// timestamp whose calendar day is more than `days` days after the day of the
/// timestamp immediately preceding it in sorted order.
#[must_use]
pub fn unify_dates<D>(dates: &[D], days: i64) -> Vec<D>
where
    D: CalendarDay + Clone + Ord,
{
    let mut sorted = dates.to_vec();
    sorted.sort();
    let mut out: Vec<D> = Vec::with_capacity(sorted.len());
    let mut prev: Option<NaiveDate> = None;
    for d in sorted {
        let day = d.calendar_day();
        let keep = prev.is_none_or(|p| (day - p).num_days() > days);
        prev = Some(day);
        if keep {
            out.push(d);
        }
    }
    out
}
