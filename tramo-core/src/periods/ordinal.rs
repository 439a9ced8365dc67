use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::types::{DuplicatePolicy, Ordinal, TramoError};

/// Anything that falls on a calendar day.
///
/// Time-of-day is discarded: two timestamps on the same day map to the same
/// ordinal. Zoned timestamps use the day in their own time zone.
pub trait CalendarDay {
    /// Calendar day of this timestamp.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Ordinals with their values and the calendar day ordinal 0 refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalSeries<V> {
    /// Earliest calendar day in the input.
    pub origin: NaiveDate,
    /// Day offsets from `origin`.
    pub ordinals: Vec<Ordinal>,
    /// Value per ordinal.
    pub values: Vec<V>,
}

fn origin_of<D: CalendarDay>(dates: &[D]) -> Result<NaiveDate, TramoError> {
    dates
        .iter()
        .map(CalendarDay::calendar_day)
        .min()
        .ok_or_else(|| TramoError::empty_input("timestamps"))
}

/// Convert timestamps to day offsets from the earliest calendar day among them.
///
/// Input order is preserved and duplicates are kept.
///
/// ```
/// use chrono::NaiveDate;
/// use tramo_core::dates_to_ordinals;
///
/// let d = |day| NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
/// assert_eq!(dates_to_ordinals(&[d(3), d(1), d(5)]).unwrap(), vec![2, 0, 4]);
/// ```
///
/// # Errors
/// Returns `EmptyInput` when `dates` is empty, since no origin can be derived.
pub fn dates_to_ordinals<D: CalendarDay>(dates: &[D]) -> Result<Vec<Ordinal>, TramoError> {
    let origin = origin_of(dates)?;
    Ok(dates
        .iter()
        .map(|d| (d.calendar_day() - origin).num_days())
        .collect())
}

/// Convert timestamps with parallel values to ordinals, collapsing samples that
/// fall on the same day according to `policy`.
///
/// Ordinals keep the position of their first occurrence.
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length and `EmptyInput` if they
/// are empty.
pub fn dates_to_ordinals_with_values<D, V>(
    dates: &[D],
    values: &[V],
    policy: DuplicatePolicy,
) -> Result<OrdinalSeries<V>, TramoError>
where
    D: CalendarDay,
    V: Clone,
{
    if dates.len() != values.len() {
        return Err(TramoError::InvalidArg(format!(
            "timestamps and values differ in length: {} vs {}",
            dates.len(),
            values.len()
        )));
    }
    let origin = origin_of(dates)?;
    let all = dates.iter().map(|d| (d.calendar_day() - origin).num_days());

    let mut ordinals: Vec<Ordinal> = Vec::with_capacity(dates.len());
    let mut out: Vec<V> = Vec::with_capacity(dates.len());
    if matches!(policy, DuplicatePolicy::KeepAll) {
        ordinals.extend(all);
        out.extend_from_slice(values);
        return Ok(OrdinalSeries {
            origin,
            ordinals,
            values: out,
        });
    }

    let mut position: HashMap<Ordinal, usize> = HashMap::with_capacity(dates.len());
    for (ordinal, value) in all.zip(values) {
        match position.entry(ordinal) {
            Entry::Vacant(v) => {
                v.insert(ordinals.len());
                ordinals.push(ordinal);
                out.push(value.clone());
            }
            Entry::Occupied(o) => {
                if matches!(policy, DuplicatePolicy::KeepLast) {
                    out[*o.get()] = value.clone();
                }
            }
        }
    }

    Ok(OrdinalSeries {
        origin,
        ordinals,
        values: out,
    })
}
