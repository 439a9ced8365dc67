use crate::types::{KeyedInterval, TramoError};

/// Rows of `key` that overlap `[start, end]`, or lie inside it when `contained`.
///
/// ```
/// use tramo_core::{KeyedInterval, select_by_interval};
///
/// let rows = [
///     KeyedInterval::new(1, 10, 20),
///     KeyedInterval::new(1, 30, 40),
///     KeyedInterval::new(2, 10, 20),
/// ];
/// assert_eq!(select_by_interval(&rows, &1, 15, 35, false).len(), 2);
/// assert!(select_by_interval(&rows, &1, 15, 35, true).is_empty());
/// ```
pub fn select_by_interval<'a, K, T>(
    rows: &'a [KeyedInterval<K, T>],
    key: &K,
    start: T,
    end: T,
    contained: bool,
) -> Vec<&'a KeyedInterval<K, T>>
where
    K: PartialEq,
    T: PartialOrd,
{
    rows.iter()
        .filter(|r| r.key == *key)
        .filter(|r| {
            if contained {
                r.start >= start && r.end <= end
            } else {
                r.start <= end && r.end >= start
            }
        })
        .collect()
}

/// Whether any row of `key` overlaps (or, when `contained`, lies inside)
/// `[start, end]`.
pub fn contains_interval<K, T>(
    rows: &[KeyedInterval<K, T>],
    key: &K,
    start: T,
    end: T,
    contained: bool,
) -> bool
where
    K: PartialEq,
    T: PartialOrd,
{
    !select_by_interval(rows, key, start, end, contained).is_empty()
}

/// Rows whose `[start, end]` contains `at`, optionally restricted to `key`.
pub fn find_interval_by_date<'a, K, T>(
    rows: &'a [KeyedInterval<K, T>],
    key: Option<&K>,
    at: &T,
) -> Vec<&'a KeyedInterval<K, T>>
where
    K: PartialEq,
    T: PartialOrd,
{
    rows.iter()
        .filter(|r| key.is_none_or(|k| r.key == *k))
        .filter(|r| r.contains(at))
        .collect()
}

/// The single row containing `at`.
///
/// # Errors
/// Returns `NotFound` when no row matches and `InvalidArg` when several do.
pub fn find_interval_by_date_strict<'a, K, T>(
    rows: &'a [KeyedInterval<K, T>],
    key: Option<&K>,
    at: &T,
) -> Result<&'a KeyedInterval<K, T>, TramoError>
where
    K: PartialEq,
    T: PartialOrd,
{
    match find_interval_by_date(rows, key, at).as_slice() {
        [] => Err(TramoError::not_found("interval containing the requested date")),
        [one] => Ok(*one),
        many => Err(TramoError::InvalidArg(format!(
            "{} intervals contain the requested date",
            many.len()
        ))),
    }
}
