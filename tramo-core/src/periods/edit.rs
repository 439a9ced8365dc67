use crate::types::{PeriodSet, TramoError};

fn check_breakdown(set: &PeriodSet) -> Result<(), TramoError> {
    let n = set.periods;
    if set.starts.len() != n
        || set.ends.len() != n
        || set.durations.len() != n
        || set.gap_before.len() != n
        || !(set.run_lengths.is_empty() || set.run_lengths.len() == n)
    {
        return Err(TramoError::InvalidArg(format!(
            "period breakdown does not match period count {n}"
        )));
    }
    Ok(())
}

/// Spell out untracked runs as one run per period.
fn ensure_runs(set: &mut PeriodSet) {
    if set.run_lengths.is_empty() {
        set.run_lengths = set.durations.iter().map(|&d| vec![d]).collect();
    }
}

/// Remove period `n`'s runs and give its positive days back.
pub(crate) fn release_runs(set: &mut PeriodSet, n: usize) {
    ensure_runs(set);
    let positive: i64 = set.run_lengths.remove(n).iter().sum();
    set.days = (set.days - positive).max(0);
    set.max_consec_days = set
        .run_lengths
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0);
}

/// Join period `n` with period `n + 1` in place.
pub(crate) fn join_at(set: &mut PeriodSet, n: usize) -> Result<(), TramoError> {
    if n >= set.periods.saturating_sub(1) {
        return Err(TramoError::index_out_of_range(n, set.periods));
    }
    ensure_runs(set);
    let next_runs = set.run_lengths.remove(n + 1);
    set.run_lengths[n].extend(next_runs);
    let next_duration = set.durations.remove(n + 1);
    let gap = set.gap_before.remove(n + 1);
    set.durations[n] += gap + next_duration;
    set.starts.remove(n + 1);
    set.ends.remove(n);
    set.periods -= 1;
    Ok(())
}

/// Remove period `n` in place, folding its gap and duration into the next gap.
pub(crate) fn delete_at(set: &mut PeriodSet, n: usize) -> Result<(), TramoError> {
    if n >= set.periods {
        return Err(TramoError::index_out_of_range(n, set.periods));
    }
    release_runs(set, n);
    let duration = set.durations.remove(n);
    let gap = set.gap_before.remove(n);
    if let Some(next_gap) = set.gap_before.get_mut(n) {
        *next_gap += gap + duration;
    }
    set.starts.remove(n);
    set.ends.remove(n);
    set.periods -= 1;
    Ok(())
}

/// Join every pair of neighbours separated by at most `distance` days, in place.
///
/// Walks from the last period to the first so a join never shifts the index of
/// a period still to be visited.
pub(crate) fn join_within_in_place(set: &mut PeriodSet, distance: i64) -> usize {
    let mut joined = 0;
    for i in (1..set.periods).rev() {
        if set.gap_before[i] <= distance && join_at(set, i - 1).is_ok() {
            joined += 1;
        }
    }
    joined
}

/// Merge period `n` and `n + 1` into a single period.
///
/// The merged duration is both durations plus the gap between them. `days`
/// and `max_consec_days` are left untouched: they keep counting positive days.
///
/// # Errors
/// Returns `IndexOutOfRange` when there is no period `n + 1`, and `InvalidArg`
/// if the per-period vectors do not match `periods`.
pub fn join_specific_periods(set: &PeriodSet, n: usize) -> Result<PeriodSet, TramoError> {
    check_breakdown(set)?;
    let mut out = set.clone();
    join_at(&mut out, n)?;
    Ok(out)
}

/// Remove period `n`.
///
/// If a following period exists its gap grows by the deleted period's gap and
/// duration, so the gap accounting over the whole sequence stays lossless.
/// `days` drops by the positive days of the deleted period (its duration,
/// unless it was joined over a gap) and `max_consec_days` is recomputed from
/// the remaining runs.
///
/// # Errors
/// Returns `IndexOutOfRange` when `n >= periods`, and `InvalidArg` if the
/// per-period vectors do not match `periods`.
pub fn delete_period(set: &PeriodSet, n: usize) -> Result<PeriodSet, TramoError> {
    check_breakdown(set)?;
    let mut out = set.clone();
    delete_at(&mut out, n)?;
    Ok(out)
}

/// Join every period whose preceding gap is at most `distance` days with the
/// period before it.
///
/// ```
/// use tramo_core::{compute_periods, join_periods_by_distance};
///
/// let v = [false, true, true, false, true];
/// let set = compute_periods(&[0, 1, 2, 3, 4], &v).unwrap();
/// let joined = join_periods_by_distance(&set, 1).unwrap();
/// assert_eq!((joined.days, joined.periods), (3, 1));
/// ```
///
/// # Errors
/// Returns `InvalidArg` if the per-period vectors do not match `periods`.
pub fn join_periods_by_distance(set: &PeriodSet, distance: i64) -> Result<PeriodSet, TramoError> {
    check_breakdown(set)?;
    let mut out = set.clone();
    join_within_in_place(&mut out, distance);
    Ok(out)
}
