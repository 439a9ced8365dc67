use super::check_samples;
use super::fill::fill_gaps;
use crate::types::{FillMode, Ordinal, PeriodSet, PeriodSummary, TramoError};

/// Detector state between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Last sample was negative (or nothing seen yet).
    Outside,
    /// Inside a run that began at `start`; `last` is the latest positive ordinal.
    InRun { start: Ordinal, last: Ordinal },
}

/// Running totals mutated by the transition actions.
struct Totals {
    set: PeriodSet,
    prev_end: Ordinal,
    run: i64,
}

impl Totals {
    fn new(origin: Ordinal) -> Self {
        Self {
            set: PeriodSet::empty(),
            prev_end: origin - 1,
            run: 0,
        }
    }

    fn open(&mut self, at: Ordinal) {
        self.set.periods += 1;
        self.set.days += 1;
        self.run = 1;
        self.set.starts.push(at);
        self.set.gap_before.push(at - self.prev_end - 1);
    }

    fn extend(&mut self, by: i64) {
        self.set.days += by;
        self.run += by;
    }

    fn close(&mut self, start: Ordinal, last: Ordinal) {
        self.set.ends.push(last);
        self.set.durations.push(last - start + 1);
        self.set.run_lengths.push(vec![self.run]);
        self.prev_end = last;
    }
}

impl RunState {
    fn step(self, totals: &mut Totals, at: Ordinal, value: bool) -> Self {
        let next = match (self, value) {
            (Self::Outside, false) => Self::Outside,
            (Self::Outside, true) => {
                totals.open(at);
                Self::InRun { start: at, last: at }
            }
            // A jump between two positive samples counts every day in between.
            (Self::InRun { start, last }, true) => {
                totals.extend(at - last);
                Self::InRun { start, last: at }
            }
            (Self::InRun { start, last }, false) => {
                totals.close(start, last);
                Self::Outside
            }
        };
        totals.set.max_consec_days = totals.set.max_consec_days.max(totals.run);
        next
    }

    /// End of input: a trailing run is closed at the last positive ordinal.
    fn finish(self, totals: &mut Totals) {
        match self {
            Self::Outside => {}
            Self::InRun { start, last } => totals.close(start, last),
        }
    }
}

fn detect(ordinals: &[Ordinal], values: &[bool], origin: Ordinal) -> PeriodSet {
    let mut totals = Totals::new(origin);
    let state = ordinals
        .iter()
        .zip(values)
        .fold(RunState::Outside, |state, (&at, &value)| {
            state.step(&mut totals, at, value)
        });
    state.finish(&mut totals);
    totals.set
}

/// Detect maximal positive runs, measuring the first period's gap from the
/// first ordinal of the sequence.
///
/// Ordinals are expected gap-free (see [`fill_gaps`]); when they are not, the
/// days between two consecutive positive samples are counted as part of the
/// run.
///
/// ```
/// use tramo_core::compute_periods;
///
/// let set = compute_periods(&[0, 1, 2, 3], &[false, true, true, false]).unwrap();
/// assert_eq!((set.days, set.periods, set.max_consec_days), (2, 1, 2));
/// assert_eq!(set.starts, vec![1]);
/// assert_eq!(set.ends, vec![2]);
/// assert_eq!(set.gap_before, vec![1]);
/// ```
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length or the ordinals are not
/// strictly increasing.
pub fn compute_periods(ordinals: &[Ordinal], values: &[bool]) -> Result<PeriodSet, TramoError> {
    let origin = ordinals.first().copied().unwrap_or(0);
    compute_periods_from(ordinals, values, origin)
}

/// Like [`compute_periods`], with the first period's gap measured from `origin`.
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length, the ordinals are not
/// strictly increasing, or `origin` lies after the first ordinal.
pub fn compute_periods_from(
    ordinals: &[Ordinal],
    values: &[bool],
    origin: Ordinal,
) -> Result<PeriodSet, TramoError> {
    check_samples(ordinals, values)?;
    if let Some(&first) = ordinals.first()
        && origin > first
    {
        return Err(TramoError::InvalidArg(format!(
            "origin {origin} lies after the first ordinal {first}"
        )));
    }
    Ok(detect(ordinals, values, origin))
}

/// Detect periods over positional samples: value `i` sits at ordinal `i`.
#[must_use]
pub fn compute_periods_indexed(values: &[bool]) -> PeriodSet {
    let ordinals: Vec<Ordinal> = (0..).take(values.len()).collect();
    detect(&ordinals, values, 0)
}

/// Fill gaps with `mode`, then detect periods.
///
/// # Errors
/// Same conditions as [`fill_gaps`].
pub fn compute_periods_filled(
    ordinals: &[Ordinal],
    values: &[bool],
    mode: FillMode,
) -> Result<PeriodSet, TramoError> {
    let (ordinals, values) = fill_gaps(ordinals, values, mode)?;
    compute_periods(&ordinals, &values)
}

/// Summarize a list of positive-day ordinals: each listed ordinal is one
/// positive day and consecutive ordinals belong to the same period.
///
/// ```
/// use tramo_core::compute_periods_simple;
///
/// let s = compute_periods_simple(&[1, 2, 3, 5, 6, 8, 9]);
/// assert_eq!((s.days, s.periods, s.max_consec_days), (7, 3, 3));
/// ```
#[must_use]
pub fn compute_periods_simple(ordinals: &[Ordinal]) -> PeriodSummary {
    let mut out = PeriodSummary::default();
    let mut run: i64 = 0;
    let mut prev: Option<Ordinal> = None;
    for &o in ordinals {
        if prev.is_some_and(|p| o - p == 1) {
            run += 1;
        } else {
            run = 1;
            out.periods += 1;
        }
        out.days += 1;
        out.max_consec_days = out.max_consec_days.max(run);
        prev = Some(o);
    }
    out
}
