use super::detect::compute_periods_from;
use super::edit::{join_within_in_place, release_runs};
use super::fill::fill_gaps;
use crate::types::{MarginConfig, Ordinal, PeriodSet, TramoError};

/// Drop the first period when its preceding gap is shorter than `margin`.
fn trim_leading(set: &mut PeriodSet, margin: Ordinal) -> bool {
    if set.gap_before.first().is_none_or(|&gap| gap >= margin) {
        return false;
    }
    release_runs(set, 0);
    set.durations.remove(0);
    set.periods -= 1;
    set.starts.remove(0);
    set.ends.remove(0);
    set.gap_before.remove(0);
    true
}

/// Detect periods and apply margin trimming and cooloff joins.
///
/// 1. Gaps are filled with `cfg.fill_mode` and periods are detected with the
///    first gap measured from `cfg.origin` (the first ordinal when unset).
/// 2. A first period whose gap is smaller than `cfg.initial_margin` is dropped.
/// 3. With `cfg.cooloff > 0`, periods separated by at most `cfg.cooloff` days
///    are joined, walking from the last period to the first.
///
/// ```
/// use tramo_core::{MarginConfig, compute_periods_with_margins};
///
/// let values = [false, false, true, true, true];
/// let cfg = MarginConfig { initial_margin: 3, ..MarginConfig::default() };
/// let set = compute_periods_with_margins(&[0, 1, 2, 3, 4], &values, &cfg).unwrap();
/// assert_eq!((set.days, set.periods, set.max_consec_days), (0, 0, 0));
/// ```
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length, the ordinals are not
/// strictly increasing, or the origin lies after the first ordinal.
pub fn compute_periods_with_margins(
    ordinals: &[Ordinal],
    values: &[bool],
    cfg: &MarginConfig,
) -> Result<PeriodSet, TramoError> {
    let (ordinals, values) = fill_gaps(ordinals, values, cfg.fill_mode)?;
    let origin = cfg
        .origin
        .or_else(|| ordinals.first().copied())
        .unwrap_or(0);
    let mut set = compute_periods_from(&ordinals, &values, origin)?;

    if trim_leading(&mut set, cfg.initial_margin) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            initial_margin = cfg.initial_margin,
            remaining = set.periods,
            "dropped leading period inside the initial margin"
        );
    }

    if cfg.cooloff > 0 {
        let _joined = join_within_in_place(&mut set, cfg.cooloff);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            cooloff = cfg.cooloff,
            joined = _joined,
            "joined periods within cooloff"
        );
    }

    Ok(set)
}
