use super::check_samples;
use crate::types::{FillMode, Ordinal, TramoError};

/// Value synthesized for an ordinal strictly inside the gap `(prev, curr)`.
const fn gap_value(mode: FillMode, prev: (Ordinal, bool), curr: (Ordinal, bool)) -> bool {
    match mode {
        FillMode::AlwaysFalse => false,
        FillMode::AlwaysTrue => true,
        FillMode::Last => prev.1,
        FillMode::TrueBetween => prev.1 && curr.1,
        FillMode::TrueBetweenThreshold { threshold } => {
            prev.1 && curr.1 && curr.0 - prev.0 <= threshold
        }
    }
}

/// Produce a gap-free sequence by synthesizing a value for every ordinal
/// missing between two consecutive samples.
///
/// Original samples are kept verbatim; synthesized ones are interleaved in
/// order, so the output covers every ordinal from the first to the last input
/// ordinal exactly once.
///
/// ```
/// use tramo_core::{FillMode, fill_gaps};
///
/// let (o, v) = fill_gaps(&[0, 1, 3], &[true, true, true], FillMode::TrueBetween).unwrap();
/// assert_eq!(o, vec![0, 1, 2, 3]);
/// assert_eq!(v, vec![true; 4]);
/// ```
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length or the ordinals are not
/// strictly increasing.
pub fn fill_gaps(
    ordinals: &[Ordinal],
    values: &[bool],
    mode: FillMode,
) -> Result<(Vec<Ordinal>, Vec<bool>), TramoError> {
    check_samples(ordinals, values)?;

    let span = match (ordinals.first(), ordinals.last()) {
        (Some(first), Some(last)) => usize::try_from(last - first + 1).unwrap_or(ordinals.len()),
        _ => return Ok((Vec::new(), Vec::new())),
    };
    let mut out_o: Vec<Ordinal> = Vec::with_capacity(span);
    let mut out_v: Vec<bool> = Vec::with_capacity(span);

    let mut prev: Option<(Ordinal, bool)> = None;
    for (&o, &v) in ordinals.iter().zip(values) {
        if let Some(p) = prev {
            let fill = gap_value(mode, p, (o, v));
            for missing in (p.0 + 1)..o {
                out_o.push(missing);
                out_v.push(fill);
            }
        }
        out_o.push(o);
        out_v.push(v);
        prev = Some((o, v));
    }
    Ok((out_o, out_v))
}
