use core::ops::Sub;

use chrono::TimeDelta;

/// Split a sequence into consecutive groups.
///
/// Items are visited in order. An item joins the current group when
/// `condition(group, item)` holds and otherwise starts a new one. The
/// condition only ever sees non-empty groups.
///
/// ```
/// use tramo_core::group_by;
///
/// let groups = group_by([1, 2, 3, 6, 7, 8, 11], |g: &[i32], x: &i32| x - g[g.len() - 1] <= 2);
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![6, 7, 8], vec![11]]);
/// ```
pub fn group_by<T, I, F>(items: I, mut condition: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&[T], &T) -> bool,
{
    let mut out: Vec<Vec<T>> = Vec::new();
    let mut cur: Vec<T> = Vec::new();
    for item in items {
        if !cur.is_empty() && !condition(&cur, &item) {
            out.push(core::mem::take(&mut cur));
        }
        cur.push(item);
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

/// Condition accepting an item whose whole-day distance from the group's
/// latest member, counted inclusively, is at most `days`.
pub fn within_days<T>(days: i64) -> impl Fn(&[T], &T) -> bool
where
    T: Sub<Output = TimeDelta> + Clone,
{
    move |group, at| {
        group
            .last()
            .is_none_or(|last| (at.clone() - last.clone()).num_days() + 1 <= days)
    }
}

/// Default grouping condition: within one week of the group's latest member,
/// so six whole days apart still joins and seven starts a new group.
pub fn within_week<T>(group: &[T], at: &T) -> bool
where
    T: Sub<Output = TimeDelta> + Clone,
{
    within_days(7)(group, at)
}

/// [`group_by`] with [`within_week`].
pub fn group_by_week<T, I>(items: I) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    T: Sub<Output = TimeDelta> + Clone,
{
    group_by(items, within_week)
}
