use chrono::NaiveDate;
use tramo_core::{
    KeyedInterval, TramoError, contains_interval, find_interval_by_date,
    find_interval_by_date_strict, select_by_interval,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, day).unwrap()
}

fn rows(spans: &[(u32, u32, u32)]) -> Vec<KeyedInterval<u32, NaiveDate>> {
    spans
        .iter()
        .map(|&(key, s, e)| KeyedInterval::new(key, d(s), d(e)))
        .collect()
}

#[test]
fn select_overlapping_and_contained() {
    let table = rows(&[(1, 1, 2), (1, 2, 3), (1, 3, 4), (2, 1, 2), (2, 2, 3), (2, 3, 4)]);

    let res = select_by_interval(&table, &1, d(2), d(3), true);
    assert_eq!(res.len(), 1);
    assert_eq!((res[0].start, res[0].end), (d(2), d(3)));

    let res = select_by_interval(&table, &1, d(2), d(3), false);
    assert_eq!(res.len(), 3);
    assert_eq!((res[1].start, res[1].end), (d(2), d(3)));
    assert_eq!((res[2].start, res[2].end), (d(3), d(4)));
    assert!(res.iter().all(|r| r.key == 1));
}

#[test]
fn contains_interval_cases() {
    let table = rows(&[(1, 1, 3), (1, 7, 9), (1, 10, 12), (2, 1, 22), (2, 1, 22)]);

    assert!(contains_interval(&table, &1, d(1), d(4), true));
    assert!(contains_interval(&table, &1, d(1), d(2), false));
    assert!(!contains_interval(&table, &1, d(1), d(2), true));
    assert!(contains_interval(&table, &1, d(2), d(4), false));
    assert!(!contains_interval(&table, &1, d(8), d(11), true));
    assert!(contains_interval(&table, &1, d(8), d(11), false));
    assert!(!contains_interval(&table, &3, d(1), d(31), false));
}

#[test]
fn row_contains_both_bounds() {
    let row = KeyedInterval::new(1, d(5), d(7));
    assert!(row.contains(&d(5)));
    assert!(row.contains(&d(7)));
    assert!(!row.contains(&d(4)));
    assert!(!row.contains(&d(8)));
}

#[test]
fn find_by_date_with_and_without_key() {
    let table = rows(&[(1, 1, 10), (1, 11, 20), (2, 5, 15)]);

    assert_eq!(find_interval_by_date(&table, None, &d(6)).len(), 2);
    assert_eq!(find_interval_by_date(&table, Some(&1), &d(6)).len(), 1);
    assert_eq!(find_interval_by_date(&table, Some(&1), &d(10))[0].end, d(10));
    assert!(find_interval_by_date(&table, Some(&2), &d(20)).is_empty());
}

#[test]
fn strict_find_needs_exactly_one_match() {
    let table = rows(&[(1, 1, 10), (1, 11, 20), (2, 5, 15)]);

    let hit = find_interval_by_date_strict(&table, Some(&1), &d(12)).unwrap();
    assert_eq!(hit.start, d(11));

    assert!(matches!(
        find_interval_by_date_strict(&table, Some(&1), &d(25)),
        Err(TramoError::NotFound { .. })
    ));
    assert!(matches!(
        find_interval_by_date_strict(&table, None, &d(6)),
        Err(TramoError::InvalidArg(_))
    ));
}
