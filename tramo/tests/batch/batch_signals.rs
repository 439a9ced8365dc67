use chrono::NaiveDate;

use crate::helpers::{at, daily};
use tramo::{DuplicatePolicy, FillMode, Tramo, TramoError};

#[tokio::test]
async fn periods_per_entity_in_key_order() {
    let tramo = Tramo::builder().build().unwrap();
    let report = tramo
        .signals()
        .samples("p2", daily(1, "TFFTTFT"))
        .samples("p1", daily(1, "FTTF"))
        .run()
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let keys: Vec<&str> = report.entries.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(keys, vec!["p1", "p2"]);

    let p1 = &report.entries[0];
    assert_eq!(p1.origin, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    assert_eq!((p1.periods.days, p1.periods.periods), (2, 1));
    assert_eq!(p1.date_of(p1.periods.starts[0]), NaiveDate::from_ymd_opt(2023, 1, 2));

    let p2 = &report.entries[1];
    assert_eq!((p2.periods.days, p2.periods.periods), (4, 3));
}

#[tokio::test]
async fn sparse_unsorted_samples_are_filled() {
    let tramo = Tramo::builder().build().unwrap();
    let samples = vec![
        (at(16, 9), false),
        (at(1, 9), false),
        (at(2, 9), true),
        (at(3, 9), false),
        (at(8, 9), false),
        (at(10, 9), true),
        (at(14, 9), true),
        (at(17, 9), true),
    ];
    let report = tramo.signals().samples("p", samples).run().await.unwrap();
    let set = &report.entries[0].periods;
    assert_eq!((set.days, set.periods, set.max_consec_days), (7, 3, 5));
}

#[tokio::test]
async fn margins_and_cooloff_apply_per_entity() {
    let tramo = Tramo::builder()
        .initial_margin(3)
        .cooloff(1)
        .build()
        .unwrap();
    let report = tramo
        .signals()
        .samples("late", daily(1, "FFTTT"))
        .samples("gappy", daily(1, "FFFTTFT"))
        .run()
        .await
        .unwrap();

    let gappy = &report.entries[0].periods;
    assert_eq!(gappy.periods, 1);
    assert_eq!(gappy.durations, vec![4]);
    assert_eq!(gappy.days, 3);

    let late = &report.entries[1].periods;
    assert!(late.is_empty());
}

#[tokio::test]
async fn same_day_samples_follow_duplicate_policy() {
    let samples = vec![(at(1, 8), false), (at(2, 8), true), (at(2, 20), false), (at(3, 8), false)];

    let first = Tramo::builder().build().unwrap();
    let report = first.signals().samples("p", samples.clone()).run().await.unwrap();
    assert_eq!(report.entries[0].periods.days, 1);

    let last = Tramo::builder()
        .duplicates(DuplicatePolicy::KeepLast)
        .build()
        .unwrap();
    let report = last.signals().samples("p", samples.clone()).run().await.unwrap();
    assert_eq!(report.entries[0].periods.days, 0);

    let all = Tramo::builder()
        .duplicates(DuplicatePolicy::KeepAll)
        .build()
        .unwrap();
    let report = all.signals().samples("p", samples).run().await.unwrap();
    assert!(report.entries.is_empty());
    assert!(matches!(report.warnings[0], TramoError::Entity { .. }));
}

#[tokio::test]
async fn fill_mode_is_configurable() {
    let tramo = Tramo::builder()
        .fill_mode(FillMode::AlwaysFalse)
        .build()
        .unwrap();
    let report = tramo
        .signals()
        .sample("p", at(1, 8), true)
        .sample("p", at(4, 8), true)
        .run()
        .await
        .unwrap();
    assert_eq!(report.entries[0].periods.periods, 2);
}

#[tokio::test]
async fn empty_entity_is_reported_not_fatal() {
    let tramo = Tramo::builder().build().unwrap();
    let report = tramo
        .signals()
        .samples("ok", daily(1, "TT"))
        .samples("ghost", vec![])
        .run()
        .await
        .unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(
        report.warnings,
        vec![TramoError::entity("ghost", "empty input: timestamps")]
    );
}

#[tokio::test]
async fn no_samples_is_rejected() {
    let tramo = Tramo::builder().build().unwrap();
    let err = tramo.signals().run().await.unwrap_err();
    assert!(matches!(err, TramoError::InvalidArg(_)));
}
