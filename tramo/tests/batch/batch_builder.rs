use std::time::Duration;

use tramo::{DuplicatePolicy, FillMode, MarginConfig, Tramo, TramoConfig, TramoError};

#[test]
fn defaults() {
    let tramo = Tramo::builder().build().unwrap();
    let cfg = tramo.config();
    assert_eq!(cfg.margins.fill_mode, FillMode::TrueBetween);
    assert_eq!(cfg.duplicates, DuplicatePolicy::KeepFirst);
    assert_eq!(cfg.join_gap, None);
    assert_eq!(cfg.max_concurrency, 8);
    assert_eq!(cfg.request_timeout, None);
}

#[test]
fn setters_land_in_config() {
    let tramo = Tramo::builder()
        .fill_mode(FillMode::Last)
        .initial_margin(2)
        .cooloff(3)
        .duplicates(DuplicatePolicy::KeepLast)
        .join_gap(Duration::from_secs(3600))
        .max_concurrency(2)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let cfg = tramo.config();
    assert_eq!(
        cfg.margins,
        MarginConfig {
            initial_margin: 2,
            cooloff: 3,
            fill_mode: FillMode::Last,
            origin: None,
        }
    );
    assert_eq!(cfg.join_gap, Some(Duration::from_secs(3600)));
    assert_eq!(cfg.max_concurrency, 2);
}

#[test]
fn whole_config_can_be_supplied() {
    let cfg = TramoConfig {
        max_concurrency: 1,
        ..TramoConfig::default()
    };
    let tramo = Tramo::builder().config(cfg).build().unwrap();
    assert_eq!(tramo.config().max_concurrency, 1);
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(matches!(
        Tramo::builder().max_concurrency(0).build(),
        Err(TramoError::InvalidArg(_))
    ));
    assert!(matches!(
        Tramo::builder().cooloff(-1).build(),
        Err(TramoError::InvalidArg(_))
    ));
    assert!(matches!(
        Tramo::builder().join_gap(Duration::MAX).build(),
        Err(TramoError::InvalidArg(_))
    ));
}
