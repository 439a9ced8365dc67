use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tramo::Episode;

/// The given day and hour of March 2024, UTC.
///
/// # Panics
/// Panics if `day` is not a valid day of March.
#[must_use]
pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0)
        .single()
        .expect("valid March 2024 timestamp")
}

/// Temperature readings per patient: `(taken_at, celsius)`.
///
/// Readings are irregular: some days have two, some none.
#[must_use]
pub fn temperature_readings() -> Vec<(&'static str, Vec<(DateTime<Utc>, f64)>)> {
    let p1 = vec![
        (march(1, 8), 36.8),
        (march(2, 8), 38.4),
        (march(2, 20), 38.9),
        (march(3, 8), 38.1),
        (march(6, 8), 38.6),
        (march(7, 8), 37.0),
        (march(9, 8), 38.2),
        (march(10, 8), 36.9),
    ];
    let p2 = vec![
        (march(1, 9), 37.1),
        (march(4, 9), 37.4),
        (march(5, 9), 38.3),
        (march(6, 9), 38.7),
        (march(12, 9), 38.5),
        (march(13, 9), 36.6),
    ];
    vec![("patient-1", p1), ("patient-2", p2)]
}

/// Fever threshold in degrees Celsius.
pub const FEVER_CELSIUS: f64 = 38.0;

/// Ward episodes for three patients, deliberately unsorted.
#[must_use]
pub fn ward_episodes() -> Vec<Episode> {
    let stay = |entity: &str, id: &str, start: DateTime<Utc>, hours: i64| {
        Episode::new(entity, id, start, start + TimeDelta::hours(hours))
    };
    vec![
        stay("patient-1", "er-1", march(1, 13), 24),
        stay("patient-2", "icu-7", march(3, 2), 30),
        stay("patient-1", "ward-2", march(2, 13), 45),
        stay("patient-1", "ward-3", march(5, 10), 24),
        stay("patient-2", "ward-9", march(4, 1), 10),
        stay("patient-3", "er-4", march(10, 22), 6),
        stay("patient-1", "rehab-1", march(12, 8), 72),
    ]
}
