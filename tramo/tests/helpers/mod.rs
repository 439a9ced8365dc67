#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tramo::Episode;

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, hour, 0, 0).unwrap()
}

/// Daily samples at 08:00 from a `T`/`F` pattern, starting on January `first_day`.
pub fn daily(first_day: u32, pattern: &str) -> Vec<(DateTime<Utc>, bool)> {
    pattern
        .chars()
        .zip(first_day..)
        .map(|(c, day)| (at(day, 8), c == 'T'))
        .collect()
}

pub fn episode(entity: &str, id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Episode {
    Episode::new(entity, id, start, end)
}

/// Two patients, five episodes: patient 1 has two touching episodes and a
/// separate one; patient 2 has two separate episodes.
pub fn ward_episodes() -> Vec<Episode> {
    vec![
        episode("1", "10", at(1, 13), at(2, 13)),
        episode("1", "11", at(2, 13), at(4, 10)),
        episode("1", "12", at(5, 10), at(6, 10)),
        episode("2", "13", at(1, 13), at(2, 13)),
        episode("2", "14", at(5, 10), at(6, 10)),
    ]
}
