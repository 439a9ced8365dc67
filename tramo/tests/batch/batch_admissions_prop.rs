use chrono::{DateTime, TimeDelta};
use proptest::prelude::*;
use tramo::{Episode, Interval, Tramo};

fn arb_episodes() -> impl Strategy<Value = Vec<Episode>> {
    proptest::collection::vec((0u8..4, 0i64..200, 0i64..30), 1..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(n, (entity, start_h, len_h))| {
                let start = DateTime::from_timestamp(1_700_000_000 + start_h * 3600, 0).unwrap();
                Episode::new(
                    format!("e{entity}"),
                    format!("ep{n}"),
                    start,
                    start + TimeDelta::hours(len_h),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn batch_matches_per_entity_core_merge(episodes in arb_episodes()) {
        let tramo = Tramo::builder().max_concurrency(3).build().unwrap();
        let report = tokio_test::block_on(async {
            tramo.admissions().episodes(episodes.clone()).run().await
        })
        .unwrap();
        prop_assert!(report.warnings.is_empty());

        let mut expected: Vec<(String, Interval<DateTime<chrono::Utc>>)> = Vec::new();
        let mut entities: Vec<&str> = episodes.iter().map(|e| e.entity.as_str()).collect();
        entities.sort_unstable();
        entities.dedup();
        for entity in entities {
            let mut own: Vec<&Episode> = episodes.iter().filter(|e| e.entity == entity).collect();
            own.sort_by_key(|e| e.start);
            let merged = tramo_core::merge_touching(
                own.iter().map(|e| Interval::new(e.start, e.end)),
            )
            .unwrap();
            expected.extend(merged.intervals().into_iter().map(|iv| (entity.to_string(), iv)));
        }

        let got: Vec<(String, Interval<DateTime<chrono::Utc>>)> = report
            .admissions
            .iter()
            .map(|a| (a.entity.clone(), Interval::new(a.start, a.end)))
            .collect();
        prop_assert_eq!(got, expected);

        let total: usize = report.admissions.iter().map(|a| a.num_episodes).sum();
        prop_assert_eq!(total, episodes.len());
        for a in &report.admissions {
            prop_assert_eq!(&episodes[a.first_episode_idx].id, &a.first_episode_id);
            prop_assert_eq!(&episodes[a.last_episode_idx].id, &a.last_episode_id);
            prop_assert_eq!(episodes[a.last_episode_idx].end, a.end);
        }
    }
}
