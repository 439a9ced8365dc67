use std::time::Duration;

use crate::helpers::{at, episode, ward_episodes};
use tramo::{MergeStats, Tramo, TramoError};

#[tokio::test]
async fn touching_episodes_form_one_admission() {
    let tramo = Tramo::builder().build().unwrap();
    let report = tramo.admissions().episodes(ward_episodes()).run().await.unwrap();

    assert!(report.warnings.is_empty());
    let entities: Vec<&str> = report.admissions.iter().map(|a| a.entity.as_str()).collect();
    assert_eq!(entities, vec!["1", "1", "2", "2"]);
    let spans: Vec<_> = report.admissions.iter().map(|a| (a.start, a.end)).collect();
    assert_eq!(
        spans,
        vec![
            (at(1, 13), at(4, 10)),
            (at(5, 10), at(6, 10)),
            (at(1, 13), at(2, 13)),
            (at(5, 10), at(6, 10)),
        ]
    );
    let ids: Vec<usize> = report.admissions.iter().map(|a| a.admission_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(report.stats, MergeStats::default());

    let first = &report.admissions[0];
    assert_eq!(first.num_episodes, 2);
    assert_eq!(first.first_episode_id, "10");
    assert_eq!(first.last_episode_id, "11");
    assert_eq!(first.all_episode_ids, vec!["10".to_string(), "11".to_string()]);
    assert_eq!(first.first_episode_idx, 0);
    assert_eq!(first.last_episode_idx, 1);
    assert_eq!(first.all_episode_indices, vec![0, 1]);
    assert_eq!(report.admissions[3].all_episode_indices, vec![4]);
}

#[tokio::test]
async fn join_gap_bridges_short_breaks() {
    let tramo = Tramo::builder()
        .join_gap(Duration::from_secs(86_400))
        .build()
        .unwrap();
    let report = tramo.admissions().episodes(ward_episodes()).run().await.unwrap();
    let counts: Vec<usize> = report.admissions.iter().map(|a| a.num_episodes).collect();
    assert_eq!(counts, vec![3, 1, 1]);
    assert_eq!(report.admissions[0].end, at(6, 10));
    assert_eq!(report.admissions[0].last_episode_id, "12");
}

#[tokio::test]
async fn indices_follow_input_order_not_time() {
    let tramo = Tramo::builder().build().unwrap();
    let report = tramo
        .admissions()
        .episode(episode("7", "late", at(10, 0), at(12, 0)))
        .episode(episode("7", "early", at(3, 0), at(11, 0)))
        .run()
        .await
        .unwrap();

    assert_eq!(report.admissions.len(), 1);
    let adm = &report.admissions[0];
    assert_eq!((adm.start, adm.end), (at(3, 0), at(12, 0)));
    assert_eq!(adm.first_episode_id, "early");
    assert_eq!(adm.first_episode_idx, 1);
    assert_eq!(adm.last_episode_idx, 0);
    assert_eq!(adm.all_episode_indices, vec![1, 0]);
    assert_eq!(report.stats.to_map().get("overlap"), Some(&1));
}

#[tokio::test]
async fn nested_episode_counts_as_subset() {
    let tramo = Tramo::builder().build().unwrap();
    let report = tramo
        .admissions()
        .episodes(vec![
            episode("a", "outer", at(1, 13), at(4, 10)),
            episode("a", "inner", at(2, 13), at(3, 10)),
            episode("b", "x", at(1, 0), at(2, 0)),
            episode("b", "y", at(1, 12), at(3, 0)),
        ])
        .run()
        .await
        .unwrap();

    assert_eq!(report.admissions[0].last_episode_id, "outer");
    assert_eq!(report.stats, MergeStats { subset: 1, overlap: 1 });
}

#[tokio::test]
async fn broken_entity_becomes_a_warning() {
    let tramo = Tramo::builder().build().unwrap();
    let mut episodes = ward_episodes();
    episodes.push(episode("3", "bad", at(9, 0), at(8, 0)));
    let report = tramo.admissions().episodes(episodes).run().await.unwrap();

    assert_eq!(report.admissions.len(), 4);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        TramoError::Entity { entity, msg } => {
            assert_eq!(entity, "3");
            assert!(msg.starts_with("invalid argument"), "{msg}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn no_episodes_is_rejected() {
    let tramo = Tramo::builder().build().unwrap();
    let err = tramo.admissions().run().await.unwrap_err();
    assert!(matches!(err, TramoError::InvalidArg(_)));
}
