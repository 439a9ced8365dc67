use std::collections::BTreeMap;

use chrono::TimeDelta;
use tramo_core::{
    Admission, AdmissionReport, Episode, Interval, MergeStats, TramoError, join_within,
    merge_intervals,
};

use super::util::{join_with_deadline, relabel_timeout, run_blocking};
use crate::Tramo;

/// Episodes of one entity tagged with their position in the caller's input.
type IndexedEpisodes = Vec<(usize, Episode)>;

/// Builder to merge many entities' episodes into admissions.
pub struct AdmissionsBuilder<'a> {
    pub(crate) tramo: &'a Tramo,
    pub(crate) episodes: Vec<Episode>,
}

impl<'a> AdmissionsBuilder<'a> {
    /// Create a new builder bound to a `Tramo` instance.
    #[must_use]
    pub const fn new(tramo: &'a Tramo) -> Self {
        Self {
            tramo,
            episodes: Vec::new(),
        }
    }

    /// Append episodes. Reported indices refer to the order episodes were added.
    #[must_use]
    pub fn episodes(mut self, episodes: Vec<Episode>) -> Self {
        self.episodes.extend(episodes);
        self
    }

    /// Append a single episode.
    #[must_use]
    pub fn episode(mut self, episode: Episode) -> Self {
        self.episodes.push(episode);
        self
    }

    /// Merge each entity's episodes into admissions.
    ///
    /// Behavior:
    /// - Episodes are grouped by entity and sorted by start (ties keep input
    ///   order), then merged: overlapping and nested episodes always merge,
    ///   disjoint ones merge when the gap is within `join_gap` (touching only
    ///   when unset).
    /// - Admissions are ordered by entity then start and numbered from 1.
    /// - Merge stats are summed across entities.
    /// - A failing entity (e.g. an episode ending before it starts) becomes a
    ///   warning tagged with its key.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no episodes were added, or `RequestTimeout` if the
    /// configured deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tramo::batch::admissions::run",
            skip(self),
            fields(episodes = self.episodes.len()),
        )
    )]
    pub async fn run(self) -> Result<AdmissionReport, TramoError> {
        if self.episodes.is_empty() {
            return Err(TramoError::InvalidArg(
                "no episodes specified for admission merge".into(),
            ));
        }
        let cfg = &self.tramo.cfg;
        // A zero gap only admits touching episodes.
        let max_gap = match cfg.join_gap {
            Some(gap) => TimeDelta::from_std(gap)
                .map_err(|e| TramoError::InvalidArg(format!("join_gap out of range: {e}")))?,
            None => TimeDelta::zero(),
        };

        let mut groups: BTreeMap<String, IndexedEpisodes> = BTreeMap::new();
        for (idx, ep) in self.episodes.into_iter().enumerate() {
            groups.entry(ep.entity.clone()).or_default().push((idx, ep));
        }

        let tasks = groups.into_iter().map(|(entity, episodes)| async move {
            let res = run_blocking(&entity, move || merge_entity(episodes, max_gap)).await;
            (entity, res)
        });
        let joined = join_with_deadline(tasks, cfg.max_concurrency, cfg.request_timeout)
            .await
            .map_err(|e| relabel_timeout(e, "admissions"))?;

        let mut report = AdmissionReport::default();
        for (_entity, result) in joined {
            match result {
                Ok((admissions, stats)) => {
                    report.stats = report.stats.combine(stats);
                    for mut adm in admissions {
                        adm.admission_id = report.admissions.len() + 1;
                        report.admissions.push(adm);
                    }
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(entity = %_entity, error = %e, "admission merge failed");
                    report.warnings.push(e);
                }
            }
        }
        Ok(report)
    }
}

/// Merge one entity's episodes. `admission_id` is left at 0 for the caller to assign.
fn merge_entity(
    mut episodes: IndexedEpisodes,
    max_gap: TimeDelta,
) -> Result<(Vec<Admission>, MergeStats), TramoError> {
    episodes.sort_by_key(|(_, ep)| ep.start);
    let merged = merge_intervals(
        episodes.iter().map(|(_, ep)| Interval::new(ep.start, ep.end)),
        join_within(max_gap),
    )?;

    let admissions = merged
        .merged
        .iter()
        .map(|m| {
            let pick = |pos: usize| &episodes[pos];
            let (first_idx, first) = pick(m.first);
            let (last_idx, last) = pick(m.last);
            Admission {
                entity: first.entity.clone(),
                admission_id: 0,
                start: m.interval.start,
                end: m.interval.end,
                num_episodes: m.len(),
                first_episode_id: first.id.clone(),
                last_episode_id: last.id.clone(),
                all_episode_ids: m.members.iter().map(|&p| pick(p).1.id.clone()).collect(),
                first_episode_idx: *first_idx,
                last_episode_idx: *last_idx,
                all_episode_indices: m.members.iter().map(|&p| pick(p).0).collect(),
            }
        })
        .collect();
    Ok((admissions, merged.stats))
}

impl Tramo {
    /// Begin building an episode→admission merge batch.
    #[must_use]
    pub const fn admissions(&'_ self) -> AdmissionsBuilder<'_> {
        AdmissionsBuilder::new(self)
    }
}
