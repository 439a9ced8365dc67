//! Report envelopes produced by the orchestrator's per-entity batches.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TramoError;
use crate::interval::MergeStats;
use crate::period::PeriodSet;

/// Periods detected for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPeriods {
    /// Entity key (e.g. a patient id).
    pub entity: String,
    /// Calendar day that ordinal 0 refers to.
    pub origin: NaiveDate,
    /// Periods after gap filling, margin trimming and cooloff joins.
    pub periods: PeriodSet,
}

impl EntityPeriods {
    /// Calendar day of an ordinal in this entity's timeline.
    #[must_use]
    pub fn date_of(&self, ordinal: i64) -> Option<NaiveDate> {
        self.origin.checked_add_signed(chrono::TimeDelta::try_days(ordinal)?)
    }
}

/// Summary of a per-entity period detection batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignalReport {
    /// Successful entities, ordered by entity key.
    pub entries: Vec<EntityPeriods>,
    /// Non-fatal per-entity failures.
    pub warnings: Vec<TramoError>,
}

/// An input interval for one entity, such as a hospital episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Entity the episode belongs to.
    pub entity: String,
    /// Caller-assigned episode identifier.
    pub id: String,
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Inclusive end.
    pub end: DateTime<Utc>,
}

impl Episode {
    /// Construct an episode.
    pub fn new(
        entity: impl Into<String>,
        id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            entity: entity.into(),
            id: id.into(),
            start,
            end,
        }
    }
}

/// A merged run of episodes for one entity.
///
/// Episode indices refer to positions in the batch's input vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// Entity the admission belongs to.
    pub entity: String,
    /// Sequential id across the report starting at 1, in entity then
    /// chronological order.
    pub admission_id: usize,
    /// Start of the earliest episode.
    pub start: DateTime<Utc>,
    /// Furthest end reached by the merged episodes.
    pub end: DateTime<Utc>,
    /// Number of episodes merged.
    pub num_episodes: usize,
    /// Id of the chronologically first episode.
    pub first_episode_id: String,
    /// Id of the episode that determined `end`.
    pub last_episode_id: String,
    /// Ids of every merged episode, chronologically.
    pub all_episode_ids: Vec<String>,
    /// Input index of the first episode.
    pub first_episode_idx: usize,
    /// Input index of the episode that determined `end`.
    pub last_episode_idx: usize,
    /// Input indices of every merged episode, chronologically.
    pub all_episode_indices: Vec<usize>,
}

/// Summary of an episode→admission merge batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AdmissionReport {
    /// Admissions ordered by entity key, then start.
    pub admissions: Vec<Admission>,
    /// Merge counters summed over all entities.
    pub stats: MergeStats,
    /// Non-fatal per-entity failures.
    pub warnings: Vec<TramoError>,
}
