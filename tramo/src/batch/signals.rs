use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tramo_core::{
    DuplicatePolicy, EntityPeriods, MarginConfig, SignalReport, TramoError,
    compute_periods_with_margins, dates_to_ordinals_with_values,
};

use super::util::{join_with_deadline, relabel_timeout, run_blocking};
use crate::Tramo;

/// Builder to run period detection for many entities at once.
pub struct SignalsBuilder<'a> {
    pub(crate) tramo: &'a Tramo,
    pub(crate) samples: BTreeMap<String, Vec<(DateTime<Utc>, bool)>>,
}

impl<'a> SignalsBuilder<'a> {
    /// Create a new builder bound to a `Tramo` instance.
    #[must_use]
    pub const fn new(tramo: &'a Tramo) -> Self {
        Self {
            tramo,
            samples: BTreeMap::new(),
        }
    }

    /// Add timestamped samples for `entity`.
    ///
    /// Calling this again for the same entity appends to its samples. Samples
    /// need not be sorted.
    #[must_use]
    pub fn samples(mut self, entity: impl Into<String>, samples: Vec<(DateTime<Utc>, bool)>) -> Self {
        self.samples.entry(entity.into()).or_default().extend(samples);
        self
    }

    /// Add a single sample for `entity`.
    #[must_use]
    pub fn sample(mut self, entity: impl Into<String>, at: DateTime<Utc>, value: bool) -> Self {
        self.samples
            .entry(entity.into())
            .or_default()
            .push((at, value));
        self
    }

    /// Detect periods for every entity.
    ///
    /// Behavior:
    /// - Per entity, samples are sorted by time, mapped to day ordinals from
    ///   the entity's earliest day, gap-filled, detected, trimmed by the
    ///   initial margin and joined within the cooloff.
    /// - Entries come back ordered by entity key.
    /// - A failing entity becomes a warning tagged with its key; the rest of
    ///   the batch still completes.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no samples were added, or `RequestTimeout` if the
    /// configured deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tramo::batch::signals::run",
            skip(self),
            fields(entities = self.samples.len()),
        )
    )]
    pub async fn run(self) -> Result<SignalReport, TramoError> {
        if self.samples.is_empty() {
            return Err(TramoError::InvalidArg(
                "no samples specified for period detection".into(),
            ));
        }

        let cfg = &self.tramo.cfg;
        let duplicates = cfg.duplicates;
        let margins = cfg.margins;
        let tasks = self.samples.into_iter().map(|(entity, samples)| async move {
            let key = entity.clone();
            let res = run_blocking(&key, move || {
                entity_periods(entity, samples, duplicates, &margins)
            })
            .await;
            (key, res)
        });

        let joined = join_with_deadline(tasks, cfg.max_concurrency, cfg.request_timeout)
            .await
            .map_err(|e| relabel_timeout(e, "signals"))?;

        let mut report = SignalReport::default();
        for (_entity, result) in joined {
            match result {
                Ok(entry) => report.entries.push(entry),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(entity = %_entity, error = %e, "period detection failed");
                    report.warnings.push(e);
                }
            }
        }
        Ok(report)
    }
}

fn entity_periods(
    entity: String,
    mut samples: Vec<(DateTime<Utc>, bool)>,
    duplicates: DuplicatePolicy,
    margins: &MarginConfig,
) -> Result<EntityPeriods, TramoError> {
    // Stable: same-instant samples keep their insertion order for the duplicate policy.
    samples.sort_by_key(|(at, _)| *at);
    let (dates, values): (Vec<DateTime<Utc>>, Vec<bool>) = samples.into_iter().unzip();
    let series = dates_to_ordinals_with_values(&dates, &values, duplicates)?;
    let periods = compute_periods_with_margins(&series.ordinals, &series.values, margins)?;
    Ok(EntityPeriods {
        entity,
        origin: series.origin,
        periods,
    })
}

impl Tramo {
    /// Begin building a per-entity period detection batch.
    ///
    /// Typical usage: chain `samples` per entity then call `run()`.
    #[must_use]
    pub const fn signals(&'_ self) -> SignalsBuilder<'_> {
        SignalsBuilder::new(self)
    }
}
