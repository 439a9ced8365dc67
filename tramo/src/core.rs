use std::time::Duration;

use tramo_core::{DuplicatePolicy, FillMode, MarginConfig, Ordinal, TramoConfig, TramoError};

/// Orchestrator that fans per-entity computations out over Tokio's blocking pool.
pub struct Tramo {
    pub(crate) cfg: TramoConfig,
}

/// Builder for constructing a `Tramo` orchestrator with custom configuration.
pub struct TramoBuilder {
    cfg: TramoConfig,
}

impl Default for TramoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TramoBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Defaults: `true_between` gap filling, no initial margin, no cooloff,
    /// first sample wins on a repeated day, touching episodes join, eight
    /// entities in flight and no batch deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: TramoConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: TramoConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select how missing days between two samples are filled.
    #[must_use]
    pub const fn fill_mode(mut self, mode: FillMode) -> Self {
        self.cfg.margins.fill_mode = mode;
        self
    }

    /// Drop a leading period whose gap from the first sample is below `days`.
    #[must_use]
    pub const fn initial_margin(mut self, days: Ordinal) -> Self {
        self.cfg.margins.initial_margin = days;
        self
    }

    /// Join periods separated by at most `days` days. Zero disables joining.
    #[must_use]
    pub const fn cooloff(mut self, days: Ordinal) -> Self {
        self.cfg.margins.cooloff = days;
        self
    }

    /// Replace the margin settings in one go.
    #[must_use]
    pub const fn margins(mut self, margins: MarginConfig) -> Self {
        self.cfg.margins = margins;
        self
    }

    /// Choose which sample survives when several fall on the same day.
    ///
    /// `KeepAll` leaves repeated days in place; detection then rejects the
    /// entity and it is reported as a warning.
    #[must_use]
    pub const fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.cfg.duplicates = policy;
        self
    }

    /// Join episodes whose gap is at most `gap` into the same admission.
    #[must_use]
    pub const fn join_gap(mut self, gap: Duration) -> Self {
        self.cfg.join_gap = Some(gap);
        self
    }

    /// Cap the number of entities computed at the same time.
    #[must_use]
    pub const fn max_concurrency(mut self, n: usize) -> Self {
        self.cfg.max_concurrency = n;
        self
    }

    /// Set an overall deadline for each batch.
    ///
    /// When exceeded, the batch returns a `RequestTimeout` error for its capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Tramo` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `max_concurrency` is zero, a margin or cooloff is
    /// negative, or `join_gap` does not fit a signed duration.
    pub fn build(self) -> Result<Tramo, TramoError> {
        if self.cfg.max_concurrency == 0 {
            return Err(TramoError::InvalidArg(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.cfg.margins.initial_margin < 0 || self.cfg.margins.cooloff < 0 {
            return Err(TramoError::InvalidArg(
                "initial_margin and cooloff must not be negative".to_string(),
            ));
        }
        if let Some(gap) = self.cfg.join_gap {
            chrono::TimeDelta::from_std(gap)
                .map_err(|e| TramoError::InvalidArg(format!("join_gap out of range: {e}")))?;
        }
        Ok(Tramo { cfg: self.cfg })
    }
}

/// Tag a per-entity failure with its entity key.
pub(crate) fn tag_err(entity: &str, e: TramoError) -> TramoError {
    match e {
        e @ (TramoError::Entity { .. } | TramoError::RequestTimeout { .. }) => e,
        other => TramoError::entity(entity, other.to_string()),
    }
}

/// Await `fut`, bounded by an optional deadline.
pub(crate) async fn with_request_deadline<F>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<F::Output, TramoError>
where
    F: core::future::Future,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| TramoError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Tramo {
    /// Start building a new `Tramo` instance.
    ///
    /// ```
    /// use std::time::Duration;
    /// use tramo::{FillMode, Tramo};
    ///
    /// let tramo = Tramo::builder()
    ///     .fill_mode(FillMode::TrueBetweenThreshold { threshold: 3 })
    ///     .cooloff(2)
    ///     .join_gap(Duration::from_secs(86_400))
    ///     .max_concurrency(4)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(tramo.config().margins.cooloff, 2);
    /// ```
    #[must_use]
    pub fn builder() -> TramoBuilder {
        TramoBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TramoConfig {
        &self.cfg
    }
}
