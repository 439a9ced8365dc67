use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tramo workspace.
///
/// This wraps input validation failures, unknown gap-fill modes, period-edit
/// index errors, lookup misses, entity-tagged failures from batch fan-out and
/// request deadlines.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TramoError {
    /// There is no data to derive a minimum or an origin from.
    #[error("empty input: {what}")]
    EmptyInput {
        /// What was empty, e.g. "timestamps".
        what: String,
    },

    /// A gap-fill mode name did not match any known mode.
    #[error("unknown fill mode: {0}")]
    InvalidMode(String),

    /// A period-edit index fell outside the valid range.
    #[error("period index out of range")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of periods in the edited set.
        periods: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A lookup did not match anything.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing item, e.g. "interval containing 2021-03-30".
        what: String,
    },

    /// The computation for a single entity failed.
    #[error("{entity} failed: {msg}")]
    Entity {
        /// Entity key that failed.
        entity: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The overall batch exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl TramoError {
    /// Helper: build an `EmptyInput` error describing what was empty.
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::EmptyInput { what: what.into() }
    }

    /// Helper: build an `IndexOutOfRange` error.
    #[must_use]
    pub const fn index_out_of_range(index: usize, periods: usize) -> Self {
        Self::IndexOutOfRange { index, periods }
    }

    /// Helper: build an `Entity` error with the entity key and message.
    pub fn entity(entity: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Entity {
            entity: entity.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing item.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error indicates caller misuse rather than a
    /// per-entity or deadline condition.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::InvalidMode(_)
                | Self::IndexOutOfRange { .. }
                | Self::InvalidArg(_)
        )
    }
}
