//! Per-entity batches.
//!
//! Each batch groups its input by entity key, computes every group on Tokio's
//! blocking pool with bounded concurrency, and collects per-entity failures as
//! warnings instead of failing the whole batch.
pub mod admissions;
pub mod signals;
pub mod util;
