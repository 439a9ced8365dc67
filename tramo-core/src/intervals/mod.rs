//! Interval utilities shared by the orchestrator and collaborators.
//!
//! Modules include:
//! - `merge`: merge start-sorted interval lists with subset/overlap/join tie-breaks
//! - `lookup`: select keyed intervals by overlap, containment or date
/// Keyed interval selection.
pub mod lookup;
/// Sorted interval merging.
pub mod merge;
