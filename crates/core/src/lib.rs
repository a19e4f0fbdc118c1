//! jobarchive-core: read-model types for archived job execution graphs.
//!
//! An archived execution graph is the immutable snapshot of a job's final
//! execution state, kept for monitoring and REST consumers after the live
//! graph has been discarded.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root:
//!
//! - [`ArchivedExecutionGraph`] -- the snapshot itself, built from
//!   [`ArchivedExecutionGraphParts`]
//! - [`ArchivedExecutionJobVertex`] -- per-vertex summary
//! - [`JobStatus`], [`JobType`], [`ExecutionState`], [`TernaryBoolean`]
//! - [`JobId`], [`JobVertexId`]
//! - [`Plan`], accumulator types, [`ArchivedExecutionConfig`],
//!   [`CheckpointStatsSnapshot`]
//! - [`ArchiveError`] -- error type

pub mod accumulator;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod graph;
pub mod id;
pub mod plan;
pub mod status;
pub mod vertex;

// ── Convenience re-exports ───────────────────────────────────────────

pub use accumulator::{OptionalFailure, SerializedValue, StringifiedAccumulatorResult};
pub use checkpoint::{CheckpointStatsCounts, CheckpointStatsSnapshot};
pub use config::ArchivedExecutionConfig;
pub use error::ArchiveError;
pub use graph::{ArchivedExecutionGraph, ArchivedExecutionGraphParts, ErrorInfo};
pub use id::{JobId, JobVertexId};
pub use plan::{Plan, PlanNode, PlanNodeInput};
pub use status::{ExecutionState, JobStatus, JobType, TernaryBoolean};
pub use vertex::ArchivedExecutionJobVertex;

/// Serialized accumulator value as carried by the archived graph.
pub type SerializedAccumulator = SerializedValue<OptionalFailure<serde_json::Value>>;
