//! Test fixtures for archived execution graphs.
//!
//! Provides [`ArchivedExecutionGraphBuilder`] for constructing a complete
//! [`ArchivedExecutionGraph`](jobarchive_core::ArchivedExecutionGraph) from
//! only the fields a test cares about. Everything left unset is filled with
//! a default that keeps the snapshot structurally well-formed.
//!
//! ```
//! use jobarchive_core::JobStatus;
//! use jobarchive_fixtures::ArchivedExecutionGraphBuilder;
//!
//! let graph = ArchivedExecutionGraphBuilder::new()
//!     .job_name("wordcount")
//!     .state(JobStatus::Failed)
//!     .build();
//! assert_eq!(graph.plan().name, "wordcount");
//! ```
//!
//! For reproducible defaults, pass a seeded rng to
//! [`ArchivedExecutionGraphBuilder::try_build_with_rng`] or call
//! [`build_archived_graph`] directly with a [`GraphOptions`] value.

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod vertex;

pub use builder::ArchivedExecutionGraphBuilder;
pub use config::ArchivedExecutionConfigBuilder;
pub use error::FixtureError;
pub use graph::{build_archived_graph, GraphOptions};
pub use vertex::{plan_for, tasks_from, vertex};
