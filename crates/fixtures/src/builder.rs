//! Fluent builder for archived execution graph fixtures.

use std::collections::BTreeMap;

use jobarchive_core::{
    ArchivedExecutionConfig, ArchivedExecutionGraph, ArchivedExecutionJobVertex,
    CheckpointStatsSnapshot, ErrorInfo, JobId, JobStatus, JobVertexId, Plan,
    SerializedAccumulator, StringifiedAccumulatorResult,
};
use rand::Rng;

use crate::{build_archived_graph, FixtureError, GraphOptions};

/// Accumulates the fields a test cares about and builds an
/// [`ArchivedExecutionGraph`] with consistent defaults for the rest.
///
/// Setters never validate; all checks happen when building. Building takes
/// `&self`, so the same builder can be built again, before or after further
/// changes.
#[derive(Debug, Clone, Default)]
pub struct ArchivedExecutionGraphBuilder {
    options: GraphOptions,
}

impl ArchivedExecutionGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of options.
    pub fn from_options(options: GraphOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    pub fn job_id(mut self, job_id: JobId) -> Self {
        self.options.job_id = Some(job_id);
        self
    }

    pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
        self.options.job_name = Some(job_name.into());
        self
    }

    pub fn tasks(mut self, tasks: BTreeMap<JobVertexId, ArchivedExecutionJobVertex>) -> Self {
        self.options.tasks = Some(tasks);
        self
    }

    /// Set the deployment order explicitly. Tests that depend on vertex
    /// order should always do this.
    pub fn vertices_in_creation_order(
        mut self,
        vertices: Vec<ArchivedExecutionJobVertex>,
    ) -> Self {
        self.options.vertices_in_creation_order = Some(vertices);
        self
    }

    /// One timestamp per [`JobStatus`], indexed by ordinal. The length is
    /// checked when building.
    pub fn state_timestamps(mut self, timestamps: impl Into<Vec<i64>>) -> Self {
        self.options.state_timestamps = Some(timestamps.into());
        self
    }

    pub fn state(mut self, state: JobStatus) -> Self {
        self.options.state = Some(state);
        self
    }

    pub fn failure_cause(mut self, failure_cause: ErrorInfo) -> Self {
        self.options.failure_cause = Some(failure_cause);
        self
    }

    pub fn plan(mut self, plan: Plan) -> Self {
        self.options.plan = Some(plan);
        self
    }

    pub fn stream_graph_json(mut self, json: impl Into<String>) -> Self {
        self.options.stream_graph_json = Some(json.into());
        self
    }

    pub fn archived_user_accumulators(
        mut self,
        accumulators: Vec<StringifiedAccumulatorResult>,
    ) -> Self {
        self.options.archived_user_accumulators = Some(accumulators);
        self
    }

    pub fn archived_execution_config(mut self, config: ArchivedExecutionConfig) -> Self {
        self.options.archived_execution_config = Some(config);
        self
    }

    pub fn stoppable(mut self, stoppable: bool) -> Self {
        self.options.is_stoppable = Some(stoppable);
        self
    }

    pub fn serialized_user_accumulators(
        mut self,
        accumulators: BTreeMap<String, SerializedAccumulator>,
    ) -> Self {
        self.options.serialized_user_accumulators = Some(accumulators);
        self
    }

    pub fn checkpoint_stats_snapshot(mut self, snapshot: CheckpointStatsSnapshot) -> Self {
        self.options.checkpoint_stats_snapshot = Some(snapshot);
        self
    }

    pub fn pending_operator_count(mut self, count: i32) -> Self {
        self.options.pending_operator_count = Some(count);
        self
    }

    /// Build with defaults drawn from `rng`.
    pub fn try_build_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<ArchivedExecutionGraph, FixtureError> {
        build_archived_graph(self.options.clone(), rng)
    }

    /// Build with defaults drawn from the thread-local rng.
    pub fn try_build(&self) -> Result<ArchivedExecutionGraph, FixtureError> {
        self.try_build_with_rng(&mut rand::thread_rng())
    }

    /// Build the fixture.
    ///
    /// # Panics
    ///
    /// Panics if the explicit state timestamps do not hold exactly one
    /// entry per [`JobStatus`]. Use [`Self::try_build`] to inspect the error
    /// instead.
    pub fn build(&self) -> ArchivedExecutionGraph {
        match self.try_build() {
            Ok(graph) => graph,
            Err(err) => panic!("invalid archived execution graph fixture: {err}"),
        }
    }
}
