//! Default resolution for archived execution graph fixtures.
//!
//! [`GraphOptions`] holds every field a test may pin down; anything left as
//! `None` is resolved by [`build_archived_graph`]. Randomness is drawn only
//! from the rng passed in, so a seeded rng gives reproducible defaults.

use std::collections::BTreeMap;

use jobarchive_core::{
    ArchivedExecutionConfig, ArchivedExecutionGraph, ArchivedExecutionGraphParts,
    ArchivedExecutionJobVertex, CheckpointStatsSnapshot, ErrorInfo, JobId, JobStatus, JobType,
    JobVertexId, Plan, SerializedAccumulator, StringifiedAccumulatorResult, TernaryBoolean,
};
use rand::Rng;

use crate::{ArchivedExecutionConfigBuilder, FixtureError};

/// Placeholder state backend name carried by every fixture.
pub const STATE_BACKEND_NAME: &str = "stateBackendName";
/// Placeholder checkpoint storage name carried by every fixture.
pub const CHECKPOINT_STORAGE_NAME: &str = "checkpointStorageName";
/// Placeholder changelog storage name carried by every fixture.
pub const CHANGELOG_STORAGE_NAME: &str = "changelogStorageName";

/// Prefix of generated job names; a random `i32` follows it.
pub const GENERATED_JOB_NAME_PREFIX: &str = "job_";

/// Fields of an archived graph that a test may set explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphOptions {
    pub job_id: Option<JobId>,
    pub job_name: Option<String>,
    pub tasks: Option<BTreeMap<JobVertexId, ArchivedExecutionJobVertex>>,
    /// Deployment order. When unset, the values of `tasks` are used in
    /// vertex-id order, which says nothing about real creation order.
    pub vertices_in_creation_order: Option<Vec<ArchivedExecutionJobVertex>>,
    /// One timestamp per [`JobStatus`], indexed by ordinal.
    pub state_timestamps: Option<Vec<i64>>,
    pub state: Option<JobStatus>,
    pub failure_cause: Option<ErrorInfo>,
    pub plan: Option<Plan>,
    pub stream_graph_json: Option<String>,
    pub archived_user_accumulators: Option<Vec<StringifiedAccumulatorResult>>,
    pub archived_execution_config: Option<ArchivedExecutionConfig>,
    pub is_stoppable: Option<bool>,
    pub serialized_user_accumulators: Option<BTreeMap<String, SerializedAccumulator>>,
    pub checkpoint_stats_snapshot: Option<CheckpointStatsSnapshot>,
    pub pending_operator_count: Option<i32>,
}

impl GraphOptions {
    /// Names of the fields that [`build_archived_graph`] will fill with a
    /// default. Pass-through fields are not listed.
    pub fn defaulted_fields(&self) -> Vec<&'static str> {
        [
            ("job_id", self.job_id.is_none()),
            ("job_name", self.job_name.is_none()),
            ("tasks", self.tasks.is_none()),
            (
                "vertices_in_creation_order",
                self.vertices_in_creation_order.is_none(),
            ),
            ("state_timestamps", self.state_timestamps.is_none()),
            ("state", self.state.is_none()),
            ("plan", self.plan.is_none()),
            (
                "archived_user_accumulators",
                self.archived_user_accumulators.is_none(),
            ),
            (
                "serialized_user_accumulators",
                self.serialized_user_accumulators.is_none(),
            ),
            (
                "archived_execution_config",
                self.archived_execution_config.is_none(),
            ),
            ("is_stoppable", self.is_stoppable.is_none()),
            ("pending_operator_count", self.pending_operator_count.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, unset)| unset.then_some(name))
        .collect()
    }
}

/// Resolve every unset field of `options` and assemble the snapshot.
///
/// The job id and job name defaults are drawn from `rng`, in that order.
/// The default plan is derived from the resolved id and name.
///
/// # Errors
///
/// Returns [`FixtureError::StateTimestampsLength`] if `state_timestamps` is
/// set to a sequence whose length is not [`JobStatus::COUNT`]. The check
/// runs before any randomness is consumed.
pub fn build_archived_graph<R: Rng + ?Sized>(
    options: GraphOptions,
    rng: &mut R,
) -> Result<ArchivedExecutionGraph, FixtureError> {
    let state_timestamps = resolve_state_timestamps(options.state_timestamps.as_deref())?;
    let defaulted = options.defaulted_fields();

    let GraphOptions {
        job_id,
        job_name,
        tasks,
        vertices_in_creation_order,
        state_timestamps: _,
        state,
        failure_cause,
        plan,
        stream_graph_json,
        archived_user_accumulators,
        archived_execution_config,
        is_stoppable,
        serialized_user_accumulators,
        checkpoint_stats_snapshot,
        pending_operator_count,
    } = options;

    let job_id = job_id.unwrap_or_else(|| JobId::generate(rng));
    let job_name =
        job_name.unwrap_or_else(|| format!("{GENERATED_JOB_NAME_PREFIX}{}", rng.gen::<i32>()));
    let tasks = tasks.unwrap_or_default();
    let vertices_in_creation_order = match vertices_in_creation_order {
        Some(vertices) => vertices,
        None => {
            if tasks.len() > 1 {
                tracing::warn!(
                    job_id = %job_id,
                    vertices = tasks.len(),
                    "creation order derived from task map; vertices follow id order"
                );
            }
            tasks.values().cloned().collect()
        }
    };
    let plan =
        plan.unwrap_or_else(|| Plan::new(job_id.to_string(), job_name.clone(), "", Vec::new()));
    let archived_execution_config = archived_execution_config
        .unwrap_or_else(|| ArchivedExecutionConfigBuilder::new().build());

    tracing::debug!(
        job_id = %job_id,
        job_name = %job_name,
        ?defaulted,
        "built archived execution graph fixture"
    );

    Ok(ArchivedExecutionGraph::from(ArchivedExecutionGraphParts {
        job_id,
        job_name,
        tasks,
        vertices_in_creation_order,
        state_timestamps,
        state: state.unwrap_or(JobStatus::Finished),
        job_type: JobType::Streaming,
        failure_cause,
        plan,
        archived_user_accumulators: archived_user_accumulators.unwrap_or_default(),
        serialized_user_accumulators: serialized_user_accumulators.unwrap_or_default(),
        archived_execution_config,
        is_stoppable: is_stoppable.unwrap_or(false),
        checkpoint_stats_snapshot,
        state_backend_name: Some(STATE_BACKEND_NAME.to_string()),
        checkpoint_storage_name: Some(CHECKPOINT_STORAGE_NAME.to_string()),
        state_changelog_enabled: TernaryBoolean::Undefined,
        changelog_storage_name: Some(CHANGELOG_STORAGE_NAME.to_string()),
        stream_graph_json,
        pending_operator_count: pending_operator_count.unwrap_or(0),
    }))
}

fn resolve_state_timestamps(
    timestamps: Option<&[i64]>,
) -> Result<[i64; JobStatus::COUNT], FixtureError> {
    match timestamps {
        None => Ok([0; JobStatus::COUNT]),
        Some(ts) => ts
            .try_into()
            .map_err(|_| FixtureError::StateTimestampsLength {
                expected: JobStatus::COUNT,
                actual: ts.len(),
            }),
    }
}
