//! The archived execution graph: an immutable snapshot of a job's final
//! execution state.
//!
//! An [`ArchivedExecutionGraph`] is assembled once from an
//! [`ArchivedExecutionGraphParts`] value and is read-only from then on.
//! Fields are private; accessors hand out shared references only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    ArchivedExecutionConfig, ArchivedExecutionJobVertex, CheckpointStatsSnapshot, JobId,
    JobStatus, JobType, JobVertexId, Plan, SerializedAccumulator, StringifiedAccumulatorResult,
    TernaryBoolean,
};

/// The cause of a job failure together with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Rendered exception, including its message.
    pub exception: String,
    /// Epoch milliseconds at which the failure occurred.
    pub timestamp: i64,
}

impl ErrorInfo {
    pub fn new(exception: impl Into<String>, timestamp: i64) -> Self {
        Self {
            exception: exception.into(),
            timestamp,
        }
    }
}

/// Every field of an [`ArchivedExecutionGraph`], supplied at once.
///
/// `state_timestamps` is indexed by [`JobStatus::ordinal`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedExecutionGraphParts {
    pub job_id: JobId,
    pub job_name: String,
    pub tasks: BTreeMap<JobVertexId, ArchivedExecutionJobVertex>,
    pub vertices_in_creation_order: Vec<ArchivedExecutionJobVertex>,
    pub state_timestamps: [i64; JobStatus::COUNT],
    pub state: JobStatus,
    pub job_type: JobType,
    pub failure_cause: Option<ErrorInfo>,
    pub plan: Plan,
    pub archived_user_accumulators: Vec<StringifiedAccumulatorResult>,
    pub serialized_user_accumulators: BTreeMap<String, SerializedAccumulator>,
    pub archived_execution_config: ArchivedExecutionConfig,
    pub is_stoppable: bool,
    pub checkpoint_stats_snapshot: Option<CheckpointStatsSnapshot>,
    pub state_backend_name: Option<String>,
    pub checkpoint_storage_name: Option<String>,
    pub state_changelog_enabled: TernaryBoolean,
    pub changelog_storage_name: Option<String>,
    pub stream_graph_json: Option<String>,
    pub pending_operator_count: i32,
}

/// Immutable read-model of a job's execution graph after it reached a
/// final state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedExecutionGraph {
    job_id: JobId,
    job_name: String,
    tasks: BTreeMap<JobVertexId, ArchivedExecutionJobVertex>,
    vertices_in_creation_order: Vec<ArchivedExecutionJobVertex>,
    state_timestamps: [i64; JobStatus::COUNT],
    state: JobStatus,
    job_type: JobType,
    failure_cause: Option<ErrorInfo>,
    plan: Plan,
    archived_user_accumulators: Vec<StringifiedAccumulatorResult>,
    serialized_user_accumulators: BTreeMap<String, SerializedAccumulator>,
    archived_execution_config: ArchivedExecutionConfig,
    is_stoppable: bool,
    checkpoint_stats_snapshot: Option<CheckpointStatsSnapshot>,
    state_backend_name: Option<String>,
    checkpoint_storage_name: Option<String>,
    state_changelog_enabled: TernaryBoolean,
    changelog_storage_name: Option<String>,
    stream_graph_json: Option<String>,
    pending_operator_count: i32,
}

impl From<ArchivedExecutionGraphParts> for ArchivedExecutionGraph {
    fn from(parts: ArchivedExecutionGraphParts) -> Self {
        let ArchivedExecutionGraphParts {
            job_id,
            job_name,
            tasks,
            vertices_in_creation_order,
            state_timestamps,
            state,
            job_type,
            failure_cause,
            plan,
            archived_user_accumulators,
            serialized_user_accumulators,
            archived_execution_config,
            is_stoppable,
            checkpoint_stats_snapshot,
            state_backend_name,
            checkpoint_storage_name,
            state_changelog_enabled,
            changelog_storage_name,
            stream_graph_json,
            pending_operator_count,
        } = parts;
        Self {
            job_id,
            job_name,
            tasks,
            vertices_in_creation_order,
            state_timestamps,
            state,
            job_type,
            failure_cause,
            plan,
            archived_user_accumulators,
            serialized_user_accumulators,
            archived_execution_config,
            is_stoppable,
            checkpoint_stats_snapshot,
            state_backend_name,
            checkpoint_storage_name,
            state_changelog_enabled,
            changelog_storage_name,
            stream_graph_json,
            pending_operator_count,
        }
    }
}

impl ArchivedExecutionGraph {
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// All vertices, keyed by id.
    pub fn tasks(&self) -> &BTreeMap<JobVertexId, ArchivedExecutionJobVertex> {
        &self.tasks
    }

    pub fn job_vertex(&self, id: &JobVertexId) -> Option<&ArchivedExecutionJobVertex> {
        self.tasks.get(id)
    }

    /// Vertices in the order they were created.
    pub fn vertices_topologically(&self) -> &[ArchivedExecutionJobVertex] {
        &self.vertices_in_creation_order
    }

    pub fn state_timestamps(&self) -> &[i64; JobStatus::COUNT] {
        &self.state_timestamps
    }

    /// Timestamp at which the job entered `status`, zero if it never did.
    pub fn status_timestamp(&self, status: JobStatus) -> i64 {
        self.state_timestamps[status.ordinal()]
    }

    pub fn state(&self) -> JobStatus {
        self.state
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn failure_info(&self) -> Option<&ErrorInfo> {
        self.failure_cause.as_ref()
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn archived_user_accumulators(&self) -> &[StringifiedAccumulatorResult] {
        &self.archived_user_accumulators
    }

    pub fn serialized_user_accumulators(&self) -> &BTreeMap<String, SerializedAccumulator> {
        &self.serialized_user_accumulators
    }

    pub fn archived_execution_config(&self) -> &ArchivedExecutionConfig {
        &self.archived_execution_config
    }

    pub fn is_stoppable(&self) -> bool {
        self.is_stoppable
    }

    pub fn checkpoint_stats_snapshot(&self) -> Option<&CheckpointStatsSnapshot> {
        self.checkpoint_stats_snapshot.as_ref()
    }

    pub fn state_backend_name(&self) -> Option<&str> {
        self.state_backend_name.as_deref()
    }

    pub fn checkpoint_storage_name(&self) -> Option<&str> {
        self.checkpoint_storage_name.as_deref()
    }

    pub fn state_changelog_enabled(&self) -> TernaryBoolean {
        self.state_changelog_enabled
    }

    pub fn changelog_storage_name(&self) -> Option<&str> {
        self.changelog_storage_name.as_deref()
    }

    pub fn stream_graph_json(&self) -> Option<&str> {
        self.stream_graph_json.as_deref()
    }

    pub fn pending_operator_count(&self) -> i32 {
        self.pending_operator_count
    }

    /// Always true: an archived graph no longer backs a running job.
    pub fn is_archived(&self) -> bool {
        true
    }
}
