use serde::{Deserialize, Serialize};

use crate::{ExecutionState, JobVertexId, StringifiedAccumulatorResult};

/// Immutable post-execution summary of one job vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedExecutionJobVertex {
    pub job_vertex_id: JobVertexId,
    pub name: String,
    pub parallelism: u32,
    pub max_parallelism: u32,
    /// State aggregated over all subtasks of the vertex.
    pub aggregate_state: ExecutionState,
    pub archived_user_accumulators: Vec<StringifiedAccumulatorResult>,
}
