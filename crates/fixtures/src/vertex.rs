//! Vertex and plan fixtures.
//!
//! Small helpers for populating the task map, creation order, and plan of
//! an archived graph without spelling out every vertex field.

use std::collections::BTreeMap;

use jobarchive_core::{
    ArchivedExecutionJobVertex, ExecutionState, JobId, JobVertexId, Plan, PlanNode, PlanNodeInput,
};

/// Max parallelism given to fixture vertices.
pub const DEFAULT_MAX_PARALLELISM: u32 = 128;

/// A finished vertex with a fresh random id and no accumulators.
pub fn vertex(name: &str, parallelism: u32) -> ArchivedExecutionJobVertex {
    ArchivedExecutionJobVertex {
        job_vertex_id: JobVertexId::random(),
        name: name.to_string(),
        parallelism,
        max_parallelism: DEFAULT_MAX_PARALLELISM,
        aggregate_state: ExecutionState::Finished,
        archived_user_accumulators: Vec::new(),
    }
}

/// Key vertices by their id. A later vertex with a duplicate id replaces the
/// earlier one.
pub fn tasks_from<I>(vertices: I) -> BTreeMap<JobVertexId, ArchivedExecutionJobVertex>
where
    I: IntoIterator<Item = ArchivedExecutionJobVertex>,
{
    vertices
        .into_iter()
        .map(|v| (v.job_vertex_id, v))
        .collect()
}

/// A plan with one node per vertex, in the given order, each node reading
/// from its predecessor.
pub fn plan_for(job_id: JobId, job_name: &str, vertices: &[ArchivedExecutionJobVertex]) -> Plan {
    let mut nodes = Vec::with_capacity(vertices.len());
    let mut upstream: Option<String> = None;
    for v in vertices {
        let id = v.job_vertex_id.to_string();
        let inputs = upstream
            .take()
            .map(|up| PlanNodeInput {
                num: 0,
                id: up,
                ship_strategy: "FORWARD".to_string(),
                exchange: "pipelined".to_string(),
            })
            .into_iter()
            .collect();
        nodes.push(PlanNode {
            id: id.clone(),
            parallelism: v.parallelism,
            operator: String::new(),
            operator_strategy: String::new(),
            description: v.name.clone(),
            inputs,
        });
        upstream = Some(id);
    }
    Plan::new(job_id.to_string(), job_name, "", nodes)
}
