use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Archived copy of the execution configuration a job ran with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedExecutionConfig {
    /// Data exchange mode (e.g. "PIPELINED").
    pub execution_mode: String,
    pub restart_strategy_description: String,
    pub max_parallelism: u32,
    pub parallelism: u32,
    pub object_reuse_enabled: bool,
    /// Interval of periodic state materialization, in milliseconds. Zero
    /// when disabled.
    pub periodic_materialize_interval_ms: i64,
    pub global_job_parameters: BTreeMap<String, String>,
}
