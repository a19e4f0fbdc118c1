use serde::{Deserialize, Serialize};

/// Summary of a job's checkpoint history at the time it was archived.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckpointStatsSnapshot {
    pub counts: CheckpointStatsCounts,
    /// Id of the most recent completed checkpoint, if any completed.
    pub latest_completed_checkpoint_id: Option<u64>,
}

/// Checkpoint counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckpointStatsCounts {
    pub restored: u64,
    pub total: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub failed: u64,
}
