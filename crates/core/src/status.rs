//! Lifecycle enumerations: job status, job type, vertex execution state,
//! and the three-valued boolean used for optional feature flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a job.
///
/// Declaration order is significant: [`JobStatus::ordinal`] indexes the
/// per-status timestamp array of an archived graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Created,
    Running,
    Failing,
    Failed,
    Cancelling,
    Canceled,
    Finished,
    Restarting,
    Suspended,
    Reconciling,
}

impl JobStatus {
    /// Number of distinct job statuses.
    pub const COUNT: usize = 10;

    /// Every status, in declaration order.
    pub const ALL: [JobStatus; Self::COUNT] = [
        JobStatus::Created,
        JobStatus::Running,
        JobStatus::Failing,
        JobStatus::Failed,
        JobStatus::Cancelling,
        JobStatus::Canceled,
        JobStatus::Finished,
        JobStatus::Restarting,
        JobStatus::Suspended,
        JobStatus::Reconciling,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Finished, failed, or canceled: the job will not run again anywhere.
    pub fn is_globally_terminal_state(self) -> bool {
        matches!(
            self,
            JobStatus::Finished | JobStatus::Failed | JobStatus::Canceled
        )
    }

    /// Globally terminal, or suspended on this cluster.
    pub fn is_terminal_state(self) -> bool {
        self.is_globally_terminal_state() || self == JobStatus::Suspended
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Created => "CREATED",
            JobStatus::Running => "RUNNING",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
            JobStatus::Cancelling => "CANCELLING",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Finished => "FINISHED",
            JobStatus::Restarting => "RESTARTING",
            JobStatus::Suspended => "SUSPENDED",
            JobStatus::Reconciling => "RECONCILING",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a job processes bounded or unbounded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Batch,
    Streaming,
}

/// Aggregate execution state of a job vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionState {
    Created,
    Scheduled,
    Deploying,
    Initializing,
    Running,
    Finished,
    Canceling,
    Canceled,
    Failed,
    Reconciling,
}

/// A boolean that may also be left undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TernaryBoolean {
    True,
    False,
    #[default]
    Undefined,
}

impl TernaryBoolean {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TernaryBoolean::True => Some(true),
            TernaryBoolean::False => Some(false),
            TernaryBoolean::Undefined => None,
        }
    }
}

impl From<Option<bool>> for TernaryBoolean {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TernaryBoolean::True,
            Some(false) => TernaryBoolean::False,
            None => TernaryBoolean::Undefined,
        }
    }
}
