/// Errors raised while assembling a fixture.
///
/// Each variant signals an inconsistent request from the test author, not a
/// runtime condition worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// The explicit state timestamps do not hold exactly one entry per job
    /// status.
    #[error(
        "state timestamps must hold one entry per job status: expected {expected}, got {actual}"
    )]
    StateTimestampsLength { expected: usize, actual: usize },
}
