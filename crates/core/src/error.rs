/// Errors raised by the archive read-model types.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// An identifier string was not 32 hexadecimal characters.
    #[error("invalid identifier: {value:?} (expected 32 hex characters)")]
    InvalidId { value: String },

    /// A value could not be encoded into, or decoded from, its serialized form.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
