//! Accumulator results as carried by an archived graph.
//!
//! Two renditions exist side by side: a human-readable one
//! ([`StringifiedAccumulatorResult`]) for display, and a serialized one
//! ([`SerializedValue`] of an [`OptionalFailure`]) that preserves the
//! original value, or the reason it could not be computed.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ArchiveError;

/// An accumulator result rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringifiedAccumulatorResult {
    pub name: String,
    /// Type name of the accumulator value (e.g. "Long").
    pub type_name: String,
    pub value: String,
}

impl StringifiedAccumulatorResult {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// A value, or the reason it failed to be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalFailure<T> {
    Success(T),
    Failure(String),
}

impl<T> OptionalFailure<T> {
    pub fn is_failure(&self) -> bool {
        matches!(self, OptionalFailure::Failure(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            OptionalFailure::Success(v) => Some(v),
            OptionalFailure::Failure(_) => None,
        }
    }

    pub fn failure_cause(&self) -> Option<&str> {
        match self {
            OptionalFailure::Success(_) => None,
            OptionalFailure::Failure(cause) => Some(cause),
        }
    }
}

/// A value held in encoded form until a consumer asks for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SerializedValue<T> {
    bytes: Vec<u8>,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize> SerializedValue<T> {
    pub fn new(value: &T) -> Result<Self, ArchiveError> {
        Ok(Self {
            bytes: serde_json::to_vec(value)?,
            _marker: PhantomData,
        })
    }
}

impl<T: DeserializeOwned> SerializedValue<T> {
    pub fn decode(&self) -> Result<T, ArchiveError> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}

impl<T> SerializedValue<T> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}
