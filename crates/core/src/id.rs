//! 16-byte identifiers for jobs and job vertices.
//!
//! Both render as 32 lowercase hex characters and parse back from the same
//! form. Serde uses the hex form, so identifiers read naturally in JSON.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ArchiveError;

const ID_LEN: usize = 16;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; ID_LEN]);

        impl $name {
            /// Wrap raw identifier bytes.
            pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
                Self(bytes)
            }

            /// Draw a fresh identifier from `rng`.
            pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let mut bytes = [0u8; ID_LEN];
                rng.fill(&mut bytes[..]);
                Self(bytes)
            }

            /// Draw a fresh identifier from the thread-local rng.
            pub fn random() -> Self {
                Self::generate(&mut rand::thread_rng())
            }

            pub fn as_bytes(&self) -> &[u8; ID_LEN] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in &self.0 {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }

        impl FromStr for $name {
            type Err = ArchiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier of a job.
    JobId
);

define_id!(
    /// Unique identifier of a vertex within a job graph.
    JobVertexId
);

fn parse_hex(s: &str) -> Result<[u8; ID_LEN], ArchiveError> {
    if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ArchiveError::InvalidId {
            value: s.to_string(),
        });
    }
    let mut bytes = [0u8; ID_LEN];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| {
            ArchiveError::InvalidId {
                value: s.to_string(),
            }
        })?;
    }
    Ok(bytes)
}
