//! JSON marshaling helpers.
//!
//! Thin wrappers over `serde_json` that attach the target type name to
//! failures, so a parse error names the model that rejected the payload
//! instead of just a byte offset. Serialization omits `None` fields (models
//! use `skip_serializing_if`); deserialization ignores unknown fields, so
//! additive server-side changes do not break older clients.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{JobwireError, Result};

/// Serialize `value` to a JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| JobwireError::Serialization {
        context: std::any::type_name::<T>(),
        source,
    })
}

/// Deserialize a JSON string into `T`.
pub fn from_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| JobwireError::Deserialization {
        context: std::any::type_name::<T>(),
        source,
    })
}
