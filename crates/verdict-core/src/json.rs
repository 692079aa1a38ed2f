//! Canonical JSON helpers backing the JSON report format.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ErrorInfo, VerdictError};

fn map_err(err: serde_json::Error, code: &str) -> VerdictError {
    VerdictError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a value into canonical JSON bytes.
///
/// Maps are `BTreeMap`-backed throughout the crate, so key order is stable.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, VerdictError> {
    serde_json::to_vec(value).map_err(|err| map_err(err, "verdict.serialize"))
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, VerdictError> {
    serde_json::from_slice(bytes).map_err(|err| map_err(err, "verdict.deserialize"))
}
