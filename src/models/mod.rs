pub mod config;
pub mod job;
pub mod recommendation;
pub mod resume;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::errors::RepositoryError;

/// Decode one of the JSON list columns, naming the field in the error.
pub(crate) fn decode_json_list<T: DeserializeOwned>(
    raw: &str,
    field: &str,
) -> Result<Vec<T>, RepositoryError> {
    serde_json::from_str(raw)
        .map_err(|e| RepositoryError::ValidationError(format!("invalid {field} JSON: {e}")))
}

pub(crate) fn encode_json_list<T: Serialize>(
    values: &[T],
    field: &str,
) -> Result<String, RepositoryError> {
    serde_json::to_string(values)
        .map_err(|e| RepositoryError::ValidationError(format!("cannot encode {field}: {e}")))
}
