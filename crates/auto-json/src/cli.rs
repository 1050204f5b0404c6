//! Core logic of the `json-canon` binary.

use serde_json::Value;
use thiserror::Error;

use crate::canonical;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Parse any JSON document and render it canonically.
pub fn canonicalize(input: &str) -> Result<String, CliError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(canonical::stringify(&value))
}
