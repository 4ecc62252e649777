//! Error types.

use thiserror::Error;

/// Errors raised at the boundary between documents and containers.
///
/// The path and merge operations themselves never fail: absent paths and
/// type mismatches degrade to defaults, `false`, or no-ops.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected an array or map, got {0}")]
    NotAContainer(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
