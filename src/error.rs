use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural validation failures raised while building a tree.
///
/// Operational calls (`toggle`, `select`, `submit`) never error: unknown
/// commands and stale paths are normal outcomes, not faults.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum TreeError {
    #[error("empty node name at {0}")]
    EmptyName(String),

    #[error("duplicate path: {0}")]
    DuplicatePath(String),

    #[error("path is not absolute: {0}")]
    RelativePath(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
