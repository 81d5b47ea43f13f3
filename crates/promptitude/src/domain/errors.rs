//! Domain Errors
//!
//! Error types for controller and remote store operations.

use thiserror::Error;

use crate::domain::value_objects::PromptId;

/// The remote mutation that failed, used to tag write errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOp::Create => write!(f, "create"),
            WriteOp::Update => write!(f, "update"),
            WriteOp::Delete => write!(f, "delete"),
        }
    }
}

/// Errors surfaced by the prompt controller and its remote store.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The remote list query failed; the local projection was left as-is.
    #[error("failed to fetch prompts: {0}")]
    RemoteFetch(String),

    /// A remote create/update/delete failed.
    #[error("failed to {op} prompt: {message}")]
    RemoteWrite { op: WriteOp, message: String },

    /// The target id is not in the local projection.
    #[error("prompt not found: {0}")]
    NotFound(PromptId),

    #[error("validation error: {0}")]
    Validation(String),
}

impl PromptError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::RemoteFetch(message.into())
    }

    pub fn write(op: WriteOp, message: impl Into<String>) -> Self {
        Self::RemoteWrite {
            op,
            message: message.into(),
        }
    }
}
