//! PromptId - opaque remote identifier

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store on creation.
///
/// The value is opaque to the client; it is only ever compared for equality
/// and echoed back on update/delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PromptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PromptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
