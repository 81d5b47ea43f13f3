//! Prompt - the managed record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PromptField, PromptId};

/// A prompt record as held in the local projection.
///
/// `id` and the timestamps are assigned by the remote store; the client
/// never sets them. Timestamps may be `None` when the remote omits them or
/// sends something unparsable, which only degrades sort order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub name: String,
    pub prompt: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Prompt {
    pub fn set_field(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PromptField::Name => self.name = value,
            PromptField::Prompt => self.prompt = value,
            PromptField::Description => self.description = value,
        }
    }
}
