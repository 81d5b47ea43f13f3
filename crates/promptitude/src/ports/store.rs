//! Prompt Store Port
//!
//! Abstract interface for the remote prompt collection. The GraphQL
//! adapter in `services` is the production implementation; tests substitute
//! in-memory fakes.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{errors::PromptError, Prompt, PromptId};

/// Request shape for a list query.
#[derive(Debug, Default, Clone)]
pub struct ListPrompts {
    /// Page size cap; the remote may return fewer.
    pub limit: Option<u32>,
    /// Opaque filter expression, passed through verbatim.
    pub filter: Option<serde_json::Value>,
    /// Continuation token from a previous page.
    pub next_token: Option<String>,
}

/// One page of the remote collection.
#[derive(Debug, Clone)]
pub struct PromptPage {
    pub items: Vec<Prompt>,
    pub next_token: Option<String>,
}

/// Input for creating a prompt. Id and timestamps are assigned remotely.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePrompt {
    pub name: String,
    pub prompt: String,
    pub description: String,
}

/// Full-record update input. Partial updates are not supported by the
/// remote contract: all three fields travel on every update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePrompt {
    pub id: PromptId,
    pub name: String,
    pub prompt: String,
    pub description: String,
}

/// Remote store interface for Prompt records.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Fetch one page of prompts.
    async fn list(&self, request: ListPrompts) -> Result<PromptPage, PromptError>;

    /// Create a prompt; returns the record with its assigned id.
    async fn create(&self, input: CreatePrompt) -> Result<Prompt, PromptError>;

    /// Replace a prompt's fields; returns the updated record.
    async fn update(&self, input: UpdatePrompt) -> Result<Prompt, PromptError>;

    /// Delete a prompt; returns the deleted record's id.
    async fn delete(&self, id: &PromptId) -> Result<PromptId, PromptError>;
}
