//! GraphQL adapter for the managed prompt API.
//!
//! Speaks the generated document set (listPrompts / createPrompt /
//! updatePrompt / deletePrompt) over HTTP POST with an app api key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::domain::{Prompt, PromptError, PromptId, WriteOp};
use crate::ports::{CreatePrompt, ListPrompts, PromptPage, PromptStore, UpdatePrompt};

const LIST_PROMPTS: &str = r#"query ListPrompts($filter: ModelPromptFilterInput, $limit: Int, $nextToken: String) {
  listPrompts(filter: $filter, limit: $limit, nextToken: $nextToken) {
    items { id name prompt description createdAt updatedAt }
    nextToken
  }
}"#;

const CREATE_PROMPT: &str = r#"mutation CreatePrompt($input: CreatePromptInput!) {
  createPrompt(input: $input) { id name prompt description createdAt updatedAt }
}"#;

const UPDATE_PROMPT: &str = r#"mutation UpdatePrompt($input: UpdatePromptInput!) {
  updatePrompt(input: $input) { id name prompt description createdAt updatedAt }
}"#;

const DELETE_PROMPT: &str = r#"mutation DeletePrompt($input: DeletePromptInput!) {
  deletePrompt(input: $input) { id }
}"#;

/// Remote store backed by the managed GraphQL endpoint.
pub struct GraphQlPromptStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GraphQlPromptStore {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Execute one GraphQL document and return the `data` object.
    ///
    /// Transport failures, non-2xx statuses, and `errors` entries in a 2xx
    /// envelope all come back as a plain message for the caller to tag.
    async fn execute(&self, query: &'static str, variables: Value) -> Result<Value, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|err| err.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("API error ({}): {}", status, body));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| format!("Failed to parse response: {}", err))?;

        if let Some(error) = envelope.errors.first() {
            return Err(error.message.clone());
        }
        envelope.data.ok_or_else(|| "response had no data".to_string())
    }
}

#[async_trait]
impl PromptStore for GraphQlPromptStore {
    async fn list(&self, request: ListPrompts) -> Result<PromptPage, PromptError> {
        let variables = json!({
            "limit": request.limit,
            "filter": request.filter,
            "nextToken": request.next_token,
        });
        let data = self
            .execute(LIST_PROMPTS, variables)
            .await
            .map_err(PromptError::fetch)?;

        let connection: ListConnection = take_field(data, "listPrompts")
            .and_then(parse)
            .map_err(PromptError::fetch)?;
        debug!(count = connection.items.len(), "listPrompts page fetched");

        Ok(PromptPage {
            items: connection.items.into_iter().map(Into::into).collect(),
            next_token: connection.next_token,
        })
    }

    async fn create(&self, input: CreatePrompt) -> Result<Prompt, PromptError> {
        let data = self
            .execute(CREATE_PROMPT, json!({ "input": input }))
            .await
            .map_err(|msg| PromptError::write(WriteOp::Create, msg))?;

        let record: PromptRecord = take_field(data, "createPrompt")
            .and_then(parse)
            .map_err(|msg| PromptError::write(WriteOp::Create, msg))?;
        Ok(record.into())
    }

    async fn update(&self, input: UpdatePrompt) -> Result<Prompt, PromptError> {
        let data = self
            .execute(UPDATE_PROMPT, json!({ "input": input }))
            .await
            .map_err(|msg| PromptError::write(WriteOp::Update, msg))?;

        let record: PromptRecord = take_field(data, "updatePrompt")
            .and_then(parse)
            .map_err(|msg| PromptError::write(WriteOp::Update, msg))?;
        Ok(record.into())
    }

    async fn delete(&self, id: &PromptId) -> Result<PromptId, PromptError> {
        let variables = json!({ "input": { "id": id.as_str() } });
        let data = self
            .execute(DELETE_PROMPT, variables)
            .await
            .map_err(|msg| PromptError::write(WriteOp::Delete, msg))?;

        let deleted: DeletedRecord = take_field(data, "deletePrompt")
            .and_then(parse)
            .map_err(|msg| PromptError::write(WriteOp::Delete, msg))?;
        Ok(PromptId::new(deleted.id))
    }
}

// ============================================
// Wire Types
// ============================================

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptRecord {
    id: String,
    name: String,
    prompt: String,
    description: String,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListConnection {
    #[serde(default)]
    items: Vec<PromptRecord>,
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeletedRecord {
    id: String,
}

impl From<PromptRecord> for Prompt {
    fn from(record: PromptRecord) -> Self {
        Prompt {
            id: PromptId::new(record.id),
            name: record.name,
            prompt: record.prompt,
            description: record.description,
            created_at: parse_timestamp(record.created_at.as_deref()),
            updated_at: parse_timestamp(record.updated_at.as_deref()),
        }
    }
}

/// Lenient timestamp handling: a missing or malformed server timestamp
/// becomes `None` (degrading sort order) instead of failing the page.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(_) => {
            warn!(raw, "unparsable timestamp from remote");
            None
        }
    }
}

fn take_field(data: Value, name: &str) -> Result<Value, String> {
    match data.get(name) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(format!("response missing `{}`", name)),
    }
}

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|err| format!("Failed to parse response: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_connection_parses_generated_shape() {
        let data: Value = serde_json::from_str(
            r#"{
                "listPrompts": {
                    "items": [
                        {
                            "id": "1",
                            "name": "Greet",
                            "prompt": "Hello",
                            "description": "greeting",
                            "createdAt": "2024-01-01T00:00:00Z",
                            "updatedAt": "2024-01-02T00:00:00Z"
                        }
                    ],
                    "nextToken": "abc"
                }
            }"#,
        )
        .unwrap();

        let connection: ListConnection =
            parse(take_field(data, "listPrompts").unwrap()).unwrap();
        assert_eq!(connection.items.len(), 1);
        assert_eq!(connection.next_token.as_deref(), Some("abc"));

        let prompt: Prompt = connection.items.into_iter().next().unwrap().into();
        assert_eq!(prompt.id, PromptId::from("1"));
        assert_eq!(
            prompt.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_malformed_timestamp_becomes_none() {
        let record = PromptRecord {
            id: "1".to_string(),
            name: "Greet".to_string(),
            prompt: "Hello".to_string(),
            description: "greeting".to_string(),
            created_at: Some("not a date".to_string()),
            updated_at: None,
        };
        let prompt: Prompt = record.into();
        assert_eq!(prompt.created_at, None);
        assert_eq!(prompt.updated_at, None);
    }

    #[test]
    fn test_envelope_errors_win_over_data() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Not Authorized"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.errors[0].message, "Not Authorized");
        assert!(envelope.data.map(|d| d.is_null()).unwrap_or(true));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let data: Value = serde_json::from_str(r#"{"deletePrompt": null}"#).unwrap();
        assert!(take_field(data, "deletePrompt").is_err());
    }

    #[test]
    fn test_update_input_serializes_all_fields() {
        let input = UpdatePrompt {
            id: PromptId::from("1"),
            name: "Greet2".to_string(),
            prompt: "Hello".to_string(),
            description: "greeting".to_string(),
        };
        let variables = json!({ "input": input });
        assert_eq!(variables["input"]["id"], "1");
        assert_eq!(variables["input"]["name"], "Greet2");
        assert_eq!(variables["input"]["prompt"], "Hello");
        assert_eq!(variables["input"]["description"], "greeting");
    }
}
