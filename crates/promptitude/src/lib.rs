//! Promptitude Core Library
//!
//! Client-side state synchronization for a remote collection of prompt
//! records behind a managed GraphQL API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: The Prompt record
//!   - `value_objects/`: Immutable value types (PromptId, PromptDraft, PromptField)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `PromptStore`: the remote collection (list/create/update/delete)
//!   - `AuthSession`: the external identity collaborator's sign-out surface
//!
//! - **Controller** (`controller`): the prompt list controller owning the
//!   local projection, the pending draft, and the inline edit mode
//!
//! - **Services** (`services/`): Infrastructure adapters
//!   - `GraphQlPromptStore`: reqwest-backed implementation of `PromptStore`
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promptitude::{GraphQlPromptStore, PromptListController};
//!
//! let store = Arc::new(GraphQlPromptStore::new(endpoint, api_key));
//! let mut controller = PromptListController::new(store);
//! controller.load().await?;
//! ```

pub mod controller;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use controller::{PromptListController, DEFAULT_PAGE_SIZE};
pub use domain::{Prompt, PromptDraft, PromptError, PromptField, PromptId, WriteOp};
pub use ports::{AuthSession, CreatePrompt, ListPrompts, PromptPage, PromptStore, UpdatePrompt};
pub use services::GraphQlPromptStore;
