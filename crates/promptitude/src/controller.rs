//! Prompt List Controller
//!
//! Maintains the client-side projection of the remote prompt collection and
//! keeps it consistent through four remote operations (list, create, update,
//! delete), plus a single-record inline edit mode.
//!
//! All state is owned by the controller and mutated only through its
//! operations. Front-ends observe changes through a [`watch`] revision
//! channel and re-read the accessors when it ticks.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{Prompt, PromptDraft, PromptError, PromptField, PromptId};
use crate::ports::{CreatePrompt, ListPrompts, PromptStore, UpdatePrompt};

/// Page size requested on every full refresh.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Client-side controller for the remote prompt collection.
pub struct PromptListController {
    store: Arc<dyn PromptStore>,
    prompts: Vec<Prompt>,
    draft: PromptDraft,
    editing_prompt_id: Option<PromptId>,
    revision: watch::Sender<u64>,
}

impl PromptListController {
    pub fn new(store: Arc<dyn PromptStore>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            store,
            prompts: Vec::new(),
            draft: PromptDraft::default(),
            editing_prompt_id: None,
            revision,
        }
    }

    /// The local projection, in its current order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// The pending new-prompt draft.
    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    /// The record currently in edit mode, if any.
    pub fn editing_prompt_id(&self) -> Option<&PromptId> {
        self.editing_prompt_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_prompt_id.is_some()
    }

    /// Monotonic state revision, bumped on every mutation.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Observe state changes; receivers wake whenever the revision ticks.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Replace the whole projection with a freshly fetched page, sorted by
    /// creation date descending (most recent first).
    ///
    /// Full-refresh semantics: no incremental merge. On failure the local
    /// projection is left untouched.
    pub async fn load(&mut self) -> Result<(), PromptError> {
        let request = ListPrompts {
            limit: Some(DEFAULT_PAGE_SIZE),
            ..Default::default()
        };
        let page = self.store.list(request).await?;

        let mut prompts = page.items;
        // Records without a parsable created_at sort to the end; their
        // relative order is indeterminate and not part of the contract.
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(count = prompts.len(), "projection refreshed");
        self.prompts = prompts;
        self.notify();
        Ok(())
    }

    /// Submit the form.
    ///
    /// While a record is in edit mode the form is serving the edit role, so
    /// submission sends the draft fields as an update of that record and
    /// clears edit mode. Otherwise it creates a new prompt, re-fetches the
    /// collection to pick up the assigned id and timestamps, and resets the
    /// draft to empty strings.
    ///
    /// On a failed write the draft and projection are left unchanged.
    pub async fn create(&mut self) -> Result<(), PromptError> {
        if let Some(id) = self.editing_prompt_id.clone() {
            let input = UpdatePrompt {
                id: id.clone(),
                name: self.draft.name.clone(),
                prompt: self.draft.prompt.clone(),
                description: self.draft.description.clone(),
            };
            let updated = self.store.update(input).await?;
            debug!(id = %id, "edit submitted through create form");
            self.apply_updated(updated);
            self.editing_prompt_id = None;
            self.notify();
            return Ok(());
        }

        let input = CreatePrompt {
            name: self.draft.name.clone(),
            prompt: self.draft.prompt.clone(),
            description: self.draft.description.clone(),
        };
        let created = self.store.create(input).await?;
        debug!(id = %created.id, "prompt created");

        self.load().await?;
        self.draft.clear();
        self.notify();
        Ok(())
    }

    /// Push the full field set of `id`'s record to the remote store.
    ///
    /// On success the remote's returned record replaces the local one and
    /// edit mode clears. On failure edit mode stays set so the user can
    /// retry.
    pub async fn update(&mut self, id: &PromptId) -> Result<(), PromptError> {
        let record = self
            .prompts
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;

        let input = UpdatePrompt {
            id: record.id,
            name: record.name,
            prompt: record.prompt,
            description: record.description,
        };
        let updated = self.store.update(input).await?;
        debug!(id = %id, "prompt updated");
        self.apply_updated(updated);
        self.editing_prompt_id = None;
        self.notify();
        Ok(())
    }

    fn apply_updated(&mut self, updated: Prompt) {
        match self.prompts.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => *slot = updated,
            None => warn!(id = %updated.id, "updated prompt no longer in projection"),
        }
    }

    /// Remove `id` from the projection immediately, then ask the remote
    /// store to delete it.
    ///
    /// The local removal is optimistic: it happens before the remote call
    /// resolves. If the remote delete fails the record is restored at its
    /// old position and the error returned, so a failed delete is never
    /// silently lost.
    pub async fn delete(&mut self, id: &PromptId) -> Result<(), PromptError> {
        let removed = self
            .prompts
            .iter()
            .position(|p| &p.id == id)
            .map(|index| (index, self.prompts.remove(index)));
        if removed.is_some() {
            self.notify();
        }

        match self.store.delete(id).await {
            Ok(_) => {
                debug!(id = %id, "prompt deleted");
                Ok(())
            }
            Err(err) => {
                if let Some((index, record)) = removed {
                    warn!(id = %id, error = %err, "remote delete failed, restoring record");
                    let index = index.min(self.prompts.len());
                    self.prompts.insert(index, record);
                    self.notify();
                }
                Err(err)
            }
        }
    }

    /// Put `id` into edit mode.
    ///
    /// Only one record is editable at a time; entering edit on a new id
    /// abandons any in-progress edit without warning.
    pub fn enter_edit_mode(&mut self, id: PromptId) {
        self.editing_prompt_id = Some(id);
        self.notify();
    }

    /// Leave edit mode and reset the draft to empty strings.
    pub fn cancel_edit_mode(&mut self) {
        self.editing_prompt_id = None;
        self.draft.clear();
        self.notify();
    }

    /// Route a field edit to whichever target is active: the record in
    /// edit mode (in place, inside the projection), or the pending draft.
    pub fn set_field(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        match &self.editing_prompt_id {
            Some(id) => {
                let id = id.clone();
                match self.prompts.iter_mut().find(|p| p.id == id) {
                    Some(record) => record.set_field(field, value),
                    None => warn!(id = %id, "edit target no longer in projection"),
                }
            }
            None => self.draft.set_field(field, value),
        }
        self.notify();
    }
}
