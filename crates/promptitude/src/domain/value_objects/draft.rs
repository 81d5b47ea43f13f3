//! PromptDraft - the pending new-prompt form values

use serde::{Deserialize, Serialize};

use super::PromptField;

/// Draft fields for a prompt that has not been created yet.
///
/// Lives outside the projection: editing the draft never touches an
/// existing record, and editing a record never touches the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    pub name: String,
    pub prompt: String,
    pub description: String,
}

impl PromptDraft {
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            description: description.into(),
        }
    }

    /// Whether all three fields are filled in. Enforced by the form
    /// boundary before submission, not by the controller itself.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.prompt.trim().is_empty()
            && !self.description.trim().is_empty()
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_field(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PromptField::Name => self.name = value,
            PromptField::Prompt => self.prompt = value,
            PromptField::Description => self.description = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_draft() {
        let draft = PromptDraft::new("Greet", "Hello", "greeting");
        assert!(draft.is_complete());
    }

    #[test]
    fn test_blank_field_is_incomplete() {
        let draft = PromptDraft::new("Greet", "  ", "greeting");
        assert!(!draft.is_complete());
        assert!(!PromptDraft::default().is_complete());
    }

    #[test]
    fn test_clear_resets_to_empty_strings() {
        let mut draft = PromptDraft::new("Greet", "Hello", "greeting");
        draft.clear();
        assert_eq!(draft, PromptDraft::default());
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_set_field_routes_by_name() {
        let mut draft = PromptDraft::default();
        draft.set_field(PromptField::Prompt, "Hello");
        assert_eq!(draft.prompt, "Hello");
        assert_eq!(draft.name, "");
    }
}
