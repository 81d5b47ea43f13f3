//! PromptField - the routable input fields

/// A field of the prompt form.
///
/// The same input controls serve both the create form and the inline edit
/// row; the controller routes a `(field, value)` pair to whichever target
/// is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Name,
    Prompt,
    Description,
}

impl std::str::FromStr for PromptField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(PromptField::Name),
            "prompt" => Ok(PromptField::Prompt),
            "description" | "desc" => Ok(PromptField::Description),
            _ => Err(format!(
                "Unknown field: {}. Valid: name, prompt, description",
                s
            )),
        }
    }
}

impl std::fmt::Display for PromptField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptField::Name => write!(f, "name"),
            PromptField::Prompt => write!(f, "prompt"),
            PromptField::Description => write!(f, "description"),
        }
    }
}
