use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display identity attached to a question or answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthorDescriptor {
    pub name: String,
    pub initials: String,
}

impl AuthorDescriptor {
    /// Build a descriptor whose initials are the first letter of every
    /// alphabetic word in `name` ("Silent Lemur #234" -> "SL").
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let initials = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect();

        Self {
            name: name.to_string(),
            initials,
        }
    }
}
