use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AuthorDescriptor;
use crate::errors::CoreError;

/// A question as listed on the home page.
///
/// When `is_anonymous` is set, `pseudonym` must be present and replaces
/// `author` for display (see [`QuestionRecord::display_author`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: AuthorDescriptor,
    pub votes: i64,
    pub answers: u32,
    /// Relative age label, e.g. "2 hours ago".
    pub age: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudonym: Option<String>,
}

impl QuestionRecord {
    /// Identity to render: the pseudonym for anonymous posts, else the author.
    #[must_use]
    pub fn display_author(&self) -> AuthorDescriptor {
        match (&self.pseudonym, self.is_anonymous) {
            (Some(pseudonym), true) => AuthorDescriptor::from_name(pseudonym),
            _ => self.author.clone(),
        }
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.answers > 0
    }

    /// Check the anonymity invariant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the record is anonymous without a pseudonym.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_anonymous && self.pseudonym.as_deref().is_none_or(str::is_empty) {
            return Err(CoreError::Validation(format!(
                "question {} is anonymous but has no pseudonym",
                self.id
            )));
        }
        Ok(())
    }
}
