use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AuthorDescriptor;

/// An answer shown under a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: String,
    pub question_id: String,
    pub content: String,
    pub author: AuthorDescriptor,
    pub votes: i64,
    pub age: String,
    #[serde(default)]
    pub is_accepted: bool,
    /// Published from the guest moderation queue.
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudonym: Option<String>,
}
