//! Input structs for board mutations.

use serde::{Deserialize, Serialize};

/// A question as typed into the ask form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Post under a generated pseudonym instead of the author's name.
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerDraft {
    pub content: String,
    #[serde(default)]
    pub anonymous: bool,
}

/// An answer submitted without an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDraft {
    pub content: String,
    /// Falls back to "Anonymous Guest" when blank.
    #[serde(default)]
    pub nickname: Option<String>,
    pub ip: String,
    pub user_agent: String,
}
