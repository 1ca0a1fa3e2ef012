use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ModerationStatus;

/// Request metadata captured with a guest submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionMetadata {
    pub ip: String,
    pub user_agent: String,
}

/// A guest answer awaiting (or past) admin review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GuestSubmission {
    pub id: String,
    pub question_id: String,
    pub question_title: String,
    pub content: String,
    pub nickname: String,
    pub pseudonym: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ModerationStatus,
    /// Screening findings; non-empty means the submission is suspected.
    pub flags: Vec<String>,
    pub metadata: SubmissionMetadata,
}

impl GuestSubmission {
    #[must_use]
    pub fn is_suspected(&self) -> bool {
        !self.flags.is_empty()
    }
}
