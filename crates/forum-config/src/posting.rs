//! Limits for the ask-question flow and guest answer screening.

use serde::{Deserialize, Serialize};

const fn default_min_title_len() -> usize {
    10
}

const fn default_min_description_len() -> usize {
    20
}

const fn default_min_tags() -> usize {
    1
}

const fn default_min_answer_len() -> usize {
    20
}

const fn default_max_links() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostingConfig {
    #[serde(default = "default_min_title_len")]
    pub min_title_len: usize,

    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,

    #[serde(default = "default_min_tags")]
    pub min_tags: usize,
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            min_title_len: default_min_title_len(),
            min_description_len: default_min_description_len(),
            min_tags: default_min_tags(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModerationConfig {
    /// Guest answers shorter than this are flagged "Too short".
    #[serde(default = "default_min_answer_len")]
    pub min_answer_len: usize,

    /// Guest answers with more links than this are flagged.
    #[serde(default = "default_max_links")]
    pub max_links: usize,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            min_answer_len: default_min_answer_len(),
            max_links: default_max_links(),
        }
    }
}
