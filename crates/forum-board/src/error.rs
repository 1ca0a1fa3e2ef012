//! Board error types.

use forum_core::errors::CoreError;
use forum_pseudonym::PseudonymError;

/// Errors from board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Lookup, validation, transition or permission failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No pseudonym could be issued for an anonymous or guest post.
    #[error("pseudonym error: {0}")]
    Pseudonym(#[from] PseudonymError),

    /// The submitter's IP was banned by an admin.
    #[error("IP {ip} is banned from posting")]
    Banned { ip: String },
}

impl BoardError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Core(CoreError::Validation(message.into()))
    }

    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::not_found(entity_type, id))
    }
}
