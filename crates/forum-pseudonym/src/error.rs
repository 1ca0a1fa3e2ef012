//! Pseudonym error types.

/// Errors from pseudonym generation and parsing.
#[derive(Debug, thiserror::Error)]
pub enum PseudonymError {
    /// No unused combination could be claimed.
    #[error("unable to generate unique pseudonym after {attempts} attempts ({issued} already issued)")]
    Exhausted { attempts: u64, issued: usize },

    /// A string did not have the `<Adjective> <Animal> #<number>` shape.
    #[error("invalid pseudonym '{0}'")]
    InvalidFormat(String),

    /// A custom vocabulary could produce names that do not parse back.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}
