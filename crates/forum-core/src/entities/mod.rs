//! Record structs for forum domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod answer;
mod author;
mod guest;
mod question;

pub use answer::AnswerRecord;
pub use author::AuthorDescriptor;
pub use guest::{GuestSubmission, SubmissionMetadata};
pub use question::QuestionRecord;
