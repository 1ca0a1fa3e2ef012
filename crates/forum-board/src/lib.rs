//! # forum-board
//!
//! In-memory question board hosting the listing pipeline and the pseudonym
//! generator.
//!
//! - Questions: listing pages, asking (optionally anonymous), voting
//! - Answers: posting (optionally anonymous), voting
//! - Guest answers: screening, admin review queue, approve/reject/ban
//! - Sessions: demo sign-in deciding between member and admin
//!
//! Nothing is persisted; a board lives as long as its owner.

mod board;
pub mod drafts;
pub mod error;
pub mod fixtures;
mod repos;
pub mod screening;
pub mod session;

pub use board::{ForumBoard, JUST_POSTED, PREFIX_ANSWER, PREFIX_GUEST, PREFIX_QUESTION};
pub use drafts::{AnswerDraft, GuestDraft, QuestionDraft};
pub use error::BoardError;
pub use session::{Session, login};
