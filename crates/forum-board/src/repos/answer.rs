//! Answers posted by members.

use forum_core::entities::{AnswerRecord, AuthorDescriptor};
use forum_core::enums::VoteDirection;
use rand::Rng;

use crate::board::{ForumBoard, JUST_POSTED, PREFIX_ANSWER};
use crate::drafts::AnswerDraft;
use crate::error::BoardError;

impl ForumBoard {
    /// Answers for a question in posting order. Empty for unknown ids.
    #[must_use]
    pub fn answers_for(&self, question_id: &str) -> &[AnswerRecord] {
        self.answers.get(question_id).map_or(&[], Vec::as_slice)
    }

    /// Post an answer and bump the question's answer count.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown question, `Validation` for blank
    /// content, and `BoardError::Pseudonym` if an anonymous answer cannot get
    /// a pseudonym.
    pub fn post_answer<R: Rng + ?Sized>(
        &mut self,
        question_id: &str,
        draft: AnswerDraft,
        author: AuthorDescriptor,
        rng: &mut R,
    ) -> Result<AnswerRecord, BoardError> {
        if self.question(question_id).is_none() {
            return Err(BoardError::not_found("question", question_id));
        }
        if draft.content.trim().is_empty() {
            return Err(BoardError::validation("answer content is empty"));
        }

        let pseudonym = if draft.anonymous {
            Some(self.pseudonyms.generate(rng)?.into_string())
        } else {
            None
        };

        let answer = AnswerRecord {
            id: self.generate_id(PREFIX_ANSWER),
            question_id: question_id.to_string(),
            content: draft.content,
            author,
            votes: 0,
            age: String::from(JUST_POSTED),
            is_accepted: false,
            is_guest: false,
            is_anonymous: pseudonym.is_some(),
            pseudonym,
        };
        self.publish_answer(answer.clone())?;
        Ok(answer)
    }

    /// Apply one vote to an answer and return the new count.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the question or answer does not exist.
    pub fn vote_answer(
        &mut self,
        question_id: &str,
        answer_id: &str,
        direction: VoteDirection,
    ) -> Result<i64, BoardError> {
        let answer = self
            .answers
            .get_mut(question_id)
            .and_then(|answers| answers.iter_mut().find(|a| a.id == answer_id))
            .ok_or_else(|| BoardError::not_found("answer", answer_id))?;
        answer.votes += direction.delta();
        Ok(answer.votes)
    }

    /// Attach an answer to its question and count it.
    pub(crate) fn publish_answer(&mut self, answer: AnswerRecord) -> Result<(), BoardError> {
        let question = self
            .question_mut(&answer.question_id)
            .ok_or_else(|| BoardError::not_found("question", &answer.question_id))?;
        question.answers += 1;

        tracing::info!(
            id = %answer.id,
            question_id = %answer.question_id,
            guest = answer.is_guest,
            anonymous = answer.is_anonymous,
            "board: answer published"
        );
        self.answers
            .entry(answer.question_id.clone())
            .or_default()
            .push(answer);
        Ok(())
    }
}
