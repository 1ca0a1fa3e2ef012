//! Question listing, asking and voting.

use forum_core::entities::{AuthorDescriptor, QuestionRecord};
use forum_core::enums::VoteDirection;
use forum_listing::{ListingPage, ListingParameters, compute_page};
use rand::Rng;

use crate::board::{ForumBoard, JUST_POSTED, PREFIX_QUESTION};
use crate::drafts::QuestionDraft;
use crate::error::BoardError;

/// Trim tags, drop blanks, and keep only the first occurrence of each.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

impl ForumBoard {
    /// Default listing parameters with the configured page size.
    #[must_use]
    pub fn listing_parameters(&self) -> ListingParameters {
        ListingParameters::from_config(&self.config().listing)
    }

    /// The visible page for `params`.
    #[must_use]
    pub fn page(&self, params: &ListingParameters) -> ListingPage<QuestionRecord> {
        compute_page(&self.questions, params)
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Validate and publish a new question at the top of the list.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Core(Validation)` when the title, description or
    /// tags fall short of the posting limits, and `BoardError::Pseudonym` if an
    /// anonymous post cannot get a fresh pseudonym.
    pub fn ask_question<R: Rng + ?Sized>(
        &mut self,
        draft: QuestionDraft,
        author: AuthorDescriptor,
        rng: &mut R,
    ) -> Result<QuestionRecord, BoardError> {
        let limits = &self.config().posting;
        let mut problems = Vec::new();
        if draft.title.chars().count() < limits.min_title_len {
            problems.push(format!(
                "title must be at least {} characters",
                limits.min_title_len
            ));
        }
        if draft.description.chars().count() < limits.min_description_len {
            problems.push(format!(
                "description must be at least {} characters",
                limits.min_description_len
            ));
        }
        let tags = normalize_tags(draft.tags);
        if tags.len() < limits.min_tags {
            problems.push(format!("add at least {} tag(s)", limits.min_tags));
        }
        if !problems.is_empty() {
            return Err(BoardError::validation(problems.join("; ")));
        }

        let pseudonym = if draft.anonymous {
            Some(self.pseudonyms.generate(rng)?.into_string())
        } else {
            None
        };

        let record = QuestionRecord {
            id: self.generate_id(PREFIX_QUESTION),
            title: draft.title,
            description: draft.description,
            tags,
            author,
            votes: 0,
            answers: 0,
            age: String::from(JUST_POSTED),
            is_anonymous: pseudonym.is_some(),
            pseudonym,
        };
        record.validate()?;

        tracing::info!(
            id = %record.id,
            anonymous = record.is_anonymous,
            tags = record.tags.len(),
            "board: question posted"
        );
        self.questions.insert(0, record.clone());
        Ok(record)
    }

    /// Apply one vote and return the new count.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Core(NotFound)` for an unknown question.
    pub fn vote_question(&mut self, id: &str, direction: VoteDirection) -> Result<i64, BoardError> {
        let question = self
            .question_mut(id)
            .ok_or_else(|| BoardError::not_found("question", id))?;
        question.votes += direction.delta();
        tracing::debug!(id, votes = question.votes, ?direction, "board: question vote");
        Ok(question.votes)
    }
}
