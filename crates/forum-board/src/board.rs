//! The in-memory board.
//!
//! `ForumBoard` owns every question, answer and guest submission for the
//! life of the process. Operations are grouped by entity under `repos/` as
//! `impl ForumBoard` blocks.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use forum_config::ForumConfig;
use forum_core::entities::{AnswerRecord, GuestSubmission, QuestionRecord};
use forum_pseudonym::{PseudonymGenerator, PseudonymRegistry};

use crate::fixtures;

pub const PREFIX_QUESTION: &str = "q";
pub const PREFIX_ANSWER: &str = "a";
pub const PREFIX_GUEST: &str = "g";

/// Age label for records created during this run.
pub const JUST_POSTED: &str = "just now";

fn id_number(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}

/// Drop seed records that break the anonymity invariant.
fn valid_questions(mut questions: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    questions.retain(|q| match q.validate() {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(id = %q.id, %error, "board: fixture question skipped");
            false
        }
    });
    questions
}

#[derive(Debug)]
pub struct ForumBoard {
    config: ForumConfig,
    /// Newest first.
    pub(crate) questions: Vec<QuestionRecord>,
    pub(crate) answers: HashMap<String, Vec<AnswerRecord>>,
    pub(crate) submissions: Vec<GuestSubmission>,
    pub(crate) banned_ips: HashSet<String>,
    pub(crate) pseudonyms: PseudonymGenerator,
    next_id: u64,
}

impl ForumBoard {
    /// An empty board with a fresh pseudonym registry.
    #[must_use]
    pub fn new(config: ForumConfig) -> Self {
        Self::with_registry(config, Arc::new(PseudonymRegistry::new()))
    }

    /// An empty board issuing pseudonyms against a caller-owned registry.
    #[must_use]
    pub fn with_registry(config: ForumConfig, registry: Arc<PseudonymRegistry>) -> Self {
        let pseudonyms = PseudonymGenerator::from_config(registry, &config.pseudonym);
        Self {
            config,
            questions: Vec::new(),
            answers: HashMap::new(),
            submissions: Vec::new(),
            banned_ips: HashSet::new(),
            pseudonyms,
            next_id: 1,
        }
    }

    /// A board seeded with the demo questions, answers and guest queue.
    ///
    /// Pseudonyms already present in the seed data are claimed up front so
    /// the generator never reissues them.
    #[must_use]
    pub fn with_fixtures(config: ForumConfig) -> Self {
        let mut board = Self::new(config);
        board.questions = valid_questions(fixtures::questions());
        for answer in fixtures::answers() {
            board
                .answers
                .entry(answer.question_id.clone())
                .or_default()
                .push(answer);
        }
        board.submissions = fixtures::guest_submissions(&board.questions);

        let registry = board.pseudonyms.registry();
        let seeded = board
            .questions
            .iter()
            .filter_map(|q| q.pseudonym.as_deref())
            .chain(
                board
                    .answers
                    .values()
                    .flatten()
                    .filter_map(|a| a.pseudonym.as_deref()),
            )
            .chain(board.submissions.iter().map(|s| s.pseudonym.as_str()))
            .filter(|name| registry.claim(name))
            .count();

        board.next_id = board.highest_id_number() + 1;

        tracing::debug!(
            questions = board.questions.len(),
            next_id = board.next_id,
            submissions = board.submissions.len(),
            seeded_pseudonyms = seeded,
            "board: fixtures loaded"
        );
        board
    }

    #[must_use]
    pub const fn config(&self) -> &ForumConfig {
        &self.config
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub const fn pseudonyms(&self) -> &PseudonymGenerator {
        &self.pseudonyms
    }

    /// Largest numeric suffix among stored ids (`"g-4"` and `"4"` both give 4).
    fn highest_id_number(&self) -> u64 {
        let questions = self.questions.iter().map(|q| q.id.as_str());
        let answers = self.answers.values().flatten().map(|a| a.id.as_str());
        let submissions = self.submissions.iter().map(|s| s.id.as_str());

        questions
            .chain(answers)
            .chain(submissions)
            .filter_map(id_number)
            .max()
            .unwrap_or(0)
    }

    /// Next id for `prefix`. Unique across every collection on the board.
    pub(crate) fn generate_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn question_mut(&mut self, id: &str) -> Option<&mut QuestionRecord> {
        self.questions.iter_mut().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn id_number_reads_the_trailing_counter() {
        assert_eq!(id_number("g-4"), Some(4));
        assert_eq!(id_number("12"), Some(12));
        assert_eq!(id_number("admin-001"), Some(1));
        assert_eq!(id_number("q-x"), None);
    }

    #[test]
    fn anonymous_question_without_pseudonym_is_skipped() {
        let mut questions = fixtures::questions();
        let total = questions.len();
        questions[0].is_anonymous = true;
        questions[0].pseudonym = None;
        let broken = questions[0].id.clone();

        let kept = valid_questions(questions);
        assert_eq!(kept.len(), total - 1);
        assert!(kept.iter().all(|q| q.id != broken));
    }

    #[test]
    fn every_fixture_question_is_kept() {
        let board = ForumBoard::with_fixtures(ForumConfig::default());
        assert_eq!(board.questions().len(), fixtures::questions().len());
    }

    #[test]
    fn fixture_board_counts_past_seeded_ids() {
        let mut board = ForumBoard::with_fixtures(ForumConfig::default());
        assert_eq!(board.generate_id(PREFIX_GUEST), "g-6");
    }

    #[test]
    fn empty_board_starts_at_one() {
        let mut board = ForumBoard::new(ForumConfig::default());
        assert_eq!(board.generate_id(PREFIX_QUESTION), "q-1");
        assert_eq!(board.generate_id(PREFIX_ANSWER), "a-2");
    }
}
