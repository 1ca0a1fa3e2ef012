use anyhow::Context;
use forum_board::ForumBoard;
use forum_core::entities::AnswerRecord;
use forum_listing::CategoryRules;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::list::QuestionCard;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    question: QuestionCard,
    description: &'a str,
    answers: &'a [AnswerRecord],
}

pub fn handle(args: &ShowArgs, board: &ForumBoard, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = board
        .question(&args.id)
        .with_context(|| format!("question '{}' not found", args.id))?;

    let response = ShowResponse {
        question: QuestionCard::new(record, &CategoryRules::default()),
        description: &record.description,
        answers: board.answers_for(&record.id),
    };
    output(&response, flags.format)
}
