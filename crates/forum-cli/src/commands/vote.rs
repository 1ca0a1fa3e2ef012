use forum_board::ForumBoard;
use forum_core::enums::VoteDirection;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VoteArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VoteResponse<'a> {
    question_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer_id: Option<&'a str>,
    direction: VoteDirection,
    votes: i64,
}

pub fn handle(args: &VoteArgs, board: &mut ForumBoard, flags: &GlobalFlags) -> anyhow::Result<()> {
    let votes = match args.answer.as_deref() {
        Some(answer_id) => board.vote_answer(&args.question_id, answer_id, args.direction)?,
        None => board.vote_question(&args.question_id, args.direction)?,
    };

    let response = VoteResponse {
        question_id: &args.question_id,
        answer_id: args.answer.as_deref(),
        direction: args.direction,
        votes,
    };
    output(&response, flags.format)
}
