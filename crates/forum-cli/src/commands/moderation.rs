use chrono::{DateTime, Utc};
use forum_board::ForumBoard;
use forum_core::age::relative_age;
use forum_core::entities::GuestSubmission;
use forum_core::enums::{ModerationStatus, Role};
use forum_pseudonym::{ColorToken, color_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ModerationArgs;
use crate::commands::sign_in;
use crate::output::output;

#[derive(Debug, Serialize)]
pub(crate) struct QueueEntry<'a> {
    id: &'a str,
    question_id: &'a str,
    question_title: &'a str,
    nickname: &'a str,
    pseudonym: &'a str,
    avatar_color: ColorToken,
    submitted: String,
    status: ModerationStatus,
    flags: &'a [String],
    ip: &'a str,
    content: &'a str,
}

impl<'a> QueueEntry<'a> {
    pub(crate) fn new(submission: &'a GuestSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id: &submission.id,
            question_id: &submission.question_id,
            question_title: &submission.question_title,
            nickname: &submission.nickname,
            pseudonym: &submission.pseudonym,
            avatar_color: color_for(&submission.pseudonym),
            submitted: relative_age(submission.submitted_at, now),
            status: submission.status,
            flags: &submission.flags,
            ip: &submission.metadata.ip,
            content: &submission.content,
        }
    }
}

#[derive(Debug, Serialize)]
struct QueueResponse<'a> {
    tab: String,
    pending: usize,
    entries: Vec<QueueEntry<'a>>,
}

/// Without a sign-in the caller is a guest and the board refuses the queue.
pub fn handle(
    args: &ModerationArgs,
    board: &ForumBoard,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = sign_in(board, &args.login)?.map_or(Role::Guest, |session| session.role);

    let now = Utc::now();
    let entries = board
        .moderation_queue(role, args.tab)?
        .into_iter()
        .map(|s| QueueEntry::new(s, now))
        .collect();

    let response = QueueResponse {
        tab: args.tab.to_string(),
        pending: board.pending_count(),
        entries,
    };
    output(&response, flags.format)
}
