use chrono::Utc;
use forum_board::ForumBoard;
use forum_core::entities::{AnswerRecord, GuestSubmission};
use forum_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ReviewAction, ReviewArgs};
use crate::commands::moderation::QueueEntry;
use crate::commands::sign_in;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum ReviewResponse<'a> {
    Approved {
        answer: AnswerRecord,
        pending: usize,
    },
    Rejected {
        submission: QueueEntry<'a>,
        pending: usize,
    },
    Banned {
        submission: QueueEntry<'a>,
        pending: usize,
    },
}

pub fn handle(args: &ReviewArgs, board: &mut ForumBoard, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = sign_in(board, &args.login)?.map_or(Role::Guest, |session| session.role);

    match args.action {
        ReviewAction::Approve => {
            let answer = board.approve(role, &args.id)?;
            let response = ReviewResponse::Approved {
                answer,
                pending: board.pending_count(),
            };
            output(&response, flags.format)
        }
        ReviewAction::Reject => {
            let submission = board.reject(role, &args.id)?;
            reviewed(&submission, board.pending_count(), false, flags)
        }
        ReviewAction::Ban => {
            let submission = board.ban_ip(role, &args.id)?;
            reviewed(&submission, board.pending_count(), true, flags)
        }
    }
}

fn reviewed(
    submission: &GuestSubmission,
    pending: usize,
    banned: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let submission = QueueEntry::new(submission, Utc::now());
    let response = if banned {
        ReviewResponse::Banned {
            submission,
            pending,
        }
    } else {
        ReviewResponse::Rejected {
            submission,
            pending,
        }
    };
    output(&response, flags.format)
}
