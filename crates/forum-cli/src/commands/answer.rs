use forum_board::{AnswerDraft, ForumBoard, GuestDraft};
use forum_core::entities::{AnswerRecord, GuestSubmission};
use forum_pseudonym::seeded_rng;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnswerArgs;
use crate::commands::sign_in;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AnswerResponse {
    /// Signed-in answers go live at once.
    Published { answer: AnswerRecord, answers: u32 },
    /// Guest answers wait for an admin.
    Queued {
        submission: GuestSubmission,
        pending: usize,
    },
}

pub fn handle(
    args: AnswerArgs,
    board: &mut ForumBoard,
    seed: Option<u64>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);

    let response = match sign_in(board, &args.login)? {
        Some(session) => {
            let draft = AnswerDraft {
                content: args.content,
                anonymous: args.anonymous,
            };
            let answer = board.post_answer(&args.question_id, draft, session.author(), &mut rng)?;
            let answers = board
                .question(&args.question_id)
                .map_or(0, |question| question.answers);
            AnswerResponse::Published { answer, answers }
        }
        None => {
            let draft = GuestDraft {
                content: args.content,
                nickname: args.nickname,
                ip: args.ip,
                user_agent: args.user_agent,
            };
            let submission = board.submit_guest_answer(&args.question_id, draft, &mut rng)?;
            AnswerResponse::Queued {
                submission,
                pending: board.pending_count(),
            }
        }
    };
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use forum_config::ForumConfig;
    use forum_core::enums::{ModerationTab, Role};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::LoginArgs;

    fn args(login: LoginArgs) -> AnswerArgs {
        AnswerArgs {
            question_id: "3".into(),
            content: "Set the container to display: flex and use gap.".into(),
            anonymous: false,
            nickname: Some("Pat".into()),
            ip: "10.9.9.9".into(),
            user_agent: "forum-cli".into(),
            login,
        }
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            seed: Some(11),
        }
    }

    #[test]
    fn guest_answer_is_queued() {
        let mut board = ForumBoard::with_fixtures(ForumConfig::default());
        let pending = board.pending_count();
        let answers = board.answers_for("3").len();

        handle(args(LoginArgs::default()), &mut board, Some(11), &flags()).expect("answer");
        assert_eq!(board.pending_count(), pending + 1);
        assert_eq!(board.answers_for("3").len(), answers);

        let queue = board
            .moderation_queue(Role::Admin, ModerationTab::Pending)
            .expect("admin queue");
        let newest = queue.last().expect("queued submission");
        assert_eq!(newest.nickname, "Pat");
        assert_eq!(newest.metadata.ip, "10.9.9.9");
    }

    #[test]
    fn member_answer_is_published() {
        let mut board = ForumBoard::with_fixtures(ForumConfig::default());
        let pending = board.pending_count();
        let login = LoginArgs {
            email: Some("sam@example.com".into()),
            password: None,
            name: None,
        };

        handle(args(login), &mut board, Some(11), &flags()).expect("answer");
        assert_eq!(board.pending_count(), pending);
        let newest = board.answers_for("3").last().expect("published answer");
        assert_eq!(newest.author.name, "sam");
        assert!(!newest.is_guest);
    }
}
