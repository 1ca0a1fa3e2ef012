use anyhow::Context;
use forum_board::{ForumBoard, QuestionDraft};
use forum_listing::CategoryRules;
use forum_pseudonym::seeded_rng;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::commands::list::{ListResponse, QuestionCard, page_response};
use crate::commands::sign_in;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AskResponse {
    posted: QuestionCard,
    /// First page of the default listing, with the new question on top.
    listing: ListResponse,
}

pub fn handle(
    args: AskArgs,
    board: &mut ForumBoard,
    seed: Option<u64>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = sign_in(board, &args.login)?
        .context("asking a question requires signing in with --email")?;

    let draft = QuestionDraft {
        title: args.title,
        description: args.description,
        tags: args.tags,
        anonymous: args.anonymous,
    };
    let record = board.ask_question(draft, session.author(), &mut seeded_rng(seed))?;

    let response = AskResponse {
        posted: QuestionCard::new(&record, &CategoryRules::default()),
        listing: page_response(board, &board.listing_parameters()),
    };
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use forum_config::ForumConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::LoginArgs;

    fn args(login: LoginArgs) -> AskArgs {
        AskArgs {
            title: "How do I pin a future?".into(),
            description: "Pin::new rejects my async block and I do not see why.".into(),
            tags: vec!["rust".into()],
            anonymous: false,
            login,
        }
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            seed: Some(7),
        }
    }

    #[test]
    fn guests_cannot_ask() {
        let mut board = ForumBoard::with_fixtures(ForumConfig::default());
        let before = board.questions().len();

        let error = handle(args(LoginArgs::default()), &mut board, Some(7), &flags())
            .expect_err("guest ask should fail");
        assert!(error.to_string().contains("--email"));
        assert_eq!(board.questions().len(), before);
    }

    #[test]
    fn signed_in_member_posts_on_top() {
        let mut board = ForumBoard::with_fixtures(ForumConfig::default());
        let login = LoginArgs {
            email: Some("sam@example.com".into()),
            password: None,
            name: Some("Sam Rivers".into()),
        };

        handle(args(login), &mut board, Some(7), &flags()).expect("ask");
        let newest = &board.questions()[0];
        assert_eq!(newest.title, "How do I pin a future?");
        assert_eq!(newest.author.name, "Sam Rivers");
    }
}
