use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `forum` binary.
#[derive(Debug, Parser)]
#[command(name = "forum", version, about = "Q&A forum board and pseudonym tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for pseudonym draws; overrides `pseudonym.seed` from config
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use forum_core::enums::{
        Category, ModerationTab, PrimaryFilter, SortOrder, Tag, VoteDirection,
    };
    use forum_core::selector::Selector;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::root_commands::ReviewAction;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults_select_everything() {
        let cli = Cli::try_parse_from(["forum", "list"]).expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.search, "");
        assert_eq!(args.category, Selector::All);
        assert_eq!(args.tag, Selector::All);
        assert_eq!(args.filter, PrimaryFilter::Newest);
        assert_eq!(args.sort, SortOrder::Recent);
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, None);
    }

    #[test]
    fn list_parses_labels_leniently() {
        let cli = Cli::try_parse_from([
            "forum",
            "list",
            "--category",
            "programming",
            "--tag",
            "Node.js",
            "--filter",
            "most-voted",
            "--sort",
            "most_answers",
            "--page",
            "2",
        ])
        .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.category, Selector::Only(Category::Programming));
        assert_eq!(args.tag, Selector::Only(Tag::NodeJs));
        assert_eq!(args.filter, PrimaryFilter::MostVoted);
        assert_eq!(args.sort, SortOrder::MostAnswers);
        assert_eq!(args.page, 2);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["forum", "list", "--category", "cooking"]).is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "forum", "pseudonym", "-n", "3", "--seed", "7", "--format", "raw",
        ])
        .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.global_flags().seed, Some(7));
        assert!(matches!(cli.command, Commands::Pseudonym(ref args) if args.count == 3));
    }

    #[test]
    fn moderation_defaults_to_pending_without_sign_in() {
        let cli = Cli::try_parse_from(["forum", "moderation"]).expect("cli should parse");
        let Commands::Moderation(args) = cli.command else {
            panic!("expected moderation");
        };
        assert_eq!(args.tab, ModerationTab::Pending);
        assert_eq!(args.login.email, None);
        assert_eq!(args.login.password, None);
    }

    #[test]
    fn moderation_takes_credentials() {
        let cli = Cli::try_parse_from([
            "forum",
            "moderation",
            "--email",
            "admin@xyz.in",
            "--password",
            "admin",
            "--tab",
            "suspected",
        ])
        .expect("cli should parse");
        let Commands::Moderation(args) = cli.command else {
            panic!("expected moderation");
        };
        assert_eq!(args.tab, ModerationTab::Suspected);
        assert_eq!(args.login.email.as_deref(), Some("admin@xyz.in"));
        assert_eq!(args.login.password.as_deref(), Some("admin"));
    }

    #[test]
    fn password_without_email_is_rejected() {
        assert!(Cli::try_parse_from(["forum", "moderation", "--password", "admin"]).is_err());
    }

    #[test]
    fn ask_collects_repeated_tags() {
        let cli = Cli::try_parse_from([
            "forum",
            "ask",
            "How do I pin a future?",
            "Pin::new rejects my async block and I do not see why.",
            "--tag",
            "rust",
            "--tag",
            "async",
            "--anonymous",
            "--email",
            "sam@example.com",
        ])
        .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.tags, vec!["rust", "async"]);
        assert!(args.anonymous);
        assert_eq!(args.login.email.as_deref(), Some("sam@example.com"));
    }

    #[test]
    fn guest_answer_defaults() {
        let cli = Cli::try_parse_from(["forum", "answer", "3", "Try flexbox gap."])
            .expect("cli should parse");
        let Commands::Answer(args) = cli.command else {
            panic!("expected answer");
        };
        assert_eq!(args.question_id, "3");
        assert_eq!(args.ip, "127.0.0.1");
        assert_eq!(args.user_agent, "forum-cli");
        assert_eq!(args.nickname, None);
        assert_eq!(args.login.email, None);
    }

    #[rstest]
    #[case(&["forum", "vote", "1", "up"], VoteDirection::Up, None)]
    #[case(&["forum", "vote", "1", "Downvote", "--answer", "2"], VoteDirection::Down, Some("2"))]
    fn vote_parses_direction(
        #[case] argv: &[&str],
        #[case] direction: VoteDirection,
        #[case] answer: Option<&str>,
    ) {
        let cli = Cli::try_parse_from(argv).expect("cli should parse");
        let Commands::Vote(args) = cli.command else {
            panic!("expected vote");
        };
        assert_eq!(args.direction, direction);
        assert_eq!(args.answer.as_deref(), answer);
    }

    #[test]
    fn review_requires_a_known_action() {
        let cli = Cli::try_parse_from(["forum", "review", "g-1", "ban"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Review(ref args) if args.action == ReviewAction::Ban));
        assert!(Cli::try_parse_from(["forum", "review", "g-1", "archive"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["forum", "--format", "xml", "list"]).is_err());
    }
}
