use clap::{Args, Subcommand, ValueEnum};
use forum_core::enums::{Category, ModerationTab, PrimaryFilter, SortOrder, Tag, VoteDirection};
use forum_core::selector::Selector;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List one page of questions from the seeded board
    List(ListArgs),
    /// Show a question with its answers
    Show(ShowArgs),
    /// Ask a question (requires sign-in), then print the first page
    Ask(AskArgs),
    /// Answer a question; without sign-in the answer goes to the guest queue
    Answer(AnswerArgs),
    /// Vote on a question or one of its answers
    Vote(VoteArgs),
    /// Draw fresh pseudonyms with their initials and avatar color
    Pseudonym(PseudonymArgs),
    /// View the guest answer queue (admin sign-in)
    Moderation(ModerationArgs),
    /// Approve, reject or ban a guest submission (admin sign-in)
    Review(ReviewArgs),
}

/// Demo sign-in shared by commands that act as a user.
#[derive(Debug, Default, Args)]
pub struct LoginArgs {
    /// Sign in with this email
    #[arg(long)]
    pub email: Option<String>,

    /// Password for --email
    #[arg(long, requires = "email")]
    pub password: Option<String>,

    /// Display name for a member sign-in (defaults to the email's local part)
    #[arg(long, requires = "email")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against title, description and tags
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: Selector<Category>,

    /// Tag, or "all"
    #[arg(short, long, default_value = "all")]
    pub tag: Selector<Tag>,

    /// Primary filter: newest, unanswered, most-voted
    #[arg(long, default_value = "newest")]
    pub filter: PrimaryFilter,

    /// Sort order: recent, oldest, most-answers
    #[arg(long, default_value = "recent")]
    pub sort: SortOrder,

    /// 1-based page; out-of-range values are clamped
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Override the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Question id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AskArgs {
    pub title: String,

    pub description: String,

    /// Tag for the question; repeat for several
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Post under a generated pseudonym
    #[arg(long)]
    pub anonymous: bool,

    #[command(flatten)]
    pub login: LoginArgs,
}

#[derive(Debug, Args)]
pub struct AnswerArgs {
    /// Question id
    pub question_id: String,

    pub content: String,

    /// Post a signed-in answer under a generated pseudonym
    #[arg(long)]
    pub anonymous: bool,

    /// Guest nickname (guest answers only)
    #[arg(long)]
    pub nickname: Option<String>,

    /// Submitter IP recorded with a guest answer
    #[arg(long, default_value = "127.0.0.1")]
    pub ip: String,

    /// User agent recorded with a guest answer
    #[arg(long, default_value = "forum-cli")]
    pub user_agent: String,

    #[command(flatten)]
    pub login: LoginArgs,
}

#[derive(Debug, Args)]
pub struct VoteArgs {
    /// Question id
    pub question_id: String,

    /// up or down
    pub direction: VoteDirection,

    /// Vote on this answer of the question instead of the question itself
    #[arg(long)]
    pub answer: Option<String>,
}

#[derive(Debug, Args)]
pub struct PseudonymArgs {
    /// How many names to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct ModerationArgs {
    /// Queue view: all, pending, approved, rejected, suspected
    #[arg(long, default_value = "pending")]
    pub tab: ModerationTab,

    #[command(flatten)]
    pub login: LoginArgs,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReviewAction {
    Approve,
    Reject,
    /// Ban the submitter's IP (rejects the submission if still pending)
    Ban,
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Guest submission id
    pub id: String,

    pub action: ReviewAction,

    #[command(flatten)]
    pub login: LoginArgs,
}
