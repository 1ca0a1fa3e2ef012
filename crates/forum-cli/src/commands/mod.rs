use forum_board::{ForumBoard, Session};
use forum_config::ForumConfig;

use crate::cli::root_commands::LoginArgs;
use crate::cli::{Commands, GlobalFlags};

pub mod answer;
pub mod ask;
pub mod list;
pub mod moderation;
pub mod pseudonym;
pub mod review;
pub mod show;
pub mod vote;

/// Route a parsed command to its handler.
///
/// Every command runs against a freshly seeded board; nothing persists
/// between invocations.
pub fn dispatch(
    command: Commands,
    config: ForumConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let seed = flags.seed.or(config.pseudonym.seed);
    let mut board = ForumBoard::with_fixtures(config);

    match command {
        Commands::List(args) => list::handle(&args, &board, flags),
        Commands::Show(args) => show::handle(&args, &board, flags),
        Commands::Ask(args) => ask::handle(args, &mut board, seed, flags),
        Commands::Answer(args) => answer::handle(args, &mut board, seed, flags),
        Commands::Vote(args) => vote::handle(&args, &mut board, flags),
        Commands::Pseudonym(args) => pseudonym::handle(&args, &board, seed, flags),
        Commands::Moderation(args) => moderation::handle(&args, &board, flags),
        Commands::Review(args) => review::handle(&args, &mut board, flags),
    }
}

/// Sign in with `--email`/`--password`, or stay a guest when no email was given.
fn sign_in(board: &ForumBoard, login: &LoginArgs) -> anyhow::Result<Option<Session>> {
    let Some(email) = login.email.as_deref() else {
        return Ok(None);
    };
    let password = login.password.as_deref().unwrap_or_default();
    let session = board.login(email, password, login.name.as_deref())?;
    Ok(Some(session))
}
