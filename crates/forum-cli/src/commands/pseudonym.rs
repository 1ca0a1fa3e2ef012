use forum_board::ForumBoard;
use forum_pseudonym::{ColorToken, Pseudonym, color_for, seeded_rng};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PseudonymArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DrawnName {
    name: String,
    initials: String,
    color: ColorToken,
}

impl From<Pseudonym> for DrawnName {
    fn from(pseudonym: Pseudonym) -> Self {
        Self {
            initials: pseudonym.initials(),
            color: color_for(pseudonym.as_str()),
            name: pseudonym.into_string(),
        }
    }
}

/// Draw `count` names against the board's registry, so seeded fixture
/// names are never returned.
pub fn handle(
    args: &PseudonymArgs,
    board: &ForumBoard,
    seed: Option<u64>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let generator = board.pseudonyms();

    let names = (0..args.count)
        .map(|_| generator.generate(&mut rng).map(DrawnName::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        count = names.len(),
        issued = generator.registry().len(),
        "pseudonym: names drawn"
    );
    output(&names, flags.format)
}
