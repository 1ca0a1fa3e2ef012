use forum_board::ForumBoard;
use forum_core::entities::QuestionRecord;
use forum_core::enums::Category;
use forum_listing::{CategoryRules, ListingParameters, ListingState};
use forum_pseudonym::{ColorToken, color_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;

/// One row of the listing as the question card shows it.
#[derive(Debug, Serialize)]
pub struct QuestionCard {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub author: String,
    pub initials: String,
    /// Only set for anonymous authors.
    pub avatar_color: Option<ColorToken>,
    pub votes: i64,
    pub answers: u32,
    pub age: String,
}

impl QuestionCard {
    pub fn new(record: &QuestionRecord, rules: &CategoryRules) -> Self {
        let author = record.display_author();
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            tags: record.tags.clone(),
            category: rules.derive(&record.tags),
            avatar_color: record.is_anonymous.then(|| color_for(&author.name)),
            author: author.name,
            initials: author.initials,
            votes: record.votes,
            answers: record.answers,
            age: record.age.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListResponse {
    page: usize,
    total_pages: usize,
    total_matches: usize,
    questions: Vec<QuestionCard>,
}

pub fn handle(args: &ListArgs, board: &ForumBoard, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut params = board.listing_parameters();
    if let Some(page_size) = args.page_size {
        params.page_size = page_size;
    }

    let mut state = ListingState::new(params);
    state.set_search(args.search.clone());
    state.set_category(args.category);
    state.set_tag(args.tag);
    state.set_filter(args.filter);
    state.set_sort(args.sort);
    state.set_page(args.page);

    output(&page_response(board, state.params()), flags.format)
}

pub(crate) fn page_response(board: &ForumBoard, params: &ListingParameters) -> ListResponse {
    let page = board.page(params);
    let rules = CategoryRules::default();
    ListResponse {
        page: page.page,
        total_pages: page.total_pages,
        total_matches: page.total_matches,
        questions: page
            .items
            .iter()
            .map(|q| QuestionCard::new(q, &rules))
            .collect(),
    }
}
