//! # forum-listing
//!
//! Computes the visible page of questions from the full question list and
//! the filter bar's parameters.
//!
//! Stages run in a fixed order, each over the previous stage's survivors:
//! search → category → tag → primary filter → sort → pagination.
//! The filter and sort stages both reorder, so a `most_voted` filter
//! followed by a `most_answers` sort ends up ordered by answers, with ties
//! left in vote order because both sorts are stable.
//!
//! The pipeline never fails. An empty result has `total_pages == 0` and
//! reports page 1.

pub mod category;
pub mod paginate;
pub mod params;
pub mod stages;

pub use category::{CategoryRule, CategoryRules};
pub use paginate::ListingPage;
pub use params::{ListingParameters, ListingState};

use forum_core::entities::QuestionRecord;

/// Run the pipeline with the default category rules.
#[must_use]
pub fn compute_page(
    all: &[QuestionRecord],
    params: &ListingParameters,
) -> ListingPage<QuestionRecord> {
    compute_page_with_rules(all, params, &CategoryRules::default())
}

/// Run the pipeline with a caller-supplied category rule table.
#[must_use]
pub fn compute_page_with_rules(
    all: &[QuestionRecord],
    params: &ListingParameters,
    rules: &CategoryRules,
) -> ListingPage<QuestionRecord> {
    let matches = matching(all, params, rules);

    let total_matches = matches.len();
    let total_pages = paginate::total_pages(total_matches, params.page_size);
    let page = paginate::clamp_page(params.page, total_pages);
    let bounds = paginate::page_bounds(page, params.page_size, total_matches);

    tracing::debug!(
        input = all.len(),
        total_matches,
        total_pages,
        requested_page = params.page,
        page,
        "listing: page computed"
    );

    ListingPage {
        items: matches[bounds].iter().map(|q| (*q).clone()).collect(),
        page,
        total_pages,
        total_matches,
    }
}

/// Every record that survives the search, category, tag, filter and sort
/// stages, in display order.
#[must_use]
pub fn matching<'a>(
    all: &'a [QuestionRecord],
    params: &ListingParameters,
    rules: &CategoryRules,
) -> Vec<&'a QuestionRecord> {
    let mut records: Vec<&QuestionRecord> = all.iter().collect();

    stages::search(&mut records, &params.search);
    if let Some(&wanted) = params.category.selected() {
        stages::category(&mut records, rules, wanted);
    }
    if let Some(&wanted) = params.tag.selected() {
        stages::tag(&mut records, wanted);
    }
    stages::filter(&mut records, params.filter);
    stages::sort(&mut records, params.sort);

    records
}
