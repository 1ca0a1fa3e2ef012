//! Individual pipeline stages.
//!
//! Each stage takes the survivors of the previous one as borrowed records,
//! so the caller's slice is never reordered or mutated.

use std::cmp::Reverse;

use forum_core::entities::QuestionRecord;
use forum_core::enums::{Category, PrimaryFilter, SortOrder, Tag};

use crate::category::CategoryRules;

/// Keep records whose title, description, or any tag contains `search`
/// (case-insensitive). Blank search text keeps everything.
pub fn search(records: &mut Vec<&QuestionRecord>, search: &str) {
    if search.trim().is_empty() {
        return;
    }
    let query = search.to_lowercase();
    records.retain(|q| {
        q.title.to_lowercase().contains(&query)
            || q.description.to_lowercase().contains(&query)
            || q.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    });
}

pub fn category(records: &mut Vec<&QuestionRecord>, rules: &CategoryRules, wanted: Category) {
    records.retain(|q| rules.derive(&q.tags) == wanted);
}

pub fn tag(records: &mut Vec<&QuestionRecord>, wanted: Tag) {
    records.retain(|q| q.tags.iter().any(|t| wanted.matches(t)));
}

pub fn filter(records: &mut Vec<&QuestionRecord>, filter: PrimaryFilter) {
    match filter {
        PrimaryFilter::Newest => {}
        PrimaryFilter::Unanswered => records.retain(|q| q.answers == 0),
        PrimaryFilter::MostVoted => records.sort_by_key(|q| Reverse(q.votes)),
    }
}

pub fn sort(records: &mut [&QuestionRecord], order: SortOrder) {
    match order {
        SortOrder::Recent => {}
        SortOrder::Oldest => records.reverse(),
        SortOrder::MostAnswers => records.sort_by_key(|q| Reverse(q.answers)),
    }
}
