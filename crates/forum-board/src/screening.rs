//! Automatic checks run on guest answers before they enter the queue.
//!
//! Findings become the submission's `flags`; any finding marks it suspected.
//! Screening never rejects on its own, an admin still decides.

use std::collections::HashSet;

use forum_config::ModerationConfig;

pub const FLAG_TOO_SHORT: &str = "Too short";
pub const FLAG_PROMOTIONAL: &str = "Too many promotional words";
pub const FLAG_MULTIPLE_LINKS: &str = "Multiple links";
pub const FLAG_REPETITIVE: &str = "Repetitive content";

const PROMOTIONAL_WORDS: [&str; 12] = [
    "buy", "deal", "deals", "discount", "discounts", "click", "offer", "offers", "visit", "cheap",
    "free", "sale",
];
const PROMOTIONAL_LIMIT: usize = 3;

fn words(content: &str) -> Vec<String> {
    content
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn link_count(content: &str) -> usize {
    content
        .split_whitespace()
        .filter(|w| {
            let w = w.to_ascii_lowercase();
            w.starts_with("http://") || w.starts_with("https://") || w.starts_with("www.")
        })
        .count()
}

/// Flags for `content`, in a stable order. Empty means clean.
#[must_use]
pub fn screen(content: &str, config: &ModerationConfig) -> Vec<String> {
    let mut flags = Vec::new();
    let words = words(content);

    if content.trim().chars().count() < config.min_answer_len {
        flags.push(FLAG_TOO_SHORT.to_string());
    }

    let promotional = words
        .iter()
        .filter(|w| PROMOTIONAL_WORDS.contains(&w.as_str()))
        .count();
    if promotional >= PROMOTIONAL_LIMIT {
        flags.push(FLAG_PROMOTIONAL.to_string());
    }

    if link_count(content) > config.max_links {
        flags.push(FLAG_MULTIPLE_LINKS.to_string());
    }

    let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
    if words.len() >= 3 && distinct.len() * 2 <= words.len() {
        flags.push(FLAG_REPETITIVE.to_string());
    }

    flags
}
