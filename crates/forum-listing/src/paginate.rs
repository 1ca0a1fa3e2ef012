//! Page arithmetic.

use serde::Serialize;

/// Number of pages needed for `count` items. Zero items means zero pages.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(effective_page_size(page_size))
}

/// Clamp a requested 1-based page into `[1, max(total_pages, 1)]`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// A page size of zero is treated as one so the arithmetic stays total.
#[must_use]
pub const fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 { 1 } else { page_size }
}

/// Index range of `page` within a list of `count` items.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, count: usize) -> std::ops::Range<usize> {
    let size = effective_page_size(page_size);
    let start = page.saturating_sub(1).saturating_mul(size).min(count);
    let end = start.saturating_add(size).min(count);
    start..end
}

/// One rendered page of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Records that survived every stage, across all pages.
    pub total_matches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn zero_page_size_acts_as_one() {
        assert_eq!(total_pages(3, 0), 3);
        assert_eq!(page_bounds(2, 0, 3), 1..2);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn last_page_is_short() {
        assert_eq!(page_bounds(3, 10, 25), 20..25);
        assert_eq!(page_bounds(1, 10, 25), 0..10);
        assert_eq!(page_bounds(1, 10, 0), 0..0);
    }
}
