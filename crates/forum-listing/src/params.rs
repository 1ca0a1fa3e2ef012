//! Listing parameters and the page-resetting state holder.

use forum_config::{DEFAULT_PAGE_SIZE, ListingConfig};
use forum_core::enums::{Category, PrimaryFilter, SortOrder, Tag};
use forum_core::selector::Selector;
use serde::{Deserialize, Serialize};

/// Everything the pipeline needs besides the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingParameters {
    pub search: String,
    pub category: Selector<Category>,
    pub tag: Selector<Tag>,
    pub filter: PrimaryFilter,
    pub sort: SortOrder,
    /// 1-based; clamped by the pipeline.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListingParameters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Selector::All,
            tag: Selector::All,
            filter: PrimaryFilter::default(),
            sort: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingParameters {
    /// Defaults with the configured page size.
    #[must_use]
    pub fn from_config(config: &ListingConfig) -> Self {
        Self {
            page_size: config.page_size,
            ..Self::default()
        }
    }
}

/// Parameters as held by the host between renders.
///
/// Changing any parameter other than the page sends the viewer back to
/// page 1; setting the same value again leaves the page alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    params: ListingParameters,
}

impl ListingState {
    #[must_use]
    pub const fn new(params: ListingParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &ListingParameters {
        &self.params
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.params.search != search {
            self.params.search = search;
            self.params.page = 1;
        }
    }

    pub fn set_category(&mut self, category: Selector<Category>) {
        if self.params.category != category {
            self.params.category = category;
            self.params.page = 1;
        }
    }

    pub fn set_tag(&mut self, tag: Selector<Tag>) {
        if self.params.tag != tag {
            self.params.tag = tag;
            self.params.page = 1;
        }
    }

    pub fn set_filter(&mut self, filter: PrimaryFilter) {
        if self.params.filter != filter {
            self.params.filter = filter;
            self.params.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        if self.params.sort != sort {
            self.params.sort = sort;
            self.params.page = 1;
        }
    }

    pub const fn set_page(&mut self, page: usize) {
        self.params.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ListingState {
        let mut state = ListingState::default();
        state.set_page(3);
        state
    }

    #[test]
    fn defaults_match_filter_bar() {
        let params = ListingParameters::default();
        assert!(params.search.is_empty());
        assert!(params.category.is_all());
        assert!(params.tag.is_all());
        assert_eq!(params.filter, PrimaryFilter::Newest);
        assert_eq!(params.sort, SortOrder::Recent);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn from_config_takes_page_size() {
        let params = ListingParameters::from_config(&ListingConfig { page_size: 4 });
        assert_eq!(params.page_size, 4);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn every_non_page_setter_resets_page() {
        let mut state = on_page_three();
        state.set_search("react");
        assert_eq!(state.params().page, 1);

        let mut state = on_page_three();
        state.set_category(Selector::Only(Category::Design));
        assert_eq!(state.params().page, 1);

        let mut state = on_page_three();
        state.set_tag(Selector::Only(Tag::Css));
        assert_eq!(state.params().page, 1);

        let mut state = on_page_three();
        state.set_filter(PrimaryFilter::Unanswered);
        assert_eq!(state.params().page, 1);

        let mut state = on_page_three();
        state.set_sort(SortOrder::Oldest);
        assert_eq!(state.params().page, 1);
    }

    #[test]
    fn unchanged_value_keeps_page() {
        let mut state = on_page_three();
        state.set_sort(SortOrder::Recent);
        state.set_search("");
        assert_eq!(state.params().page, 3);
    }
}
