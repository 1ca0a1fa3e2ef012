//! Home page listing configuration.

use serde::{Deserialize, Serialize};

/// Questions shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
