//! Tag-driven category derivation as an ordered rule table.
//!
//! Rules are evaluated in order and the first one whose tag set intersects
//! the record's tags (case-insensitively) decides the category. Records that
//! match no rule fall back to [`Category::Technology`].

use forum_core::enums::Category;

/// One row of the rule table: any of `tags` implies `category`.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub tags: Vec<String>,
}

impl CategoryRule {
    #[must_use]
    pub fn new(category: Category, tags: &[&str]) -> Self {
        Self {
            category,
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Whether any of `record_tags` belongs to this rule.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, record_tags: &[S]) -> bool {
        record_tags.iter().any(|tag| {
            let tag = tag.as_ref().to_lowercase();
            self.tags.iter().any(|known| *known == tag)
        })
    }
}

/// Ordered rule table with a fallback category.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
    fallback: Category,
}

impl CategoryRules {
    #[must_use]
    pub const fn new(rules: Vec<CategoryRule>, fallback: Category) -> Self {
        Self { rules, fallback }
    }

    /// Append a rule with the lowest priority so far.
    #[must_use]
    pub fn with_rule(mut self, rule: CategoryRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category for a set of tags. Total: always returns exactly one category.
    #[must_use]
    pub fn derive<S: AsRef<str>>(&self, tags: &[S]) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(tags))
            .map_or(self.fallback, |rule| rule.category)
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(
            vec![
                CategoryRule::new(
                    Category::Programming,
                    &["react", "javascript", "typescript", "node.js", "python", "api"],
                ),
                CategoryRule::new(Category::Design, &["css", "html", "design", "ui", "ux"]),
                CategoryRule::new(
                    Category::Science,
                    &["ai", "machine-learning", "data-science"],
                ),
                CategoryRule::new(Category::Business, &["startup", "business", "marketing"]),
            ],
            Category::Technology,
        )
    }
}
