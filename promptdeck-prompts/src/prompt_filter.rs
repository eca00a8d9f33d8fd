//! Prompt card filtering
//!
//! This module selects prompt cards by a free-text search over title and
//! description, a category, and a tag. All given criteria must match.

use crate::library::PromptCard;
use serde::{Deserialize, Serialize};

/// Selector value meaning "no restriction" for category and tag
pub const ALL_OPTION: &str = "ALL";

/// Filter criteria for selecting prompt cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFilter {
    /// Case-insensitive text to find in the title or description
    pub search: Option<String>,
    /// Category the card must have
    pub category: Option<String>,
    /// Tag the card must carry
    pub tag: Option<String>,
}

impl PromptFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter for a search term
    pub fn by_search(search: impl Into<String>) -> Self {
        Self::new().with_search(search)
    }

    /// Create a filter for a specific category
    pub fn by_category(category: impl Into<String>) -> Self {
        Self::new().with_category(category)
    }

    /// Create a filter for a specific tag
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self::new().with_tag(tag)
    }

    /// Set the search term
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the category filter; `"ALL"` clears it
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Self::selector(category.into());
        self
    }

    /// Set the tag filter; `"ALL"` clears it
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Self::selector(tag.into());
        self
    }

    fn selector(value: String) -> Option<String> {
        if value == ALL_OPTION {
            None
        } else {
            Some(value)
        }
    }

    /// Apply the filter, keeping input order
    pub fn apply<'a>(&self, cards: impl IntoIterator<Item = &'a PromptCard>) -> Vec<&'a PromptCard> {
        cards.into_iter().filter(|card| self.matches(card)).collect()
    }

    /// Check if a card matches the filter criteria
    pub fn matches(&self, card: &PromptCard) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !card.title.to_lowercase().contains(&needle)
                && !card.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref() {
            if category != ALL_OPTION && card.category != category {
                return false;
            }
        }

        if let Some(tag) = self.tag.as_deref() {
            if tag != ALL_OPTION && !card.tags.iter().any(|t| t == tag) {
                return false;
            }
        }

        true
    }

    /// Check if the filter is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.category.as_deref().map_or(true, |c| c == ALL_OPTION)
            && self.tag.as_deref().map_or(true, |t| t == ALL_OPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, title: &str, description: &str, category: &str, tags: &[&str]) -> PromptCard {
        PromptCard {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            rating: 0,
        }
    }

    #[test]
    fn test_empty_filter() {
        let filter = PromptFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&card(1, "t", "d", "c", &[])));
        assert!(PromptFilter::by_search("").is_empty());
        assert!(PromptFilter::by_category("ALL").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let c = card(1, "Code Review Assistant", "Analyze code quality", "frontend", &[]);
        assert!(PromptFilter::by_search("REVIEW").matches(&c));
        assert!(PromptFilter::by_search("quality").matches(&c));
        assert!(!PromptFilter::by_search("database").matches(&c));
    }

    #[test]
    fn test_category_filter() {
        let filter = PromptFilter::by_category("backend");
        assert!(filter.matches(&card(1, "t", "d", "backend", &[])));
        assert!(!filter.matches(&card(2, "t", "d", "frontend", &[])));
    }

    #[test]
    fn test_tag_filter() {
        let filter = PromptFilter::by_tag("work");
        assert!(filter.matches(&card(1, "t", "d", "c", &["chatgpt", "work"])));
        assert!(!filter.matches(&card(2, "t", "d", "c", &["vit"])));
        assert!(!filter.matches(&card(3, "t", "d", "c", &[])));
    }

    #[test]
    fn test_all_sentinel_clears_selector() {
        let filter = PromptFilter::by_tag("work").with_tag(ALL_OPTION);
        assert_eq!(filter.tag, None);
        assert!(filter.matches(&card(1, "t", "d", "c", &[])));
    }

    #[test]
    fn test_deserialized_all_is_honored() {
        let filter: PromptFilter =
            serde_json::from_str(r#"{"search": null, "category": "ALL", "tag": "ALL"}"#).unwrap();
        assert!(filter.is_empty());
        assert!(filter.matches(&card(1, "t", "d", "anything", &["x"])));
    }

    #[test]
    fn test_criteria_combine() {
        let filter = PromptFilter::by_search("creative")
            .with_category("writing")
            .with_tag("vit");
        let cards = [
            card(1, "Creative Writing Prompt", "stories", "writing", &["chatgpt", "super"]),
            card(8, "Creative Storytelling", "narratives", "writing", &["chatgpt", "vit"]),
            card(5, "Artistic Style Advisor", "creative styles", "artist", &["vit"]),
        ];

        let filtered = filter.apply(&cards);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 8);
    }
}
