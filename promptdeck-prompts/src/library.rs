//! In-memory prompt card collection
//!
//! Cards are the summary view of saved drafts: metadata only, no slot
//! content. Ids are assigned in increasing order and never reused.

use crate::editor::PromptDraft;
use crate::prompt_filter::PromptFilter;
use promptdeck_common::{PromptDeckError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary of a saved prompt as shown in the card grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCard {
    /// Library-assigned id
    pub id: u64,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Category
    pub category: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Rating
    #[serde(default)]
    pub rating: u8,
}

impl PromptCard {
    /// Clipboard payload for the card
    pub fn copy_text(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// Ordered collection of prompt cards
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    cards: Vec<PromptCard>,
    next_id: u64,
    max_rating: u8,
}

impl PromptLibrary {
    /// Create an empty library accepting ratings up to `max_rating`
    pub fn new(max_rating: u8) -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
            max_rating,
        }
    }

    /// Build a library from existing cards, keeping their ids
    pub fn from_cards(cards: Vec<PromptCard>, max_rating: u8) -> Result<Self> {
        let mut library = Self::new(max_rating);
        for card in cards {
            library.insert(card)?;
        }
        Ok(library)
    }

    /// Library holding the bundled sample cards
    ///
    /// Sample ratings above `max_rating` are clamped to it.
    pub fn sample(max_rating: u8) -> Self {
        let mut library = Self::new(max_rating);
        for (id, (title, description, category, tags, rating)) in (1..).zip(SAMPLE_CARDS) {
            library.cards.push(PromptCard {
                id,
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                rating: (*rating).min(max_rating),
            });
            library.next_id = id + 1;
        }
        library
    }

    /// Add a saved draft as a new card and return its id
    pub fn add(&mut self, draft: &PromptDraft) -> Result<u64> {
        self.check_rating(draft.rating)?;
        let id = self.next_id;
        self.next_id = Self::successor(id)?;
        self.cards.push(PromptCard {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            tags: draft.tags.clone(),
            rating: draft.rating,
        });
        debug!("Added prompt card {} '{}'", id, draft.title);
        Ok(id)
    }

    /// Insert a card with a known id, replacing any card with the same id
    pub fn insert(&mut self, card: PromptCard) -> Result<()> {
        self.check_rating(card.rating)?;
        self.next_id = self.next_id.max(Self::successor(card.id)?);
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
        Ok(())
    }

    /// Look up a card
    pub fn get(&self, id: u64) -> Result<&PromptCard> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or(PromptDeckError::PromptNotFound(id))
    }

    /// Remove a card, returning it
    pub fn remove(&mut self, id: u64) -> Result<PromptCard> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(PromptDeckError::PromptNotFound(id))?;
        debug!("Removed prompt card {}", id);
        Ok(self.cards.remove(index))
    }

    /// Change a card's rating
    pub fn set_rating(&mut self, id: u64, rating: u8) -> Result<()> {
        self.check_rating(rating)?;
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(PromptDeckError::PromptNotFound(id))?;
        card.rating = rating;
        Ok(())
    }

    /// Clipboard payload for a card
    pub fn copy_text(&self, id: u64) -> Result<String> {
        Ok(self.get(id)?.copy_text())
    }

    /// All cards in insertion order
    pub fn list(&self) -> &[PromptCard] {
        &self.cards
    }

    /// Cards matching a filter, in insertion order
    pub fn filter(&self, filter: &PromptFilter) -> Vec<&PromptCard> {
        filter.apply(&self.cards)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category) {
                seen.push(card.category.clone());
            }
        }
        seen
    }

    /// Distinct tags in first-seen order
    pub fn tags(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tag in self.cards.iter().flat_map(|card| card.tags.iter()) {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
        seen
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the library holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn successor(id: u64) -> Result<u64> {
        id.checked_add(1).ok_or_else(|| {
            PromptDeckError::validation(format!("Card id {} leaves no room for new ids", id))
        })
    }

    fn check_rating(&self, rating: u8) -> Result<()> {
        if rating > self.max_rating {
            return Err(PromptDeckError::InvalidRating {
                rating,
                max: self.max_rating,
            });
        }
        Ok(())
    }
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self::new(5)
    }
}

type SampleCard = (&'static str, &'static str, &'static str, &'static [&'static str], u8);

const SAMPLE_CARDS: &[SampleCard] = &[
    (
        "Creative Writing Prompt",
        "Generate engaging stories with unique characters and plot twists",
        "writing",
        &["chatgpt", "super"],
        4,
    ),
    (
        "Code Review Assistant",
        "Analyze code quality and suggest improvements",
        "frontend",
        &["work", "prompt"],
        5,
    ),
    (
        "Brand Voice Generator",
        "Create consistent brand messaging across platforms",
        "vibe",
        &["chatgpt", "work"],
        3,
    ),
    (
        "API Documentation Writer",
        "Generate comprehensive API documentation",
        "backend",
        &["work", "vit"],
        4,
    ),
    (
        "Artistic Style Advisor",
        "Provide guidance on artistic techniques and styles",
        "artist",
        &["super", "vit"],
        5,
    ),
    (
        "UI Component Generator",
        "Create reusable UI components with best practices",
        "frontend",
        &["prompt", "work"],
        4,
    ),
    (
        "Database Query Optimizer",
        "Optimize SQL queries for better performance",
        "backend",
        &["work", "super"],
        3,
    ),
    (
        "Creative Storytelling",
        "Craft compelling narratives for various media",
        "writing",
        &["chatgpt", "vit"],
        5,
    ),
];
