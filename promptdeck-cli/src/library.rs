//! The library command: list and filter prompt cards.
//!
//! Cards come from a JSON array file, or the bundled sample cards when no
//! file is given. With `seed_library` enabled the sample cards are loaded
//! first and cards from the file override them by id. Sample ratings are
//! clamped to the configured maximum.

use std::fs;
use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Table};
use promptdeck_common::{ErrorContext, Result};
use promptdeck_prompts::{EditorConfig, PromptCard, PromptFilter, PromptLibrary};

/// Maximum length for description in table display before truncation.
const MAX_DESCRIPTION_LENGTH: usize = 50;

/// Options of `promptdeck library`.
#[derive(Debug, Default)]
pub struct LibraryOptions<'a> {
    /// Card file
    pub file: Option<&'a Path>,
    /// Search text
    pub search: Option<String>,
    /// Category selector
    pub category: Option<String>,
    /// Tag selector
    pub tag: Option<String>,
    /// Print JSON instead of a table
    pub json: bool,
}

impl LibraryOptions<'_> {
    fn filter(&self) -> PromptFilter {
        let mut filter = PromptFilter::new();
        if let Some(search) = &self.search {
            filter = filter.with_search(search.as_str());
        }
        if let Some(category) = &self.category {
            filter = filter.with_category(category.as_str());
        }
        if let Some(tag) = &self.tag {
            filter = filter.with_tag(tag.as_str());
        }
        filter
    }
}

/// Load the library the command lists.
pub fn load_library(file: Option<&Path>, config: &EditorConfig) -> Result<PromptLibrary> {
    let Some(path) = file else {
        return Ok(PromptLibrary::sample(config.max_rating));
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read card file {}", path.display()))?;
    let cards: Vec<PromptCard> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse card file {}", path.display()))?;
    tracing::debug!("Loaded {} cards from {}", cards.len(), path.display());

    if !config.seed_library {
        return PromptLibrary::from_cards(cards, config.max_rating);
    }

    let mut library = PromptLibrary::sample(config.max_rating);
    for card in cards {
        library.insert(card)?;
    }
    Ok(library)
}

/// Render the filtered cards as a table or JSON.
pub fn render_library(
    library: &PromptLibrary,
    options: &LibraryOptions<'_>,
    max_rating: u8,
) -> Result<String> {
    let cards = library.filter(&options.filter());

    if options.json {
        return Ok(serde_json::to_string_pretty(&cards)?);
    }

    if cards.is_empty() {
        return Ok("No prompts found.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Title", "Description", "Category", "Tags", "Rating"]);

    for card in cards {
        table.add_row(vec![
            card.id.to_string(),
            card.title.clone(),
            truncate_description(&card.description, MAX_DESCRIPTION_LENGTH),
            card.category.clone(),
            card.tags.join(", "),
            stars(card.rating, max_rating),
        ]);
    }

    Ok(table.to_string())
}

/// Run `promptdeck library`.
pub fn run_library(options: &LibraryOptions<'_>, config: &EditorConfig) -> Result<()> {
    let library = load_library(options.file, config)?;
    println!("{}", render_library(&library, options, config.max_rating)?);
    Ok(())
}

/// Truncate a description to `max_len` characters, appending "..." if truncated.
fn truncate_description(desc: &str, max_len: usize) -> String {
    if desc.chars().count() > max_len {
        let truncated: String = desc.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        desc.to_string()
    }
}

fn stars(rating: u8, max_rating: u8) -> String {
    let filled = usize::from(rating.min(max_rating));
    let empty = usize::from(max_rating) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_library_without_file() {
        let library = load_library(None, &EditorConfig::default()).unwrap();
        assert_eq!(library.len(), 8);
    }

    #[test]
    fn test_load_library_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(
            &path,
            r#"[{"id": 3, "title": "Mine", "description": "Own card", "category": "misc", "tags": ["x"], "rating": 2}]"#,
        )
        .unwrap();

        let library = load_library(Some(&path), &EditorConfig::default()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.get(3).unwrap().title, "Mine");

        let seeded = EditorConfig {
            seed_library: true,
            ..EditorConfig::default()
        };
        let library = load_library(Some(&path), &seeded).unwrap();
        assert_eq!(library.len(), 8);
        assert_eq!(library.get(3).unwrap().title, "Mine");
    }

    #[test]
    fn test_sample_library_follows_max_rating() {
        let config = EditorConfig {
            max_rating: 3,
            ..EditorConfig::default()
        };
        let library = load_library(None, &config).unwrap();
        assert!(library.list().iter().all(|card| card.rating <= 3));

        let options = LibraryOptions::default();
        let table = render_library(&library, &options, config.max_rating).unwrap();
        assert!(table.contains("★★★"));
        assert!(!table.contains("☆☆☆☆"));
    }

    #[test]
    fn test_seeded_library_with_lower_max_rating() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(
            &path,
            r#"[{"id": 9, "title": "Mine", "description": "Own card", "category": "misc", "rating": 2}]"#,
        )
        .unwrap();

        let config = EditorConfig {
            seed_library: true,
            max_rating: 3,
            ..EditorConfig::default()
        };
        let library = load_library(Some(&path), &config).unwrap();
        assert_eq!(library.len(), 9);
        assert_eq!(library.get(2).unwrap().rating, 3);
        assert_eq!(library.get(9).unwrap().title, "Mine");
    }

    #[test]
    fn test_load_library_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, "not json").unwrap();

        let err = load_library(Some(&path), &EditorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse card file"));
    }

    #[test]
    fn test_render_filtered_json() {
        let library = PromptLibrary::sample(5);
        let options = LibraryOptions {
            category: Some("backend".to_string()),
            tag: Some("super".to_string()),
            json: true,
            ..LibraryOptions::default()
        };

        let rendered = render_library(&library, &options, 5).unwrap();
        let cards: Vec<PromptCard> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Database Query Optimizer");
    }

    #[test]
    fn test_render_table_and_empty_result() {
        let library = PromptLibrary::sample(5);
        let table = render_library(&library, &LibraryOptions::default(), 5).unwrap();
        assert!(table.contains("Creative Storytelling"));
        assert!(table.contains("★★★★☆"));

        let options = LibraryOptions {
            search: Some("no such prompt".to_string()),
            ..LibraryOptions::default()
        };
        assert_eq!(
            render_library(&library, &options, 5).unwrap(),
            "No prompts found."
        );
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short", 10), "short");
        assert_eq!(truncate_description("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_description("this is too long", 10), "this is...");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3, 5), "★★★☆☆");
        assert_eq!(stars(0, 3), "☆☆☆");
        assert_eq!(stars(9, 2), "★★");
    }
}
