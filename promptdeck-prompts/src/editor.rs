//! Prompt editor session and the draft it produces
//!
//! [`PromptEditor`] is the state behind the create/edit prompt dialog: the
//! metadata fields, the tag set, and the three content slots. Everything is
//! discarded when the editor is dropped; [`PromptEditor::save`] hands back
//! a [`PromptDraft`] for the caller to store.

use crate::config::EditorConfig;
use crate::extractor::extract;
use crate::format::Format;
use crate::formatter::format;
use crate::slots::{ContentSlot, SlotStore, SlotText};
use crate::tags::TagSet;
use crate::transcode::{self, TranscodeOutcome};
use crate::validation::{Validatable, ValidationIssue};
use promptdeck_common::{Pretty, PromptDeckError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Message shown when a draft is saved without its required fields
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in title and description";

/// Contents of the three slots, each with its own format
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftContent {
    /// The prompt itself
    pub prompt: SlotText,
    /// An example of the prompt in use
    pub example: SlotText,
    /// Instructions for using the prompt
    pub how_to_use: SlotText,
}

impl DraftContent {
    /// Borrow one slot
    pub fn get(&self, slot: ContentSlot) -> &SlotText {
        match slot {
            ContentSlot::Prompt => &self.prompt,
            ContentSlot::Example => &self.example,
            ContentSlot::HowToUse => &self.how_to_use,
        }
    }

    /// Raw text of one slot with its wrapper removed
    pub fn raw(&self, slot: ContentSlot) -> String {
        let entry = self.get(slot);
        extract(&entry.text, entry.format)
    }
}

/// A saved prompt, ready to be handed to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    /// Title, never blank
    pub title: String,
    /// Description, never blank
    pub description: String,
    /// Category, defaulted when left blank
    pub category: String,
    /// Unique tags in insertion order
    pub tags: Vec<String>,
    /// Rating between zero and the configured maximum
    pub rating: u8,
    /// Slot contents
    pub content: DraftContent,
    /// Format of the slot that was active when the draft was saved
    pub format: Format,
}

/// State of one create/edit prompt session
#[derive(Debug, Clone)]
pub struct PromptEditor {
    title: String,
    description: String,
    category: String,
    tags: TagSet,
    rating: u8,
    slots: SlotStore,
    config: EditorConfig,
}

impl PromptEditor {
    /// Open a blank editor
    pub fn new(config: EditorConfig) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            tags: TagSet::new(),
            rating: 0,
            slots: SlotStore::new(config.default_format),
            config,
        }
    }

    /// Open an editor pre-filled from an existing draft
    ///
    /// The first tab whose format matches `draft.format` becomes active, so
    /// saving the reopened editor reproduces the draft.
    pub fn from_draft(draft: &PromptDraft, config: EditorConfig) -> Self {
        let mut editor = Self::new(config);
        editor.title = draft.title.clone();
        editor.description = draft.description.clone();
        editor.category = draft.category.clone();
        editor.tags = draft.tags.iter().collect();
        editor.rating = draft.rating.min(editor.config.max_rating);
        for slot in ContentSlot::ALL {
            *editor.slots.slot_mut(slot) = draft.content.get(slot).clone();
        }
        if let Some(active) = ContentSlot::ALL
            .into_iter()
            .find(|slot| draft.content.get(*slot).format == draft.format)
        {
            editor.slots.set_active_slot(active);
        }
        editor
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the category
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Clear the category so the default applies on save
    pub fn clear_category(&mut self) {
        self.category.clear();
    }

    /// Add a tag; blank and duplicate tags are ignored
    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tags.insert(tag)
    }

    /// Remove a tag
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Set the rating, rejecting values above the configured maximum
    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if rating > self.config.max_rating {
            return Err(PromptDeckError::InvalidRating {
                rating,
                max: self.config.max_rating,
            });
        }
        self.rating = rating;
        Ok(())
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category as typed, possibly blank
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Tags
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Rating
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Slot store
    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    /// Select a tab
    pub fn select_slot(&mut self, slot: ContentSlot) {
        self.slots.set_active_slot(slot);
    }

    /// Store a keystroke edit in the active slot verbatim
    pub fn write(&mut self, text: impl Into<String>) {
        self.slots.write_active_slot(text);
    }

    /// Text of the active slot
    pub fn read(&self) -> &str {
        self.slots.read_active_slot()
    }

    /// Format of the active slot
    pub fn active_format(&self) -> Format {
        self.slots.active_format()
    }

    /// Change the active slot's format, transcoding its text
    pub fn switch_format(&mut self, new_format: Format) -> TranscodeOutcome {
        transcode::switch_format(&mut self.slots, new_format)
    }

    /// Formatted preview of the active slot, `None` when the slot is empty
    ///
    /// Text already in the slot's wrapper is shown as-is; text that was typed
    /// raw is shown wrapped.
    pub fn preview(&self) -> Option<String> {
        let text = self.read();
        if text.is_empty() {
            return None;
        }
        let active_format = self.active_format();
        Some(format(&extract(text, active_format), active_format))
    }

    /// Clipboard payload for the active slot
    pub fn copy_text(&self) -> String {
        self.read().to_string()
    }

    /// Validate and produce the draft
    ///
    /// On failure the editor is left as it was so the user can fix the
    /// missing fields and retry.
    pub fn save(&self) -> Result<PromptDraft> {
        let validation = self.validation_result();
        if validation.has_errors() {
            debug!(
                errors = validation.errors().len(),
                "Rejected save with missing title or description"
            );
            return Err(PromptDeckError::validation(MISSING_REQUIRED_FIELDS));
        }

        let category = if self.category.trim().is_empty() {
            self.config.default_category.clone()
        } else {
            self.category.clone()
        };

        let draft = PromptDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            tags: self.tags.to_vec(),
            rating: self.rating,
            content: DraftContent {
                prompt: self.slots.slot(ContentSlot::Prompt).clone(),
                example: self.slots.slot(ContentSlot::Example).clone(),
                how_to_use: self.slots.slot(ContentSlot::HowToUse).clone(),
            },
            format: self.active_format(),
        };

        info!("Saved prompt draft '{}'", draft.title);
        debug!("Draft: {}", Pretty(&draft));
        Ok(draft)
    }
}

impl Default for PromptEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Validatable for PromptEditor {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(
                ValidationIssue::error("title", "Title is required")
                    .with_suggestion("Enter prompt title..."),
            );
        }
        if self.description.trim().is_empty() {
            issues.push(
                ValidationIssue::error("description", "Description is required")
                    .with_suggestion("Enter prompt description..."),
            );
        }
        if self.slots.read(ContentSlot::Prompt).trim().is_empty() {
            issues.push(ValidationIssue::warning("content.prompt", "Prompt text is empty"));
        }
        if self.slots.has_mixed_formats() {
            issues.push(ValidationIssue::info(
                "format",
                "Slots are held in different formats",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_editor() -> PromptEditor {
        let mut editor = PromptEditor::default();
        editor.set_title("Code Review Assistant");
        editor.set_description("Analyze code quality and suggest improvements");
        editor
    }

    #[test]
    fn test_save_requires_title_and_description() {
        let mut editor = PromptEditor::default();
        editor.set_title("Only a title");

        let err = editor.save().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(MISSING_REQUIRED_FIELDS));
        assert_eq!(editor.title(), "Only a title");

        editor.set_description("   ");
        assert!(editor.save().is_err());
    }

    #[test]
    fn test_blank_category_defaults_to_general() {
        let mut editor = filled_editor();
        editor.set_category("  ");
        assert_eq!(editor.save().unwrap().category, "general");

        editor.set_category("frontend");
        assert_eq!(editor.save().unwrap().category, "frontend");

        editor.clear_category();
        assert_eq!(editor.save().unwrap().category, "general");
    }

    #[test]
    fn test_configured_default_category() {
        let config = EditorConfig {
            default_category: "misc".to_string(),
            ..EditorConfig::default()
        };
        let mut editor = PromptEditor::new(config);
        editor.set_title("t");
        editor.set_description("d");
        assert_eq!(editor.save().unwrap().category, "misc");
    }

    #[test]
    fn test_tags_are_a_set() {
        let mut editor = filled_editor();
        assert!(editor.add_tag("work"));
        assert!(editor.add_tag(" chatgpt "));
        assert!(!editor.add_tag("work"));
        assert!(!editor.add_tag(""));
        assert!(editor.remove_tag("work"));

        assert_eq!(editor.save().unwrap().tags, vec!["chatgpt"]);
    }

    #[test]
    fn test_rating_bounds() {
        let mut editor = filled_editor();
        editor.set_rating(5).unwrap();
        assert_eq!(editor.rating(), 5);

        let err = editor.set_rating(6).unwrap_err();
        assert!(matches!(err, PromptDeckError::InvalidRating { rating: 6, max: 5 }));
        assert_eq!(editor.rating(), 5);
    }

    #[test]
    fn test_draft_carries_slots_and_active_format() {
        let mut editor = filled_editor();
        editor.write("Summarize the text");
        editor.switch_format(Format::Markdown);
        editor.select_slot(ContentSlot::Example);
        editor.write("{\n  \"prompt\": \"An example\"\n}");

        let draft = editor.save().unwrap();
        assert_eq!(draft.format, Format::Json);
        assert_eq!(draft.content.prompt.format, Format::Markdown);
        assert_eq!(draft.content.prompt.text, "# Prompt\n\nSummarize the text");
        assert_eq!(draft.content.raw(ContentSlot::Prompt), "Summarize the text");
        assert_eq!(draft.content.raw(ContentSlot::Example), "An example");
        assert_eq!(draft.content.raw(ContentSlot::HowToUse), "");
    }

    #[test]
    fn test_draft_serializes_camel_case_content() {
        let draft = filled_editor().save().unwrap();
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["content"].get("howToUse").is_some());
        assert_eq!(value["format"], "json");
        assert_eq!(value["rating"], 0);
    }

    #[test]
    fn test_preview() {
        let mut editor = filled_editor();
        assert_eq!(editor.preview(), None);

        editor.write("typed raw");
        assert_eq!(
            editor.preview().unwrap(),
            "{\n  \"prompt\": \"typed raw\"\n}"
        );

        editor.switch_format(Format::Yaml);
        assert_eq!(editor.read(), "prompt: |\n  typed raw");
        assert_eq!(editor.preview().unwrap(), "prompt: |\n  typed raw");
    }

    #[test]
    fn test_copy_text_is_active_slot() {
        let mut editor = filled_editor();
        editor.select_slot(ContentSlot::HowToUse);
        editor.write("Paste into the chat");
        assert_eq!(editor.copy_text(), "Paste into the chat");
    }

    #[test]
    fn test_from_draft_round_trip() {
        let mut editor = filled_editor();
        editor.add_tag("work");
        editor.set_rating(4).unwrap();
        editor.write("body");
        editor.switch_format(Format::Csv);
        let draft = editor.save().unwrap();

        let reopened = PromptEditor::from_draft(&draft, EditorConfig::default());
        assert_eq!(reopened.save().unwrap(), draft);
        assert_eq!(reopened.active_format(), Format::Csv);
    }

    #[test]
    fn test_from_draft_restores_active_tab() {
        let mut editor = filled_editor();
        editor.write("body");
        editor.select_slot(ContentSlot::Example);
        editor.write("an example");
        editor.switch_format(Format::Csv);
        let draft = editor.save().unwrap();
        assert_eq!(draft.format, Format::Csv);

        let reopened = PromptEditor::from_draft(&draft, EditorConfig::default());
        assert_eq!(reopened.slots().active_slot(), ContentSlot::Example);
        assert_eq!(reopened.read(), "\"prompt\"\n\"an example\"");
        assert_eq!(reopened.save().unwrap(), draft);
    }

    #[test]
    fn test_validation_issues() {
        let mut editor = PromptEditor::default();
        let errors = editor.get_errors();
        assert_eq!(errors.len(), 2);
        assert!(!editor.is_valid());
        assert_eq!(editor.get_warnings().len(), 1);

        editor.set_title("t");
        editor.set_description("d");
        editor.write("text");
        assert!(editor.is_valid());
        assert!(editor.validate().is_empty());
        assert!(editor.validation_result().is_ok());

        editor.switch_format(Format::Xml);
        let issues = editor.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].level.is_info());
    }
}
