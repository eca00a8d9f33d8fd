//! Content slot store
//!
//! The editor holds three independent text buffers. Each buffer remembers
//! the format its text is wrapped in, so changing the format of one slot can
//! never leave another slot claiming a format its text is not in.

use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one of the three editor tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSlot {
    /// The prompt itself
    #[default]
    Prompt,
    /// An example of the prompt in use
    Example,
    /// Instructions for using the prompt
    HowToUse,
}

impl ContentSlot {
    /// All slots in tab order
    pub const ALL: [ContentSlot; 3] = [
        ContentSlot::Prompt,
        ContentSlot::Example,
        ContentSlot::HowToUse,
    ];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ContentSlot::Prompt => "Prompt",
            ContentSlot::Example => "Example",
            ContentSlot::HowToUse => "How to Use",
        }
    }
}

impl fmt::Display for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text of one slot together with the format it is wrapped in
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotText {
    /// Stored text; when non-empty it is expected to be in `format`'s shape
    pub text: String,
    /// Format the text is held in
    pub format: Format,
}

impl SlotText {
    /// Create an empty slot in the given format
    pub fn empty(format: Format) -> Self {
        Self {
            text: String::new(),
            format,
        }
    }

    /// True when the slot holds no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The three slot buffers plus the active tab
///
/// Keystrokes go through [`SlotStore::write_active_slot`], which stores text
/// verbatim. Format changes go through [`crate::transcode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStore {
    prompt: SlotText,
    example: SlotText,
    how_to_use: SlotText,
    active: ContentSlot,
}

impl SlotStore {
    /// Create a store with three empty slots in `format`, the prompt tab active
    pub fn new(format: Format) -> Self {
        Self {
            prompt: SlotText::empty(format),
            example: SlotText::empty(format),
            how_to_use: SlotText::empty(format),
            active: ContentSlot::Prompt,
        }
    }

    /// Currently selected tab
    pub fn active_slot(&self) -> ContentSlot {
        self.active
    }

    /// Select a tab; slot contents are untouched
    pub fn set_active_slot(&mut self, slot: ContentSlot) {
        self.active = slot;
    }

    /// Overwrite the active slot's text without any extraction
    pub fn write_active_slot(&mut self, text: impl Into<String>) {
        let slot = self.active;
        self.slot_mut(slot).text = text.into();
    }

    /// Text of the active slot
    pub fn read_active_slot(&self) -> &str {
        &self.slot(self.active).text
    }

    /// Format of the active slot
    pub fn active_format(&self) -> Format {
        self.slot(self.active).format
    }

    /// Borrow a slot
    pub fn slot(&self, slot: ContentSlot) -> &SlotText {
        match slot {
            ContentSlot::Prompt => &self.prompt,
            ContentSlot::Example => &self.example,
            ContentSlot::HowToUse => &self.how_to_use,
        }
    }

    /// Text of any slot
    pub fn read(&self, slot: ContentSlot) -> &str {
        &self.slot(slot).text
    }

    /// Format of any slot
    pub fn format_of(&self, slot: ContentSlot) -> Format {
        self.slot(slot).format
    }

    /// True when every slot is empty
    pub fn is_empty(&self) -> bool {
        ContentSlot::ALL.iter().all(|slot| self.slot(*slot).is_empty())
    }

    /// True when not all slots are held in the same format
    pub fn has_mixed_formats(&self) -> bool {
        let first = self.prompt.format;
        self.example.format != first || self.how_to_use.format != first
    }

    pub(crate) fn slot_mut(&mut self, slot: ContentSlot) -> &mut SlotText {
        match slot {
            ContentSlot::Prompt => &mut self.prompt,
            ContentSlot::Example => &mut self.example,
            ContentSlot::HowToUse => &mut self.how_to_use,
        }
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new(Format::default())
    }
}
