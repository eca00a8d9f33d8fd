//! Tag collection and tag styling

use serde::{Deserialize, Serialize};

/// CSS class applied to every tag chip
pub const TAG_COLOR_CLASS: &str = "tag-color-1";
/// Background color of every tag chip
pub const TAG_BACKGROUND_COLOR: &str = "#00bcff";
/// Foreground color of every tag chip
pub const TAG_TEXT_COLOR: &str = "white";

/// Inline style of a tag chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStyle {
    /// Chip background
    pub background_color: &'static str,
    /// Chip text color
    pub color: &'static str,
}

/// CSS class for a tag. Every tag shares one color.
pub fn tag_color_class(_tag: &str) -> &'static str {
    TAG_COLOR_CLASS
}

/// Inline style for a tag. Every tag shares one color.
pub fn tag_color_style(_tag: &str) -> TagStyle {
    TagStyle {
        background_color: TAG_BACKGROUND_COLOR,
        color: TAG_TEXT_COLOR,
    }
}

/// Unique, non-empty tags in insertion order
///
/// Serialized as a plain list. Deserializing goes through [`TagSet::insert`],
/// so duplicates and blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag after trimming it
    ///
    /// Returns false, leaving the set unchanged, for blank or duplicate tags.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag, returning whether it was present
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Check membership
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when there are no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate tags in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Tags in insertion order
    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}
