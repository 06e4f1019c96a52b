//! Style templates and the resolved style records built from them.

use super::{Category, ClassList};
use serde::{Deserialize, Serialize};

/// Color-specific class fragment of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Color name as shown to users (e.g. "Emerald")
    pub name: String,
    /// Classes applied for this color
    pub classes: ClassList,
}

impl ColorEntry {
    /// Creates a color entry from a raw class string.
    pub fn new(name: impl Into<String>, classes: &str) -> Self {
        Self {
            name: name.into(),
            classes: ClassList::parse(classes),
        }
    }
}

/// Author-defined style archetype, before shape and color expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTemplate {
    /// Short label (e.g. "Solid Standard")
    pub name: String,
    /// Directives shared by every color and shape
    pub base_classes: ClassList,
    /// Functional category
    pub category: Category,
    /// Ordered color map; names are unique
    pub colors: Vec<ColorEntry>,
    /// Label is long text, so the Circle shape is never produced
    pub long_label: bool,
}

impl StyleTemplate {
    /// Creates a template with no colors.
    pub fn new(name: impl Into<String>, base_classes: &str, category: Category) -> Self {
        Self {
            name: name.into(),
            base_classes: ClassList::parse(base_classes),
            category,
            colors: Vec::new(),
            long_label: false,
        }
    }

    /// Adds a color entry.
    pub fn with_color(mut self, name: impl Into<String>, classes: &str) -> Self {
        self.colors.push(ColorEntry::new(name, classes));
        self
    }

    /// Marks the template as carrying a long text label.
    pub fn with_long_label(mut self) -> Self {
        self.long_label = true;
        self
    }

    /// Text-heavy templates are excluded from the Circle shape.
    #[must_use]
    pub fn is_text_heavy(&self) -> bool {
        self.category.is_text_heavy() || self.long_label
    }
}

/// One fully resolved button style in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Functional category
    pub category: Category,
    /// Final class string
    pub classes: String,
    /// Lowercase search tags
    pub tags: Vec<String>,
}

impl StyleRecord {
    /// Returns true if this record's tags include `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over name, classes and tags.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.classes.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
