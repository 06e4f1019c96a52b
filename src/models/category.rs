//! Functional categories for organizing button styles.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic role of a button style.
///
/// The set is closed: every template and every record carries exactly one
/// of these variants. The serialized form is the kebab-case `id()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Solid call-to-action buttons
    Primary,
    /// Lower-emphasis companions to primary buttons
    Secondary,
    /// Border-only buttons
    Outline,
    /// Text buttons without a resting background
    Ghost,
    /// Floating action buttons (icon-only, circular)
    #[serde(rename = "fab")]
    FloatingAction,
    /// Inline text links
    Link,
    /// Destructive actions (delete, remove)
    Destructive,
    /// Success confirmations
    Success,
    /// Warnings
    Warning,
    /// Informational actions
    Info,
    /// Hover animations
    #[serde(rename = "hover-fx")]
    HoverEffect,
    /// Click/press animations
    #[serde(rename = "click-fx")]
    ClickEffect,
    /// Loading indicators
    Loading,
    /// Text animations
    #[serde(rename = "text-fx")]
    TextEffect,
    /// Icon animations
    #[serde(rename = "icon-fx")]
    IconEffect,
    /// Shape and morph animations
    #[serde(rename = "shape-fx")]
    ShapeEffect,
    /// Depth and 3D effects
    #[serde(rename = "3d")]
    ThreeD,
    /// One-off special effects
    Special,
    /// Hand-authored gradient buttons
    Gradient,
    /// State feedback (success, error, disabled, toggle)
    State,
    /// Styles produced by the AI generator
    AiGenerated,
}

impl Category {
    /// Every category in navigation order.
    ///
    /// `AiGenerated` comes last; it only has members after a generation run.
    pub const ALL: [Category; 21] = [
        Category::Primary,
        Category::Secondary,
        Category::Outline,
        Category::Ghost,
        Category::FloatingAction,
        Category::Link,
        Category::Destructive,
        Category::Success,
        Category::Warning,
        Category::Info,
        Category::HoverEffect,
        Category::ClickEffect,
        Category::Loading,
        Category::TextEffect,
        Category::IconEffect,
        Category::ShapeEffect,
        Category::ThreeD,
        Category::Special,
        Category::State,
        Category::Gradient,
        Category::AiGenerated,
    ];

    /// Stable kebab-case identifier (e.g. "hover-fx", "3d").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Secondary => "secondary",
            Category::Outline => "outline",
            Category::Ghost => "ghost",
            Category::FloatingAction => "fab",
            Category::Link => "link",
            Category::Destructive => "destructive",
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::HoverEffect => "hover-fx",
            Category::ClickEffect => "click-fx",
            Category::Loading => "loading",
            Category::TextEffect => "text-fx",
            Category::IconEffect => "icon-fx",
            Category::ShapeEffect => "shape-fx",
            Category::ThreeD => "3d",
            Category::Special => "special",
            Category::Gradient => "gradient",
            Category::State => "state",
            Category::AiGenerated => "ai-generated",
        }
    }

    /// Human-readable name shown in navigation (e.g. "Hover FX").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Primary => "Primary",
            Category::Secondary => "Secondary",
            Category::Outline => "Outline",
            Category::Ghost => "Ghost",
            Category::FloatingAction => "FAB",
            Category::Link => "Link",
            Category::Destructive => "Destructive",
            Category::Success => "Success",
            Category::Warning => "Warning",
            Category::Info => "Info",
            Category::HoverEffect => "Hover FX",
            Category::ClickEffect => "Click FX",
            Category::Loading => "Loading",
            Category::TextEffect => "Text FX",
            Category::IconEffect => "Icon FX",
            Category::ShapeEffect => "Shape FX",
            Category::ThreeD => "3D",
            Category::Special => "Special",
            Category::Gradient => "Gradient",
            Category::State => "State",
            Category::AiGenerated => "AI Generated",
        }
    }

    /// Lowercased display name, used as the category search tag.
    #[must_use]
    pub fn tag(self) -> String {
        self.display_name().to_lowercase()
    }

    /// Text-heavy categories never get the Circle shape.
    #[must_use]
    pub const fn is_text_heavy(self) -> bool {
        matches!(self, Category::TextEffect)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Accepts the id ("hover-fx") or the display name ("Hover FX"), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(needle) || c.display_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow::anyhow!("Unknown category '{needle}'"))
    }
}

/// Category selection for the query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category constraint
    #[default]
    All,
    /// Only records of this category
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` passes this selection.
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    /// "all" (or an empty string) selects everything; anything else must name a category.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        trimmed.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
