//! External style generator boundary.
//!
//! A generator turns a free-text prompt into a style record. Every failure mode
//! (transport, status, malformed payload, missing classes) surfaces as `None`;
//! callers never see a generator error.

pub mod gemini;

use crate::models::{normalize_whitespace, Category, StyleRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiGenerator;

/// Name used when the collaborator omits one.
pub const PLACEHOLDER_NAME: &str = "AI Magic Button";

/// Tags attached to every generated record.
pub const GENERATED_TAGS: [&str; 3] = ["ai", "generated", "custom"];

/// Produces a style record from a prompt.
#[async_trait]
pub trait StyleGenerator: Send + Sync {
    /// Returns a new record, or `None` if generation failed for any reason.
    async fn generate(&self, prompt: &str) -> Option<StyleRecord>;
}

/// Raw payload returned by a generator collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStyle {
    /// Creative name; may be missing
    #[serde(default)]
    pub name: Option<String>,
    /// Tailwind class string; required for a usable record
    #[serde(default)]
    pub classes: Option<String>,
    /// Collaborator's own style family (Minimal, Glow, ...). Informational only.
    #[serde(default)]
    pub category: Option<String>,
}

impl GeneratedStyle {
    /// Converts the payload into a catalog record.
    ///
    /// Missing or blank classes yield `None`. A missing or blank name becomes
    /// [`PLACEHOLDER_NAME`]. The record always lands in the AI-generated category.
    #[must_use]
    pub fn into_record(self) -> Option<StyleRecord> {
        let classes = normalize_whitespace(self.classes.as_deref().unwrap_or_default());
        if classes.is_empty() {
            return None;
        }

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

        Some(StyleRecord {
            id: format!("ai-{}", uuid::Uuid::new_v4()),
            name,
            category: Category::AiGenerated,
            classes,
            tags: GENERATED_TAGS.iter().map(|t| (*t).to_string()).collect(),
        })
    }
}
