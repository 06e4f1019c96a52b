//! Catalog document: palette, template definitions and hand-authored specials.
//!
//! The built-in catalog is embedded in the binary at compile time. A user catalog
//! with the same schema can be loaded from disk instead.

use crate::models::{Category, ColorEntry, ColorPalette, StyleRecord, StyleTemplate};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Id prefixes reserved for generated and AI records.
const RESERVED_PREFIXES: [&str; 2] = ["gen-", "ai-"];

/// Where a template's color map comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// Expand `pattern` once per palette color.
    Palette {
        /// Class pattern with `{placeholder}` references
        pattern: String,
        /// Restrict to these color names; palette order is kept
        #[serde(default, skip_serializing_if = "Option::is_none")]
        only: Option<Vec<String>>,
    },
    /// Explicit ordered color map.
    Fixed(Vec<ColorEntry>),
}

/// Template as written in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Short label
    pub name: String,
    /// Functional category
    pub category: Category,
    /// Shared directives
    pub base_classes: String,
    /// Label is long text (no Circle shape)
    #[serde(default)]
    pub long_label: bool,
    /// Color map source
    pub colors: ColorSource,
}

impl TemplateDefinition {
    /// Resolves the color map against `palette`.
    fn resolve(&self, palette: &ColorPalette) -> Result<StyleTemplate> {
        let colors = match &self.colors {
            ColorSource::Fixed(entries) => entries.clone(),
            ColorSource::Palette { pattern, only } => palette
                .colors()
                .iter()
                .filter(|c| only.as_ref().is_none_or(|names| names.contains(&c.name)))
                .map(|c| {
                    let classes = c
                        .render(pattern)
                        .with_context(|| format!("Template '{}'", self.name))?;
                    Ok(ColorEntry::new(c.name.clone(), &classes))
                })
                .collect::<Result<Vec<_>>>()?,
        };

        let mut template = StyleTemplate::new(self.name.clone(), &self.base_classes, self.category);
        template.colors = colors;
        template.long_label = self.long_label;
        Ok(template)
    }
}

/// Parsed catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: String,
    /// Palette colors in display order
    pub palette: ColorPalette,
    /// Template definitions in catalog order
    pub templates: Vec<TemplateDefinition>,
    /// Hand-authored records placed before all generated ones
    #[serde(default)]
    pub specials: Vec<StyleRecord>,
}

fn default_version() -> String {
    "1".to_string()
}

impl CatalogData {
    /// Loads the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        Self::from_json(json_data).context("Failed to parse embedded catalog.json")
    }

    /// Loads a catalog document from `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parses and validates a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks structural rules the builder relies on.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for special in &self.specials {
            if special.id.trim().is_empty() {
                anyhow::bail!("Special '{}' has an empty id", special.name);
            }
            if let Some(prefix) = RESERVED_PREFIXES.iter().find(|p| special.id.starts_with(*p)) {
                anyhow::bail!(
                    "Special id '{}' uses the reserved prefix '{prefix}'",
                    special.id
                );
            }
            if !ids.insert(special.id.as_str()) {
                anyhow::bail!("Duplicate special id '{}'", special.id);
            }
        }

        let mut palette_names = HashSet::new();
        for color in self.palette.colors() {
            if !palette_names.insert(color.name.as_str()) {
                anyhow::bail!("Palette lists color '{}' twice", color.name);
            }
        }

        for (index, template) in self.templates.iter().enumerate() {
            if template.name.trim().is_empty() {
                anyhow::bail!("Template #{index} has an empty name");
            }
            let names: Vec<&str> = match &template.colors {
                ColorSource::Fixed(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
                ColorSource::Palette { only: Some(only), .. } => only.iter().map(String::as_str).collect(),
                ColorSource::Palette { only: None, .. } => Vec::new(),
            };
            let mut seen = HashSet::new();
            for name in names {
                if !seen.insert(name) {
                    anyhow::bail!("Template '{}' lists color '{name}' twice", template.name);
                }
            }
        }

        Ok(())
    }

    /// Resolves every definition into a template with a concrete color map.
    pub fn templates(&self) -> Result<Vec<StyleTemplate>> {
        self.templates
            .iter()
            .map(|definition| definition.resolve(&self.palette))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template<'a>(templates: &'a [StyleTemplate], name: &str) -> &'a StyleTemplate {
        templates
            .iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("template {name} missing"))
    }

    fn color_names(template: &StyleTemplate) -> Vec<&str> {
        template.colors.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_loads() {
        let data = CatalogData::builtin().unwrap();
        assert_eq!(data.palette.colors().len(), 12);
        assert_eq!(data.specials.len(), 5);
        assert_eq!(data.templates.len(), 68);
        assert!(data.specials.iter().all(|s| s.category == Category::Gradient));
    }

    #[test]
    fn test_builtin_category_counts() {
        let data = CatalogData::builtin().unwrap();
        let count = |c: Category| data.templates.iter().filter(|t| t.category == c).count();
        assert_eq!(count(Category::Primary), 4);
        assert_eq!(count(Category::FloatingAction), 3);
        assert_eq!(count(Category::Link), 2);
        assert_eq!(count(Category::HoverEffect), 9);
        assert_eq!(count(Category::ClickEffect), 6);
        assert_eq!(count(Category::State), 4);
    }

    #[test]
    fn test_palette_expansion() {
        let templates = CatalogData::builtin().unwrap().templates().unwrap();
        let solid = template(&templates, "Solid Standard");
        assert_eq!(solid.colors.len(), 12);
        assert_eq!(solid.colors[0].name, "Blue");
        assert_eq!(
            solid.colors[0].classes.to_string(),
            "bg-blue-600 hover:bg-blue-700 ring-blue-400"
        );
    }

    #[test]
    fn test_glow_shade_for_black() {
        let templates = CatalogData::builtin().unwrap().templates().unwrap();
        let glow = template(&templates, "Soft Glow");
        let black = glow.colors.iter().find(|c| c.name == "Black").unwrap();
        assert!(black.classes.contains("hover:shadow-[0_6px_20px_theme('colors.black.900')/40]"));
    }

    #[test]
    fn test_only_restricts_and_drops_unknown_names() {
        let templates = CatalogData::builtin().unwrap().templates().unwrap();
        assert_eq!(color_names(template(&templates, "Success Pill")), vec!["Emerald", "Lime"]);
        assert_eq!(color_names(template(&templates, "Warning Badge")), vec!["Amber"]);
        assert_eq!(color_names(template(&templates, "Info Soft")), vec!["Blue", "Cyan", "Indigo"]);
    }

    #[test]
    fn test_fixed_colors_and_long_labels() {
        let templates = CatalogData::builtin().unwrap().templates().unwrap();
        assert_eq!(color_names(template(&templates, "Cyber Punk")), vec!["Yellow"]);
        assert!(template(&templates, "Letter Spacing").long_label);
        assert!(template(&templates, "Arrow Reveal").long_label);
        assert!(!template(&templates, "Solid Standard").long_label);
    }

    #[test]
    fn test_unknown_placeholder_is_error() {
        let json = r#"{
            "palette": [{ "name": "Blue", "bg": "bg-blue-600", "bg_light": "", "hover": "", "border": "",
                          "text": "", "text_dark": "", "ring": "", "from": "", "to": "", "glow": "500" }],
            "templates": [{ "name": "T", "category": "primary", "base_classes": "px-6",
                            "colors": { "palette": { "pattern": "{background}" } } }]
        }"#;
        let data = CatalogData::from_json(json).unwrap();
        assert!(data.templates().is_err());
    }

    #[test]
    fn test_rejects_reserved_special_prefix() {
        let json = r#"{
            "palette": [],
            "templates": [],
            "specials": [{ "id": "gen-1", "name": "X", "category": "gradient", "classes": "", "tags": [] }]
        }"#;
        let err = CatalogData::from_json(json).unwrap_err();
        assert!(err.to_string().contains("reserved prefix"));
    }

    #[test]
    fn test_rejects_duplicate_special_ids() {
        let json = r#"{
            "palette": [],
            "templates": [],
            "specials": [
                { "id": "grad-a", "name": "A", "category": "gradient", "classes": "", "tags": [] },
                { "id": "grad-a", "name": "B", "category": "gradient", "classes": "", "tags": [] }
            ]
        }"#;
        assert!(CatalogData::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_fixed_colors() {
        let json = r#"{
            "palette": [],
            "templates": [{ "name": "T", "category": "state", "base_classes": "px-6",
                            "colors": { "fixed": [{ "name": "Gray", "classes": "" }, { "name": "Gray", "classes": "" }] } }]
        }"#;
        assert!(CatalogData::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_palette_colors() {
        let color = r#"{ "name": "Blue", "bg": "bg-blue-600", "bg_light": "bg-blue-100",
            "hover": "hover:bg-blue-700", "border": "border-blue-600", "text": "text-blue-600",
            "text_dark": "text-blue-900", "ring": "ring-blue-400", "from": "from-blue-600",
            "to": "to-blue-400", "glow": "500" }"#;
        let json = format!(
            r#"{{
            "palette": [{color}, {color}],
            "templates": [{{ "name": "T", "category": "primary", "base_classes": "px-6",
                            "colors": {{ "palette": {{ "pattern": "{{bg}}" }} }} }}]
        }}"#
        );
        let err = CatalogData::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("Palette lists color 'Blue' twice"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{ "palette": [], "templates": [{ "name": "Solo", "category": "ghost", "base_classes": "px-4",
                 "colors": { "fixed": [{ "name": "Gray", "classes": "text-gray-400" }] } }] }"#,
        )
        .unwrap();

        let data = CatalogData::from_path(&path).unwrap();
        let templates = data.templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].colors[0].classes.to_string(), "text-gray-400");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CatalogData::from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
