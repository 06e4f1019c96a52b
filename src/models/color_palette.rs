//! Color palette used to expand templates into per-color class fragments.
//!
//! Each palette color carries the Tailwind fragments templates refer to through
//! `{placeholder}` patterns, e.g. `"{bg} {hover} {ring}"`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single palette color and its class fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Display name (e.g. "Blue")
    pub name: String,
    /// Solid background (e.g. "bg-blue-600")
    pub bg: String,
    /// Light background (e.g. "bg-blue-100")
    pub bg_light: String,
    /// Hover background (e.g. "hover:bg-blue-700")
    pub hover: String,
    /// Border color
    pub border: String,
    /// Text color
    pub text: String,
    /// Dark text color
    pub text_dark: String,
    /// Focus ring color
    pub ring: String,
    /// Gradient start
    pub from: String,
    /// Gradient end
    pub to: String,
    /// Shade used by glow effects ("500", or "900" for near-black colors)
    pub glow: String,
}

impl ColorVariant {
    /// Lowercase name used inside arbitrary-value classes (e.g. "shadow-blue-500/50").
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    fn placeholder(&self, key: &str) -> Option<String> {
        let value = match key {
            "bg" => &self.bg,
            "bg_light" => &self.bg_light,
            "hover" => &self.hover,
            "border" => &self.border,
            "text" => &self.text,
            "text_dark" => &self.text_dark,
            "ring" => &self.ring,
            "from" => &self.from,
            "to" => &self.to,
            "glow" => &self.glow,
            "slug" => return Some(self.slug()),
            _ => return None,
        };
        Some(value.clone())
    }

    /// Expands `{placeholder}` references in `pattern` with this color's fragments.
    ///
    /// Braces that do not close are copied through. Unknown placeholder names are
    /// an error so a typo in catalog data cannot silently drop a class.
    pub fn render(&self, pattern: &str) -> Result<String> {
        let mut out = String::with_capacity(pattern.len() + 32);
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    let value = self.placeholder(key).ok_or_else(|| {
                        anyhow::anyhow!(
                            "Unknown placeholder '{{{key}}}' in color pattern '{pattern}'"
                        )
                    })?;
                    out.push_str(&value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}

/// Ordered set of palette colors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: Vec<ColorVariant>,
}

impl ColorPalette {
    /// Colors in display order.
    #[must_use]
    pub fn colors(&self) -> &[ColorVariant] {
        &self.colors
    }
}
