//! Shape variants (border radius and sizing treatments).

use super::ClassList;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed shape treatments every template is multiplied by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Square corners (the default; omitted from display names)
    Sharp,
    /// Slightly rounded corners
    Smooth,
    /// Strongly rounded corners
    Rounded,
    /// Fully rounded ends
    Pill,
    /// Fixed-size circle for icon-only buttons
    Circle,
}

impl Shape {
    /// The standard shape set, in expansion order.
    pub const ALL: [Shape; 5] = [
        Shape::Sharp,
        Shape::Smooth,
        Shape::Rounded,
        Shape::Pill,
        Shape::Circle,
    ];

    /// Shape whose name is left out of record display names.
    pub const DEFAULT: Shape = Shape::Sharp;

    /// Display name (e.g. "Pill").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Sharp => "Sharp",
            Shape::Smooth => "Smooth",
            Shape::Rounded => "Rounded",
            Shape::Pill => "Pill",
            Shape::Circle => "Circle",
        }
    }

    /// Raw class fragment for this shape.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Shape::Sharp => "rounded-none",
            Shape::Smooth => "rounded-md",
            Shape::Rounded => "rounded-xl",
            Shape::Pill => "rounded-full",
            // Forces square dimensions and zero padding
            Shape::Circle => "rounded-full aspect-square p-0 w-12 h-12 flex items-center justify-center",
        }
    }

    /// Class fragment as a directive list.
    #[must_use]
    pub fn fragment(self) -> ClassList {
        ClassList::parse(self.classes())
    }

    /// Lowercased name, used as the shape search tag.
    #[must_use]
    pub fn tag(self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
