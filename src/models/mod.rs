//! Data models for templates, shapes, palettes and style records.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of the catalog data, the CLI and the web API.

pub mod category;
pub mod color_palette;
pub mod directive;
pub mod shape;
pub mod style;

// Re-export all model types
pub use category::{Category, CategoryFilter};
pub use color_palette::{ColorPalette, ColorVariant};
pub use directive::{is_padding_directive, normalize_whitespace, ClassList};
pub use shape::Shape;
pub use style::{ColorEntry, StyleRecord, StyleTemplate};
