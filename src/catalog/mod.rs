//! Style catalog: embedded data, the library builder and the query filter.

pub mod builder;
pub mod data;
pub mod filter;
pub mod library;

pub use builder::build;
pub use data::{CatalogData, ColorSource, TemplateDefinition};
pub use filter::filter;
pub use library::Library;
