//! In-memory style library.

use super::{build, filter, CatalogData};
use crate::config::Config;
use crate::generator::StyleGenerator;
use crate::models::{Category, CategoryFilter, Shape, StyleRecord};
use anyhow::Result;

/// Ordered collection of every style record shown to users.
///
/// Built once at startup; afterwards the only mutation is appending generated
/// records at the end.
#[derive(Debug, Clone, Default)]
pub struct Library {
    records: Vec<StyleRecord>,
}

impl Library {
    /// Builds the library from the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(&CatalogData::builtin()?)
    }

    /// Builds the library from a parsed catalog with the standard shape set.
    pub fn from_catalog(data: &CatalogData) -> Result<Self> {
        let templates = data.templates()?;
        Ok(Self {
            records: build(&templates, &Shape::ALL, &data.specials),
        })
    }

    /// Builds the library from the configured catalog, or the embedded one.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog.path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading custom catalog");
                Self::from_catalog(&CatalogData::from_path(path)?)
            }
            None => Self::builtin(),
        }
    }

    /// Wraps already-built records.
    #[must_use]
    pub fn from_records(records: Vec<StyleRecord>) -> Self {
        Self { records }
    }

    /// All records in library order.
    #[must_use]
    pub fn records(&self) -> &[StyleRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StyleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records matching `category` and `query`, in library order.
    #[must_use]
    pub fn filter(&self, category: CategoryFilter, query: &str) -> Vec<&StyleRecord> {
        filter(&self.records, category, query)
    }

    /// Record count per category, in navigation order. Empty categories are included.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self.records.iter().filter(|r| r.category == category).count();
                (category, count)
            })
            .collect()
    }

    /// Appends a record at the end.
    pub fn append(&mut self, record: StyleRecord) {
        self.records.push(record);
    }

    /// Asks `generator` for a style and appends it on success.
    ///
    /// A blank prompt returns `None` without contacting the generator. On failure
    /// the library is unchanged.
    pub async fn generate(
        &mut self,
        generator: &dyn StyleGenerator,
        prompt: &str,
    ) -> Option<&StyleRecord> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        let record = generator.generate(prompt).await?;
        tracing::debug!(id = %record.id, "Appending generated style");
        self.records.push(record);
        self.records.last()
    }
}
