//! Query filter over a built library.

use crate::models::{CategoryFilter, StyleRecord};

/// Returns the records matching `category` and `query`, in library order.
///
/// The search is a case-insensitive substring match over the name, the class
/// string and every tag. An empty query matches everything. There is no ranking.
#[must_use]
pub fn filter<'a>(library: &'a [StyleRecord], category: CategoryFilter, query: &str) -> Vec<&'a StyleRecord> {
    let needle = query.to_lowercase();

    library
        .iter()
        .filter(|record| category.admits(record.category))
        .filter(|record| needle.is_empty() || record.matches_lowercase(&needle))
        .collect()
}
