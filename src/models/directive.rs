//! Style directive lists.
//!
//! A class string such as `"px-6 py-2.5 font-bold"` is held as an ordered list of
//! directive tokens. Fragments are merged in precedence order (template base, then
//! shape, then color); a token that is already present is not repeated, and no other
//! conflict resolution happens except the explicit padding strip used by the Circle
//! shape.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Matches horizontal, vertical and uniform padding utilities (`p-4`, `px-6`,
/// `py-2.5`, `p-[3px]`), with or without a negative sign.
static PADDING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?p[xy]?-(?:\d+(?:\.\d+)?|px|\[[^\]]*\])$").expect("padding pattern is valid")
});

/// Returns true if `token` sets horizontal, vertical or uniform padding.
///
/// Variant prefixes are looked through, so `hover:px-12` counts as padding.
/// Side-specific padding (`pr-4`, `pl-2`) does not.
#[must_use]
pub fn is_padding_directive(token: &str) -> bool {
    let utility = token.rsplit(':').next().unwrap_or(token);
    PADDING_PATTERN.is_match(utility)
}

/// Ordered, duplicate-free list of style directive tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a class string on whitespace.
    #[must_use]
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        for token in classes.split_whitespace() {
            list.push(token);
        }
        list
    }

    /// Appends a single token unless it is already present.
    pub fn push(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Appends every token of `fragment`, after the tokens already present.
    pub fn extend_fragment(&mut self, fragment: &ClassList) {
        for token in &fragment.tokens {
            self.push(token);
        }
    }

    /// Returns a copy with every padding directive removed.
    #[must_use]
    pub fn without_padding(&self) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .filter(|t| !is_padding_directive(t))
                .cloned()
                .collect(),
        }
    }

    /// Padding directives present in this list, in order.
    pub fn padding_directives(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| is_padding_directive(t))
    }

    /// Returns true if `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Iterates the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClassList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Collapses runs of whitespace and trims the ends.
#[must_use]
pub fn normalize_whitespace(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}
