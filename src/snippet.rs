//! Copyable JSX snippets and preview labels for style records.

use crate::models::{normalize_whitespace, Category, StyleRecord};
use regex::Regex;
use std::sync::LazyLock;

/// First color word in a record name, stripped when deriving a label.
static COLOR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "Blue|Red|Emerald|Violet|Amber|Rose|Cyan|Fuchsia|Indigo|Lime|Slate|HotPink|Orange|Purple|Black",
    )
    .expect("color word pattern is valid")
});

/// Icon-only records: floating action buttons and anything shaped as a circle.
fn is_circle(record: &StyleRecord) -> bool {
    record.category == Category::FloatingAction
        || (record.classes.contains("rounded-full") && record.classes.contains("aspect-square"))
}

fn needs_span_wrap(record: &StyleRecord) -> bool {
    record.classes.contains("[&>span]")
}

/// Builds the JSX snippet a user pastes into a React component.
///
/// Icons come from `lucide-react`; the import is emitted as a comment.
#[must_use]
pub fn jsx_snippet(record: &StyleRecord) -> String {
    let (content, icon) = if is_circle(record) {
        ("<Plus size={24} />", Some("Plus"))
    } else if record.category == Category::IconEffect {
        ("<span>Next</span>\n  <ArrowRight size={18} />", Some("ArrowRight"))
    } else if record.category == Category::Destructive {
        ("<Trash size={16} className=\"mr-2\" />\n  Delete", Some("Trash"))
    } else if record.category == Category::Loading && record.name.contains("Spinner") {
        ("Processing...", None)
    } else if needs_span_wrap(record) {
        ("<span>Button</span>", None)
    } else if record.category == Category::Link {
        ("Read More", None)
    } else {
        ("Click Me", None)
    };

    let import = icon
        .map(|name| format!("// import {{ {name} }} from 'lucide-react';\n"))
        .unwrap_or_default();

    format!(
        "{import}<button className=\"{}\">\n  {content}\n</button>",
        record.classes
    )
}

/// Text shown inside the button preview.
#[must_use]
pub fn label(record: &StyleRecord) -> String {
    let name = record.name.as_str();

    if is_circle(record) {
        return "+".to_string();
    }

    let fixed = match record.category {
        Category::Loading if name.contains("Spinner") => Some("Processing..."),
        Category::Loading if name.contains("Dots") => Some("Saving"),
        Category::Loading => Some("Loading..."),
        Category::IconEffect => Some("Next"),
        Category::State if name.contains("Success") => Some("Saved"),
        Category::State if name.contains("Error") => Some("Retry"),
        Category::State if name.contains("Disabled") => Some("Unavailable"),
        Category::State if name.contains("Toggle") => Some("Toggle Me"),
        Category::Destructive => Some("Delete"),
        Category::Success => Some("Complete"),
        Category::Link => Some("Read More"),
        _ => None,
    };
    if let Some(text) = fixed {
        return text.to_string();
    }

    let base = name.split(" (").next().unwrap_or(name);
    let cleaned = normalize_whitespace(&COLOR_WORD.replace(base, ""));
    if cleaned.is_empty() {
        "Button".to_string()
    } else {
        cleaned
    }
}
