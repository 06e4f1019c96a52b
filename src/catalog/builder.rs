//! Library builder: expands templates × colors × shapes into style records.

use crate::models::{Category, ClassList, ColorEntry, Shape, StyleRecord, StyleTemplate};

/// Returns true if `template` is produced in `shape`.
///
/// - Floating action buttons exist only as circles.
/// - Links exist only in the Smooth shape.
/// - Text-heavy templates never become circles.
#[must_use]
pub fn admits(template: &StyleTemplate, shape: Shape) -> bool {
    match template.category {
        Category::FloatingAction => shape == Shape::Circle,
        Category::Link => shape == Shape::Smooth,
        _ => !(shape == Shape::Circle && template.is_text_heavy()),
    }
}

/// Identifier of a generated record. The template index keeps it unique even
/// when two templates share a name.
#[must_use]
pub fn record_id(template_index: usize, color: &str, shape: Shape) -> String {
    format!("gen-{template_index}-{color}-{}", shape.name())
}

/// Display name of a generated record.
#[must_use]
pub fn display_name(template: &StyleTemplate, color: &str, shape: Shape) -> String {
    let mut name = format!("{color} {}", template.name);
    if shape != Shape::DEFAULT && template.category != Category::Link {
        name.push(' ');
        name.push_str(shape.name());
    }
    name
}

/// Merges base, shape and color fragments in that order.
///
/// Circle removes the base's padding before its own `p-0` is appended.
#[must_use]
pub fn compose_classes(template: &StyleTemplate, shape: Shape, color: &ColorEntry) -> ClassList {
    let mut classes = if shape == Shape::Circle {
        template.base_classes.without_padding()
    } else {
        template.base_classes.clone()
    };
    classes.extend_fragment(&shape.fragment());
    classes.extend_fragment(&color.classes);
    classes
}

fn expand(index: usize, template: &StyleTemplate, color: &ColorEntry, shape: Shape) -> StyleRecord {
    StyleRecord {
        id: record_id(index, &color.name, shape),
        name: display_name(template, &color.name, shape),
        category: template.category,
        classes: compose_classes(template, shape, color).to_string(),
        tags: vec![
            template.category.tag(),
            color.name.to_lowercase(),
            shape.tag(),
        ],
    }
}

/// Builds the full ordered library.
///
/// Order: `specials` unchanged, then templates in input order, colors in map
/// order, shapes in `shapes` order. A template without colors contributes nothing.
#[must_use]
pub fn build(templates: &[StyleTemplate], shapes: &[Shape], specials: &[StyleRecord]) -> Vec<StyleRecord> {
    let mut library = specials.to_vec();

    for (index, template) in templates.iter().enumerate() {
        for color in &template.colors {
            for &shape in shapes {
                if admits(template, shape) {
                    library.push(expand(index, template, color, shape));
                }
            }
        }
    }

    tracing::debug!(
        templates = templates.len(),
        specials = specials.len(),
        records = library.len(),
        "Built style library"
    );

    library
}
