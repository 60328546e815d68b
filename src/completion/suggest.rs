//! Suggestion generation.
//!
//! A pure function of the line text before the cursor and the resolved
//! settings. The trigger condition is "the cursor sits inside an unclosed
//! string literal that opens a `class`/`className` attribute"; anything else
//! means suggestions are inapplicable (`None`), which the host must be able
//! to tell apart from an empty list.

use std::sync::LazyLock;

use regex::Regex;

use crate::completion::table::{HOVER_DESCRIPTION, HOVER_POSITION, SUFFIX_TABLE};
use crate::config::{Settings, ThemeMap};

static CLASS_ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class(Name)?\s*=\s*["'][^"']*$"#).expect("class attribute pattern compiles")
});

/// One completion candidate: a class-name label and a human-readable
/// description of the CSS it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub description: String,
}

/// Whether `line_prefix` ends inside an open class-attribute string literal.
pub fn is_class_attr_context(line_prefix: &str) -> bool {
    CLASS_ATTR_PATTERN.is_match(line_prefix)
}

/// Produce the candidate list for `line_prefix`, or `None` when the trigger
/// condition does not hold.
///
/// Once triggered the full list is always returned; narrowing by the
/// characters already typed is the client's job.
pub fn suggest(line_prefix: &str, settings: &Settings) -> Option<Vec<Suggestion>> {
    if !is_class_attr_context(line_prefix) {
        return None;
    }

    let mut suggestions = static_suggestions(&settings.prefix);
    suggestions.extend(theme_suggestions(&settings.theme));
    Some(suggestions)
}

/// The fixed suggestion table for `prefix`, hover variant included.
pub fn static_suggestions(prefix: &str) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = SUFFIX_TABLE
        .iter()
        .map(|(suffix, description)| Suggestion {
            label: format!("{}-{}-", prefix, suffix),
            description: (*description).to_string(),
        })
        .collect();

    suggestions.insert(
        HOVER_POSITION,
        Suggestion {
            label: format!("{}-h:{}-", prefix, prefix),
            description: HOVER_DESCRIPTION.to_string(),
        },
    );
    suggestions
}

fn theme_suggestions(theme: &ThemeMap) -> impl Iterator<Item = Suggestion> + '_ {
    theme.iter().map(|(label, values)| Suggestion {
        // Theme keys are caller-defined class names already; no prefix.
        label: label.clone(),
        description: values
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join(";"),
    })
}
