// src/utils/format.rs
use std::collections::BTreeSet;

use console::{style, StyledObject};

use crate::generators::{CharClass, StrengthRating};

pub fn strength_icon(rating: StrengthRating) -> &'static str {
    match rating {
        StrengthRating::Weak => "❌",
        StrengthRating::Moderate => "⚠️",
        StrengthRating::Strong => "🔒",
        StrengthRating::VeryStrong => "🛡️",
    }
}

// Colour-coded rating for terminal output
pub fn styled_strength(rating: StrengthRating) -> StyledObject<String> {
    let text = format!("{} {}", strength_icon(rating), rating);
    match rating {
        StrengthRating::Weak => style(text).red().bold(),
        StrengthRating::Moderate => style(text).yellow().bold(),
        StrengthRating::Strong => style(text).blue().bold(),
        StrengthRating::VeryStrong => style(text).green().bold(),
    }
}

pub fn format_classes(classes: &BTreeSet<CharClass>) -> String {
    if classes.is_empty() {
        return "none".to_string();
    }
    classes
        .iter()
        .map(CharClass::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
