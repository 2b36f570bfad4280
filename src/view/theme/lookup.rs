//! Key-based access into a resolved color set
//!
//! Color theory cards and other templated text refer to colors by key:
//! `bgColor`, `primaryColor`, `secondaryColor`, `textColor`, or
//! `syntax.<slot>` for a token color.

use super::types::ResolvedThemeColors;

/// Returned for keys that name no color
pub const UNKNOWN_KEY_COLOR: &str = "#000000";

/// Template placeholders, in substitution order
pub const TEMPLATE_KEYS: [&str; 4] = ["bgColor", "primaryColor", "secondaryColor", "textColor"];

/// Look up a color by key, `#000000` if the key is unknown.
pub fn color_value<'a>(key: &str, colors: &'a ResolvedThemeColors) -> &'a str {
    if let Some(slot) = key.strip_prefix("syntax.") {
        return colors.syntax.get(slot).unwrap_or(UNKNOWN_KEY_COLOR);
    }

    match key {
        "bgColor" => &colors.background,
        "primaryColor" => &colors.primary,
        "secondaryColor" => &colors.secondary,
        "textColor" => &colors.text,
        _ => {
            tracing::debug!("unknown color key '{}'", key);
            UNKNOWN_KEY_COLOR
        }
    }
}

/// Substitute `{bgColor}`, `{primaryColor}`, `{secondaryColor}` and
/// `{textColor}` in `template`.
///
/// Only the first occurrence of each placeholder is replaced.
pub fn process_example_template(template: &str, colors: &ResolvedThemeColors) -> String {
    TEMPLATE_KEYS.iter().fold(template.to_string(), |text, key| {
        text.replacen(&format!("{{{key}}}"), color_value(key, colors), 1)
    })
}
