//! Resolve a color table into the normalized color set for a theme mode.

use super::types::{ColorInfo, ColorRole, ResolvedThemeColors, SyntaxColorSet, ThemeColorPalette, ThemeMode};
use crate::primitives::color::is_hex_color;

/// Color of the first entry named exactly `role.label()`, if it is `#RRGGBB`.
fn lookup<'a>(table: &'a [ColorInfo], role: ColorRole) -> Option<&'a str> {
    table
        .iter()
        .find(|c| c.name == role.label())
        .map(|c| c.hex_code.as_str())
        .filter(|hex| is_hex_color(hex))
}

fn role_color(mode: ThemeMode, table: &[ColorInfo], role: ColorRole) -> String {
    match lookup(table, role) {
        Some(hex) => hex.to_string(),
        None => {
            let fallback = role.fallback(mode);
            tracing::debug!(
                "no '{}' entry in {} color table, using {}",
                role.label(),
                mode,
                fallback
            );
            fallback.to_string()
        }
    }
}

/// Build the color set for `mode` from `table`.
///
/// Each semantic role takes the first table entry whose name matches its label
/// exactly; a missing entry, or one whose color is empty or not `#RRGGBB`,
/// falls back to the mode's built-in default. Syntax colors come from the mode alone and ignore `table`.
///
/// Never fails: an empty table yields the full set of defaults.
pub fn resolve(mode: ThemeMode, table: &[ColorInfo]) -> ResolvedThemeColors {
    ResolvedThemeColors {
        background: role_color(mode, table, ColorRole::Background),
        primary: role_color(mode, table, ColorRole::Primary),
        secondary: role_color(mode, table, ColorRole::Secondary),
        text: role_color(mode, table, ColorRole::Foreground),
        syntax: SyntaxColorSet::for_mode(mode),
    }
}

impl ThemeColorPalette {
    /// Resolve this palette's primary section for `mode`
    pub fn resolve(&self, mode: ThemeMode) -> ResolvedThemeColors {
        resolve(mode, &self.primary)
    }
}
