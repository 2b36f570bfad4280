//! Built-in V Theme palettes
//!
//! These mirror `themes/dark.json` and `themes/light.json`; the loader falls
//! back to them when no file is found.

use super::types::{ColorInfo, ThemeColorPalette, ThemeMode};

/// Names of the palettes compiled into the binary
pub const BUILTIN_PALETTES: [&str; 2] = ["dark", "light"];

fn entries(rows: &[(&str, &str, &str)]) -> Vec<ColorInfo> {
    rows.iter()
        .map(|(name, hex, usage)| ColorInfo::new(*name, *hex, *usage))
        .collect()
}

impl ThemeColorPalette {
    pub fn dark() -> Self {
        Self {
            primary: entries(&[
                ("Primary", "#64FFDA", "Main accent color for interactive elements"),
                ("Secondary", "#82AAFF", "Secondary accent for highlights and focus states"),
                ("Background", "#212836", "Main editor background"),
                ("Foreground", "#E9ECEF", "Primary text color"),
            ]),
            syntax: entries(&[
                ("Keywords", "#FF79C6", "Language keywords and control flow"),
                ("Strings", "#5CFF87", "String literals and text content"),
                ("Numbers", "#FF8A8A", "Numeric literals and constants"),
                ("Functions", "#64FFDA", "Function names and declarations"),
                ("Comments", "#8695A8", "Code comments and documentation"),
            ]),
            ui: entries(&[
                ("Selection", "#3A506B", "Selected text background"),
                ("Line Highlight", "#2B3647", "Current line highlight"),
                ("Error", "#FF5555", "Error indicators and messages"),
                ("Warning", "#FFCB6B", "Warning indicators"),
                ("Active Tab", "#212836", "Currently active editor tab"),
                ("Inactive Tab", "#1A212E", "Inactive editor tabs"),
                ("Sidebar", "#1A212E", "Sidebar background"),
                ("Status Bar", "#151C28", "Status bar at bottom of editor"),
            ]),
        }
    }

    pub fn light() -> Self {
        Self {
            primary: entries(&[
                ("Primary", "#00A3A3", "Main accent color for interactive elements"),
                ("Secondary", "#0072C6", "Secondary accent for highlights and focus states"),
                ("Background", "#F5F8FA", "Main editor background"),
                ("Foreground", "#2D3748", "Primary text color"),
            ]),
            syntax: entries(&[
                ("Keywords", "#A31DB1", "Language keywords and control flow"),
                ("Strings", "#16A349", "String literals and text content"),
                ("Numbers", "#E03E3E", "Numeric literals and constants"),
                ("Functions", "#00A3A3", "Function names and declarations"),
                ("Comments", "#718096", "Code comments and documentation"),
            ]),
            ui: entries(&[
                ("Selection", "#C9E3F5", "Selected text background"),
                ("Line Highlight", "#E9EFF5", "Current line highlight"),
                ("Error", "#DC2626", "Error indicators and messages"),
                ("Warning", "#B45309", "Warning indicators"),
                ("Active Tab", "#F5F8FA", "Currently active editor tab"),
                ("Inactive Tab", "#FFFFFF", "Inactive editor tabs"),
                ("Sidebar", "#FFFFFF", "Sidebar background"),
                ("Status Bar", "#FFFFFF", "Status bar at bottom of editor"),
            ]),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Get a built-in palette by name ("dark" or "light", any case)
    pub fn builtin(name: &str) -> Option<Self> {
        name.parse::<ThemeMode>().ok().map(Self::for_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::theme::ColorRole;

    #[test]
    fn test_builtin_palettes_resolve_to_their_own_fallbacks() {
        for mode in ThemeMode::ALL {
            let colors = ThemeColorPalette::for_mode(mode).resolve(mode);
            for role in ColorRole::ALL {
                assert_eq!(colors.role(role), role.fallback(mode), "{mode} {role}");
            }
        }
    }

    #[test]
    fn test_builtin_section_sizes() {
        for palette in [ThemeColorPalette::dark(), ThemeColorPalette::light()] {
            assert_eq!(palette.primary.len(), 4);
            assert_eq!(palette.syntax.len(), 5);
            assert_eq!(palette.ui.len(), 8);
        }
    }

    #[test]
    fn test_builtin_by_name() {
        assert_eq!(
            ThemeColorPalette::builtin("Light"),
            Some(ThemeColorPalette::light())
        );
        assert_eq!(ThemeColorPalette::builtin("monokai"), None);
    }
}
