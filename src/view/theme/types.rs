//! Pure theme types
//!
//! Palette data (`ColorInfo`, `ThemeColorPalette`) as stored in the theme JSON
//! files, and the normalized color set (`ResolvedThemeColors`) every consumer
//! renders from. No filesystem access in here.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VthemeError;

/// Light or dark variant of the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = VthemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(VthemeError::UnknownMode(s.to_string())),
        }
    }
}

/// Semantic color slot looked up by name in a palette's primary section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Foreground,
    Primary,
    Secondary,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Primary,
        ColorRole::Secondary,
    ];

    /// Exact (case-sensitive) name of this role in a color table
    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Background => "Background",
            ColorRole::Foreground => "Foreground",
            ColorRole::Primary => "Primary",
            ColorRole::Secondary => "Secondary",
        }
    }

    /// Color used when a table has no entry for this role
    pub fn fallback(&self, mode: ThemeMode) -> &'static str {
        match (self, mode) {
            (ColorRole::Background, ThemeMode::Light) => "#F5F8FA",
            (ColorRole::Background, ThemeMode::Dark) => "#212836",
            (ColorRole::Foreground, ThemeMode::Light) => "#2D3748",
            (ColorRole::Foreground, ThemeMode::Dark) => "#E9ECEF",
            (ColorRole::Primary, ThemeMode::Light) => "#00A3A3",
            (ColorRole::Primary, ThemeMode::Dark) => "#64FFDA",
            (ColorRole::Secondary, ThemeMode::Light) => "#0072C6",
            (ColorRole::Secondary, ThemeMode::Dark) => "#82AAFF",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named color of a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Display name, e.g. "Background" or "Line Highlight"
    pub name: String,
    /// `#RRGGBB` color
    pub hex_code: String,
    /// What the color is used for in the editor
    #[serde(default)]
    pub usage: String,
}

impl ColorInfo {
    pub fn new(name: impl Into<String>, hex_code: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex_code: hex_code.into(),
            usage: usage.into(),
        }
    }
}

/// A full palette as stored in `themes/*.json`
///
/// Only `primary` feeds the resolver; `syntax` and `ui` are descriptive
/// swatches for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeColorPalette {
    #[serde(default)]
    pub primary: Vec<ColorInfo>,
    #[serde(default)]
    pub syntax: Vec<ColorInfo>,
    #[serde(default)]
    pub ui: Vec<ColorInfo>,
}

impl ThemeColorPalette {
    /// All sections with their JSON key, in file order
    pub fn sections(&self) -> [(&'static str, &[ColorInfo]); 3] {
        [
            ("primary", self.primary.as_slice()),
            ("syntax", self.syntax.as_slice()),
            ("ui", self.ui.as_slice()),
        ]
    }
}

/// Token colors for code previews, one per token class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyntaxColorSet {
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub function: String,
    pub comment: String,
    pub variable: String,
    pub r#type: String,
    pub operator: String,
}

impl SyntaxColorSet {
    /// Slot names, in declaration order
    pub const SLOTS: [&'static str; 8] = [
        "keyword", "string", "number", "function", "comment", "variable", "type", "operator",
    ];

    /// The fixed syntax colors for `mode`
    pub fn for_mode(mode: ThemeMode) -> Self {
        let [keyword, string, number, function, comment, variable, r#type, operator] = match mode {
            ThemeMode::Light => [
                "#A31DB1", "#16A349", "#E03E3E", "#00A3A3", "#718096", "#2D3748", "#B45309",
                "#0072C6",
            ],
            ThemeMode::Dark => [
                "#FF79C6", "#5CFF87", "#FF8A8A", "#64FFDA", "#8695A8", "#E9ECEF", "#FFCB6B",
                "#82AAFF",
            ],
        };

        Self {
            keyword: keyword.to_string(),
            string: string.to_string(),
            number: number.to_string(),
            function: function.to_string(),
            comment: comment.to_string(),
            variable: variable.to_string(),
            r#type: r#type.to_string(),
            operator: operator.to_string(),
        }
    }

    /// Look up a slot by its lowercase name
    pub fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "keyword" => &self.keyword,
            "string" => &self.string,
            "number" => &self.number,
            "function" => &self.function,
            "comment" => &self.comment,
            "variable" => &self.variable,
            "type" => &self.r#type,
            "operator" => &self.operator,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// `(slot, color)` pairs in [`Self::SLOTS`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::SLOTS
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|color| (slot, color)))
    }
}

/// Normalized colors for one theme mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedThemeColors {
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub syntax: SyntaxColorSet,
}

impl ResolvedThemeColors {
    pub fn role(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.text,
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
        }
    }
}
