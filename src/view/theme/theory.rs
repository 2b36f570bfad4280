//! Color theory cards
//!
//! Each principle explains one idea behind the palette and points at the
//! colors that illustrate it. `example_template` may contain color
//! placeholders (see [`process_example_template`]).

use serde::Serialize;

use super::lookup::{color_value, process_example_template};
use super::types::ResolvedThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub id: &'static str,
    pub title: &'static str,
    pub theory: &'static str,
    pub effect: &'static str,
    pub example_template: &'static str,
    /// Color keys, as accepted by [`color_value`]
    pub color_keys: &'static [&'static str],
}

/// A principle with its example text and swatches filled in for one color set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPrinciple {
    pub id: &'static str,
    pub title: &'static str,
    pub theory: &'static str,
    pub effect: &'static str,
    pub example: String,
    pub swatches: Vec<Swatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub key: &'static str,
    pub hex: String,
}

impl Principle {
    pub fn render(&self, colors: &ResolvedThemeColors) -> RenderedPrinciple {
        RenderedPrinciple {
            id: self.id,
            title: self.title,
            theory: self.theory,
            effect: self.effect,
            example: process_example_template(self.example_template, colors),
            swatches: self
                .color_keys
                .iter()
                .map(|&key| Swatch {
                    key,
                    hex: color_value(key, colors).to_string(),
                })
                .collect(),
        }
    }
}

static PRINCIPLES: [Principle; 6] = [
    Principle {
        id: "analogous",
        title: "Analogous Color Scheme",
        theory: "Analogous colors are those next to each other on the color wheel (e.g., blue → teal → cyan).",
        effect: "Creates a harmonious, unified look that's easy on the eyes.",
        example_template: "Navy ({bgColor}), teal ({primaryColor}), blue ({secondaryColor}): all cool tones that flow naturally.",
        color_keys: &["bgColor", "primaryColor", "secondaryColor"],
    },
    Principle {
        id: "hsv",
        title: "Hue, Saturation, and Value (HSV Model)",
        theory: "Good themes vary hue (color), saturation (intensity), and value (lightness/darkness) to create visual hierarchy.",
        effect: "Guides attention subtly without visual noise.",
        example_template: "Bright functions vs. muted comments: this difference in value and saturation helps users prioritize information.",
        color_keys: &["syntax.keyword", "syntax.comment", "syntax.function"],
    },
    Principle {
        id: "cool-colors",
        title: "Cool Colors Psychology",
        theory: "Blues, greens, and teals are \"cool\" colors that evoke calmness, stability, and focus.",
        effect: "Users feel relaxed and attentive, not overstimulated.",
        example_template: "Ideal for development environments, where long focus sessions are key.",
        color_keys: &["primaryColor", "secondaryColor", "bgColor"],
    },
    Principle {
        id: "contrast",
        title: "Contrast and Accessibility",
        theory: "Contrast between background and foreground improves legibility.",
        effect: "Lowers cognitive load, improves code comprehension.",
        example_template: "Uses dark backgrounds with soft-light text ({textColor}) and just enough contrast ({primaryColor}) for syntax clarity, avoiding harsh brightness.",
        color_keys: &["bgColor", "textColor", "primaryColor"],
    },
    Principle {
        id: "hierarchy",
        title: "Visual Hierarchy Using Color",
        theory: "High-saturation or bright colors draw the eye. Desaturated or darker colors recede.",
        effect: "Important code elements (like keywords) stand out; less important ones (like punctuation or comments) fade back.",
        example_template: "Leverages this subtly: functions and variables are brighter than comments or brackets.",
        color_keys: &["syntax.keyword", "textColor", "syntax.comment"],
    },
    Principle {
        id: "minimal",
        title: "Minimal Palette Reduces Cognitive Load",
        theory: "Too many colors overwhelm working memory. Simpler schemes help comprehension.",
        effect: "The brain can process code faster when it isn't flooded with color variation.",
        example_template: "Uses a limited but expressive palette: strategic, not noisy.",
        color_keys: &[
            "syntax.keyword",
            "syntax.function",
            "syntax.operator",
            "syntax.type",
            "syntax.comment",
        ],
    },
];

pub fn principles() -> &'static [Principle] {
    &PRINCIPLES
}

pub fn principle(id: &str) -> Option<&'static Principle> {
    PRINCIPLES.iter().find(|p| p.id == id)
}
