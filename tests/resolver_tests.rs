//! Resolver, lookup and theory behavior through the public API

mod common;

use insta::assert_snapshot;
use vtheme::config::Config;
use vtheme::view::theme::{
    color_value, process_example_template, resolve, theory, ColorInfo, PaletteLoader,
    ResolvedThemeColors, SyntaxColorSet, ThemeColorPalette, ThemeMode, ValidationResult,
};
use vtheme::{variations, ColorError, Rgb, VthemeError};

fn render_table(colors: &ResolvedThemeColors) -> String {
    let mut lines = vec![
        format!("background {}", colors.background),
        format!("primary {}", colors.primary),
        format!("secondary {}", colors.secondary),
        format!("text {}", colors.text),
    ];
    lines.extend(
        colors
            .syntax
            .iter()
            .map(|(slot, color)| format!("syntax.{} {}", slot, color)),
    );
    lines.join("\n")
}

#[test]
fn test_dark_fallback_set() {
    common::tracing::init_tracing_from_env();

    let colors = resolve(ThemeMode::Dark, &[]);
    assert_snapshot!(render_table(&colors), @r"
    background #212836
    primary #64FFDA
    secondary #82AAFF
    text #E9ECEF
    syntax.keyword #FF79C6
    syntax.string #5CFF87
    syntax.number #FF8A8A
    syntax.function #64FFDA
    syntax.comment #8695A8
    syntax.variable #E9ECEF
    syntax.type #FFCB6B
    syntax.operator #82AAFF
    ");
}

#[test]
fn test_light_fallback_set() {
    let colors = resolve(ThemeMode::Light, &[]);
    assert_snapshot!(render_table(&colors), @r"
    background #F5F8FA
    primary #00A3A3
    secondary #0072C6
    text #2D3748
    syntax.keyword #A31DB1
    syntax.string #16A349
    syntax.number #E03E3E
    syntax.function #00A3A3
    syntax.comment #718096
    syntax.variable #2D3748
    syntax.type #B45309
    syntax.operator #0072C6
    ");
}

#[test]
fn test_table_override_keeps_other_fallbacks() {
    let table = vec![
        ColorInfo::new("Primary", "#123456", "Main accent"),
        ColorInfo::new("Keywords", "#000000", "ignored by the resolver"),
    ];
    let colors = resolve(ThemeMode::Light, &table);

    assert_eq!(colors.primary, "#123456");
    assert_eq!(colors.secondary, "#0072C6");
    assert_eq!(colors.syntax.keyword, "#A31DB1");
}

#[test]
fn test_palette_json_round_trip_resolves() {
    let json = r##"{
        "primary": [
            { "name": "Background", "hexCode": "#101010", "usage": "bg" },
            { "name": "Foreground", "hexCode": "#F0F0F0" }
        ]
    }"##;
    let palette: ThemeColorPalette = serde_json::from_str(json).unwrap();
    let colors = palette.resolve(ThemeMode::Dark);

    assert_eq!(colors.background, "#101010");
    assert_eq!(colors.text, "#F0F0F0");
    assert_eq!(colors.primary, "#64FFDA");
    assert!(palette.syntax.is_empty() && palette.ui.is_empty());
}

#[test]
fn test_resolved_colors_serialize_with_plain_type_key() {
    let colors = resolve(ThemeMode::Dark, &[]);
    let json = serde_json::to_value(&colors).unwrap();
    assert_eq!(json["background"], "#212836");
    assert_eq!(json["syntax"]["type"], "#FFCB6B");
}

#[test]
fn test_swatches_from_resolved_colors() {
    let colors = ThemeColorPalette::dark().resolve(ThemeMode::Dark);
    let ramp = variations(color_value("primaryColor", &colors)).unwrap();
    assert_snapshot!(ramp.join(" "), @"#82ffff #64FFDA #46b298");

    // a generated swatch can itself be expanded
    let again = variations(&ramp[2]).unwrap();
    assert_eq!(again[1], "#46b298");
}

#[test]
fn test_theory_card_rendering() {
    let colors = resolve(ThemeMode::Dark, &[]);
    let card = theory::principle("analogous").unwrap().render(&colors);

    assert_snapshot!(
        card.example,
        @"Navy (#212836), teal (#64FFDA), blue (#82AAFF): all cool tones that flow naturally."
    );
    let keys: Vec<_> = card.swatches.iter().map(|s| (s.key, s.hex.as_str())).collect();
    assert_eq!(
        keys,
        vec![
            ("bgColor", "#212836"),
            ("primaryColor", "#64FFDA"),
            ("secondaryColor", "#82AAFF"),
        ]
    );
}

#[test]
fn test_template_without_placeholders_is_unchanged() {
    let colors = resolve(ThemeMode::Light, &[]);
    let text = "Ideal for development environments.";
    assert_eq!(process_example_template(text, &colors), text);
}

#[test]
fn test_public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ThemeMode>();
    assert_send_sync::<ColorInfo>();
    assert_send_sync::<ThemeColorPalette>();
    assert_send_sync::<SyntaxColorSet>();
    assert_send_sync::<ResolvedThemeColors>();
    assert_send_sync::<PaletteLoader>();
    assert_send_sync::<ValidationResult>();
    assert_send_sync::<Config>();
    assert_send_sync::<Rgb>();
    assert_send_sync::<ColorError>();
    assert_send_sync::<VthemeError>();
}

#[test]
fn test_resolved_colors_always_feed_the_generator() {
    let table = vec![
        ColorInfo::new("Primary", "red", ""),
        ColorInfo::new("Secondary", "#82AAFF80", ""),
    ];
    let colors = resolve(ThemeMode::Dark, &table);
    for color in [&colors.background, &colors.primary, &colors.secondary, &colors.text] {
        assert!(variations(color).is_ok(), "{} is not a #RRGGBB color", color);
    }
    assert_eq!(colors.primary, "#64FFDA");
}
