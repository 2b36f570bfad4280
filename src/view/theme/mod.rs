//! Theme module - palettes, color resolution and swatch helpers
//!
//! This module is organized into:
//!
//! - **`types`**: Pure palette and color-set types
//!   - `ThemeColorPalette` / `ColorInfo` as stored in `themes/*.json`
//!   - `ResolvedThemeColors` and `SyntaxColorSet`
//! - **`resolve`**: `resolve()` a color table into a `ResolvedThemeColors`
//! - **`palette`**: Built-in palettes: `ThemeColorPalette::dark()`, `light()`
//! - **`lookup`**: `color_value()` by key and template substitution
//! - **`theory`**: Color theory cards rendered against a color set
//! - **`validate`**: Strict palette validation
//! - **`loader`** (runtime-only): `PaletteLoader` and `from_file()`
//!
//! # Usage
//!
//! ```ignore
//! use vtheme::view::theme::{resolve, ThemeColorPalette, ThemeMode};
//!
//! let palette = ThemeColorPalette::dark();
//! let colors = resolve(ThemeMode::Dark, &palette.primary);
//! assert_eq!(colors.background, "#212836");
//! ```

mod palette;
mod resolve;
mod types;

pub mod lookup;
pub mod theory;
pub mod validate;

#[cfg(feature = "runtime")]
mod loader;

pub use lookup::{color_value, process_example_template};
pub use palette::BUILTIN_PALETTES;
pub use resolve::resolve;
pub use types::{ColorInfo, ColorRole, ResolvedThemeColors, SyntaxColorSet, ThemeColorPalette, ThemeMode};
pub use validate::{
    validate_palette, validate_palette_file, validate_palette_json, PaletteValidationError,
    ValidationErrorKind, ValidationResult,
};

#[cfg(feature = "runtime")]
pub use loader::{user_palette_dir, PaletteLoader};
