// V Theme color library - exposes all core modules for the CLI and tests

// Core types are always available (needed for schema generation)
pub mod config;
pub mod error;
pub mod primitives;
pub mod view;

pub use error::{ColorError, Result, VthemeError};
pub use primitives::color::{variations, Rgb};
pub use view::theme::{resolve, ColorInfo, ResolvedThemeColors, ThemeColorPalette, ThemeMode};
