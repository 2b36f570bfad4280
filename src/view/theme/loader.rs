//! Palette loading from filesystem (runtime-only)
//!
//! Palettes are JSON files named `<name>.json`. The user's config directory
//! is searched first, then the bundled `themes/` directory. The built-in
//! palettes are the final fallback for the names "dark" and "light".

use std::path::{Path, PathBuf};

use super::palette::BUILTIN_PALETTES;
use super::types::ThemeColorPalette;
use crate::error::{Result, VthemeError};

impl ThemeColorPalette {
    /// Load a palette from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VthemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| VthemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// User palette directory: `<config_dir>/vtheme/themes`
pub fn user_palette_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vtheme").join("themes"))
}

/// Finds palettes by name across a list of directories
#[derive(Debug, Clone)]
pub struct PaletteLoader {
    search_dirs: Vec<PathBuf>,
}

impl Default for PaletteLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteLoader {
    /// Search the user config directory, then `themes/` relative to the
    /// working directory and its parents.
    pub fn new() -> Self {
        let mut search_dirs: Vec<PathBuf> = vec![
            PathBuf::from("themes"),
            PathBuf::from("../themes"),
            PathBuf::from("../../themes"),
        ];
        if let Some(user_dir) = user_palette_dir() {
            search_dirs.insert(0, user_dir);
        }
        Self { search_dirs }
    }

    /// Search only `dirs`, in order
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Load palette `name`.
    ///
    /// The first file that loads wins; broken files are skipped with a
    /// warning. Falls back to the built-in palette for "dark" and "light".
    pub fn load(&self, name: &str) -> Result<ThemeColorPalette> {
        let normalized = name.to_lowercase().replace('_', "-");

        for dir in &self.search_dirs {
            let path = dir.join(format!("{}.json", normalized));
            if !path.is_file() {
                tracing::trace!("no palette at {}", path.display());
                continue;
            }
            match ThemeColorPalette::from_file(&path) {
                Ok(palette) => {
                    tracing::debug!("loaded palette '{}' from {}", normalized, path.display());
                    return Ok(palette);
                }
                Err(e) => tracing::warn!("skipping palette file: {}", e),
            }
        }

        ThemeColorPalette::builtin(&normalized)
            .ok_or_else(|| VthemeError::PaletteNotFound(name.to_string()))
    }

    /// Load from `target`, treating it as a file path if one exists there and
    /// as a palette name otherwise.
    pub fn load_path_or_name(&self, target: &str) -> Result<ThemeColorPalette> {
        let path = Path::new(target);
        if path.is_file() {
            ThemeColorPalette::from_file(path)
        } else {
            self.load(target)
        }
    }

    /// All palette names: built-ins first, then every `*.json` in the search
    /// directories. No duplicates.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_PALETTES.iter().map(|s| s.to_string()).collect();

        for dir in &self.search_dirs {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            let mut found: Vec<String> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
                .collect();
            found.sort();

            for name in found {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        names
    }
}
