//! Config and palette lookup that depend on the process environment.
//!
//! `dirs::config_dir()` follows `XDG_CONFIG_HOME` on Linux, so these tests
//! point it at a temp dir. The environment is process-wide; every test here
//! holds `ENV_LOCK` while it changes it.

#![cfg(target_os = "linux")]

mod common;

use std::path::Path;
use std::sync::Mutex;

use vtheme::config::{Config, MODE_ENV_VAR};
use vtheme::view::theme::{user_palette_dir, PaletteLoader, ThemeColorPalette, ThemeMode};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_config_home<T>(mode: Option<&str>, f: impl FnOnce(&Path) -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let home = tempfile::tempdir().unwrap();

    std::env::set_var("XDG_CONFIG_HOME", home.path());
    match mode {
        Some(mode) => std::env::set_var(MODE_ENV_VAR, mode),
        None => std::env::remove_var(MODE_ENV_VAR),
    }

    let result = f(home.path());

    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::remove_var(MODE_ENV_VAR);
    result
}

fn write_config(home: &Path, json: &str) {
    let dir = home.join("vtheme");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.json"), json).unwrap();
}

#[test]
fn test_config_load_reads_user_file() {
    common::tracing::init_tracing_from_env();

    let config = with_config_home(None, |home| {
        write_config(home, r#"{ "default_mode": "light", "palette": "ocean" }"#);
        Config::load().unwrap()
    });
    assert_eq!(config.default_mode, ThemeMode::Light);
    assert_eq!(config.palette.as_deref(), Some("ocean"));
}

#[test]
fn test_env_var_overrides_config_file() {
    let config = with_config_home(Some("DARK"), |home| {
        write_config(home, r#"{ "default_mode": "light" }"#);
        Config::load().unwrap()
    });
    assert_eq!(config.default_mode, ThemeMode::Dark);
}

#[test]
fn test_env_var_applies_without_config_file() {
    let config = with_config_home(Some("light"), |_| Config::load().unwrap());
    assert_eq!(config.default_mode, ThemeMode::Light);
}

#[test]
fn test_invalid_env_var_is_error() {
    let result = with_config_home(Some("sepia"), |_| Config::load());
    assert!(result.is_err());
}

#[test]
fn test_user_palette_dir_is_searched_first() {
    let (user_dir, dirs, palette) = with_config_home(None, |home| {
        let user_dir = home.join("vtheme").join("themes");
        std::fs::create_dir_all(&user_dir).unwrap();
        // shadows themes/dark.json in the package root (the test working dir)
        std::fs::write(
            user_dir.join("dark.json"),
            r##"{ "primary": [{ "name": "Background", "hexCode": "#000001" }] }"##,
        )
        .unwrap();

        let loader = PaletteLoader::new();
        (
            user_palette_dir(),
            loader.search_dirs().to_vec(),
            loader.load("dark").unwrap(),
        )
    });

    assert_eq!(dirs.first(), user_dir.as_ref());
    assert_eq!(dirs[1], Path::new("themes"));
    assert_ne!(palette, ThemeColorPalette::dark());
    assert_eq!(palette.resolve(ThemeMode::Dark).background, "#000001");
}
