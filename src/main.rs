//! V Theme color tool
//!
//! Thin command-line wrapper around the `vtheme` library.
//!
//! ## Usage
//!
//! ```bash
//! # Resolved color set for the configured mode
//! vtheme resolve
//!
//! # Same, for the light palette, as JSON
//! vtheme --mode light resolve --json
//!
//! # Lighter/original/darker swatches
//! vtheme variations "#64FFDA" "#82AAFF"
//!
//! # One color by key
//! vtheme lookup syntax.keyword
//!
//! # Color theory cards
//! vtheme theory
//!
//! # Check palette files
//! vtheme validate themes/*.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vtheme::config::Config;
use vtheme::primitives::color::{contrast_ratio, variations, Rgb};
use vtheme::view::theme::{
    color_value, theory, validate_palette_file, PaletteLoader, ResolvedThemeColors,
    ThemeColorPalette, ThemeMode,
};

/// Color utilities for the V Theme editor color scheme
#[derive(Parser)]
#[command(name = "vtheme")]
#[command(version)]
#[command(about = "Color utilities for the V Theme editor color scheme")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Theme mode (default: from config, VTHEME_MODE, or dark)
    #[arg(short, long, global = true)]
    mode: Option<ThemeMode>,

    /// Palette name or path to a palette JSON file
    #[arg(short, long, global = true)]
    palette: Option<String>,

    /// Config file (default: <config dir>/vtheme/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved color set
    Resolve {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print lighter/original/darker swatches for each color
    Variations {
        /// Colors in #RRGGBB form
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Print one color by key (bgColor, primaryColor, secondaryColor, textColor, syntax.<slot>)
    Lookup { key: String },

    /// Print the color theory cards rendered with the resolved colors
    Theory {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List available palette names
    Palettes,

    /// Strictly validate palette JSON files
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let env_mode = std::env::var(vtheme::config::MODE_ENV_VAR).ok();
            Config::from_file(path)
                .and_then(|config| config.with_mode_override(env_mode.as_deref()))
                .with_context(|| format!("loading config {}", path.display()))
        }
        None => Config::load().context("loading config"),
    }
}

/// Palette from `--palette`, then the config, then the built-in for `mode`.
fn load_palette(cli: &Cli, config: &Config, mode: ThemeMode) -> Result<ThemeColorPalette> {
    let loader = PaletteLoader::new();
    match cli.palette.as_ref().or(config.palette.as_ref()) {
        Some(target) => loader
            .load_path_or_name(target)
            .with_context(|| format!("loading palette '{}'", target)),
        None => Ok(ThemeColorPalette::for_mode(mode)),
    }
}

/// Role colors keyed by their field names in the JSON output
fn role_fields(colors: &ResolvedThemeColors) -> [(&'static str, &str); 4] {
    [
        ("background", colors.background.as_str()),
        ("primary", colors.primary.as_str()),
        ("secondary", colors.secondary.as_str()),
        ("text", colors.text.as_str()),
    ]
}

fn print_colors(mode: ThemeMode, colors: &ResolvedThemeColors) {
    println!("mode        {}", mode);
    for (field, color) in role_fields(colors) {
        println!("{:<11} {}", field, color);
    }
    for (slot, color) in colors.syntax.iter() {
        println!("{:<11} {}", format!("syntax.{}", slot), color);
    }

    if let (Ok(fg), Ok(bg)) = (Rgb::from_hex(&colors.text), Rgb::from_hex(&colors.background)) {
        println!("contrast    {:.2}:1", contrast_ratio(fg, bg));
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Variations { colors } => {
            for color in colors {
                let [lighter, original, darker] = variations(color)?;
                println!("{}  {}  {}", lighter, original, darker);
            }
            return Ok(());
        }
        Commands::Palettes => {
            for name in PaletteLoader::new().available() {
                println!("{}", name);
            }
            return Ok(());
        }
        Commands::Validate { files } => return validate(files),
        _ => {}
    }

    let config = load_config(cli.config.as_ref())?;
    let mode = cli.mode.unwrap_or(config.default_mode);
    let palette = load_palette(&cli, &config, mode)?;
    let colors = palette.resolve(mode);

    match &cli.command {
        Commands::Resolve { json: true } => {
            println!("{}", serde_json::to_string_pretty(&colors)?);
        }
        Commands::Resolve { json: false } => print_colors(mode, &colors),
        Commands::Lookup { key } => println!("{}", color_value(key, &colors)),
        Commands::Theory { json } => {
            let rendered: Vec<_> = theory::principles()
                .iter()
                .map(|p| p.render(&colors))
                .collect();
            if *json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for card in rendered {
                    println!("{}", card.title);
                    println!("  {}", card.theory);
                    println!("  {}", card.effect);
                    println!("  {}", card.example);
                    let swatches: Vec<String> = card
                        .swatches
                        .iter()
                        .map(|s| format!("{}={}", s.key, s.hex))
                        .collect();
                    println!("  {}", swatches.join(" "));
                    println!();
                }
            }
        }
        Commands::Variations { .. } | Commands::Palettes | Commands::Validate { .. } => {}
    }

    Ok(())
}

fn validate(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;
    for path in files {
        let result = validate_palette_file(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if result.is_valid {
            println!("{}: ok", path.display());
            continue;
        }
        failed += 1;
        for error in &result.errors {
            println!("{}: {}: {}", path.display(), error.path, error.message);
        }
    }

    if failed > 0 {
        bail!("{} of {} palette files failed validation", failed, files.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
