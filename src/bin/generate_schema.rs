//! Generate JSON Schemas for vtheme configuration and palettes
//!
//! This binary generates JSON Schemas from Rust structs using schemars.
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema config > schemas/config.schema.json
//!   cargo run --features dev-bins --bin generate_schema palette > schemas/palette.schema.json

use schemars::schema_for;
use std::env;
use vtheme::config::Config;
use vtheme::view::theme::ThemeColorPalette;

fn main() {
    let args: Vec<String> = env::args().collect();
    let schema_type = args.get(1).map(|s| s.as_str()).unwrap_or("config");

    let schema = match schema_type {
        "config" => schema_for!(Config),
        "palette" => schema_for!(ThemeColorPalette),
        other => {
            eprintln!("Unknown schema type: {}. Use 'config' or 'palette'.", other);
            std::process::exit(1);
        }
    };

    let output = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema");
    println!("{}", output);
}
