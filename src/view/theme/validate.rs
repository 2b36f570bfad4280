//! Strict palette validation using JSON Schema.
//!
//! Loading is lenient: unknown fields are ignored and a missing role just
//! falls back to the built-in default at resolve time. Validation is strict.
//! The schemars schema of [`ThemeColorPalette`] is made strict (no additional
//! properties, `#RRGGBB` pattern on every `hexCode`) and checked with the
//! `jsonschema` crate. Duplicate names and missing roles are checked on the
//! raw JSON afterwards, so they are reported even when an entry is malformed.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use super::types::{ColorRole, ThemeColorPalette};
use crate::primitives::color::is_hex_color;

const HEX_COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";
const SECTIONS: [&str; 3] = ["primary", "syntax", "ui"];

/// A single validation error with path and message.
#[derive(Debug, Clone)]
pub struct PaletteValidationError {
    /// Dotted path to the offending value (e.g., "primary.2.hexCode")
    pub path: String,
    /// Human-readable error message
    pub message: String,
    pub kind: ValidationErrorKind,
}

/// The kind of validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input is not JSON at all
    InvalidJson,
    /// Field not part of the palette format
    UnknownField,
    /// JSON has the wrong shape (e.g., a number where a list is expected)
    TypeMismatch,
    /// Entry without `name` or `hexCode`
    MissingField,
    /// `hexCode` is not `#RRGGBB`
    InvalidColor,
    /// Same name twice within one section
    DuplicateName,
    /// A semantic role has no entry in the primary section
    MissingRole,
    /// Anything else the schema rejects
    Other,
}

/// Result of palette validation.
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// List of validation errors (empty if valid)
    pub errors: Vec<PaletteValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<PaletteValidationError>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    fn from_errors(errors: Vec<PaletteValidationError>) -> Self {
        if errors.is_empty() {
            Self::valid()
        } else {
            Self::invalid(errors)
        }
    }
}

fn error(path: impl Into<String>, message: impl Into<String>, kind: ValidationErrorKind) -> PaletteValidationError {
    PaletteValidationError {
        path: path.into(),
        message: message.into(),
        kind,
    }
}

/// Add `additionalProperties: false` to every object schema and the hex
/// pattern to every `hexCode` property.
fn make_schema_strict(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("object")
                && !map.contains_key("additionalProperties")
            {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }

            if let Some(Value::Object(hex_code)) = map
                .get_mut("properties")
                .and_then(|props| props.get_mut("hexCode"))
            {
                hex_code.insert("pattern".to_string(), Value::String(HEX_COLOR_PATTERN.to_string()));
            }

            for (key, value) in map.iter_mut() {
                if key != "$ref" {
                    make_schema_strict(value);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                make_schema_strict(item);
            }
        }
        _ => {}
    }
}

/// Schema of the palette format that rejects unknown fields and malformed colors.
pub fn get_strict_palette_schema() -> Value {
    let mut schema = schemars::schema_for!(ThemeColorPalette).to_value();
    make_schema_strict(&mut schema);
    schema
}

fn classify_error(error: &jsonschema::ValidationError) -> ValidationErrorKind {
    let message = error.to_string();

    if message.contains("Additional properties are not allowed")
        || message.contains("additionalProperties")
    {
        ValidationErrorKind::UnknownField
    } else if message.contains("does not match") {
        ValidationErrorKind::InvalidColor
    } else if message.contains("is not of type") {
        ValidationErrorKind::TypeMismatch
    } else if message.contains("is a required property") {
        ValidationErrorKind::MissingField
    } else {
        ValidationErrorKind::Other
    }
}

/// `/primary/0/hexCode` becomes `primary.0.hexCode`
fn format_path(error: &jsonschema::ValidationError) -> String {
    let path = error.instance_path().to_string();
    if path.is_empty() || path == "/" {
        "(root)".to_string()
    } else {
        path.trim_start_matches('/').replace('/', ".")
    }
}

fn schema_errors(instance: &Value) -> Vec<PaletteValidationError> {
    let schema = get_strict_palette_schema();
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            return vec![error(
                "(root)",
                format!("Internal error: failed to compile schema: {}", e),
                ValidationErrorKind::Other,
            )];
        }
    };

    validator
        .iter_errors(instance)
        .map(|e| PaletteValidationError {
            path: format_path(&e),
            message: e.to_string(),
            kind: classify_error(&e),
        })
        .collect()
}

/// Duplicate names within `section`. Entries without a name are skipped.
fn duplicate_names<'a>(
    section: &str,
    names: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<PaletteValidationError> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let name = name?;
            (!seen.insert(name)).then(|| {
                error(
                    format!("{}.{}.name", section, index),
                    format!("Duplicate name '{}' in {}", name, section),
                    ValidationErrorKind::DuplicateName,
                )
            })
        })
        .collect()
}

fn missing_roles(primary_names: &[Option<&str>]) -> Vec<PaletteValidationError> {
    ColorRole::ALL
        .into_iter()
        .filter(|role| !primary_names.contains(&Some(role.label())))
        .map(|role| {
            error(
                "primary",
                format!("Missing '{}' entry", role.label()),
                ValidationErrorKind::MissingRole,
            )
        })
        .collect()
}

/// Entry names of one section of raw palette JSON, `None` where an entry has
/// no string name.
fn section_names<'a>(root: &'a Value, section: &str) -> Vec<Option<&'a str>> {
    root.get(section)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| entry.get("name").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Check colors, names and roles of an already-parsed palette.
pub fn validate_palette(palette: &ThemeColorPalette) -> ValidationResult {
    let mut errors = Vec::new();

    for (section, entries) in palette.sections() {
        for (index, entry) in entries.iter().enumerate() {
            if !is_hex_color(&entry.hex_code) {
                errors.push(error(
                    format!("{}.{}.hexCode", section, index),
                    format!("'{}' is not a #RRGGBB color", entry.hex_code),
                    ValidationErrorKind::InvalidColor,
                ));
            }
        }
        errors.extend(duplicate_names(
            section,
            entries.iter().map(|entry| Some(entry.name.as_str())),
        ));
    }

    let primary: Vec<_> = palette.primary.iter().map(|c| Some(c.name.as_str())).collect();
    errors.extend(missing_roles(&primary));

    ValidationResult::from_errors(errors)
}

/// Validate palette JSON string against the strict schema, then check names
/// and roles.
pub fn validate_palette_json(json: &str) -> ValidationResult {
    let instance: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            return ValidationResult::invalid(vec![error(
                "(root)",
                format!("Invalid JSON: {}", e),
                ValidationErrorKind::InvalidJson,
            )]);
        }
    };

    let mut errors = schema_errors(&instance);
    if instance.is_object() {
        for section in SECTIONS {
            errors.extend(duplicate_names(section, section_names(&instance, section)));
        }
        errors.extend(missing_roles(&section_names(&instance, "primary")));
    }

    ValidationResult::from_errors(errors)
}

/// Validate a palette file at the given path.
///
/// Returns `Err` only if the file could not be read.
pub fn validate_palette_file(path: &Path) -> Result<ValidationResult, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    Ok(validate_palette_json(&contents))
}
