//! Low-level primitives and utilities
//!
//! This module contains the pure color math the theme layer is built on.
//! Nothing in here touches the filesystem, so it is available in every build.

pub mod color;

pub use color::{contrast_ratio, is_hex_color, variations, Rgb, DARKEN_FACTOR, LIGHTEN_FACTOR};
