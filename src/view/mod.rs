//! View layer
//!
//! Everything a presentation layer needs to color itself: palettes, the
//! resolved color set and the color theory cards.

pub mod theme;
