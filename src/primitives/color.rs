//! RGB color primitives
//!
//! Parsing and formatting of `#RRGGBB` strings, the lighter/original/darker
//! swatch ramp, and WCAG luminance/contrast math.
//!
//! Everything here is pure and allocation-light; it is safe to call from any
//! number of threads at once.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ColorError;

/// Channel multiplier for the lighter swatch of a ramp.
pub const LIGHTEN_FACTOR: f64 = 1.3;

/// Channel multiplier for the darker swatch of a ramp.
pub const DARKEN_FACTOR: f64 = 0.7;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Returns true if `s` is exactly `#` followed by six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_RE.is_match(s)
}

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (either case).
    ///
    /// Shorthand (`#FFF`), a missing `#`, alpha digits or non-hex characters
    /// are all rejected with [`ColorError::InvalidColorFormat`].
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        if !is_hex_color(s) {
            return Err(ColorError::InvalidColorFormat {
                input: s.to_string(),
            });
        }

        let channel = |start: usize| {
            u8::from_str_radix(&s[start..start + 2], 16).map_err(|_| {
                ColorError::InvalidColorFormat {
                    input: s.to_string(),
                }
            })
        };

        Ok(Self {
            r: channel(1)?,
            g: channel(3)?,
            b: channel(5)?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Multiply every channel by `factor`, flooring and clamping to 0..=255.
    ///
    /// The multiplication is done in `f64` so results match the swatches the
    /// web palette page generated (e.g. `70 * 0.7` floors to 48, not 49).
    pub fn scale(&self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn lighten(&self) -> Self {
        self.scale(LIGHTEN_FACTOR)
    }

    pub fn darken(&self) -> Self {
        self.scale(DARKEN_FACTOR)
    }

    /// Relative luminance.
    /// See: https://www.w3.org/TR/WCAG20/#relativeluminancedef
    pub fn relative_luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0. Symmetric.
/// See: https://www.w3.org/TR/WCAG20/#contrast-ratiodef
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = a.relative_luminance();
    let l2 = b.relative_luminance();
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Build the swatch ramp for `hex`: `[lighter, original, darker]`.
///
/// The middle element is `hex` itself, untouched (including its case). The
/// outer two are lowercase `#rrggbb`. Input is validated before any channel
/// math, so a malformed color never yields a partial ramp.
pub fn variations(hex: &str) -> Result<[String; 3], ColorError> {
    let base = Rgb::from_hex(hex)?;
    Ok([
        base.lighten().to_hex(),
        hex.to_string(),
        base.darken().to_hex(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_both_cases() {
        assert_eq!(Rgb::from_hex("#64FFDA"), Ok(Rgb::new(100, 255, 218)));
        assert_eq!(Rgb::from_hex("#64ffda"), Ok(Rgb::new(100, 255, 218)));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["#FFF", "FFFFFF", "#GGGGGG", "", "#1234567", "#12345", " #123456", "#123456\n"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorError::InvalidColorFormat {
                    input: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(1, 171, 15).to_hex(), "#01ab0f");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_scale_floors_and_clamps() {
        let c = Rgb::new(100, 255, 218);
        assert_eq!(c.lighten(), Rgb::new(130, 255, 255));
        assert_eq!(c.darken(), Rgb::new(70, 178, 152));
    }

    #[test]
    fn test_variations_white_and_black() {
        assert_eq!(
            variations("#FFFFFF").unwrap(),
            ["#ffffff", "#FFFFFF", "#b2b2b2"]
        );
        assert_eq!(
            variations("#000000").unwrap(),
            ["#000000", "#000000", "#000000"]
        );
    }

    #[test]
    fn test_variations_accent() {
        assert_eq!(
            variations("#64FFDA").unwrap(),
            ["#82ffff", "#64FFDA", "#46b298"]
        );
    }

    #[test]
    fn test_variations_rejects_shorthand() {
        assert!(matches!(
            variations("#fff"),
            Err(ColorError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1, "got {ratio}");
    }

    #[test]
    fn test_contrast_ratio_is_symmetric() {
        let a = Rgb::new(0x21, 0x28, 0x36);
        let b = Rgb::new(0xE9, 0xEC, 0xEF);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, a) - 1.0 < 1e-9);
    }
}
