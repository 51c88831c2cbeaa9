//! Colour type, hex parsing, and HSV conversion.

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsv, IntoColor, Srgb};

use crate::error::{Result, StripeError};

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (the default canvas background).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Exactly one format is accepted: `#rrggbb` (a `#` followed by six hex
    /// digits, case-insensitive). This is the validation boundary; colours
    /// are never re-checked once constructed.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || StripeError::InvalidColourFormat {
            value: s.to_string(),
            help: Some("Use #rrggbb format, e.g. #ff6b6b".to_string()),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
        Ok(Self::rgb(r, g, b))
    }

    /// Convert to an RGB array (for image output).
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to HSV, all three components in [0, 1] (hue normalized from
    /// degrees).
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsv: Hsv = rgb.into_color();
        (
            hsv.hue.into_positive_degrees() / 360.0,
            hsv.saturation,
            hsv.value,
        )
    }

    /// Build a colour from HSV components in [0, 1].
    ///
    /// Saturation and value are clamped into range; hue wraps. Never fails.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let hsv = Hsv::new(h * 360.0, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
        let rgb = Srgb::from_color(hsv);
        Self::rgb(
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        )
    }
}

impl FromStr for Colour {
    type Err = StripeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Colour {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Colour {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a comma-separated palette of hex colours.
pub fn parse_palette(s: &str) -> Result<Vec<Colour>> {
    s.split(',').map(|c| Colour::from_hex(c.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hex() {
        let c = Colour::from_hex("#ff0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));

        // Uppercase digits are fine
        let c = Colour::from_hex("#FF6B6B").unwrap();
        assert_eq!(c, Colour::rgb(0xff, 0x6b, 0x6b));
    }

    #[test]
    fn test_from_hex_invalid() {
        // Bad digits, missing '#', short and long forms all rejected
        for bad in ["#ZZZZZZ", "123456", "#FFF", "#ff00", "#ff00112", "", "#"] {
            let err = Colour::from_hex(bad).unwrap_err();
            assert!(
                matches!(err, StripeError::InvalidColourFormat { .. }),
                "expected InvalidColourFormat for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        // Parse then re-serialize is the identity on lowercase input
        for hex in ["#ff6b6b", "#4ecdc4", "#000000", "#ffffff", "#0a0b0c"] {
            assert_eq!(Colour::from_hex(hex).unwrap().to_string(), hex);
        }
    }

    #[test]
    fn test_hsv_round_trip() {
        // Representative sample across the cube; ±1 per channel tolerance
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let c = Colour::rgb(r as u8, g as u8, b as u8);
                    let (h, s, v) = c.to_hsv();
                    let back = Colour::from_hsv(h, s, v);
                    assert!((back.r as i16 - c.r as i16).abs() <= 1, "{c} -> {back}");
                    assert!((back.g as i16 - c.g as i16).abs() <= 1, "{c} -> {back}");
                    assert!((back.b as i16 - c.b as i16).abs() <= 1, "{c} -> {back}");
                }
            }
        }
    }

    #[test]
    fn test_from_hsv_clamps() {
        // Out-of-range saturation/value never panic
        let c = Colour::from_hsv(0.0, 2.0, -1.0);
        assert_eq!(c, Colour::BLACK);

        let c = Colour::from_hsv(0.0, -0.5, 2.0);
        assert_eq!(c, Colour::WHITE);
    }

    #[test]
    fn test_parse_palette() {
        let colours = parse_palette("#ff6b6b, #4ecdc4,#45b7d1").unwrap();
        assert_eq!(colours.len(), 3);
        assert_eq!(colours[0], Colour::rgb(0xff, 0x6b, 0x6b));

        assert!(parse_palette("#ff6b6b,nope").is_err());
    }
}
