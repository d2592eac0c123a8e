//! Color utilities
//!
//! Colors enter the engine as `#RRGGBB` strings and leave it the same way.
//! In between they are [`Rgb`] triples in the 0-255 range, blended linearly
//! toward white ([`lighten`]) or black ([`darken`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Luminance below which a surface counts as dark.
const DARK_THRESHOLD: f64 = 128.0;

/// An 8-bit RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Perceptually weighted brightness estimate in 0-255.
    ///
    /// This is the classic `0.299r + 0.587g + 0.114b` heuristic, good enough
    /// to pick light or dark text but not a color-science luminance.
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    pub fn is_dark(&self) -> bool {
        self.luminance() < DARK_THRESHOLD
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }

    /// Move each channel toward 255 by `amount` (0 = unchanged, 1 = white)
    pub fn lighten(&self, amount: f64) -> Self {
        let lift = |c: u8| {
            let c = f64::from(c);
            c + (255.0 - c) * amount
        };
        Self::from_channels(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Move each channel toward 0 by `amount` (0 = unchanged, 1 = black)
    pub fn darken(&self, amount: f64) -> Self {
        let sink = |c: u8| f64::from(c) * (1.0 - amount);
        Self::from_channels(sink(self.r), sink(self.g), sink(self.b))
    }

    /// Round and clamp fractional channels into a valid color
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Parse six hex digits, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let packed =
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
    Ok(Rgb::from_hex(packed))
}

/// Encode fractional channels as `#rrggbb`, rounding and clamping each to 0-255.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::from_channels(r, g, b).to_hex_string()
}

pub fn lighten(color: &HexColor, amount: f64) -> String {
    color.rgb().lighten(amount).to_hex_string()
}

pub fn darken(color: &HexColor, amount: f64) -> String {
    color.rgb().darken(amount).to_hex_string()
}

/// A validated `#RRGGBB` color that remembers how it was written.
///
/// The original text is kept so values copied in and out of presets come back
/// unchanged. Equality compares channels, so `#1a1f27 == #1A1F27`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        let rgb = hex_to_rgb(hex)?;
        let text = if hex.starts_with('#') {
            hex.to_string()
        } else {
            format!("#{hex}")
        };
        Ok(Self { text, rgb })
    }

    /// Uppercase `#RRGGBB`, the spelling the stylesheet uses for its defaults
    pub fn from_rgb(rgb: Rgb) -> Self {
        let text = format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b);
        Self { text, rgb }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn is_dark(&self) -> bool {
        self.rgb.is_dark()
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for HexColor {}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#1A1F27").unwrap(), Rgb::new(0x1A, 0x1F, 0x27));
        assert_eq!(hex_to_rgb("1a1f27").unwrap(), Rgb::new(0x1A, 0x1F, 0x27));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "#GGGGGG", "#12 456", "+12345"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trips_every_channel_value() {
        for v in 0..=255u8 {
            for (r, g, b) in [(v, 0, 0), (0, v, 0), (0, 0, v), (v, 255 - v, v / 2)] {
                let encoded = rgb_to_hex(f64::from(r), f64::from(g), f64::from(b));
                assert_eq!(hex_to_rgb(&encoded).unwrap(), Rgb::new(r, g, b));
            }
        }
    }

    #[test]
    fn rgb_to_hex_rounds_and_clamps() {
        assert_eq!(rgb_to_hex(-20.0, 300.0, 127.5), "#00ff80");
        assert_eq!(rgb_to_hex(0.4, 254.6, 15.0), "#00ff0f");
    }

    #[test]
    fn zero_amount_is_identity() {
        for s in ["#1a1f27", "#f2f3ef", "#000000", "#ffffff", "#2563eb"] {
            assert_eq!(lighten(&hex(s), 0.0), s);
            assert_eq!(darken(&hex(s), 0.0), s);
        }
    }

    #[test]
    fn full_amount_saturates() {
        for s in ["#1A1F27", "#F2F3EF", "#000000", "#dc2626"] {
            assert_eq!(lighten(&hex(s), 1.0), "#ffffff");
            assert_eq!(darken(&hex(s), 1.0), "#000000");
        }
    }

    #[test]
    fn partial_blends() {
        // 0x80 + (255 - 0x80) * 0.5 = 191.5 -> 192
        assert_eq!(lighten(&hex("#808080"), 0.5), "#c0c0c0");
        assert_eq!(darken(&hex("#808080"), 0.5), "#404040");
    }

    #[test]
    fn dark_threshold() {
        assert!(hex("#1E1E2E").is_dark());
        assert!(!hex("#F2F3EF").is_dark());
        assert!(Rgb::new(120, 120, 120).is_dark());
        assert!(!Rgb::new(136, 136, 136).is_dark());
    }

    #[test]
    fn hex_color_keeps_text_and_compares_by_value() {
        let upper = hex("#1A1F27");
        let lower = hex("1a1f27");
        assert_eq!(upper.as_str(), "#1A1F27");
        assert_eq!(lower.as_str(), "#1a1f27");
        assert_eq!(upper, lower);
    }

    #[test]
    fn hex_color_serde_uses_plain_string() {
        let color = hex("#2563EB");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#2563EB\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "#2563EB");
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
