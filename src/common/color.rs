use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB color. The canonical text form is a 6-hex-digit string,
/// which is what every API payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // Accepts "ff8800" or "#ff8800".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Hue in degrees [0, 360). Achromatic colors report 0.
    pub fn hue(&self) -> f32 {
        self.to_hsv().0
    }

    /// HSV components: hue in degrees [0, 360), saturation and value in
    /// [0, 1].
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        (h, s, max)
    }

    pub fn distance_squared(&self, other: &Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::new(255, 136, 0);
        assert_eq!(color.to_hex(), "ff8800");
        assert_eq!(Color::from_hex("ff8800"), Some(color));
        assert_eq!(Color::from_hex("#ff8800"), Some(color));
        assert_eq!(Color::from_hex("ff88"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Color::new(255, 0, 0).hue(), 0.0);
        assert_eq!(Color::new(0, 255, 0).hue(), 120.0);
        assert_eq!(Color::new(0, 0, 255).hue(), 240.0);
        assert_eq!(Color::new(0, 255, 255).hue(), 180.0);
    }

    #[test]
    fn achromatic_hue_is_zero() {
        assert_eq!(BLACK.hue(), 0.0);
        assert_eq!(WHITE.hue(), 0.0);
        assert_eq!(Color::new(128, 128, 128).hue(), 0.0);
    }

    #[test]
    fn hsv_saturation_and_value() {
        let (_, s, v) = Color::new(255, 0, 0).to_hsv();
        assert_eq!(s, 1.0);
        assert_eq!(v, 1.0);
        let (_, s, v) = BLACK.to_hsv();
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.0);
    }
}
