//! Hex color parsing and serialization helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color parsed from `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 when the input had none.
    pub a: u8,
}

impl HexColor {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string. The leading `#` is required.
    pub fn parse(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("Hex color '{hex}' must start with '#'"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Invalid hex color".to_string());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| "Invalid hex color".to_string());

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            },
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
                a: channel(&digits[6..8])?,
            }),
            _ => Err("Hex color must be 3, 6 or 8 characters".to_string()),
        }
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        Self::parse(&hex).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_long_and_alpha_forms() {
        assert_eq!(HexColor::parse("#fff").unwrap(), HexColor::rgb(255, 255, 255));
        assert_eq!(HexColor::parse("#FFD700").unwrap(), HexColor::rgb(255, 215, 0));
        let translucent = HexColor::parse("#00000080").unwrap();
        assert_eq!(translucent.a, 0x80);
        assert_eq!(translucent.to_string(), "#00000080");
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(HexColor::parse("3B82F6").is_err());
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert!(HexColor::parse("#ééé").is_err());
        assert!(HexColor::parse("rgb(0, 0, 0)").is_err());
        assert!(HexColor::parse("#+f+f+f").is_err());
        assert!(HexColor::parse("#+f").is_err());
    }

    #[test]
    fn display_is_lowercase_without_opaque_alpha() {
        assert_eq!(HexColor::parse("#3B82F6").unwrap().to_string(), "#3b82f6");
    }
}
