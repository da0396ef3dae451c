use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An sRGB color with straight alpha, as written in CSS.
///
/// Parses `rgb(r, g, b)`, `rgba(r, g, b, a)` and `#rrggbb`; always formats
/// back as `rgba(r, g, b, a)` so it can be handed straight to a 2D context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1].
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue, different opacity. Alpha is clamped to [0, 1].
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| ColorParseError::InvalidComponent(s.trim().to_string()))
}

fn parse_alpha(s: &str) -> Result<f32, ColorParseError> {
    let a = s
        .trim()
        .parse::<f32>()
        .map_err(|_| ColorParseError::InvalidComponent(s.trim().to_string()))?;
    if !(0.0..=1.0).contains(&a) {
        return Err(ColorParseError::InvalidComponent(s.trim().to_string()));
    }
    Ok(a)
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::UnknownFormat(format!("#{}", hex)));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidComponent(hex[i..i + 2].to_string()))
    };
    Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let (body, expected) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Err(ColorParseError::UnknownFormat(s.to_string()));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::UnknownFormat(s.to_string()))?;

        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() != expected {
            return Err(ColorParseError::ComponentCount { expected, found: parts.len() });
        }

        let a = if expected == 4 { parse_alpha(parts[3])? } else { 1.0 };
        Ok(Rgba::new(
            parse_channel(parts[0])?,
            parse_channel(parts[1])?,
            parse_channel(parts[2])?,
            a,
        ))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgba() {
        let c: Rgba = "rgba(99, 102, 241, 0.8)".parse().unwrap();
        assert_eq!(c, Rgba::new(99, 102, 241, 0.8));
    }

    #[test]
    fn parses_rgb_and_hex_as_opaque() {
        let c: Rgba = "rgb(1,2,3)".parse().unwrap();
        assert_eq!(c, Rgba::new(1, 2, 3, 1.0));
        let h: Rgba = "#6366f1".parse().unwrap();
        assert_eq!(h, Rgba::new(99, 102, 241, 1.0));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(
            "hsl(10, 20%, 30%)".parse::<Rgba>(),
            Err(ColorParseError::UnknownFormat(_))
        ));
        assert!(matches!(
            "rgba(1, 2, 3)".parse::<Rgba>(),
            Err(ColorParseError::ComponentCount { expected: 4, found: 3 })
        ));
        assert!(matches!(
            "rgb(300, 0, 0)".parse::<Rgba>(),
            Err(ColorParseError::InvalidComponent(_))
        ));
        assert!("rgba(1, 2, 3, 1.5)".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
    }

    #[test]
    fn hex_rejects_signs_and_non_digits() {
        assert!(matches!(
            "#+f+f+f".parse::<Rgba>(),
            Err(ColorParseError::UnknownFormat(_))
        ));
        assert!("#-1-1-1".parse::<Rgba>().is_err());
        assert!("#gg0000".parse::<Rgba>().is_err());
        assert_eq!("#FFfF00".parse::<Rgba>(), Ok(Rgba::new(255, 255, 0, 1.0)));
    }

    #[test]
    fn formats_as_css_rgba() {
        let c = Rgba::new(99, 102, 241, 0.15);
        assert_eq!(c.to_string(), "rgba(99, 102, 241, 0.15)");
    }

    #[test]
    fn with_alpha_keeps_hue_and_clamps() {
        let c = Rgba::new(10, 20, 30, 0.5);
        assert_eq!(c.with_alpha(0.1), Rgba::new(10, 20, 30, 0.1));
        assert_eq!(c.with_alpha(2.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn deserializes_from_json_string() {
        let c: Rgba = serde_json::from_str("\"rgba(1, 2, 3, 0.5)\"").unwrap();
        assert_eq!(c, Rgba::new(1, 2, 3, 0.5));
        assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
    }
}
