//! Guide colors and CSS color parsing.
//!
//! Accepts the forms hosts typically configure guides with:
//! `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)`. The functional forms are parsed with `winnow`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winnow::ascii::space0;
use winnow::combinator::{alt, delimited, preceded, separated};
use winnow::prelude::*;
use winnow::token::take_while;

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 0–255 channels and a 0.0–1.0 alpha.
    pub fn from_rgb8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// Parse any supported color string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        parse_rgb_function.parse(s).ok()
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        let [r, g, b, a] = match bytes.len() {
            3 => [short(0)?, short(1)?, short(2)?, 255],
            4 => [short(0)?, short(1)?, short(2)?, short(3)?],
            6 => [long(0)?, long(2)?, long(4)?, 255],
            8 => [long(0)?, long(2)?, long(4)?, long(6)?],
            _ => return None,
        };
        Some(Self::from_rgb8_alpha(r, g, b, f32::from(a) / 255.0))
    }

    /// Channels as 0–255 bytes, alpha included.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// CSS functional notation, as accepted by Canvas2D `strokeStyle`.
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgba({r},{g},{b},{})", self.a)
        }
    }
}

// ─── rgb() / rgba() ──────────────────────────────────────────────────────

fn parse_rgb_function(input: &mut &str) -> ModalResult<Color> {
    let channels: Vec<f32> = preceded(
        (alt(("rgba", "rgb")), space0),
        delimited('(', separated(3..=4, parse_channel, ','), ')'),
    )
    .parse_next(input)?;

    let byte = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    let alpha = channels.get(3).copied().unwrap_or(1.0);
    Ok(Color::from_rgb8_alpha(
        byte(channels[0]),
        byte(channels[1]),
        byte(channels[2]),
        alpha,
    ))
}

fn parse_channel(input: &mut &str) -> ModalResult<f32> {
    delimited(space0, parse_number, space0).parse_next(input)
}

fn parse_number(input: &mut &str) -> ModalResult<f32> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.' || c == '-')
        .parse_to()
        .parse_next(input)
}

// ─── Serde ───────────────────────────────────────────────────────────────

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}
