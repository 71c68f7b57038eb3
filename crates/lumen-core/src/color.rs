// File: crates/lumen-core/src/color.rs
// Summary: RGBA color type, hex parsing, lighten/darken, and the default series palette.

use thiserror::Error;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 6 or 8 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(s.to_string()));
        };
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let byte = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: if hex.len() == 8 { byte(6)? } else { 255 },
        })
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Shift every channel by `percent` of the full range, clamped.
    /// Positive lightens, negative darkens; alpha is untouched.
    pub fn adjust(self, percent: i32) -> Self {
        let amt = (2.55 * percent as f64).round() as i32;
        let ch = |c: u8| (c as i32 + amt).clamp(0, 255) as u8;
        Self { r: ch(self.r), g: ch(self.g), b: ch(self.b), a: self.a }
    }

    pub fn lighten(self, percent: i32) -> Self {
        self.adjust(percent)
    }

    pub fn darken(self, percent: i32) -> Self {
        self.adjust(-percent)
    }
}

/// Palette used when neither the point nor the series carries a color.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::rgb(0x4e, 0xcd, 0xc4),
    Color::rgb(0x44, 0xa0, 0x8d),
    Color::rgb(0x09, 0x36, 0x37),
    Color::rgb(0x20, 0xbf, 0x6b),
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0xe7, 0x4c, 0x3c),
];

/// Color used when even the palette is empty.
pub const FALLBACK: Color = Color::rgb(0x4e, 0xcd, 0xc4);

/// Palette entry for `index`, cycling; `FALLBACK` for an empty palette.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        FALLBACK
    } else {
        palette[index % palette.len()]
    }
}

/// Resolution order: point-level, then series-level, then palette-by-index.
pub fn resolve(point: Option<Color>, series: Option<Color>, palette: &[Color], index: usize) -> Color {
    point.or(series).unwrap_or_else(|| palette_color(palette, index))
}
