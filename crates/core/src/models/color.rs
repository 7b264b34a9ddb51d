use serde::{Deserialize, Serialize};

use crate::errors::ChartError;

/// An opaque RGB color. Raster surfaces store it per pixel; vector surfaces
/// serialize it through `Display` as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    /// CSS "green" — the default advance (up) candle body fill.
    pub const GREEN: Color = Color::new(0x00, 0x80, 0x00);
    /// CSS "red" — the default decline (down) candle body fill.
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    /// Low-contrast gray used for grid lines.
    pub const GRID: Color = Color::new(0xef, 0xef, 0xef);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal (leading `#` optional).
    pub fn from_hex(literal: &str) -> Result<Self, ChartError> {
        let hex = literal.strip_prefix('#').unwrap_or(literal);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ChartError::ColorFormat(literal.to_string()));
        }
        let parse = |slice: &str| {
            u8::from_str_radix(slice, 16).map_err(|_| ChartError::ColorFormat(literal.to_string()))
        };
        Ok(Self {
            r: parse(&hex[0..2])?,
            g: parse(&hex[2..4])?,
            b: parse(&hex[4..6])?,
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
