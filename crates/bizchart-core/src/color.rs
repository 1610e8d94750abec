// File: crates/bizchart-core/src/color.rs
// Summary: RGBA color value, named colors, record palette and random pie colors.

use std::str::FromStr;

use rand::Rng;

use crate::error::ChartError;
use crate::geometry::clamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Move each channel halfway toward white. Alpha is kept.
    pub fn lighten(self) -> Self {
        self.lighten_by(0.5)
    }

    pub fn lighten_by(self, amount: f32) -> Self {
        let t = clamp(amount, 0.0, 1.0);
        let ch = |c: u8| -> u8 { (c as f32 + (255.0 - c as f32) * t).round() as u8 };
        Self { a: self.a, r: ch(self.r), g: ch(self.g), b: ch(self.b) }
    }

    /// Uniformly random opaque color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(rng.gen(), rng.gen(), rng.gen())
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);
    pub const SILVER: Color = Color::from_rgb(192, 192, 192);
    pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
    pub const DARK_BLUE: Color = Color::from_rgb(0, 0, 139);
    pub const DARK_GREEN: Color = Color::from_rgb(0, 100, 0);
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);
    pub const LIME_GREEN: Color = Color::from_rgb(50, 205, 50);
    pub const DIM_GRAY: Color = Color::from_rgb(105, 105, 105);
    pub const SKY_BLUE: Color = Color::from_rgb(135, 206, 235);
    pub const PINK: Color = Color::from_rgb(255, 192, 203);
    pub const ROSY_BROWN: Color = Color::from_rgb(188, 143, 143);
    pub const OLIVE_DRAB: Color = Color::from_rgb(107, 142, 35);
    pub const ORCHID: Color = Color::from_rgb(218, 112, 214);
    pub const SADDLE_BROWN: Color = Color::from_rgb(139, 69, 19);
}

/// Colors handed out, in order, to records added without an explicit color.
pub const RECORD_PALETTE: [Color; 9] = [
    Color::ORANGE,
    Color::DARK_BLUE,
    Color::DARK_GREEN,
    Color::MAGENTA,
    Color::LIME_GREEN,
    Color::DIM_GRAY,
    Color::SKY_BLUE,
    Color::PINK,
    Color::ROSY_BROWN,
];

/// First palette color not in `used`, or black once the palette is exhausted.
pub fn first_unused(used: &[Color]) -> Color {
    RECORD_PALETTE
        .iter()
        .copied()
        .find(|c| !used.contains(c))
        .unwrap_or(Color::BLACK)
}

impl FromStr for Color {
    type Err = ChartError;

    /// Accepts `#rrggbb` or `#aarrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let byte = |i: usize| -> Result<u8, ChartError> {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ChartError::invalid(format!("color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(ChartError::invalid(format!("color '{s}'"))),
        }
    }
}
