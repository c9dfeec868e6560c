//! Gepackte RGBA-Farbe (ein `u32` pro Farbe).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA-Farbe als gepackter `u32`.
///
/// Byte-Reihenfolge: R im niedrigsten Byte, A im höchsten
/// (`r | g << 8 | b << 16 | a << 24`). In dieser Form landet die Farbe
/// auch in der Kurven-Datei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Deckendes Rot (Standard-Kurvenfarbe)
    pub const RED: Self = Self::from_rgba8(255, 0, 0, 255);
    /// Deckendes Weiß
    pub const WHITE: Self = Self::from_rgba8(255, 255, 255, 255);

    /// Packt vier 8-Bit-Kanäle.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Entpackt in `[r, g, b, a]`.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            (self.0 & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 24) & 0xFF) as u8,
        ]
    }

    /// Kanäle als Gleitkommawerte in `[0, 1]` (für Farb-Editoren).
    pub fn to_rgba_f32(self) -> [f32; 4] {
        self.to_rgba8().map(|c| c as f32 / 255.0)
    }

    /// Packt Gleitkomma-Kanäle; Werte außerhalb von `[0, 1]` werden geklemmt.
    pub fn from_rgba_f32(rgba: [f32; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self::from_rgba8(r, g, b, a)
    }
}

impl Default for PackedColor {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackedColor {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}
