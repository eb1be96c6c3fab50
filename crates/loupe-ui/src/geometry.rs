//! Screen-space rectangles and packed draw colors.

use glam::Vec2;
use loupe_core::Texel;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels. `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from two corners in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: Rect) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Packed RGBA8 draw color, R in the lowest byte, same layout as [`Texel`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color32(pub u32);

impl Color32 {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const TRANSPARENT: Self = Self(0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Texel::from_rgba(r, g, b, a).0)
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<Texel> for Color32 {
    fn from(texel: Texel) -> Self {
        Self(texel.0)
    }
}

impl From<[u8; 4]> for Color32 {
    fn from(rgba: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(rgba))
    }
}

impl std::fmt::Debug for Color32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color32(0x{:08X})", self.0)
    }
}
