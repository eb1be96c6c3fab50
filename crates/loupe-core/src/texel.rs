//! Packed 32-bit RGBA texel.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One packed RGBA8 pixel.
///
/// Byte order is R, G, B, A from the lowest to the highest byte, which is the
/// in-memory layout of an RGBA8 buffer on a little-endian host.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Texel(pub u32);

impl Texel {
    /// Fully transparent black. Returned for every out-of-range sample.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack four 8-bit channels.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Decode four bytes laid out R, G, B, A.
    pub const fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Channel bytes in `[R, G, B, A]` order.
    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Channels normalized to `[0, 1]`.
    pub fn to_f32(self) -> [f32; 4] {
        self.to_rgba().map(|c| c as f32 / 255.0)
    }
}

impl From<[u8; 4]> for Texel {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_le_bytes(rgba)
    }
}

impl fmt::Debug for Texel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        write!(f, "Texel({r}, {g}, {b}, {a})")
    }
}
