//! Numeric readouts for the texel under the cursor.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hsv::rgb_to_hsv;
use crate::texel::Texel;

/// Every value the inspector prints for one texel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorReadout {
    /// Source texel.
    pub texel: Texel,
    /// `[R, G, B, A]` in `[0, 1]`.
    pub rgba: [f32; 4],
    /// `round(rgba * 255)` per channel.
    pub bytes: [u8; 4],
    /// `[H, S, V]` in `[0, 1]`, computed from RGB only.
    pub hsv: [f32; 3],
    /// `trunc(hsv * 255)` per component.
    pub hsv_bytes: [u8; 3],
}

impl ColorReadout {
    pub fn from_texel(texel: Texel) -> Self {
        let rgba = texel.to_f32();
        let hsv = rgb_to_hsv([rgba[0], rgba[1], rgba[2]]);
        Self {
            texel,
            rgba,
            bytes: rgba.map(quantize),
            hsv,
            hsv_bytes: hsv.map(|c| (c * 255.0) as u8),
        }
    }

    /// `RRGGBBAA`, two uppercase hex digits per channel.
    pub fn hex(&self) -> Hex {
        Hex(self.bytes)
    }
}

/// Display adapter for [`ColorReadout::hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex(pub [u8; 4]);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

/// Round a normalized channel to 8 bits, half away from zero.
pub fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
