//! Borrowed, bounds-checked view over a caller-owned RGBA8 buffer.

use std::borrow::Cow;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoupeError;
use crate::texel::Texel;

/// A pixel resolved from a UV sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCoord {
    /// Column, `0..width`.
    pub x: u32,
    /// Row in memory order (top-origin), `0..height`.
    pub row: u32,
    /// Row index counted from the bottom, i.e. `floor(v * height)` clamped.
    pub v_index: u32,
}

/// Read-only image view. Rows are stored top to bottom.
///
/// Construction enforces `width > 0 && height > 0` and that the buffer holds
/// exactly `width * height` texels, so every later read is a checked index.
#[derive(Debug, Clone)]
pub struct TexelImage<'a> {
    width: u32,
    height: u32,
    texels: Cow<'a, [Texel]>,
}

impl<'a> TexelImage<'a> {
    /// Wrap an existing texel slice without copying.
    pub fn new(width: u32, height: u32, texels: &'a [Texel]) -> Result<Self, LoupeError> {
        Self::checked(width, height, Cow::Borrowed(texels))
    }

    /// Wrap a raw RGBA8 byte buffer.
    ///
    /// Borrows when the bytes are 4-byte aligned on a little-endian host,
    /// otherwise decodes into an owned copy.
    pub fn from_bytes(width: u32, height: u32, bytes: &'a [u8]) -> Result<Self, LoupeError> {
        if bytes.len() % 4 != 0 {
            return Err(LoupeError::ByteLength { len: bytes.len() });
        }

        let cast = if cfg!(target_endian = "little") {
            bytemuck::try_cast_slice::<u8, Texel>(bytes).ok()
        } else {
            None
        };

        let texels = match cast {
            Some(texels) => Cow::Borrowed(texels),
            None => {
                tracing::debug!(len = bytes.len(), "texel bytes not castable, copying");
                Cow::Owned(
                    bytes
                        .chunks_exact(4)
                        .map(|c| Texel::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            }
        };
        Self::checked(width, height, texels)
    }

    /// View an `image` crate RGBA8 buffer.
    pub fn from_rgba_image(image: &'a ::image::RgbaImage) -> Result<Self, LoupeError> {
        Self::from_bytes(image.width(), image.height(), image.as_raw())
    }

    fn checked(width: u32, height: u32, texels: Cow<'a, [Texel]>) -> Result<Self, LoupeError> {
        if width == 0 || height == 0 {
            return Err(LoupeError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(LoupeError::BufferSizeMismatch {
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All texels in row-major order.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Texel at column `x`, top-origin `row`, or `None` when out of range.
    pub fn get(&self, x: u32, row: u32) -> Option<Texel> {
        if x >= self.width || row >= self.height {
            return None;
        }
        self.texels
            .get(row as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Texel at signed coordinates, [`Texel::TRANSPARENT`] when out of range.
    pub fn texel(&self, x: i64, row: i64) -> Texel {
        match (u32::try_from(x), u32::try_from(row)) {
            (Ok(x), Ok(row)) => self.get(x, row).unwrap_or(Texel::TRANSPARENT),
            _ => Texel::TRANSPARENT,
        }
    }

    /// Same as [`texel`](Self::texel) but with the row counted from the bottom.
    pub fn texel_from_bottom(&self, x: i64, v_index: i64) -> Texel {
        self.texel(x, self.height as i64 - 1 - v_index)
    }

    /// Map a bottom-origin UV sample to a pixel.
    ///
    /// Each axis is `clamp(floor(t * extent), 0, extent - 1)`; the row is then
    /// flipped so `v = 0` lands on the last memory row.
    pub fn resolve_uv(&self, uv: Vec2) -> PixelCoord {
        let x = clamp_index(uv.x, self.width);
        let v_index = clamp_index(uv.y, self.height);
        PixelCoord {
            x,
            row: self.height - 1 - v_index,
            v_index,
        }
    }
}

fn clamp_index(t: f32, extent: u32) -> u32 {
    // NaN survives clamp but casts to 0.
    (t * extent as f32).floor().clamp(0.0, (extent - 1) as f32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> Vec<Texel> {
        (0..width * height)
            .map(|i| Texel::from_rgba(i as u8, 0, 0, 255))
            .collect()
    }

    #[test]
    fn test_rejects_empty_image() {
        let err = TexelImage::new(0, 4, &[]).unwrap_err();
        assert!(matches!(err, LoupeError::EmptyImage { width: 0, height: 4 }));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let texels = solid(2, 2);
        let err = TexelImage::new(3, 2, &texels).unwrap_err();
        assert!(matches!(
            err,
            LoupeError::BufferSizeMismatch { expected: 6, actual: 4 }
        ));
    }

    #[test]
    fn test_from_bytes_rejects_ragged_length() {
        let err = TexelImage::from_bytes(1, 1, &[0, 0, 0]).unwrap_err();
        assert!(matches!(err, LoupeError::ByteLength { len: 3 }));
    }

    #[test]
    fn test_from_bytes_reads_offset_buffer() {
        // Offset by one byte; may or may not be castable in place.
        let raw = [0u8, 10, 20, 30, 40, 50, 60, 70, 80];
        let image = TexelImage::from_bytes(2, 1, &raw[1..]).unwrap();
        assert_eq!(image.get(0, 0), Some(Texel::from_rgba(10, 20, 30, 40)));
        assert_eq!(image.get(1, 0), Some(Texel::from_rgba(50, 60, 70, 80)));
    }

    #[test]
    fn test_from_rgba_image() {
        let buf = ::image::RgbaImage::from_pixel(3, 2, ::image::Rgba([1, 2, 3, 4]));
        let view = TexelImage::from_rgba_image(&buf).unwrap();
        assert_eq!((view.width(), view.height()), (3, 2));
        assert_eq!(view.get(2, 1), Some(Texel::from_rgba(1, 2, 3, 4)));
    }

    #[test]
    fn test_out_of_range_reads_return_sentinel() {
        let texels = solid(3, 3);
        let image = TexelImage::new(3, 3, &texels).unwrap();
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.texel(-1, 0), Texel::TRANSPARENT);
        assert_eq!(image.texel(0, 3), Texel::TRANSPARENT);
        assert_eq!(image.texel(i64::MAX, i64::MIN), Texel::TRANSPARENT);
        assert_eq!(image.texel(2, 2), texels[8]);
    }

    #[test]
    fn test_resolve_uv_corners() {
        let texels = solid(5, 4);
        let image = TexelImage::new(5, 4, &texels).unwrap();

        let origin = image.resolve_uv(Vec2::new(0.0, 0.0));
        assert_eq!((origin.x, origin.row), (0, 3));

        let far = image.resolve_uv(Vec2::new(1.0, 1.0));
        assert_eq!((far.x, far.row), (4, 0));
        assert_eq!(far.v_index, 3);
    }

    #[test]
    fn test_resolve_uv_always_in_bounds() {
        let texels = solid(7, 3);
        let image = TexelImage::new(7, 3, &texels).unwrap();
        for i in 0..=40 {
            for j in 0..=40 {
                let uv = Vec2::new(i as f32 / 40.0, j as f32 / 40.0);
                let p = image.resolve_uv(uv);
                assert!(p.x < 7 && p.row < 3, "uv {uv} resolved to {p:?}");
            }
        }
        let p = image.resolve_uv(Vec2::new(f32::NAN, -3.0));
        assert_eq!((p.x, p.row), (0, 2));
    }

    #[test]
    fn test_texel_from_bottom_flips_rows() {
        let texels = solid(2, 2);
        let image = TexelImage::new(2, 2, &texels).unwrap();
        assert_eq!(image.texel_from_bottom(0, 0), texels[2]);
        assert_eq!(image.texel_from_bottom(1, 1), texels[1]);
        assert_eq!(image.texel_from_bottom(0, 2), Texel::TRANSPARENT);
    }
}
