//! Tangent-space normal decoding for the normal-glyph view.

use glam::Vec2;

use crate::texel::Texel;

/// Decode the XY of a normal map texel from its red and green channels.
///
/// `n = channel / 128 - 1`, giving a value in `[-1, 0.9921875]`. The result
/// is not normalized.
pub fn decode_normal(texel: Texel) -> Vec2 {
    Vec2::new(
        texel.r() as f32 / 128.0 - 1.0,
        texel.g() as f32 / 128.0 - 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_normal_range() {
        assert_eq!(decode_normal(Texel::from_rgba(128, 128, 255, 255)), Vec2::ZERO);
        assert_eq!(decode_normal(Texel::TRANSPARENT), Vec2::new(-1.0, -1.0));

        let max = decode_normal(Texel::from_rgba(255, 255, 0, 0));
        assert!((max.x - 0.9921875).abs() < 1e-6, "x = {}", max.x);
        assert!((max.y - 0.9921875).abs() < 1e-6, "y = {}", max.y);
    }

    #[test]
    fn test_decode_normal_ignores_blue_and_alpha() {
        let a = decode_normal(Texel::from_rgba(64, 192, 0, 0));
        let b = decode_normal(Texel::from_rgba(64, 192, 255, 255));
        assert_eq!(a, b);
        assert_eq!(a, Vec2::new(-0.5, 0.5));
    }
}
