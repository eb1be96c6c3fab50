//! RGB to HSV on a 0–1 scale for every component.

use palette::{FromColor, Hsv, Srgb};

/// Convert normalized RGB to `[h, s, v]`, each in `[0, 1]`.
///
/// Hue is the palette hue in degrees divided by 360. Achromatic input has
/// hue and saturation 0.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let hsv: Hsv = Hsv::from_color(Srgb::new(rgb[0], rgb[1], rgb[2]));
    let hue = (hsv.hue.into_positive_degrees() / 360.0).fract();
    [hue, hsv.saturation, hsv.value]
}
