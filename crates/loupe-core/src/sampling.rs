//! Neighbourhood sampling around a resolved pixel.

use crate::config::MAX_ZOOM_RADIUS;
use crate::image::{PixelCoord, TexelImage};
use crate::texel::Texel;

/// One cell of the magnified grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomCell {
    /// Horizontal offset from the center, `-radius..=radius`, growing right.
    pub dx: i32,
    /// Vertical offset from the center, `-radius..=radius`, growing down.
    pub dy: i32,
    /// Sampled texel, transparent when the offset leaves the image.
    pub texel: Texel,
}

impl ZoomCell {
    /// Column of this cell in a `(2 * radius + 1)` wide grid.
    pub fn column(&self, radius: u32) -> u32 {
        (self.dx + radius.min(MAX_ZOOM_RADIUS) as i32) as u32
    }

    /// Row of this cell in a `(2 * radius + 1)` tall grid.
    pub fn row(&self, radius: u32) -> u32 {
        (self.dy + radius.min(MAX_ZOOM_RADIUS) as i32) as u32
    }
}

/// Iterate the `(2 * radius + 1)²` texels around `center`, row by row from
/// the top of the grid.
///
/// The grid is upright: a cell above the center shows the texel above the
/// center pixel. In bottom-origin terms the sample for `(dx, dy)` is
/// `(x + dx, v_index - dy)`.
///
/// `radius` is capped at [`MAX_ZOOM_RADIUS`].
pub fn zoom_grid<'i>(
    image: &'i TexelImage<'_>,
    center: PixelCoord,
    radius: u32,
) -> impl Iterator<Item = ZoomCell> + 'i {
    let r = radius.min(MAX_ZOOM_RADIUS) as i32;
    (-r..=r).flat_map(move |dy| {
        (-r..=r).map(move |dx| ZoomCell {
            dx,
            dy,
            texel: image.texel_from_bottom(
                center.x as i64 + dx as i64,
                center.v_index as i64 - dy as i64,
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ramp(width: u32, height: u32) -> Vec<Texel> {
        (0..height)
            .flat_map(|row| (0..width).map(move |x| Texel::from_rgba(x as u8, row as u8, 0, 255)))
            .collect()
    }

    #[test]
    fn test_grid_size_and_order() {
        let texels = ramp(16, 16);
        let image = TexelImage::new(16, 16, &texels).unwrap();
        let center = image.resolve_uv(Vec2::splat(0.5));
        let cells: Vec<_> = zoom_grid(&image, center, 4).collect();
        assert_eq!(cells.len(), 81);
        assert_eq!((cells[0].dx, cells[0].dy), (-4, -4));
        assert_eq!((cells[80].dx, cells[80].dy), (4, 4));
        assert_eq!(cells[40].texel, image.get(center.x, center.row).unwrap());
    }

    #[test]
    fn test_grid_is_upright() {
        let texels = ramp(8, 8);
        let image = TexelImage::new(8, 8, &texels).unwrap();
        let center = image.resolve_uv(Vec2::splat(0.5));
        let cells: Vec<_> = zoom_grid(&image, center, 1).collect();
        // Top-middle cell is one memory row above the center.
        let above = cells.iter().find(|c| c.dx == 0 && c.dy == -1).unwrap();
        assert_eq!(above.texel.g() as u32, center.row - 1);
        let right = cells.iter().find(|c| c.dx == 1 && c.dy == 0).unwrap();
        assert_eq!(right.texel.r() as u32, center.x + 1);
    }

    #[test]
    fn test_corner_cells_outside_image_are_transparent() {
        let texels = vec![Texel::from_rgba(255, 255, 255, 255); 9];
        let image = TexelImage::new(3, 3, &texels).unwrap();
        let corner = image.resolve_uv(Vec2::ZERO);
        let cells: Vec<_> = zoom_grid(&image, corner, 4).collect();
        assert_eq!(cells.len(), 81);

        let opaque = cells.iter().filter(|c| c.texel != Texel::TRANSPARENT).count();
        // Bottom-left corner: only the 3x3 quadrant up and to the right exists.
        assert_eq!(opaque, 9);
        for c in &cells {
            if c.dx < 0 || c.dy > 0 {
                assert_eq!(c.texel, Texel::TRANSPARENT, "cell {c:?}");
            }
        }
    }

    #[test]
    fn test_cell_grid_position() {
        let cell = ZoomCell {
            dx: -4,
            dy: 2,
            texel: Texel::TRANSPARENT,
        };
        assert_eq!((cell.column(4), cell.row(4)), (0, 6));
    }
}
