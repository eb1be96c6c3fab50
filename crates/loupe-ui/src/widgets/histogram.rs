//! Stacked RGB histogram widget.

use glam::Vec2;
use loupe_core::TexelImage;
use loupe_core::config::DEFAULT_HISTOGRAM_SIZE;
use loupe_core::scopes::HistogramData;
use loupe_core::scopes::histogram::{BINS, compute as compute_histogram};

use crate::geometry::{Color32, Rect};
use crate::painter::Painter;
use crate::theme;

/// Reserve a 512×256 region and draw the image's RGB histogram into it.
pub fn histogram<P: Painter + ?Sized>(painter: &mut P, image: &TexelImage<'_>) {
    histogram_sized(painter, image, DEFAULT_HISTOGRAM_SIZE);
}

/// Same as [`histogram`] with a custom region size.
///
/// Counts are rebuilt from the full image on every call.
pub fn histogram_sized<P: Painter + ?Sized>(painter: &mut P, image: &TexelImage<'_>, size: Vec2) {
    tracing::trace!(
        width = image.width(),
        height = image.height(),
        "drawing histogram"
    );
    let rc = painter.reserve("histogram", size);
    let data = compute_histogram(image);
    draw_histogram(painter, rc, &data);
}

/// Draw gridlines and stacked bars for precomputed counts into `rc`.
///
/// Bars are scaled so the tallest R, G or B bin fills the height. Within a
/// bin, each layer starts where the previous one ended and is skipped when
/// it is not strictly taller, so equal counts paint once.
pub fn draw_histogram<P: Painter + ?Sized>(painter: &mut P, rc: Rect, data: &HistogramData) {
    let size = rc.size();
    let h_factor = size.y / data.scale_peak() as f32;
    let divisions = theme::GRID_DIVISIONS as f32;

    for i in 0..=theme::GRID_DIVISIONS {
        let ax = rc.min.x + (size.x / divisions) * i as f32;
        let ay = rc.min.y + (size.y / divisions) * i as f32;
        painter.line(
            Vec2::new(rc.min.x, ay),
            Vec2::new(rc.max.x, ay),
            theme::GRID_LINE,
            theme::GRID_LINE_THICKNESS,
        );
        painter.line(
            Vec2::new(ax, rc.min.y),
            Vec2::new(ax, rc.max.y),
            theme::GRID_LINE,
            theme::GRID_LINE_THICKNESS,
        );
    }

    let bar_width = size.x / BINS as f32;
    for bin in 0..BINS {
        let left = rc.min.x + bar_width * bin as f32;
        let right = left + bar_width;
        let mut current = rc.max.y;
        for layer in data.stacked_bin(bin) {
            let top = rc.max.y - layer.count as f32 * h_factor;
            if top >= current {
                continue;
            }
            painter.rect_filled(
                Rect::from_corners(Vec2::new(left, current), Vec2::new(right, top)),
                Color32::from(layer.color),
            );
            current = top;
        }
    }
}
