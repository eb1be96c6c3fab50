//! Magnifier overlay: zoom grid, optional normal glyphs, readouts and
//! optional histogram.

use glam::Vec2;
use loupe_core::{
    ColorReadout, InspectorConfig, PixelCoord, TexelImage, decode_normal, zoom_grid,
};

use super::histogram::histogram_sized;
use super::normal::draw_normal;
use crate::geometry::{Color32, Rect};
use crate::painter::Painter;
use crate::theme;

/// Draw the inspector overlay for the pixel under `uv`.
///
/// `uv` is bottom-origin in `[0, 1]²`; values outside are clamped to the
/// nearest edge pixel. `displayed_size` is only printed. The zoom radius is
/// clamped to `1..=MAX_ZOOM_RADIUS`, so an unvalidated config still draws.
pub fn inspect<P: Painter + ?Sized>(
    painter: &mut P,
    image: &TexelImage<'_>,
    uv: Vec2,
    displayed_size: Vec2,
    config: &InspectorConfig,
) {
    tracing::trace!(
        width = image.width(),
        height = image.height(),
        u = uv.x,
        v = uv.y,
        "inspecting"
    );
    if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
        tracing::warn!(u = uv.x, v = uv.y, "uv outside the unit square, clamping");
    }

    let center = image.resolve_uv(uv);
    let radius = config.radius();
    let quad = Vec2::splat(config.cell_size());
    let canvas = Vec2::splat(config.canvas_size);
    let cell_rect = |origin: Vec2, column: u32, row: u32| {
        Rect::from_min_size(origin + Vec2::new(column as f32, row as f32) * quad, quad)
    };

    painter.begin_overlay();
    painter.begin_group();

    let pick = painter.reserve("zoom", canvas);
    painter.rect_filled(pick, theme::CANVAS_BG);
    for cell in zoom_grid(image, center, radius) {
        painter.rect_filled(
            cell_rect(pick.min, cell.column(radius), cell.row(radius)),
            Color32::from(cell.texel),
        );
    }
    painter.same_line();

    painter.rect(
        cell_rect(pick.min, radius, radius),
        theme::CENTER_OUTLINE,
        theme::CENTER_OUTLINE_ROUNDING,
        theme::CENTER_OUTLINE_THICKNESS,
    );

    if config.draw_normals {
        let normals = painter.reserve("normals", canvas);
        for cell in zoom_grid(image, center, radius) {
            draw_normal(
                painter,
                cell_rect(normals.min, cell.column(radius), cell.row(radius)),
                decode_normal(cell.texel),
            );
        }
    }

    painter.end_group();
    painter.same_line();

    painter.begin_group();
    let texel = image.texel(center.x as i64, center.row as i64);
    draw_readouts(painter, uv, center, &ColorReadout::from_texel(texel), displayed_size);
    painter.end_group();

    if config.draw_histogram {
        histogram_sized(painter, image, config.histogram_size);
    }

    painter.end_overlay();
}

fn draw_readouts<P: Painter + ?Sized>(
    painter: &mut P,
    uv: Vec2,
    center: PixelCoord,
    readout: &ColorReadout,
    displayed_size: Vec2,
) {
    painter.text(&format!("U {:.3} V {:.3}", uv.x, uv.y));
    painter.text(&format!("Coord {} {}", center.x, center.row));
    painter.separator();

    painter.begin_table("colors", theme::CHANNEL_COLUMNS.len());
    for ((label, color), value) in theme::CHANNEL_COLUMNS.iter().zip(readout.rgba) {
        painter.next_column();
        painter.text_colored(&format!("{label} {value:.3}"), *color);
    }
    for ((label, color), value) in theme::CHANNEL_COLUMNS.iter().zip(readout.bytes) {
        painter.next_column();
        painter.text_colored(&format!("{label} {value}"), *color);
    }
    painter.end_table();
    painter.text(&format!("HEX: {}", readout.hex()));
    painter.separator();

    let [h, s, v] = readout.hsv;
    let [hb, sb, vb] = readout.hsv_bytes;
    painter.text(&format!("H 0x{hb:02x}  S 0x{sb:02x}  V 0x{vb:02x}"));
    painter.text(&format!("H {h:.3} S {s:.3} V {v:.3}"));
    painter.separator();

    painter.text(&format!(
        "Size {}, {}",
        displayed_size.x as i32, displayed_size.y as i32
    ));
}
