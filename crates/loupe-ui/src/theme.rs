//! Inspector colors and stroke constants.
//!
//! Colors are packed RGBA8 with red in the low byte, so `0xFF0000FF` is
//! opaque red.

use crate::geometry::Color32;

// ── Zoom canvas ─────────────────────────────────────────────────────────────

/// Background painted under the zoom grid.
pub const CANVAS_BG: Color32 = Color32::BLACK;

/// Outline around the center cell.
pub const CENTER_OUTLINE: Color32 = Color32(0xFF00_00FF);

/// Center outline corner rounding (px).
pub const CENTER_OUTLINE_ROUNDING: f32 = 0.0;

/// Center outline stroke width (px).
pub const CENTER_OUTLINE_THICKNESS: f32 = 2.0;

// ── Normal glyphs ───────────────────────────────────────────────────────────

/// Faint reference rings.
pub const NORMAL_RING: Color32 = Color32(0x20AA_AAAA);

/// Segments per reference ring.
pub const NORMAL_RING_SEGMENTS: u32 = 24;

/// Reference ring stroke width (px).
pub const NORMAL_RING_THICKNESS: f32 = 1.0;

/// Normal direction line.
pub const NORMAL_VECTOR: Color32 = Color32(0xFF00_00FF);

/// Normal direction stroke width (px).
pub const NORMAL_VECTOR_THICKNESS: f32 = 2.0;

// ── Histogram ───────────────────────────────────────────────────────────────

/// Gridline color.
pub const GRID_LINE: Color32 = Color32(0x8080_8080);

/// Gridline stroke width (px).
pub const GRID_LINE_THICKNESS: f32 = 1.0;

/// Intervals per axis. Gridlines are drawn at both ends, so there are
/// `GRID_DIVISIONS + 1` per axis.
pub const GRID_DIVISIONS: u32 = 10;

// ── Readout text ────────────────────────────────────────────────────────────

pub const TEXT_RED: Color32 = Color32::from_rgba(255, 0, 0, 255);
pub const TEXT_GREEN: Color32 = Color32::from_rgba(0, 255, 0, 255);
pub const TEXT_BLUE: Color32 = Color32::from_rgba(51, 51, 255, 255);
pub const TEXT_ALPHA: Color32 = Color32::from_rgba(128, 128, 128, 255);

/// Column label and color for each channel of the readout table.
pub const CHANNEL_COLUMNS: [(&str, Color32); 4] = [
    ("R", TEXT_RED),
    ("G", TEXT_GREEN),
    ("B", TEXT_BLUE),
    ("A", TEXT_ALPHA),
];
