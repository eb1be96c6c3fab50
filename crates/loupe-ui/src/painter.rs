//! The drawing capability the widgets need from a host UI.

use glam::Vec2;

use crate::geometry::{Color32, Rect};

/// Minimal immediate-mode surface supplied by the host for one frame.
///
/// Mirrors the small subset of an immediate-mode toolkit the inspector
/// uses: scoped containers, layout regions, draw-list primitives and text.
/// Every `begin_*` call is paired with its `end_*` within a single widget
/// call.
pub trait Painter {
    /// Open a transient overlay (tooltip) that follows the pointer.
    fn begin_overlay(&mut self);

    fn end_overlay(&mut self);

    /// Start laying out items as one block.
    fn begin_group(&mut self);

    fn end_group(&mut self);

    /// Place the next item to the right of the previous one.
    fn same_line(&mut self);

    /// Reserve an invisible interactive region of `size` and return where
    /// the layout put it.
    fn reserve(&mut self, id: &str, size: Vec2) -> Rect;

    fn rect_filled(&mut self, rect: Rect, color: Color32);

    /// Rectangle outline.
    fn rect(&mut self, rect: Rect, color: Color32, rounding: f32, thickness: f32);

    fn line(&mut self, from: Vec2, to: Vec2, color: Color32, thickness: f32);

    /// Circle outline approximated with `segments` straight edges.
    fn circle(&mut self, center: Vec2, radius: f32, color: Color32, segments: u32, thickness: f32);

    /// One line of text in the default style.
    fn text(&mut self, text: &str);

    fn text_colored(&mut self, text: &str, color: Color32);

    /// Horizontal rule spanning the current group.
    fn separator(&mut self);

    fn begin_table(&mut self, id: &str, columns: usize);

    /// Move to the next table cell, wrapping to a new row after the last
    /// column.
    fn next_column(&mut self);

    fn end_table(&mut self);
}
