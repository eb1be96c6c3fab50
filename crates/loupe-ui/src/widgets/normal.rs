//! Normal-vector glyph.

use glam::Vec2;

use crate::geometry::Rect;
use crate::painter::Painter;
use crate::theme;

/// Draw a 2D direction inside `rc`: two faint reference rings at half and
/// quarter width, and a line from the center to `center + n * width / 2`.
///
/// `n` need not be unit length; longer vectors overshoot the outer ring.
pub fn draw_normal<P: Painter + ?Sized>(painter: &mut P, rc: Rect, n: Vec2) {
    let center = rc.center();
    let width = rc.width();
    for radius in [width / 2.0, width / 4.0] {
        painter.circle(
            center,
            radius,
            theme::NORMAL_RING,
            theme::NORMAL_RING_SEGMENTS,
            theme::NORMAL_RING_THICKNESS,
        );
    }
    painter.line(
        center,
        center + n * width / 2.0,
        theme::NORMAL_VECTOR,
        theme::NORMAL_VECTOR_THICKNESS,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingPainter};

    #[test]
    fn test_draw_normal_primitives() {
        let mut painter = RecordingPainter::new();
        let rc = Rect::from_min_size(Vec2::new(10.0, 10.0), Vec2::splat(20.0));
        draw_normal(&mut painter, rc, Vec2::new(1.0, -0.5));

        let cmds = painter.commands();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], DrawCommand::Circle { radius, .. } if radius == 10.0));
        assert!(matches!(cmds[1], DrawCommand::Circle { radius, .. } if radius == 5.0));
        match &cmds[2] {
            DrawCommand::Line { from, to, color, .. } => {
                assert_eq!(*from, Vec2::new(20.0, 20.0));
                assert_eq!(*to, Vec2::new(30.0, 15.0));
                assert_eq!(*color, theme::NORMAL_VECTOR);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }
}
