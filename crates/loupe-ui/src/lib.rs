//! Loupe UI — immediate-mode inspector widgets.
//!
//! Defines the [`Painter`] trait that abstracts over the host's rendering
//! backend, and draws the magnifier overlay, channel histogram and
//! normal glyphs through it. [`RecordingPainter`] captures the emitted
//! primitives for tests and snapshots.
//!
//! ```
//! use glam::Vec2;
//! use loupe_core::{InspectorConfig, Texel, TexelImage};
//! use loupe_ui::{RecordingPainter, inspect};
//!
//! let texels = [Texel::from_rgba(255, 0, 0, 255); 4];
//! let image = TexelImage::new(2, 2, &texels)?;
//! let mut painter = RecordingPainter::new();
//! inspect(&mut painter, &image, Vec2::splat(0.5), Vec2::new(64.0, 64.0), &InspectorConfig::default());
//! assert!(painter.texts().contains(&"HEX: FF0000FF"));
//! # Ok::<(), loupe_core::LoupeError>(())
//! ```

pub mod geometry;
pub mod painter;
pub mod recording;
pub mod theme;
pub mod widgets;

pub use geometry::{Color32, Rect};
pub use painter::Painter;
pub use recording::{DrawCommand, RecordingPainter};
pub use widgets::{draw_histogram, draw_normal, histogram, histogram_sized, inspect};
