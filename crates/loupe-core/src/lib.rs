//! Loupe Core — domain layer for the pixel inspector.
//!
//! This crate holds texel access, UV resolution, neighbourhood sampling,
//! histogram counting and color readouts. No drawing or framework
//! dependencies; `loupe-ui` turns these values into draw calls.

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod normal;
pub mod sampling;
pub mod scopes;
pub mod texel;

// Re-exports for convenience.
pub use color::{ColorReadout, rgb_to_hsv};
pub use config::InspectorConfig;
pub use error::LoupeError;
pub use image::{PixelCoord, TexelImage};
pub use normal::decode_normal;
pub use sampling::{ZoomCell, zoom_grid};
pub use scopes::HistogramData;
pub use texel::Texel;
