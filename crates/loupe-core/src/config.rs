//! Inspector configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoupeError;

/// Default zoom radius in texels.
pub const DEFAULT_ZOOM_RADIUS: u32 = 4;
/// Largest zoom radius accepted by [`InspectorConfig::validate`].
pub const MAX_ZOOM_RADIUS: u32 = 32;
/// Default side of the zoom canvas in pixels.
pub const DEFAULT_CANVAS_SIZE: f32 = 200.0;
/// Default histogram region size in pixels.
pub const DEFAULT_HISTOGRAM_SIZE: Vec2 = Vec2::new(512.0, 256.0);

/// Settings for one inspector overlay.
///
/// Unknown JSON fields are rejected; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    /// Texels sampled in each direction from the center pixel.
    pub zoom_radius: u32,
    /// Side of the zoom canvas (and the normal canvas) in pixels.
    pub canvas_size: f32,
    /// Draw the decoded-normal canvas next to the zoom canvas.
    pub draw_normals: bool,
    /// Draw the channel histogram below the readouts.
    pub draw_histogram: bool,
    /// Histogram region size in pixels.
    pub histogram_size: Vec2,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            zoom_radius: DEFAULT_ZOOM_RADIUS,
            canvas_size: DEFAULT_CANVAS_SIZE,
            draw_normals: false,
            draw_histogram: false,
            histogram_size: DEFAULT_HISTOGRAM_SIZE,
        }
    }
}

impl InspectorConfig {
    /// Parse from JSON, filling gaps with defaults, then validate.
    pub fn from_json_str(json: &str) -> Result<Self, LoupeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `LOUPE_ZOOM_RADIUS`, `LOUPE_DRAW_NORMALS` and
    /// `LOUPE_DRAW_HISTOGRAM`. Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let zoom_radius = lookup("LOUPE_ZOOM_RADIUS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|r| (1..=MAX_ZOOM_RADIUS).contains(r))
            .unwrap_or(defaults.zoom_radius);
        Self {
            zoom_radius,
            draw_normals: lookup("LOUPE_DRAW_NORMALS")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.draw_normals),
            draw_histogram: lookup("LOUPE_DRAW_HISTOGRAM")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.draw_histogram),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), LoupeError> {
        if !(1..=MAX_ZOOM_RADIUS).contains(&self.zoom_radius) {
            return Err(LoupeError::InvalidConfig("zoom_radius must be in 1..=32"));
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(LoupeError::InvalidConfig("canvas_size must be positive"));
        }
        if !(self.histogram_size.is_finite() && self.histogram_size.cmpgt(Vec2::ZERO).all()) {
            return Err(LoupeError::InvalidConfig("histogram_size must be positive"));
        }
        Ok(())
    }

    /// `zoom_radius` clamped to `1..=MAX_ZOOM_RADIUS`.
    pub fn radius(&self) -> u32 {
        self.zoom_radius.clamp(1, MAX_ZOOM_RADIUS)
    }

    /// Cells per side of the zoom grid.
    pub fn grid_dim(&self) -> u32 {
        self.radius() * 2 + 1
    }

    /// Side of one zoom cell in pixels.
    pub fn cell_size(&self) -> f32 {
        self.canvas_size / self.grid_dim() as f32
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
