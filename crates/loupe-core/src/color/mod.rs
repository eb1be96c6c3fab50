//! Color readouts: normalized and 8-bit channels, hex, and HSV.

pub mod hsv;
pub mod readout;

pub use hsv::rgb_to_hsv;
pub use readout::{ColorReadout, Hex, quantize};
