//! Error type shared by image construction and config loading.

/// Errors produced while building an image view or loading configuration.
///
/// Drawing never fails: once a [`TexelImage`](crate::TexelImage) exists,
/// every sample is either in range or replaced by the transparent sentinel.
#[derive(Debug, thiserror::Error)]
pub enum LoupeError {
    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("buffer holds {actual} texels, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("byte buffer length {len} is not a multiple of 4")]
    ByteLength { len: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
