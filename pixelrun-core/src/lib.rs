//! Pixelrun Core Library
//!
//! This library provides the frame-buffer pixel model and the binary PXR
//! container format for Pixelrun sprite animations.

pub mod color;
pub mod container;
pub mod frame;

pub use color::{Hsla, Rgba};
pub use container::{Animation, FrameReader, PxrHeader};
pub use frame::Frame;

/// Result type for pixelrun-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pixelrun-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file type")]
    InvalidFileFormat,

    #[error("Unsupported canvas {axis}: {value}")]
    UnsupportedDimensions { axis: &'static str, value: u32 },

    #[error("Unsupported refresh rate: {0}")]
    UnsupportedFrameRate(u8),

    #[error("Unable to read all frames")]
    TruncatedFile,

    #[error("Invalid frame size: {0} bytes")]
    InvalidFrameSize(usize),
}
