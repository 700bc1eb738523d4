//! Frame-buffer pixel model for Pixelrun animations

use crate::color::Rgba;
use crate::{Error, Result};

/// Canvas width and height in pixels (the format is fixed-size)
pub const CANVAS_LEN: usize = 16;

/// Number of pixels in one frame
pub const CANVAS_SIZE: usize = CANVAS_LEN * CANVAS_LEN;

/// Bytes in one frame payload (4 channel bytes per pixel)
pub const FRAME_BYTES: usize = CANVAS_SIZE * 4;

/// A single animation frame: a 16x16 raster stored as packed RGBA bytes
/// in row-major pixel order.
///
/// The `dirty` flag is a change-notification token: every mutation
/// toggles it, so observers can treat it as a parity bit rather than a
/// sticky boolean.
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    dirty: bool,
}

impl Frame {
    /// Creates a new fully transparent frame
    pub fn new() -> Self {
        Self {
            bytes: vec![0; FRAME_BYTES],
            dirty: false,
        }
    }

    /// Creates a frame from an existing byte payload
    ///
    /// The payload length must be exactly [`FRAME_BYTES`].
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != FRAME_BYTES {
            return Err(Error::InvalidFrameSize(bytes.len()));
        }
        Ok(Self {
            bytes,
            dirty: false,
        })
    }

    /// Returns the packed RGBA colour at the given pixel index
    ///
    /// `index` must be in `[0, CANVAS_SIZE)`; an out-of-range index is a
    /// caller bug and panics.
    pub fn get(&self, index: usize) -> u32 {
        let offset = index * 4;
        Rgba {
            r: self.bytes[offset],
            g: self.bytes[offset + 1],
            b: self.bytes[offset + 2],
            a: self.bytes[offset + 3],
        }
        .pack()
    }

    /// Writes a packed RGBA colour at the given pixel index
    pub fn set(&mut self, index: usize, colour: u32) {
        let rgba = Rgba::unpack(colour);
        let offset = index * 4;
        self.bytes[offset] = rgba.r;
        self.bytes[offset + 1] = rgba.g;
        self.bytes[offset + 2] = rgba.b;
        self.bytes[offset + 3] = rgba.a;
        self.dirty = !self.dirty;
    }

    /// Resets the pixel at the given index to transparent black
    pub fn clear(&mut self, index: usize) {
        let offset = index * 4;
        self.bytes[offset..offset + 4].fill(0);
        self.dirty = !self.dirty;
    }

    /// Returns the raw byte payload
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the current state of the change-notification token
    pub fn dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Frame {
    // Clones start clean: the copy has not been mutated yet, whatever
    // the source's parity was.
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            dirty: false,
        }
    }
}
