//! PXR container format serialization and deserialization
//!
//! A PXR file is a fixed 21-byte header followed by raw frame payloads:
//!
//! | Offset | Size     | Field                        |
//! |--------|----------|------------------------------|
//! | 0      | 8        | signature `"PIXELRUN"`       |
//! | 8      | 4        | canvas width, u32 BE (16)    |
//! | 12     | 4        | canvas height, u32 BE (16)   |
//! | 16     | 1        | frame rate, u8 (12)          |
//! | 17     | 4        | frame count N, u32 BE        |
//! | 21     | N * 1024 | frame payloads, RGBA row-major |
//!
//! The format is versionless: canvas size and frame rate are process-wide
//! constants, and any deviation is rejected outright.

use crate::frame::{Frame, CANVAS_LEN, FRAME_BYTES};
use crate::{Error, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read, Write};

/// File signature for the PXR format
pub const MAGIC: [u8; 8] = *b"PIXELRUN";

/// Fixed playback rate in frames per second
pub const FPS: u8 = 12;

/// Maps a short read past the frame-count field to [`Error::TruncatedFile`]
fn truncated(err: std::io::Error) -> Error {
    match err.kind() {
        ErrorKind::UnexpectedEof => Error::TruncatedFile,
        _ => Error::Io(err),
    }
}

/// PXR file header
///
/// Width, height, and frame rate are format constants, so the frame
/// count is the only variable field.
#[derive(Debug, Clone, Copy)]
pub struct PxrHeader {
    /// Number of frame payloads following the header
    pub frame_count: u32,
}

impl PxrHeader {
    /// Creates a new PXR header
    pub fn new(frame_count: u32) -> Self {
        Self { frame_count }
    }

    /// Reads and validates a header from a reader
    ///
    /// Validation is front-loaded: the signature, dimensions, and frame
    /// rate are checked in stream order, and the first mismatch fails the
    /// whole load before any frame data is trusted.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        // Read and validate the signature. A stream too short to hold
        // the signature cannot be a PXR file at all.
        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic).map_err(|err| match err.kind() {
            ErrorKind::UnexpectedEof => Error::InvalidFileFormat,
            _ => Error::Io(err),
        })?;
        if magic != MAGIC {
            return Err(Error::InvalidFileFormat);
        }

        let width = reader.read_u32::<BigEndian>()?;
        if width != CANVAS_LEN as u32 {
            return Err(Error::UnsupportedDimensions {
                axis: "width",
                value: width,
            });
        }

        let height = reader.read_u32::<BigEndian>()?;
        if height != CANVAS_LEN as u32 {
            return Err(Error::UnsupportedDimensions {
                axis: "height",
                value: height,
            });
        }

        let frame_rate = reader.read_u8()?;
        if frame_rate != FPS {
            return Err(Error::UnsupportedFrameRate(frame_rate));
        }

        let frame_count = reader.read_u32::<BigEndian>().map_err(truncated)?;

        Ok(Self { frame_count })
    }

    /// Writes the header to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&MAGIC)?;
        writer.write_u32::<BigEndian>(CANVAS_LEN as u32)?;
        writer.write_u32::<BigEndian>(CANVAS_LEN as u32)?;
        writer.write_u8(FPS)?;
        writer.write_u32::<BigEndian>(self.frame_count)?;
        Ok(())
    }
}

/// Lazy, forward-only frame decoder
///
/// Constructing the reader consumes and validates the header; iteration
/// then yields one [`Frame`] per declared payload. A failure mid-stream
/// is terminal: the iterator yields the error once and nothing after it.
pub struct FrameReader<R> {
    reader: R,
    header: PxrHeader,
    remaining: u32,
    failed: bool,
}

impl<R: Read> FrameReader<R> {
    /// Opens a PXR stream, validating the header
    pub fn new(mut reader: R) -> Result<Self> {
        let header = PxrHeader::read(&mut reader)?;
        Ok(Self {
            reader,
            header,
            remaining: header.frame_count,
            failed: false,
        })
    }

    /// Returns the validated header
    pub fn header(&self) -> &PxrHeader {
        &self.header
    }

    /// Returns how many declared frames have not been yielded yet
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }

        let mut payload = vec![0u8; FRAME_BYTES];
        if let Err(err) = self.reader.read_exact(&mut payload) {
            self.failed = true;
            return Some(Err(truncated(err)));
        }

        self.remaining -= 1;
        Some(Frame::from_bytes(payload))
    }
}

/// A complete animation: an ordered sequence of frames sharing the
/// fixed canvas size and frame rate.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    /// Frames in playback order
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Creates an animation from a frame sequence
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Reads a complete animation from a reader
    ///
    /// Decode-all-or-fail: every frame is validated before the animation
    /// is returned, so a failed load never exposes partial state.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let decoder = FrameReader::new(reader)?;
        let mut frames = Vec::with_capacity(decoder.header().frame_count as usize);
        for frame in decoder {
            frames.push(frame?);
        }
        Ok(Self { frames })
    }

    /// Writes the animation to a writer
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        PxrHeader::new(self.frames.len() as u32).write(&mut writer)?;
        for frame in &self.frames {
            writer.write_all(frame.bytes())?;
        }
        Ok(())
    }

    /// Number of frames in the animation
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Playback duration in milliseconds at the fixed frame rate
    pub fn duration_ms(&self) -> u64 {
        self.frames.len() as u64 * 1000 / u64::from(FPS)
    }
}
