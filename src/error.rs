use std::{io, path::PathBuf};

use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    /// The image file could not be opened or read.
    #[error("Error opening file: {}", path.display())]
    Open {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// File is too short for the requested size and format.
    #[error(
        "file too short: expected {expected} bytes, got {actual} ({} missing)",
        expected.saturating_sub(*actual)
    )]
    ShortRead {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// YUV422 images need an even width.
    #[error("yuv422 width must be even, got {width}")]
    OddWidth {
        /// Requested width.
        width: u32,
    },

    /// Image dimensions must be non-zero.
    #[error("image size must be non-zero, got {width}x{height}")]
    ZeroSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Image byte count doesn't fit in memory.
    #[error("image size {width}x{height} is too large")]
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Pixels must be at least one byte wide.
    #[error("pixel depth must be at least 1")]
    ZeroDepth,

    /// Pixel buffer length doesn't match the image dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BadLength {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// Invalid `<width>x<height>` string.
    #[error("couldn't parse size: {0:?} (expected <width>x<height>)")]
    BadSize(String),

    /// No image format was selected.
    #[error("missing image type")]
    MissingFormat,

    /// The viewer failed to show an image.
    #[error("viewer error: {0}")]
    Viewer(String),

    /// Writing the status line failed.
    #[error("failed to write output")]
    Output(#[source] io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingFormat => 1,
            _ => 2,
        }
    }
}
