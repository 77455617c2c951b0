//! Viewer for raw, headerless image dumps.
//!
//! `rawview` decodes flat pixel buffers, as produced by camera sensors and frame grabbers, into a
//! row-major [`RawImage`]. The image can be drawn with [`embedded_graphics`], which is how the
//! `rawview` binary puts it on screen.
//!
//! Supported layouts are listed in [`Format`]. The files carry no header, so the image size and
//! format must be known up front.
//!
//! # Examples
//!
//! A [`RawImage`] can be wrapped in an embedded-graphics
//! [`Image`](embedded_graphics::image::Image) to display it on any [`DrawTarget`] which uses
//! [`Rgb888`] colors:
//!
//! ```rust
//! use rawview::{decode_bytes, Format};
//! use embedded_graphics::{prelude::*, image::Image};
//!
//! # let mut display = embedded_graphics::mock_display::MockDisplay::new();
//! // Decode a 2x2 grayscale image.
//! let data = [10, 20, 30, 40];
//! let raw = decode_bytes(&data, Size::new(2, 2), Format::Gray).unwrap();
//! assert_eq!(raw.pixel(Point::new(1, 1)), Some(&[40][..]));
//!
//! // Draw image to display.
//! Image::new(&raw, Point::zero()).draw(&mut display).unwrap();
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

pub mod cli;
mod decode;
mod error;
#[cfg(feature = "viewer")]
pub mod simulator;
pub mod size;
pub mod view;

pub use decode::{decode, decode_bytes, read_raw};
pub use error::Error;

/// Pixel layout of a raw image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// One intensity byte per pixel.
    Gray,
    /// Three bytes per pixel, in R, G, B order.
    Rgb888,
    /// Packed YUYV: every 4 bytes `Y0 U Y1 V` describe two pixels sharing `U` and `V`.
    ///
    /// Each pair is expanded to the triples `(Y0, U, V)` and `(Y1, U, V)`. The samples are not
    /// converted to RGB.
    Yuv422,
    /// Packed YUYV with only the luma samples kept.
    Yuv422Luma,
    /// Every row stored as `width` red bytes, then `width` green, then `width` blue.
    RgbPlanarRows,
}

impl Format {
    /// Bytes per pixel in the file.
    pub fn file_depth(self) -> usize {
        match self {
            Format::Gray => 1,
            Format::Rgb888 | Format::RgbPlanarRows => 3,
            Format::Yuv422 | Format::Yuv422Luma => 2,
        }
    }

    /// Bytes per pixel in the decoded image.
    pub fn depth(self) -> usize {
        match self {
            Format::Gray | Format::Yuv422Luma => 1,
            Format::Rgb888 | Format::Yuv422 | Format::RgbPlanarRows => 3,
        }
    }
}

/// Decoded raw image.
///
/// Pixels are stored row-major, top row first, `depth` bytes each. The image never changes after
/// it was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawImage {
    size: Size,
    depth: usize,
    data: Vec<u8>,
}

impl RawImage {
    /// Creates a new image from a row-major pixel buffer.
    ///
    /// `data` must hold exactly `width * height * depth` bytes. Both dimensions must be
    /// non-zero.
    pub fn new(size: Size, depth: usize, data: Vec<u8>) -> Result<Self, Error> {
        if depth == 0 {
            return Err(Error::ZeroDepth);
        }

        let expected = byte_len(size, depth)?;
        if data.len() != expected {
            return Err(Error::BadLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { size, depth, data })
    }

    /// Bytes per pixel.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Raw pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn row_len(&self) -> usize {
        self.size.width as usize * self.depth
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            rows: self.data.chunks_exact(self.row_len()),
            depth: self.depth,
        }
    }

    /// Returns an iterator over all pixels in row-major order.
    pub fn pixels(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.depth)
    }

    /// Returns the pixel at `point`, or `None` if it lies outside the image.
    pub fn pixel(&self, point: Point) -> Option<&[u8]> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x >= self.size.width as usize || y >= self.size.height as usize {
            return None;
        }

        let start = y * self.row_len() + x * self.depth;
        self.data.get(start..start + self.depth)
    }

    /// Returns a copy with the row order reversed.
    ///
    /// Pixels within a row keep their order.
    pub fn flipped(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(self.row_len()).rev() {
            data.extend_from_slice(row);
        }

        Self {
            size: self.size,
            depth: self.depth,
            data,
        }
    }

    /// Returns the image as nested rows of pixels of samples.
    pub fn to_nested(&self) -> Vec<Vec<Vec<u8>>> {
        self.rows()
            .map(|row| row.map(<[u8]>::to_vec).collect())
            .collect()
    }

    /// Returns an iterator over the pixels as [`Rgb888`] colors.
    ///
    /// Images with one or two bytes per pixel are shown as gray, using the first byte. Otherwise
    /// the first three bytes are used as red, green and blue.
    pub fn colors(&self) -> impl Iterator<Item = Rgb888> + '_ {
        self.pixels().map(pixel_color)
    }
}

fn pixel_color(pixel: &[u8]) -> Rgb888 {
    match *pixel {
        [r, g, b, ..] => Rgb888::new(r, g, b),
        [v, ..] => Rgb888::new(v, v, v),
        [] => Rgb888::BLACK,
    }
}

/// Number of bytes in an image of `size` with `depth` bytes per pixel.
pub(crate) fn byte_len(size: Size, depth: usize) -> Result<usize, Error> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::ZeroSize {
            width: size.width,
            height: size.height,
        });
    }

    usize::try_from(size.width)
        .ok()
        .zip(usize::try_from(size.height).ok())
        .and_then(|(width, height)| width.checked_mul(height)?.checked_mul(depth))
        .ok_or(Error::TooLarge {
            width: size.width,
            height: size.height,
        })
}

impl ImageDrawable for RawImage {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.colors())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw(&mut target.translated(-area.top_left).clipped(area))
    }
}

impl OriginDimensions for RawImage {
    fn size(&self) -> Size {
        self.size
    }
}

/// Iterator over the rows of a [`RawImage`].
#[derive(Debug)]
pub struct Rows<'a> {
    rows: core::slice::ChunksExact<'a, u8>,
    depth: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = core::slice::ChunksExact<'a, u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| row.chunks_exact(self.depth))
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rows.next_back().map(|row| row.chunks_exact(self.depth))
    }
}
