//! Command line interface of the `rawview` binary.

use std::{io::Write, path::PathBuf};

use clap::{ArgGroup, Parser};
use embedded_graphics::geometry::Size;

use crate::{decode, size::parse_size, view, Error, Format};

/// Show a raw, headerless image dump, as stored and flipped upside down.
#[derive(Parser, Debug)]
#[clap(name = "rawview", version, about)]
#[clap(group(ArgGroup::new("format").multiple(false)))]
pub struct Args {
    /// Image size as <width>x<height>
    #[clap(value_parser = parse_size_arg)]
    pub size: Size,

    /// File containing a raw image
    #[clap(value_parser)]
    pub file: PathBuf,

    /// 3 bytes per pixel, R G B
    #[clap(long, group = "format")]
    pub rgb888: bool,

    /// 1 byte per pixel
    #[clap(long, group = "format")]
    pub gray: bool,

    /// 2 bytes per pixel, packed Y0 U Y1 V
    #[clap(long, group = "format")]
    pub yuv422: bool,

    /// YUV422 input, showing only the Y samples
    #[clap(long, group = "format")]
    pub yuv422_luma: bool,

    /// 3 bytes per pixel, each row stored as R, G and B runs
    #[clap(long, group = "format")]
    pub rgb_planar: bool,

    /// Window zoom factor
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Increase log verbosity, may be repeated
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_size_arg(s: &str) -> Result<Size, String> {
    parse_size(s).map_err(|e| e.to_string())
}

impl Args {
    /// Returns the selected image format, if any.
    pub fn format(&self) -> Option<Format> {
        [
            (self.rgb888, Format::Rgb888),
            (self.gray, Format::Gray),
            (self.yuv422, Format::Yuv422),
            (self.yuv422_luma, Format::Yuv422Luma),
            (self.rgb_planar, Format::RgbPlanarRows),
        ]
        .into_iter()
        .find_map(|(set, format)| set.then(|| format))
    }

    /// Log level selected by `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Prints the status line, decodes the image and shows it with `viewer`.
///
/// Fails with [`Error::MissingFormat`] before touching the file if no format was selected.
pub fn run<W, V>(args: &Args, out: &mut W, viewer: &mut V) -> Result<(), Error>
where
    W: Write + ?Sized,
    V: view::Viewer + ?Sized,
{
    writeln!(
        out,
        "file: {}, size: {}x{}",
        args.file.display(),
        args.size.width,
        args.size.height
    )
    .map_err(Error::Output)?;

    let format = args.format().ok_or(Error::MissingFormat)?;
    log::debug!("decoding {:?} as {format:?}", args.file);

    let image = decode(&args.file, args.size, format)?;
    view::show_both(viewer, &args.file.display().to_string(), &image)
}
