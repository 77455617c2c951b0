//! `<width>x<height>` size strings.

use embedded_graphics::geometry::Size;
use nom::{
    character::complete::{char, u32},
    combinator::{all_consuming, verify},
    sequence::separated_pair,
    IResult,
};

use crate::Error;

fn dimension(input: &str) -> IResult<&str, u32> {
    verify(u32, |v: &u32| *v > 0)(input)
}

fn size(input: &str) -> IResult<&str, Size> {
    let (input, (width, height)) = separated_pair(dimension, char('x'), dimension)(input)?;
    Ok((input, Size::new(width, height)))
}

/// Parses a size string like `640x480`.
///
/// Both dimensions must be positive integers.
pub fn parse_size(s: &str) -> Result<Size, Error> {
    all_consuming(size)(s)
        .map(|(_, size)| size)
        .map_err(|_| Error::BadSize(s.into()))
}
