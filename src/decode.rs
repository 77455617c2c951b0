use std::{fs, path::Path};

use embedded_graphics::geometry::Size;

use crate::{byte_len, Error, Format, RawImage};

/// Reads a fixed-stride image with `depth` bytes per pixel from `path`.
///
/// Bytes past the end of the image are ignored.
pub fn read_raw(path: impl AsRef<Path>, size: Size, depth: usize) -> Result<RawImage, Error> {
    if depth == 0 {
        return Err(Error::ZeroDepth);
    }

    let data = read_file(path.as_ref())?;
    let data = take_image_bytes(&data, size, depth)?;
    RawImage::new(size, depth, data.to_vec())
}

/// Reads and decodes the image file at `path`.
pub fn decode(path: impl AsRef<Path>, size: Size, format: Format) -> Result<RawImage, Error> {
    let data = read_file(path.as_ref())?;
    decode_bytes(&data, size, format)
}

/// Decodes an in-memory raw image.
pub fn decode_bytes(data: &[u8], size: Size, format: Format) -> Result<RawImage, Error> {
    if matches!(format, Format::Yuv422 | Format::Yuv422Luma) && size.width % 2 != 0 {
        return Err(Error::OddWidth { width: size.width });
    }

    let data = take_image_bytes(data, size, format.file_depth())?;
    let row_len = size.width as usize * format.file_depth();

    let pixels = match format {
        Format::Gray | Format::Rgb888 => data.to_vec(),
        Format::Yuv422 => data
            .chunks_exact(4)
            .flat_map(|yuyv| {
                let [y0, u, y1, v] = [yuyv[0], yuyv[1], yuyv[2], yuyv[3]];
                [y0, u, v, y1, u, v]
            })
            .collect(),
        Format::Yuv422Luma => data.iter().step_by(2).copied().collect(),
        Format::RgbPlanarRows => {
            let mut pixels = Vec::with_capacity(data.len());
            for row in data.chunks_exact(row_len) {
                interleave_row(row, size.width as usize, &mut pixels);
            }
            pixels
        }
    };

    RawImage::new(size, format.depth(), pixels)
}

/// Appends the planes `R.. G.. B..` of one row as `RGB` triples.
fn interleave_row(row: &[u8], width: usize, out: &mut Vec<u8>) {
    let (red, rest) = row.split_at(width);
    let (green, blue) = rest.split_at(width);
    for ((&r, &g), &b) in red.iter().zip(green).zip(blue) {
        out.extend_from_slice(&[r, g, b]);
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    let data = fs::read(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Returns the leading bytes that make up an image of the given size.
fn take_image_bytes(data: &[u8], size: Size, depth: usize) -> Result<&[u8], Error> {
    let expected = byte_len(size, depth)?;
    if data.len() < expected {
        return Err(Error::ShortRead {
            expected,
            actual: data.len(),
        });
    }

    if data.len() > expected {
        log::warn!(
            "ignoring {} trailing bytes after {}x{} image",
            data.len() - expected,
            size.width,
            size.height
        );
    }

    Ok(&data[..expected])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray() {
        let image = decode_bytes(&[10, 20, 30, 40], Size::new(2, 2), Format::Gray).unwrap();
        assert_eq!(image.depth(), 1);
        assert_eq!(
            image.to_nested(),
            vec![vec![vec![10], vec![20]], vec![vec![30], vec![40]]]
        );
    }

    #[test]
    fn gray_row_major() {
        let data: Vec<u8> = (0..15).collect();
        let image = decode_bytes(&data, Size::new(5, 3), Format::Gray).unwrap();

        let nested = image.to_nested();
        assert_eq!(nested.len(), 3);
        for (y, row) in nested.iter().enumerate() {
            assert_eq!(row.len(), 5);
            for (x, pixel) in row.iter().enumerate() {
                assert_eq!(pixel, &[(y * 5 + x) as u8]);
            }
        }
    }

    #[test]
    fn rgb888_sequential_triples() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let image = decode_bytes(&data, Size::new(2, 2), Format::Rgb888).unwrap();
        assert_eq!(
            image.to_nested(),
            vec![
                vec![vec![1, 2, 3], vec![4, 5, 6]],
                vec![vec![7, 8, 9], vec![10, 11, 12]],
            ]
        );
    }

    #[test]
    fn yuv422_expands_shared_chroma() {
        let data = [16, 128, 235, 64, 50, 90, 60, 200];
        let image = decode_bytes(&data, Size::new(2, 2), Format::Yuv422).unwrap();
        assert_eq!(image.depth(), 3);
        assert_eq!(
            image.to_nested(),
            vec![
                vec![vec![16, 128, 64], vec![235, 128, 64]],
                vec![vec![50, 90, 200], vec![60, 90, 200]],
            ]
        );
    }

    #[test]
    fn yuv422_luma() {
        let data = [16, 128, 235, 64, 50, 90, 60, 200];
        let image = decode_bytes(&data, Size::new(4, 1), Format::Yuv422Luma).unwrap();
        assert_eq!(image.as_bytes(), &[16, 235, 50, 60]);
    }

    #[test]
    fn yuv422_odd_width() {
        assert!(matches!(
            decode_bytes(&[0; 6], Size::new(3, 1), Format::Yuv422),
            Err(Error::OddWidth { width: 3 })
        ));
        assert!(matches!(
            decode_bytes(&[0; 6], Size::new(3, 1), Format::Yuv422Luma),
            Err(Error::OddWidth { width: 3 })
        ));
    }

    #[test]
    fn planar_rows() {
        #[rustfmt::skip]
        let data = [
            1, 2, 10, 20, 100, 200,
            3, 4, 30, 40, 130, 140,
        ];
        let image = decode_bytes(&data, Size::new(2, 2), Format::RgbPlanarRows).unwrap();
        assert_eq!(
            image.to_nested(),
            vec![
                vec![vec![1, 10, 100], vec![2, 20, 200]],
                vec![vec![3, 30, 130], vec![4, 40, 140]],
            ]
        );
    }

    #[test]
    fn short_data() {
        assert!(matches!(
            decode_bytes(&[1, 2, 3], Size::new(2, 2), Format::Gray),
            Err(Error::ShortRead {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            decode_bytes(&[0; 8], Size::new(2, 2), Format::Rgb888),
            Err(Error::ShortRead {
                expected: 12,
                actual: 8
            })
        ));
    }

    #[test]
    fn size_overflow() {
        let size = Size::new(u32::MAX - 1, u32::MAX);
        assert!(matches!(
            decode_bytes(&[0; 12], size, Format::Rgb888),
            Err(Error::TooLarge {
                width: 4294967294,
                height: 4294967295
            })
        ));
        assert!(matches!(
            decode_bytes(&[0; 12], size, Format::RgbPlanarRows),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn zero_size() {
        assert!(matches!(
            decode_bytes(&[1, 2, 3], Size::new(0, 1), Format::Gray),
            Err(Error::ZeroSize { .. })
        ));
    }

    #[test]
    fn trailing_bytes_ignored() {
        let image = decode_bytes(&[1, 2, 3, 4, 5, 6], Size::new(2, 2), Format::Gray).unwrap();
        assert_eq!(image.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn missing_file() {
        let path = Path::new("/nonexistent/rawview/image.raw");
        let err = read_raw(path, Size::new(2, 2), 1).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert_eq!(
            err.to_string(),
            "Error opening file: /nonexistent/rawview/image.raw"
        );
    }

    #[test]
    fn zero_depth() {
        assert!(matches!(
            read_raw("/nonexistent", Size::new(1, 1), 0),
            Err(Error::ZeroDepth)
        ));
    }

    #[test]
    fn read_from_file() {
        let path = std::env::temp_dir().join("rawview_decode_read_raw.raw");
        fs::write(&path, [9, 8, 7, 6, 5, 4]).unwrap();

        let image = read_raw(&path, Size::new(1, 2), 3).unwrap();
        assert_eq!(image.to_nested(), vec![vec![vec![9, 8, 7]], vec![vec![6, 5, 4]]]);

        let image = decode(&path, Size::new(3, 1), Format::RgbPlanarRows);
        assert!(matches!(
            image,
            Err(Error::ShortRead {
                expected: 9,
                actual: 6
            })
        ));

        fs::remove_file(&path).ok();
    }
}
