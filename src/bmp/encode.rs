//! BMP encoder: echoes the decoded headers and re-pads every row.

use alloc::vec::Vec;
use enough::Stop;
use log::debug;

use super::Bitmap;
use super::header::{FileHeader, InfoHeader, row_padding, row_stride};
use crate::error::BitmapError;

/// Serialize headers verbatim, then each row followed by zero padding.
pub(crate) fn encode_bmp(bitmap: &Bitmap, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let info = &bitmap.info_header;
    let grid = &bitmap.pixels;
    let width = info.width.max(0) as u32;
    let height = info.height.unsigned_abs();
    if grid.width() != width as usize || grid.height() != height as usize {
        return Err(BitmapError::GeometryMismatch {
            width,
            height,
            grid_width: grid.width(),
            grid_height: grid.height(),
        });
    }

    let w = grid.width();
    let padding = row_padding(w);
    let total = row_stride(w)
        .checked_mul(grid.height())
        .and_then(|n| n.checked_add(FileHeader::SIZE + InfoHeader::SIZE))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BitmapError::OutOfMemory { bytes: total })?;

    out.extend_from_slice(&bitmap.file_header.to_bytes());
    out.extend_from_slice(&info.to_bytes());

    for (row_idx, row) in grid.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, padding));
    }

    debug!("encoded {w}x{height} bitmap into {} bytes", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{ColorTriple, PixelGrid};
    use alloc::vec;
    use enough::Unstoppable;

    fn bitmap(width: u32, height: u32) -> Bitmap {
        let info = InfoHeader::for_dimensions(width, height);
        Bitmap {
            file_header: FileHeader::for_info(&info),
            info_header: info,
            pixels: PixelGrid::new(width as usize, height as usize).unwrap(),
        }
    }

    #[test]
    fn rows_are_padded_with_zeros() {
        let mut bmp = bitmap(1, 2);
        bmp.pixels.pixels_mut().fill(ColorTriple {
            b: 0xAA,
            g: 0xBB,
            r: 0xCC,
        });
        let out = encode_bmp(&bmp, &Unstoppable).unwrap();
        assert_eq!(out.len(), 54 + 2 * 4);
        assert_eq!(&out[54..], &[0xAA, 0xBB, 0xCC, 0, 0xAA, 0xBB, 0xCC, 0]);
    }

    #[test]
    fn four_wide_rows_need_no_padding() {
        let out = encode_bmp(&bitmap(4, 1), &Unstoppable).unwrap();
        assert_eq!(out.len(), 54 + 12);
    }

    #[test]
    fn grid_must_match_headers() {
        let mut bmp = bitmap(3, 3);
        bmp.pixels = PixelGrid::from_pixels(3, 2, vec![ColorTriple::default(); 6]).unwrap();
        assert!(matches!(
            encode_bmp(&bmp, &Unstoppable),
            Err(BitmapError::GeometryMismatch {
                grid_height: 2,
                ..
            })
        ));
    }
}
