//! Uncompressed 24-bit BMP decoder.

use enough::Stop;
use log::{debug, warn};
use rgb::AsPixels as _;

use super::Bitmap;
use super::header::{
    BYTES_PER_PIXEL, FileHeader, InfoHeader, PIXEL_DATA_OFFSET, row_padding, row_stride,
};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{ColorTriple, PixelGrid};

const HEADERS_LEN: usize = FileHeader::SIZE + InfoHeader::SIZE;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permissiveness {
    /// Also reject: planes != 1, non-zero reserved fields, a file size
    /// field that disagrees with the input length, and top-down
    /// (negative height) images.
    Strict,

    /// Reject anything that is not an uncompressed 24-bit bitmap with a
    /// 54-byte pixel offset, and any input shorter than its pixel rows.
    #[default]
    Standard,

    /// Like `Standard`, but rows missing from a truncated file are left
    /// zero-filled instead of failing the decode.
    Permissive,
}

// ── Header validation ───────────────────────────────────────────────

/// Read and validate both headers. Fails before any pixel byte is touched.
pub(crate) fn parse_headers(
    data: &[u8],
    permissiveness: Permissiveness,
) -> Result<(FileHeader, InfoHeader), BitmapError> {
    if data.len() >= 2 && data[..2] != FileHeader::SIGNATURE {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "signature is {:02x?}, expected \"BM\"",
            &data[..2]
        )));
    }
    let Some((file_bytes, rest)) = data.split_first_chunk::<{ FileHeader::SIZE }>() else {
        return Err(BitmapError::CorruptData {
            expected: HEADERS_LEN,
            actual: data.len(),
        });
    };
    let Some((info_bytes, _)) = rest.split_first_chunk::<{ InfoHeader::SIZE }>() else {
        return Err(BitmapError::CorruptData {
            expected: HEADERS_LEN,
            actual: data.len(),
        });
    };
    let file = FileHeader::parse(file_bytes);
    let info = InfoHeader::parse(info_bytes);
    validate(&file, &info, data.len(), permissiveness)?;
    Ok((file, info))
}

fn unsupported(msg: alloc::string::String) -> BitmapError {
    BitmapError::UnsupportedFormat(msg)
}

fn validate(
    file: &FileHeader,
    info: &InfoHeader,
    data_len: usize,
    permissiveness: Permissiveness,
) -> Result<(), BitmapError> {
    if file.pixel_offset != PIXEL_DATA_OFFSET {
        return Err(unsupported(alloc::format!(
            "pixel data offset is {}, expected {PIXEL_DATA_OFFSET}",
            file.pixel_offset
        )));
    }
    if info.header_size as usize != InfoHeader::SIZE {
        return Err(unsupported(alloc::format!(
            "info header size is {}, expected {}",
            info.header_size,
            InfoHeader::SIZE
        )));
    }
    if info.bit_count != 24 {
        return Err(unsupported(alloc::format!(
            "{} bits per pixel, expected 24",
            info.bit_count
        )));
    }
    if info.compression != 0 {
        return Err(unsupported(alloc::format!(
            "compression method {}, expected 0 (none)",
            info.compression
        )));
    }
    if info.width <= 0 || info.height == 0 {
        return Err(unsupported(alloc::format!(
            "degenerate image dimensions {}x{}",
            info.width,
            info.height
        )));
    }

    if permissiveness == Permissiveness::Strict {
        if info.planes != 1 {
            return Err(unsupported(alloc::format!(
                "planes field is {}, expected 1",
                info.planes
            )));
        }
        if file.reserved1 != 0 || file.reserved2 != 0 {
            return Err(unsupported("reserved header fields are not zero".into()));
        }
        if file.file_size as usize != data_len {
            return Err(unsupported(alloc::format!(
                "file size field ({}) doesn't match actual size ({data_len})",
                file.file_size
            )));
        }
        if info.is_top_down() {
            return Err(unsupported(
                "top-down (negative height) bitmaps are rejected in strict mode".into(),
            ));
        }
    }
    Ok(())
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode headers and pixel rows into a [`Bitmap`].
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: Permissiveness,
    stop: &dyn Stop,
) -> Result<Bitmap, BitmapError> {
    let (file_header, info_header) = parse_headers(data, permissiveness)?;

    let width = info_header.width as u32;
    let height = info_header.height.unsigned_abs();
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let w = width as usize;
    let h = height as usize;
    let padding = row_padding(w);
    debug!(
        "decoding {w}x{h} 24-bit bitmap ({}), {padding} padding bytes per row",
        if info_header.is_top_down() {
            "top-down"
        } else {
            "bottom-up"
        }
    );
    if info_header.is_top_down() {
        warn!("negative height {}; rows are kept in stored order", info_header.height);
    }

    let stride = row_stride(w);
    let row_bytes = w * BYTES_PER_PIXEL;
    // The last row's padding may be missing; its pixels may not.
    let needed = stride
        .checked_mul(h - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .and_then(|n| n.checked_add(HEADERS_LEN))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if data.len() < needed && permissiveness != Permissiveness::Permissive {
        return Err(BitmapError::CorruptData {
            expected: needed,
            actual: data.len(),
        });
    }

    stop.check()?;
    let mut pixels = PixelGrid::new(w, h)?;

    for (row_idx, row) in pixels.rows_mut().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let start = HEADERS_LEN + row_idx * stride;
        match data.get(start..start + row_bytes) {
            Some(bytes) => {
                let src: &[ColorTriple] = bytes.as_pixels();
                row.copy_from_slice(src);
            }
            None if permissiveness == Permissiveness::Permissive => {
                let available = data.len().saturating_sub(start) / BYTES_PER_PIXEL;
                if available > 0 {
                    let bytes = &data[start..start + available * BYTES_PER_PIXEL];
                    let src: &[ColorTriple] = bytes.as_pixels();
                    row[..available].copy_from_slice(src);
                }
                warn!(
                    "input truncated at row {row_idx} of {h}: {} of {needed} bytes present, remaining pixels zero-filled",
                    data.len()
                );
                break;
            }
            None => {
                return Err(BitmapError::CorruptData {
                    expected: needed,
                    actual: data.len(),
                });
            }
        }
    }

    Ok(Bitmap {
        file_header,
        info_header,
        pixels,
    })
}
