//! Uncompressed 24-bit BMP codec.
//!
//! Headers are kept exactly as read and written back verbatim; only the
//! pixel rows are re-serialized, with the same row padding.

mod decode;
mod encode;
mod header;

pub use decode::Permissiveness;
pub use header::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET, row_padding, row_stride};

pub(crate) use decode::{decode_bmp, parse_headers};
pub(crate) use encode::encode_bmp;

use crate::pixel::PixelGrid;

/// A decoded bitmap: both headers and the pixel grid they describe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub pixels: PixelGrid,
}

impl Bitmap {
    /// New bottom-up bitmap with consistent headers and a zeroed grid.
    pub fn new(width: u32, height: u32) -> Result<Self, crate::BitmapError> {
        if width == 0 || height == 0 {
            return Err(crate::BitmapError::UnsupportedFormat(alloc::format!(
                "degenerate image dimensions {width}x{height}"
            )));
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(crate::BitmapError::DimensionsTooLarge { width, height });
        }
        let info_header = InfoHeader::for_dimensions(width, height);
        Ok(Self {
            file_header: FileHeader::for_info(&info_header),
            info_header,
            pixels: PixelGrid::new(width as usize, height as usize)?,
        })
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Zero bytes appended to each stored row.
    pub fn padding(&self) -> usize {
        row_padding(self.pixels.width())
    }

    /// Bytes per stored row, padding included.
    pub fn row_stride(&self) -> usize {
        row_stride(self.pixels.width())
    }

    pub fn is_top_down(&self) -> bool {
        self.info_header.is_top_down()
    }

    pub fn into_parts(self) -> (FileHeader, InfoHeader, PixelGrid) {
        (self.file_header, self.info_header, self.pixels)
    }
}
