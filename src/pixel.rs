use alloc::vec::Vec;

use rgb::alt::BGR8;

use crate::error::BitmapError;

/// One 24-bit color triple, stored blue-green-red as on disk.
pub type ColorTriple = BGR8;

/// Row-major grid of color triples. Row 0 is the first row stored in the
/// file; storage order is a codec concern, not a grid one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<ColorTriple>,
}

impl PixelGrid {
    /// Allocate a zeroed grid.
    ///
    /// Both dimensions must be at least 1. Returns
    /// [`BitmapError::OutOfMemory`] if the allocator refuses the request
    /// rather than aborting.
    pub fn new(width: usize, height: usize) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::UnsupportedFormat(alloc::format!(
                "degenerate grid dimensions {width}x{height}"
            )));
        }
        let count = width
            .checked_mul(height)
            .ok_or(BitmapError::OutOfMemory { bytes: usize::MAX })?;
        let bytes = count.saturating_mul(3);
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| BitmapError::OutOfMemory { bytes })?;
        pixels.resize(count, ColorTriple::default());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing pixels. Returns `None` if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<ColorTriple>) -> Option<Self> {
        if width == 0 || height == 0 || width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `row`, `col`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<ColorTriple> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.pixels[row * self.width + col])
    }

    pub fn row(&self, row: usize) -> &[ColorTriple] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [ColorTriple] {
        let start = row * self.width;
        &mut self.pixels[start..start + self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[ColorTriple]> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [ColorTriple]> {
        self.pixels.chunks_exact_mut(self.width)
    }

    pub fn pixels(&self) -> &[ColorTriple] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [ColorTriple] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<ColorTriple> {
        self.pixels
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, ColorTriple> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }

    /// Copy into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<ColorTriple> {
        imgref::ImgVec::new(self.pixels.clone(), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_grid_is_zeroed() {
        let grid = PixelGrid::new(3, 2).unwrap();
        assert_eq!(grid.pixels().len(), 6);
        assert!(grid.pixels().iter().all(|p| *p == ColorTriple::default()));
        assert_eq!(grid.rows().len(), 2);
    }

    #[test]
    fn overflowing_size_is_reported() {
        assert!(matches!(
            PixelGrid::new(usize::MAX / 2, 4),
            Err(BitmapError::OutOfMemory { .. })
        ));
    }

    #[test]
    fn refused_allocation_is_reported() {
        // the cell count fits, the allocator refuses the bytes
        let width = isize::MAX as usize / 3;
        match PixelGrid::new(width, 1) {
            Err(BitmapError::OutOfMemory { bytes }) => assert_eq!(bytes, width * 3),
            other => panic!("expected OutOfMemory, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h) in [(0, 3), (3, 0), (0, 0)] {
            assert!(matches!(
                PixelGrid::new(w, h),
                Err(BitmapError::UnsupportedFormat(_))
            ));
            assert!(PixelGrid::from_pixels(w, h, Vec::new()).is_none());
        }
    }

    #[test]
    fn rows_index_row_major() {
        let pixels = (0..6u8).map(|v| ColorTriple { b: v, g: 0, r: 0 }).collect();
        let grid = PixelGrid::from_pixels(3, 2, pixels).unwrap();
        assert_eq!(grid.row(1)[0].b, 3);
        assert_eq!(grid.get(1, 2).map(|p| p.b), Some(5));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(PixelGrid::from_pixels(2, 2, vec![ColorTriple::default(); 3]).is_none());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_view_matches_geometry() {
        let grid = PixelGrid::new(4, 3).unwrap();
        let view = grid.as_imgref();
        assert_eq!(view.width(), 4);
        assert_eq!(view.height(), 3);
    }
}
