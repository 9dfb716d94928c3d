//! Pixel-grid transforms.
//!
//! Every filter mutates the grid in place and keeps its dimensions. Blur and
//! edge detection read neighbors, so they work from a snapshot of the
//! original grid and never observe already-filtered cells.

mod blur;
mod edges;
mod point;
mod reflect;

pub use blur::blur;
pub use edges::edges;
pub use point::{grayscale, sepia};
pub use reflect::reflect;

use core::fmt;

use log::trace;

use crate::pixel::PixelGrid;

/// The available transforms.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Per-pixel integer mean of the three channels.
    Grayscale,
    /// Horizontal mirror.
    Reflect,
    /// 3x3 box blur over the in-bounds neighbors.
    Blur,
    /// Sobel gradient magnitude per channel.
    Edges,
    /// Sepia tone. Not reachable from a command-line flag.
    Sepia,
}

impl Filter {
    /// Filters selectable by a command-line flag.
    pub const FLAGGED: [Filter; 4] = [Filter::Blur, Filter::Edges, Filter::Grayscale, Filter::Reflect];

    /// Map a mode flag (`b`, `e`, `g`, `r`) to its filter.
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'b' => Some(Filter::Blur),
            'e' => Some(Filter::Edges),
            'g' => Some(Filter::Grayscale),
            'r' => Some(Filter::Reflect),
            _ => None,
        }
    }

    /// The mode flag for this filter, if it has one.
    pub fn flag(self) -> Option<char> {
        match self {
            Filter::Blur => Some('b'),
            Filter::Edges => Some('e'),
            Filter::Grayscale => Some('g'),
            Filter::Reflect => Some('r'),
            Filter::Sepia => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
            Filter::Edges => "edges",
            Filter::Sepia => "sepia",
        }
    }

    pub fn apply(self, grid: &mut PixelGrid) {
        trace!("applying {} to {}x{} grid", self, grid.width(), grid.height());
        match self {
            Filter::Grayscale => grayscale(grid),
            Filter::Reflect => reflect(grid),
            Filter::Blur => blur(grid),
            Filter::Edges => edges(grid),
            Filter::Sepia => sepia(grid),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-bounds cells of the 3x3 window centred on (`row`, `col`), as
/// `(ky, kx, row, col)` where `ky`/`kx` index a 3x3 kernel.
pub(crate) fn window3x3(
    height: usize,
    width: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize, usize, usize)> {
    (0..3usize)
        .flat_map(|ky| (0..3usize).map(move |kx| (ky, kx)))
        .filter_map(move |(ky, kx)| {
            let r = (row + ky).checked_sub(1)?;
            let c = (col + kx).checked_sub(1)?;
            (r < height && c < width).then_some((ky, kx, r, c))
        })
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::pixel::{ColorTriple, PixelGrid};
    use alloc::vec::Vec;

    pub fn gray(v: u8) -> ColorTriple {
        ColorTriple { b: v, g: v, r: v }
    }

    pub fn grid_of(width: usize, height: usize, values: &[u8]) -> PixelGrid {
        let pixels: Vec<ColorTriple> = values.iter().copied().map(gray).collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    /// Red channel of every pixel, row-major.
    pub fn reds(grid: &PixelGrid) -> Vec<u8> {
        grid.pixels().iter().map(|p| p.r).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn flags_round_trip() {
        for filter in Filter::FLAGGED {
            let flag = filter.flag().unwrap();
            assert_eq!(Filter::from_flag(flag), Some(filter));
        }
        assert_eq!(Filter::Sepia.flag(), None);
        assert_eq!(Filter::from_flag('s'), None);
    }

    #[test]
    fn window_is_clipped_at_corners_and_edges() {
        assert_eq!(window3x3(3, 3, 1, 1).count(), 9);
        assert_eq!(window3x3(3, 3, 0, 0).count(), 4);
        assert_eq!(window3x3(3, 3, 0, 1).count(), 6);
        assert_eq!(window3x3(3, 3, 2, 2).count(), 4);
        assert_eq!(window3x3(1, 1, 0, 0).count(), 1);

        let corner: Vec<_> = window3x3(3, 3, 0, 0).collect();
        assert_eq!(corner[0], (1, 1, 0, 0));
        assert_eq!(corner[3], (2, 2, 1, 1));
    }
}
