use crate::pixel::PixelGrid;

/// Mirror every row horizontally.
pub fn reflect(grid: &mut PixelGrid) {
    for row in grid.rows_mut() {
        row.reverse();
    }
}
