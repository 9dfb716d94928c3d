use alloc::vec::Vec;
use enough::Stop;

use crate::bmp::{self, Bitmap};
use crate::error::BitmapError;
use crate::filter::Filter;

/// Encode a bitmap: headers verbatim, then the padded pixel rows.
///
/// The headers are not recomputed from the grid. A grid whose dimensions
/// disagree with them is rejected with [`BitmapError::GeometryMismatch`].
pub fn encode_bmp(bitmap: &Bitmap, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    bmp::encode_bmp(bitmap, &stop)
}

/// Decode, apply one filter, re-encode. The in-memory form of the
/// `filter` command.
pub fn filter_bmp(data: &[u8], filter: Filter, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    let mut bitmap = bmp::decode_bmp(data, None, bmp::Permissiveness::Standard, &stop)?;
    filter.apply(&mut bitmap.pixels);
    bmp::encode_bmp(&bitmap, &stop)
}
