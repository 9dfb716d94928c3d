use enough::Stop;

use crate::bmp::{self, Bitmap, FileHeader, InfoHeader, Permissiveness};
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for decoding a BMP held in memory.
///
/// ```
/// use bmpfilter::{DecodeRequest, Limits, Permissiveness, Unstoppable};
///
/// # fn demo(data: &[u8]) -> Result<(), bmpfilter::BitmapError> {
/// let limits = Limits {
///     max_pixels: Some(64 * 1024 * 1024),
///     ..Default::default()
/// };
/// let bitmap = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_permissiveness(Permissiveness::Strict)
///     .decode(Unstoppable)?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: Permissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: Permissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: Permissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Validate the headers without touching pixel data.
    pub fn probe(&self) -> Result<(FileHeader, InfoHeader), BitmapError> {
        bmp::parse_headers(self.data, self.permissiveness)
    }

    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BitmapError> {
        bmp::decode_bmp(self.data, self.limits, self.permissiveness, &stop)
    }
}

/// Decode with default limits and [`Permissiveness::Standard`].
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}
