use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// Magic, offset, header size, bit depth or compression is not the
    /// uncompressed 24-bit layout, or the image has no pixels.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The input ends before the bytes its headers promise.
    #[error("corrupt data: expected {expected} bytes, got {actual}")]
    CorruptData { expected: usize, actual: usize },

    #[error("out of memory: cannot allocate {bytes} bytes for the pixel grid")]
    OutOfMemory { bytes: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// The grid handed to the encoder disagrees with the header geometry.
    #[error("pixel grid is {grid_width}x{grid_height} but headers describe {width}x{height}")]
    GeometryMismatch {
        width: u32,
        height: u32,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

/// Errors from parsing the `filter` command line.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("invalid filter '-{0}'")]
    InvalidFilter(char),

    #[error("only one filter is allowed")]
    MultipleFilters,

    #[error("usage: filter -[b|e|g|r] infile outfile")]
    Usage,
}

/// Errors from the file-to-file filter pipeline.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RunError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("could not open {}: {source}", .path.display())]
    OpenInput {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("could not create {}: {source}", .path.display())]
    CreateOutput {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}

#[cfg(feature = "std")]
impl RunError {
    /// Process exit status for this failure. Each kind gets its own code;
    /// 0 is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Options(OptionsError::InvalidFilter(_)) => 1,
            RunError::Options(OptionsError::MultipleFilters) => 2,
            RunError::Options(OptionsError::Usage) => 3,
            RunError::OpenInput { .. } => 4,
            RunError::CreateOutput { .. } => 5,
            RunError::Bitmap(BitmapError::UnsupportedFormat(_)) => 6,
            RunError::Bitmap(BitmapError::OutOfMemory { .. }) => 7,
            RunError::Bitmap(BitmapError::CorruptData { .. }) => 8,
            RunError::Read(_) | RunError::Write(_) | RunError::Bitmap(_) => 9,
        }
    }
}
