//! # bmpfilter
//!
//! Decoder, encoder and pixel filters for uncompressed 24-bit BMP files.
//!
//! Decoding keeps both headers exactly as read; encoding writes them back
//! verbatim and re-pads every row, so a decode followed by an encode
//! reproduces the input byte for byte. Only the pixels change.
//!
//! ## Filters
//!
//! - **grayscale**: per-pixel channel mean
//! - **reflect**: horizontal mirror
//! - **blur**: 3x3 box blur, clipped at the borders
//! - **edges**: Sobel gradient magnitude per channel
//! - **sepia**: sepia tone (library only; no command-line flag)
//!
//! ## Non-Goals
//!
//! - Compressed, palettized or non-24-bit bitmaps
//! - Streaming decode: the whole image is held in memory
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfilter::{Filter, Unstoppable, decode_bmp, encode_bmp};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let mut bitmap = decode_bmp(data, Unstoppable)?;
//! Filter::Edges.apply(&mut bitmap.pixels);
//! let encoded = encode_bmp(&bitmap, Unstoppable)?;
//! # Ok::<(), bmpfilter::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;
mod pixel;

pub mod bmp;
pub mod filter;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod options;
#[cfg(feature = "std")]
mod run;

// Re-exports
pub use bmp::{Bitmap, FileHeader, InfoHeader, Permissiveness, row_padding, row_stride};
pub use decode::{DecodeRequest, decode_bmp};
pub use encode::{encode_bmp, filter_bmp};
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
#[cfg(feature = "std")]
pub use error::{OptionsError, RunError};
pub use filter::Filter;
pub use limits::Limits;
#[cfg(feature = "std")]
pub use options::Options;
pub use pixel::{ColorTriple, PixelGrid};
#[cfg(feature = "std")]
pub use run::run;
