//! # libdotpack
//!
//!
//! This library packs decoded raster images into the binary bitmap layouts
//! consumed by monochrome and low-color-depth dot-matrix displays (OLED/LCD
//! panels and similar), and by firmware that embeds image data as byte
//! arrays.
//!
//! The bit layout of the output depends on a small set of orthogonal
//! encoding choices collected in a [`Config`]: polarity, traversal order,
//! bit order, color depth, and textual output form. Each combination is a
//! compatibility contract with existing display firmware and must be
//! reproduced bit-for-bit; in particular the format's bit-set convention is
//! inverted relative to intuition (a *cleared* pixel value sets the bit in
//! the output byte).
//!
//! ### Sampling modes
//!
//! Monochrome pixels are grouped into 8-pixel "pages" along one traversal
//! axis; each page maps to one output byte. The four [`SamplingMode`]s
//! differ in which axis is paged and in how pages map to byte positions:
//!
//! | Mode     | Paging axis              | Output size           |
//! |----------|--------------------------|-----------------------|
//! | `Row`    | 8-bit groups along x     | `ceil(w/8) * h` bytes |
//! | `Col`    | 8-bit groups along y     | `ceil(h/8) * w` bytes |
//! | `ColRow` | pages of 8 rows          | `ceil(h/8) * w` bytes |
//! | `RowCol` | pages of 8 columns       | `ceil(w/8) * h` bytes |
//!
//! In color mode the image packs directly to big-endian RGB565 (two bytes
//! per pixel, row-major) and the sampler is skipped.
//!
//! ### Usage
//!
//! The codec consumes a [`PixelBuffer`] (RGBA8; how it is decoded or scaled
//! is up to the caller) and returns either hex tokens or raw bytes.
//!
//! ```rust
//! use libdotpack::{generate, Config, FormattedOutput, PixelBuffer};
//!
//! fn main() -> Result<(), libdotpack::Error> {
//!     // 8x1 image alternating white/black from the left
//!     let mut pixels = Vec::new();
//!     for x in 0..8u8 {
//!         let v = if x % 2 == 0 { 255 } else { 0 };
//!         pixels.extend_from_slice(&[v, v, v, 255]);
//!     }
//!     let buffer = PixelBuffer::new(8, 1, pixels)?;
//!
//!     let output = generate(&buffer, 128, &Config::default());
//!     // black pixels (odd x) set their bits, LSB-first
//!     assert_eq!(output, FormattedOutput::HexTokens(vec!["0xaa".into()]));
//!     Ok(())
//! }
//! ```
//!
//! The color path packs each pixel to RGB565 instead:
//!
//! ```rust
//! use libdotpack::{generate_bitmap, ColorMode, Config, PixelBuffer};
//!
//! fn main() -> Result<(), libdotpack::Error> {
//!     // one pure red pixel
//!     let buffer = PixelBuffer::new(1, 1, vec![255, 0, 0, 255])?;
//!     let config = Config::builder().color_mode(ColorMode::Color).build();
//!
//!     let bitmap = generate_bitmap(&buffer, 0, &config);
//!     assert_eq!(bitmap.as_bytes(), [0xF8, 0x00]);
//!     Ok(())
//! }
//! ```
//!
//! ### Legacy numeric configuration
//!
//! The firmware tooling this crate replaces selected its behavior through a
//! positional array of integer codes. [`Config::from_codes`] accepts that
//! form, but unrecognized mode codes are rejected with a descriptive
//! [`Error`] instead of silently falling back to row sampling.
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the packing pipeline and its artifacts
pub mod codec;
mod config;
mod error;

pub use codec::{
    binarize, format, generate, generate_bitmap, pack, pack_rgb565, preview, FormattedOutput,
    Layout, LuminanceMap, OutputSize, PackedBitmap, PixelBuffer, DEFAULT_LINE_BREAK,
};
pub use config::{ColorMode, Config, OutputMode, SamplingMode};
pub use error::Error;
