#![allow(clippy::module_name_repetitions)]

pub(crate) mod binarize;
pub(crate) mod buffer;
pub(crate) mod color;
pub(crate) mod format;
pub(crate) mod sampler;

pub use binarize::binarize;
pub use buffer::{LuminanceMap, PixelBuffer};
pub use color::pack_rgb565;
pub use format::{format, preview, FormattedOutput, OutputSize, DEFAULT_LINE_BREAK};
pub use sampler::pack;

use tracing::{debug, instrument};

use crate::config::{ColorMode, Config, SamplingMode};

/// The packed binary artifact, plus the metadata needed to interpret it
///
/// Produced once per invocation and immutable afterwards. The byte values
/// are a firmware contract: identical input and configuration always yield
/// a byte-identical buffer.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    layout: Layout,
    bytes_per_page: usize,
    page_count: usize,
    bytes: Vec<u8>,
}

/// How the bytes of a [`PackedBitmap`] are laid out
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Layout {
    /// 1 bit per pixel, grouped into pages per the given [`SamplingMode`]
    Mono(SamplingMode),
    /// 16 bits per pixel, big-endian RGB565, row-major
    Rgb565,
}

impl PackedBitmap {
    pub(crate) fn new(
        width: u32,
        height: u32,
        layout: Layout,
        bytes_per_page: usize,
        page_count: usize,
        bytes: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(bytes_per_page * page_count, bytes.len());
        Self {
            width,
            height,
            layout,
            bytes_per_page,
            page_count,
            bytes,
        }
    }

    /// Returns the source image width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the source image height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the byte layout
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the number of bytes one page occupies
    #[must_use]
    pub const fn bytes_per_page(&self) -> usize {
        self.bytes_per_page
    }

    /// Returns the number of pages
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the packed bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes `self`, returning the packed bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size metrics of the packed buffer
    #[must_use]
    pub fn size(&self) -> OutputSize {
        OutputSize::from_len(self.bytes.len())
    }
}

/// Runs the full pipeline: binarize (or RGB565-pack) and sample, then
/// project into the configured output form
///
/// In [`ColorMode::Monochrome`] the pixels are thresholded against
/// `threshold` and packed per `config.sampling_mode`; in
/// [`ColorMode::Color`] the sampler is skipped entirely (RGB565 packing is
/// itself the final byte layout) and `threshold`, `sampling_mode`, and
/// `reverse_bit_order` are ignored.
///
/// ```rust
/// use libdotpack::{generate, Config, FormattedOutput, PixelBuffer};
///
/// // two pixels: black, white
/// let buffer = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255])?;
/// let FormattedOutput::HexTokens(tokens) = generate(&buffer, 128, &Config::default()) else {
///     unreachable!("default config emits hex tokens");
/// };
/// // the black pixel sets bit 0, the white pixel clears bit 1
/// assert_eq!(tokens, ["0x01"]);
/// # Ok::<(), libdotpack::Error>(())
/// ```
#[instrument(skip(buffer), level = "debug")]
#[must_use]
pub fn generate(buffer: &PixelBuffer, threshold: u8, config: &Config) -> FormattedOutput {
    format(&generate_bitmap(buffer, threshold, config), config.output_mode)
}

/// Same as [`generate`], but returns the sized [`PackedBitmap`] instead of
/// the textual projection
#[instrument(skip(buffer), level = "debug")]
#[must_use]
pub fn generate_bitmap(buffer: &PixelBuffer, threshold: u8, config: &Config) -> PackedBitmap {
    match config.color_mode {
        ColorMode::Color => pack_rgb565(buffer, config.invert_polarity),
        ColorMode::Monochrome => {
            let map = binarize(buffer, threshold);
            debug!(
                "binarized {}x{} image with threshold {threshold}",
                map.width(),
                map.height()
            );
            pack(
                &map,
                config.sampling_mode,
                config.reverse_bit_order,
                config.invert_polarity,
            )
        }
    }
}
