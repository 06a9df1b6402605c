use bon::Builder;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Error;

/// Traversal/grouping strategy used to map the 2-D pixel grid onto bytes
///
/// Every strategy groups up to 8 pixels along one axis into a "page" that
/// maps to exactly one output byte. They differ in which axis is paged and
/// in how pages map to byte positions. See the method docs on the packing
/// routines for the exact byte position formulas.
#[derive(
    Default, Debug, Eq, PartialEq, Copy, Clone, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SamplingMode {
    /// One page per image row, 8-bit groups running left to right
    #[default]
    Row,
    /// One page per image column, 8-bit groups running top to bottom
    Col,
    /// Pages of 8 consecutive rows, byte index varying by column within a page
    ColRow,
    /// Pages of 8 consecutive columns, byte index varying by row within a page
    RowCol,
}

/// The textual form of the returned artifact
#[derive(
    Default, Debug, Eq, PartialEq, Copy, Clone, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputMode {
    /// `"0xNN"` string tokens, lowercase, zero-padded
    #[default]
    HexPrefixed,
    /// The packed byte buffer itself
    RawBytes,
}

/// Selects the monochrome (binarize + sample) or color (RGB565) pipeline
#[derive(
    Default, Debug, Eq, PartialEq, Copy, Clone, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorMode {
    /// 1 bit per pixel via thresholding, packed per [`SamplingMode`]
    #[default]
    Monochrome,
    /// 16 bits per pixel, RGB565 big-endian, row-major
    Color,
}

impl TryFrom<u8> for SamplingMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Row),
            1 => Ok(Self::Col),
            2 => Ok(Self::ColRow),
            3 => Ok(Self::RowCol),
            _ => Err(Error::UnknownSamplingMode { code }),
        }
    }
}

impl TryFrom<u8> for OutputMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::HexPrefixed),
            1 => Ok(Self::RawBytes),
            _ => Err(Error::UnknownOutputMode { code }),
        }
    }
}

impl TryFrom<u8> for ColorMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Color),
            1 => Ok(Self::Monochrome),
            _ => Err(Error::UnknownColorMode { code }),
        }
    }
}

/// The five orthogonal encoding flags of one codec invocation
///
/// Every call is fully parameterized by a [`Config`]; the codec keeps no
/// global state. The default configuration matches the firmware tooling this
/// format originates from: row sampling, normal bit order and polarity,
/// hex-prefixed output, monochrome.
///
/// ```rust
/// use libdotpack::{Config, SamplingMode};
///
/// let config = Config::builder()
///     .sampling_mode(SamplingMode::ColRow)
///     .reverse_bit_order(true)
///     .build();
/// assert!(!config.invert_polarity);
/// ```
#[derive(Builder, Default, Debug, Eq, PartialEq, Copy, Clone)]
pub struct Config {
    /// Swaps which logical pixel state maps to a set bit; for color output,
    /// complements the packed RGB565 bytes
    #[builder(default)]
    pub invert_polarity: bool,
    /// Traversal strategy (monochrome only)
    #[builder(default)]
    pub sampling_mode: SamplingMode,
    /// MSB-first instead of LSB-first bit placement within each byte
    #[builder(default)]
    pub reverse_bit_order: bool,
    /// Hex token list vs raw byte buffer
    #[builder(default)]
    pub output_mode: OutputMode,
    /// Monochrome vs RGB565 pipeline
    #[builder(default)]
    pub color_mode: ColorMode,
}

impl Config {
    /// Builds a [`Config`] from the legacy positional code array
    /// `[invert, sampling, bit_order, output, color]` used by the firmware
    /// tooling this crate replaces.
    ///
    /// The two toggle positions (`invert`, `bit_order`) treat any non-zero
    /// value as "on", matching the legacy tool. The three mode positions are
    /// validated strictly: an unrecognized code is an error, never a silent
    /// fallback to a default mode.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending code if the sampling, output,
    /// or color position holds an unrecognized value.
    pub fn from_codes(codes: [u8; 5]) -> Result<Self, Error> {
        Ok(Self {
            invert_polarity: codes[0] != 0,
            sampling_mode: SamplingMode::try_from(codes[1])?,
            reverse_bit_order: codes[2] != 0,
            output_mode: OutputMode::try_from(codes[3])?,
            color_mode: ColorMode::try_from(codes[4])?,
        })
    }
}
