use std::fmt::Display;

use itertools::Itertools;

use crate::codec::buffer::LuminanceMap;
use crate::codec::PackedBitmap;
use crate::config::OutputMode;

/// Default number of tokens per line in [`FormattedOutput::display_text`]
pub const DEFAULT_LINE_BREAK: usize = 16;

const KILOBYTE: f64 = 1024.0;

/// The final artifact handed back to the caller
///
/// A pure projection of a [`PackedBitmap`]: either the raw byte buffer or a
/// list of `"0xNN"` string tokens.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum FormattedOutput {
    /// `"0xNN"` tokens, lowercase, zero-padded to 2 digits
    HexTokens(Vec<String>),
    /// The packed bytes unchanged
    Raw(Vec<u8>),
}

/// Byte and kilobyte counts of a packed artifact
///
/// `kilobytes` is exact (`bytes / 1024`, no rounding); the [`Display`] impl
/// rounds to 2 decimals.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OutputSize {
    /// Total packed bytes
    pub bytes: u64,
    /// `bytes / 1024`, unrounded
    pub kilobytes: f64,
}

impl OutputSize {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_len(len: usize) -> Self {
        Self {
            bytes: len as u64,
            kilobytes: len as f64 / KILOBYTE,
        }
    }
}

impl Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes ({:.2} KB)", self.bytes, self.kilobytes)
    }
}

/// Projects a [`PackedBitmap`] into the requested textual form
#[must_use]
pub fn format(bitmap: &PackedBitmap, output_mode: OutputMode) -> FormattedOutput {
    match output_mode {
        OutputMode::HexPrefixed => FormattedOutput::HexTokens(
            bitmap
                .as_bytes()
                .iter()
                .map(|b| format!("{b:#04x}"))
                .collect(),
        ),
        OutputMode::RawBytes => FormattedOutput::Raw(bitmap.as_bytes().to_vec()),
    }
}

impl FormattedOutput {
    /// Number of bytes the output represents
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::HexTokens(tokens) => tokens.len(),
            Self::Raw(bytes) => bytes.len(),
        }
    }

    /// Returns `true` if the output holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size metrics of the output
    #[must_use]
    pub fn size(&self) -> OutputSize {
        OutputSize::from_len(self.len())
    }

    /// Renders the output as human-readable text with a line break after
    /// every `line_break_every` entries
    ///
    /// Hex tokens are joined with `", "`; raw bytes render as bare
    /// space-separated hex pairs. Empty output yields an empty string.
    /// Display formatting only; the binary contract lives in the byte
    /// buffer itself.
    #[must_use]
    pub fn display_text(&self, line_break_every: usize) -> String {
        let per_line = line_break_every.max(1);
        match self {
            Self::HexTokens(tokens) => tokens
                .chunks(per_line)
                .map(|line| line.join(", "))
                .join(",\n"),
            Self::Raw(bytes) => bytes
                .chunks(per_line)
                .map(|line| line.iter().map(|b| format!("{b:02x}")).join(" "))
                .join("\n"),
        }
    }
}

/// Renders a [`LuminanceMap`] as `'0'`/`'1'` text, one line per image row
///
/// A debugging aid, not part of the binary contract. An empty map yields an
/// empty string.
#[must_use]
pub fn preview(map: &LuminanceMap) -> String {
    let width = map.width() as usize;
    let mut out = String::with_capacity(map.len() + map.height() as usize);
    for (i, &bit) in map.bits().iter().enumerate() {
        out.push(if bit == 0 { '0' } else { '1' });
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}
