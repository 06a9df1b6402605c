use std::{fs, path::Path};

use anyhow::{Context, Result};
use image::imageops::FilterType;
use libdotpack::{
    binarize, generate_bitmap, preview, Config, FormattedOutput, OutputMode, PixelBuffer,
    DEFAULT_LINE_BREAK,
};
use tracing::{debug, info, instrument};

/// Decodes an image file into the RGBA8 buffer the codec consumes,
/// optionally resizing it to the target panel dimensions first.
#[instrument]
pub fn load_pixel_buffer(image_file: &Path, resize: Option<(u32, u32)>) -> Result<PixelBuffer> {
    let img = image::open(image_file)
        .with_context(|| format!("failed to open image {}", image_file.display()))?;
    debug!("decoded {}x{} image", img.width(), img.height());

    let rgba = match resize {
        Some((w, h)) => {
            info!("resizing to {w}x{h}");
            image::imageops::resize(&img.to_rgba8(), w, h, FilterType::Lanczos3)
        }
        None => img.to_rgba8(),
    };

    let (width, height) = (rgba.width(), rgba.height());
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Converts an image file and writes the packed output to `output_name`:
/// text for hex mode, the bytes themselves for raw mode.
#[instrument(skip(config))]
pub fn image_to_packed(
    image_file: &Path,
    output_name: &Path,
    resize: Option<(u32, u32)>,
    threshold: u8,
    config: &Config,
) -> Result<()> {
    let buffer = load_pixel_buffer(image_file, resize)?;
    let bitmap = generate_bitmap(&buffer, threshold, config);
    info!("packed bitmap: {}", bitmap.size());

    match libdotpack::format(&bitmap, config.output_mode) {
        FormattedOutput::Raw(bytes) => fs::write(output_name, bytes),
        hex @ FormattedOutput::HexTokens(_) => {
            fs::write(output_name, hex.display_text(DEFAULT_LINE_BREAK))
        }
    }
    .with_context(|| format!("failed to write {}", output_name.display()))?;
    info!("wrote packed output to {}", output_name.display());
    Ok(())
}

/// Prints a '0'/'1' preview of the binarized image to stdout.
#[instrument]
pub fn image_to_preview(image_file: &Path, resize: Option<(u32, u32)>, threshold: u8) -> Result<()> {
    let buffer = load_pixel_buffer(image_file, resize)?;
    let map = binarize(&buffer, threshold);
    print!("{}", preview(&map));
    Ok(())
}

/// File extension matching the configured output mode
#[must_use]
pub const fn output_extension(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::HexPrefixed => "txt",
        OutputMode::RawBytes => "bin",
    }
}
