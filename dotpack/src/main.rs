use dotpack::{image_to_packed, image_to_preview, output_extension};
use libdotpack::{ColorMode, Config, OutputMode, SamplingMode};
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// packs an image into a display bitmap
    #[command(name = "pack")]
    Pack {
        /// The image
        img_file: PathBuf,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Binarization threshold (monochrome only)
        #[arg(short, long, default_value_t = 128)]
        threshold: u8,

        /// Sampling mode: row, col, col-row, or row-col
        #[arg(short, long, default_value_t = SamplingMode::Row)]
        mode: SamplingMode,

        /// Invert polarity
        #[arg(short, long)]
        invert: bool,

        /// Place bits MSB-first within each byte
        #[arg(short, long)]
        reverse_bits: bool,

        /// Emit the raw byte buffer instead of hex text
        #[arg(long)]
        raw: bool,

        /// Pack to RGB565 color instead of monochrome
        #[arg(short, long)]
        color: bool,

        /// Resize to WIDTHxHEIGHT before packing, e.g. 128x64
        #[arg(long, value_parser = parse_dimensions)]
        resize: Option<(u32, u32)>,
    },

    /// prints a '0'/'1' preview of the binarized image
    #[command(name = "preview")]
    Preview {
        /// The image
        img_file: PathBuf,

        /// Binarization threshold
        #[arg(short, long, default_value_t = 128)]
        threshold: u8,

        /// Resize to WIDTHxHEIGHT before binarizing, e.g. 128x64
        #[arg(long, value_parser = parse_dimensions)]
        resize: Option<(u32, u32)>,
    },
}

fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let Some((w, h)) = s.split_once('x') else {
        return Err(format!("expected WIDTHxHEIGHT, got `{s}`"));
    };
    let w = w.parse().map_err(|e| format!("invalid width: {e}"))?;
    let h = h.parse().map_err(|e| format!("invalid height: {e}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::Pack {
            img_file,
            output,
            threshold,
            mode,
            invert,
            reverse_bits,
            raw,
            color,
            resize,
        } => {
            let config = Config::builder()
                .invert_polarity(invert)
                .sampling_mode(mode)
                .reverse_bit_order(reverse_bits)
                .output_mode(if raw {
                    OutputMode::RawBytes
                } else {
                    OutputMode::HexPrefixed
                })
                .color_mode(if color {
                    ColorMode::Color
                } else {
                    ColorMode::Monochrome
                })
                .build();

            let output = match output {
                Some(o) => o,
                None => {
                    let mut output = PathBuf::new();
                    let Some(dir) = img_file.parent() else {
                        bail!("Invalid img file");
                    };
                    let Some(Some(filename)) = img_file.file_stem().map(|os| os.to_str()) else {
                        bail!("Invalid img file");
                    };
                    let suffix = output_extension(config.output_mode);
                    output.push(dir);
                    output.push(format!("{}.{}", filename, suffix));
                    info!("output name: {}", output.display());
                    output
                }
            };
            image_to_packed(&img_file, &output, resize, threshold, &config)?;
        }
        Commands::Preview {
            img_file,
            threshold,
            resize,
        } => {
            image_to_preview(&img_file, resize, threshold)?;
        }
    }
    Ok(())
}
