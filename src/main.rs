use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use fitconv_rs::image_pipeline::{
    ConversionConfig, FitsConversionPipeline, OutputKind, SampleByteOrder, default_output_path,
};
use fitconv_rs::logger;

use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "fitconv", version, about = "Convert FITS images to TIFF, JPEG or PNG")]
struct Args {
    /// Input FITS file
    input: PathBuf,

    /// Output file. Defaults to the input path with the format's extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tiff)]
    format: Format,

    /// Reconstruct RGB from an RGGB Bayer mosaic
    #[arg(long)]
    debayer: bool,

    /// Decode payload samples as big-endian instead of taking them as stored
    #[arg(long)]
    big_endian: bool,

    /// JPEG quality
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Print per-stage timings after the conversion
    #[arg(long)]
    timings: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Tiff,
    Jpeg,
    Png,
}

impl From<Format> for OutputKind {
    fn from(format: Format) -> Self {
        match format {
            Format::Tiff => OutputKind::Uncompressed,
            Format::Jpeg => OutputKind::LossyCompressed,
            Format::Png => OutputKind::LosslessCompressed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(logger::level_for_verbosity(args.verbose));

    let output_kind = OutputKind::from(args.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, output_kind));

    let config = ConversionConfig::builder()
        .output_kind(output_kind)
        .demosaic(args.debayer)
        .byte_order(if args.big_endian {
            SampleByteOrder::BigEndian
        } else {
            SampleByteOrder::LittleEndian
        })
        .jpeg_quality(args.quality)
        .build();
    let pipeline = FitsConversionPipeline::new(config);

    info!("Output: {}", pipeline.config().output_kind);
    info!(
        "Debayering: {}",
        if pipeline.config().demosaic {
            "enabled"
        } else {
            "disabled"
        }
    );

    match pipeline.convert_file_with_timings(&args.input, &output) {
        Ok(timings) => {
            info!("Conversion successful! Wrote {}", output.display());
            if args.timings {
                timings.print_summary();
            }
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e).with_context(|| format!("could not convert {}", args.input.display()))
        }
    }
}
