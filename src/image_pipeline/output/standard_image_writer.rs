use std::io::Write;

use tracing::{debug, info};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::fits::types::PixelBuffer;
use crate::image_pipeline::output::encoder::EncoderInput;
use crate::image_pipeline::output::types::{ConversionConfig, OutputKind};
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::output::{jpeg_encoder, png_encoder, tiff_encoder};

/// Forwards the buffer to the encoder named by `config.output_kind`.
pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        let input = EncoderInput::from_buffer(image)?;
        info!(
            "Writing {} output: {}x{}, {} channel(s), BITPIX {}",
            config.output_kind, input.width, input.height, input.channel_count, input.bit_depth
        );

        let encoded = match config.output_kind {
            OutputKind::Uncompressed => tiff_encoder::encode(&input)?,
            OutputKind::LossyCompressed => jpeg_encoder::encode(&input, config.jpeg_quality)?,
            OutputKind::LosslessCompressed => png_encoder::encode(&input)?,
        };

        output.write_all(&encoded)?;
        output.flush()?;

        debug!("Wrote {} encoded bytes", encoded.len());
        Ok(())
    }
}
