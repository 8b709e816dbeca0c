//! Lossy JPEG output.

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::encoder::{EncoderInput, encode_error};

pub fn encode(input: &EncoderInput<'_>, quality: u8) -> Result<Vec<u8>> {
    let (samples, color) = input.eight_bit("JPEG")?;
    debug!(
        "Encoding JPEG image: {}x{} {:?} at quality {}",
        input.width, input.height, color, quality
    );

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(samples, input.width, input.height, color)
        .map_err(encode_error)?;
    Ok(buffer)
}
