//! Lossless PNG output.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::encoder::{EncoderInput, encode_error};

pub fn encode(input: &EncoderInput<'_>) -> Result<Vec<u8>> {
    let (samples, color) = input.eight_bit("PNG")?;
    debug!("Encoding PNG image: {}x{} {:?}", input.width, input.height, color);

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(samples, input.width, input.height, color)
        .map_err(encode_error)?;
    Ok(buffer)
}
