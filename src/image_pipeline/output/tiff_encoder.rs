//! Uncompressed strip-based TIFF.

use std::io::Cursor;

use tiff::encoder::{Compression, TiffEncoder, colortype};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::types::PixelData;
use crate::image_pipeline::output::encoder::{EncoderInput, encode_error};

/// Encodes `input` as an uncompressed TIFF. Accepts 8- and 16-bit samples
/// with one (grayscale) or three (RGB) channels.
pub fn encode(input: &EncoderInput<'_>) -> Result<Vec<u8>> {
    debug!(
        "Encoding TIFF image: {}x{}x{} at BITPIX {}",
        input.width, input.height, input.channel_count, input.bit_depth
    );

    let mut buffer = Vec::new();
    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(encode_error)?
            .with_compression(Compression::Uncompressed);

        let (width, height) = (input.width, input.height);
        let written = match (input.samples, input.channel_count) {
            (PixelData::U8(samples), 1) => encoder.write_image::<colortype::Gray8>(width, height, samples),
            (PixelData::U8(samples), 3) => encoder.write_image::<colortype::RGB8>(width, height, samples),
            (PixelData::U16(samples), 1) => encoder.write_image::<colortype::Gray16>(width, height, samples),
            (PixelData::U16(samples), 3) => encoder.write_image::<colortype::RGB16>(width, height, samples),
            (PixelData::F32(_) | PixelData::F64(_), _) => {
                return Err(ConversionError::unsupported_depth(input.bit_depth, "TIFF output"));
            }
            (_, n) => {
                return Err(ConversionError::EncodeError(format!(
                    "TIFF output does not support {} channels",
                    n
                )));
            }
        };
        written.map_err(encode_error)?;
    }

    debug!("TIFF encoding complete, {} bytes", buffer.len());
    Ok(buffer)
}
