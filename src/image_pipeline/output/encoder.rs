//! Arguments shared by the three encoders.

use image::ExtendedColorType;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::types::{PixelBuffer, PixelData};

/// What every encoder receives: geometry, depth and the interleaved samples.
#[derive(Debug, Clone, Copy)]
pub struct EncoderInput<'a> {
    pub width: u32,
    pub height: u32,
    pub channel_count: u8,
    pub bit_depth: i32,
    pub samples: &'a PixelData,
}

impl<'a> EncoderInput<'a> {
    pub fn from_buffer(image: &'a PixelBuffer) -> Result<Self> {
        let width = u32::try_from(image.width)
            .map_err(|_| ConversionError::EncodeError(format!("width {} too large", image.width)))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ConversionError::EncodeError(format!("height {} too large", image.height)))?;
        let channel_count = u8::try_from(image.channel_count).map_err(|_| {
            ConversionError::EncodeError(format!("{} channels", image.channel_count))
        })?;

        Ok(Self {
            width,
            height,
            channel_count,
            bit_depth: image.bit_depth().bitpix(),
            samples: &image.data,
        })
    }

    /// 8-bit samples and their colour type, for the compressed encoders.
    pub(crate) fn eight_bit(&self, encoder: &str) -> Result<(&'a [u8], ExtendedColorType)> {
        let PixelData::U8(samples) = self.samples else {
            return Err(ConversionError::EncodeError(format!(
                "{} output requires 8-bit samples, got BITPIX {}",
                encoder, self.bit_depth
            )));
        };
        let color = match self.channel_count {
            1 => ExtendedColorType::L8,
            3 => ExtendedColorType::Rgb8,
            n => {
                return Err(ConversionError::EncodeError(format!(
                    "{} output does not support {} channels",
                    encoder, n
                )));
            }
        };
        Ok((samples.as_slice(), color))
    }
}

pub(crate) fn encode_error(e: impl std::fmt::Display) -> ConversionError {
    ConversionError::EncodeError(e.to_string())
}
