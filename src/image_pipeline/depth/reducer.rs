use tracing::info;

use crate::image_pipeline::common::buffer::try_alloc;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::types::{PixelBuffer, PixelData};

/// Maps samples to 8 bits for the compressed encoders.
///
/// 16-bit samples keep their high byte only, without rounding. The header's
/// zero offset is not subtracted first, so images stored with
/// `BZERO = 32768` come out shifted by half the range.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitDepthReducer;

/// `sample >> 8`
#[inline]
pub fn high_byte(sample: u16) -> u8 {
    (sample >> 8) as u8
}

impl BitDepthReducer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        info!(
            "Reducing {:?} samples to 8 bits for image {}x{}",
            image.bit_depth(),
            image.width,
            image.height
        );

        let reduced = match &image.data {
            PixelData::U8(samples) => {
                let mut out = try_alloc::<u8>(samples.len())?;
                out.copy_from_slice(samples);
                out
            }
            PixelData::U16(samples) => {
                let mut out = try_alloc::<u8>(samples.len())?;
                for (dst, &src) in out.iter_mut().zip(samples) {
                    *dst = high_byte(src);
                }
                out
            }
            PixelData::F32(_) | PixelData::F64(_) => {
                return Err(ConversionError::unsupported_depth(
                    image.bit_depth().bitpix(),
                    "bit-depth reduction",
                ));
            }
        };

        Ok(PixelBuffer {
            width: image.width,
            height: image.height,
            channel_count: image.channel_count,
            data: PixelData::U8(reduced),
        })
    }
}
