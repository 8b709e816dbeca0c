//! Structural validation of header values before any allocation.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::types::{BitDepth, ImageLayout, ImageMetadata, MAX_DIMENSION};

/// Checks width, height, channel count and bit depth, in that order, and
/// that the sample buffer size fits in `usize`.
pub fn validate(metadata: &ImageMetadata) -> Result<ImageLayout> {
    if !(1..=MAX_DIMENSION).contains(&metadata.width) {
        return Err(ConversionError::InvalidWidth(metadata.width));
    }
    if !(1..=MAX_DIMENSION).contains(&metadata.height) {
        return Err(ConversionError::InvalidHeight(metadata.height));
    }
    if metadata.channel_count != 1 && metadata.channel_count != 3 {
        return Err(ConversionError::InvalidChannelCount(metadata.channel_count));
    }
    let bit_depth = BitDepth::from_bitpix(metadata.bit_depth)
        .ok_or_else(|| ConversionError::unsupported_depth(metadata.bit_depth, "validation"))?;

    // All three values are within 1..=65535, so the casts are lossless.
    let width = metadata.width as usize;
    let height = metadata.height as usize;
    let channel_count = metadata.channel_count as usize;

    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channel_count))
        .and_then(|n| n.checked_mul(bit_depth.sample_bytes()))
        .ok_or_else(|| {
            ConversionError::AllocationError(format!(
                "{}x{}x{} samples of {} bytes exceed the address space",
                width,
                height,
                channel_count,
                bit_depth.sample_bytes()
            ))
        })?;

    debug!(width, height, channel_count, ?bit_depth, "Header validated");

    Ok(ImageLayout {
        width,
        height,
        channel_count,
        bit_depth,
        zero_offset: metadata.zero_offset,
    })
}
