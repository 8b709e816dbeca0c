//! Plane-sequential payload reader.
//!
//! The payload stores every sample of channel 0 in row-major order, then all
//! of channel 1, and so on. The reader transposes that into one interleaved
//! buffer where sample `c` of pixel `p` sits at `p * channel_count + c`.

use std::io::{self, Read};

use tracing::debug;

use crate::image_pipeline::common::buffer::try_alloc;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::sample::{Sample, SampleByteOrder};
use crate::image_pipeline::fits::types::{BitDepth, ImageLayout, PixelBuffer, PixelData};

/// Reads all planes described by `layout` into an interleaved sample vector.
pub fn read_planes<T: Sample>(
    input: &mut dyn Read,
    layout: &ImageLayout,
    order: SampleByteOrder,
) -> Result<Vec<T>> {
    let channels = layout.channel_count;
    let expected = layout.payload_bytes();

    let mut samples = try_alloc::<T>(layout.sample_count())?;
    let mut plane = try_alloc::<u8>(layout.pixel_count() * T::BYTES)?;
    let mut consumed = 0u64;

    for channel in 0..channels {
        let filled = read_full(input, &mut plane)?;
        consumed += filled as u64;
        if filled < plane.len() {
            return Err(ConversionError::PayloadTruncatedError {
                expected,
                actual: consumed,
            });
        }

        for (pixel, raw) in plane.chunks_exact(T::BYTES).enumerate() {
            samples[pixel * channels + channel] = T::decode(raw, order);
        }
    }

    debug!("Read {} payload bytes in {} planes", consumed, channels);
    Ok(samples)
}

/// Reads the payload at the depth `layout` names.
pub fn read_pixel_buffer(
    input: &mut dyn Read,
    layout: &ImageLayout,
    order: SampleByteOrder,
) -> Result<PixelBuffer> {
    let data = match layout.bit_depth {
        BitDepth::U8 => PixelData::U8(read_planes(input, layout, order)?),
        BitDepth::U16 => PixelData::U16(read_planes(input, layout, order)?),
        BitDepth::F32 => PixelData::F32(read_planes(input, layout, order)?),
        BitDepth::F64 => PixelData::F64(read_planes(input, layout, order)?),
    };

    Ok(PixelBuffer {
        width: layout.width,
        height: layout.height,
        channel_count: layout.channel_count,
        data,
    })
}

/// Fills as much of `buf` as the stream allows and returns the byte count.
fn read_full(input: &mut dyn Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
