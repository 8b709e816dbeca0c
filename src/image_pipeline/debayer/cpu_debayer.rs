use tracing::info;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::sample::MosaicSample;
use crate::image_pipeline::debayer::rggb::{demosaic_rggb, spread_mosaic};
use crate::image_pipeline::fits::types::{PixelBuffer, PixelData};

/// RGGB demosaicer for 8- and 16-bit buffers.
///
/// Three-channel input is treated as a mosaic whose native colour sits in
/// the slot the RGGB pattern assigns to each pixel. Single-channel input is
/// first spread into all three slots. The output always has three channels.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        let width = image.width;
        let height = image.height;
        info!(
            "Starting CPU debayering for image {}x{} ({} channel(s), CFA=RGGB)",
            width, height, image.channel_count
        );

        let data = match &image.data {
            PixelData::U8(samples) => PixelData::U8(demosaic_samples(samples, image)?),
            PixelData::U16(samples) => PixelData::U16(demosaic_samples(samples, image)?),
            PixelData::F32(_) | PixelData::F64(_) => {
                return Err(ConversionError::unsupported_depth(
                    image.bit_depth().bitpix(),
                    "demosaicing",
                ));
            }
        };

        Ok(PixelBuffer {
            width,
            height,
            channel_count: 3,
            data,
        })
    }
}

fn demosaic_samples<T: MosaicSample>(samples: &[T], image: &PixelBuffer) -> Result<Vec<T>> {
    match image.channel_count {
        3 => demosaic_rggb(samples, image.width, image.height),
        1 => {
            let spread = spread_mosaic(samples)?;
            demosaic_rggb(&spread, image.width, image.height)
        }
        n => Err(ConversionError::InvalidChannelCount(n as i64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_channel_flat_field() {
        let image = PixelBuffer {
            width: 6,
            height: 4,
            channel_count: 3,
            data: PixelData::U16(vec![1000; 6 * 4 * 3]),
        };
        let out = CpuDebayer::new().process(&image).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_single_channel_mosaic_becomes_rgb() {
        // R G
        // G B
        let image = PixelBuffer {
            width: 2,
            height: 2,
            channel_count: 1,
            data: PixelData::U8(vec![200, 100, 100, 50]),
        };
        let out = CpuDebayer::new().process(&image).unwrap();

        assert_eq!(out.channel_count, 3);
        let PixelData::U8(rgb) = out.data else {
            panic!("expected 8-bit output");
        };
        // Red site keeps R, takes G from its right/below greens, B from the blue site.
        assert_eq!(&rgb[0..3], &[200, 100, 50]);
        // Blue site keeps B, takes G from above/below and R from the red site.
        assert_eq!(&rgb[9..12], &[200, 100, 50]);
    }

    #[test]
    fn test_float_rejected() {
        let image = PixelBuffer {
            width: 1,
            height: 1,
            channel_count: 3,
            data: PixelData::F32(vec![0.0; 3]),
        };
        let result = CpuDebayer::new().process(&image);
        assert!(matches!(
            result,
            Err(ConversionError::UnsupportedDepthError { bit_depth: -32, .. })
        ));
    }
}
