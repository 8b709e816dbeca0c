//! FITS reader for primary-HDU images read from the start of a stream.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::fits::align::skip_padding;
use crate::image_pipeline::fits::header::parse_header;
use crate::image_pipeline::fits::plane_reader::read_pixel_buffer;
use crate::image_pipeline::fits::reader::FitsImageReader;
use crate::image_pipeline::fits::types::{ImageLayout, ImageMetadata, PixelBuffer};
use crate::image_pipeline::output::types::ConversionConfig;

/// Reader that expects the stream to begin at the first header record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFitsReader;

impl FitsImageReader for StandardFitsReader {
    fn read_header(&self, input: &mut dyn Read) -> Result<ImageMetadata> {
        let parsed = parse_header(input)?;
        skip_padding(input, parsed.bytes_consumed())?;
        Ok(parsed.metadata)
    }

    fn read_pixels(&self, input: &mut dyn Read, layout: &ImageLayout, config: &ConversionConfig) -> Result<PixelBuffer> {
        debug!(
            "Reading {} bytes of {:?} payload ({:?})",
            layout.payload_bytes(),
            layout.bit_depth,
            config.byte_order
        );
        read_pixel_buffer(input, layout, config.byte_order)
    }
}
