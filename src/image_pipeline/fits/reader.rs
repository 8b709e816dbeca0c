use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::fits::types::{ImageLayout, ImageMetadata, PixelBuffer};
use crate::image_pipeline::output::types::ConversionConfig;

pub trait FitsImageReader {
    /// Parses the header and leaves the stream at the start of the payload.
    fn read_header(&self, input: &mut dyn Read) -> Result<ImageMetadata>;

    /// Reads the payload for an already validated layout.
    fn read_pixels(&self, input: &mut dyn Read, layout: &ImageLayout, config: &ConversionConfig) -> Result<PixelBuffer>;
}
