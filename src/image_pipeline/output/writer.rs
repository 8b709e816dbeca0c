use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::fits::types::PixelBuffer;
use crate::image_pipeline::output::types::ConversionConfig;

pub trait ImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
