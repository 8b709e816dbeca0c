//! Output module
//!
//! Hands a finished pixel buffer to exactly one encoder: uncompressed TIFF,
//! JPEG or PNG.

mod writer;
mod standard_image_writer;
pub mod encoder;
pub mod tiff_encoder;
pub mod jpeg_encoder;
pub mod png_encoder;
pub mod types;

pub use writer::ImageWriter;
pub use standard_image_writer::StandardImageWriter;
pub use encoder::EncoderInput;
pub use types::{ConversionConfig, ConversionConfigBuilder, OutputKind};
