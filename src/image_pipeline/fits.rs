//! FITS decoding module
//!
//! Header parsing, block alignment, validation and the plane-sequential
//! payload reader. Everything here works on a forward-only `Read`.

pub mod header;
pub mod align;
pub mod validate;
pub mod plane_reader;
mod reader;
mod standard_reader;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use header::{HeaderRecord, ParsedHeader, parse_header};
pub use align::{padding_after, skip_padding};
pub use validate::validate;
pub use plane_reader::{read_pixel_buffer, read_planes};
pub use reader::FitsImageReader;
pub use standard_reader::StandardFitsReader;
pub use types::{BitDepth, ImageLayout, ImageMetadata, PixelBuffer, PixelData};
