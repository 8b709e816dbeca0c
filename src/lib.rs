//! FITS to TIFF/JPEG/PNG conversion with optional RGGB demosaicing.

pub mod image_pipeline;
pub mod logger;
