//! Pipeline conversions module
//!
//! This module contains orchestration logic for FITS conversions.

mod fits_to_image;
mod timing;


pub use fits_to_image::{FitsConversionPipeline, decode_and_convert, default_output_path};
pub use timing::{PipelineTimings, StepTiming, Timer};
