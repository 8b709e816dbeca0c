//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod error;
pub mod sample;
pub(crate) mod buffer;

pub use error::{ConversionError, Result};
pub use sample::{MosaicSample, Sample, SampleByteOrder};
