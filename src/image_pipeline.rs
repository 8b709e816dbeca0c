//! Image processing pipeline module
//!
//! FITS decoding, bit-depth reduction, RGGB demosaicing and output encoding,
//! orchestrated by [`FitsConversionPipeline`].

pub mod fits;
pub mod depth;
pub mod debayer;
pub mod output;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
    SampleByteOrder,
};

pub use fits::{
    BitDepth,
    FitsImageReader,
    ImageLayout,
    ImageMetadata,
    PixelBuffer,
    PixelData,
    StandardFitsReader,
};

pub use depth::BitDepthReducer;

pub use debayer::CpuDebayer;

pub use output::{
    ConversionConfig,
    ConversionConfigBuilder,
    ImageWriter,
    OutputKind,
    StandardImageWriter,
};

pub use conversions::{
    FitsConversionPipeline,
    PipelineTimings,
    decode_and_convert,
    default_output_path,
};
