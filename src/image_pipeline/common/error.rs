use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Could not read FITS header: {0}")]
    HeaderReadError(String),

    #[error("Pixel payload truncated: expected {expected} bytes, got {actual}")]
    PayloadTruncatedError { expected: u64, actual: u64 },

    #[error("Invalid image width: {0} (must be 1..=65535)")]
    InvalidWidth(i64),

    #[error("Invalid image height: {0} (must be 1..=65535)")]
    InvalidHeight(i64),

    #[error("Invalid number of channels: {0} (must be 1 or 3)")]
    InvalidChannelCount(i64),

    #[error("Unsupported BITPIX value for {stage}: {bit_depth}")]
    UnsupportedDepthError { bit_depth: i64, stage: &'static str },

    #[error("Could not allocate image buffer: {0}")]
    AllocationError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub(crate) fn unsupported_depth(bit_depth: impl Into<i64>, stage: &'static str) -> Self {
        ConversionError::UnsupportedDepthError {
            bit_depth: bit_depth.into(),
            stage,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
