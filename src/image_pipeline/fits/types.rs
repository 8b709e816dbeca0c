//! FITS image data types

/// Length of one header record.
pub const RECORD_LEN: usize = 80;

/// Length of the keyword field at the start of a record.
pub const KEYWORD_LEN: usize = 8;

/// Block granularity separating the header from the payload.
pub const BLOCK_SIZE: u64 = 2880;

/// Largest accepted width or height.
pub const MAX_DIMENSION: i64 = 65535;

/// Sample representation selected by `BITPIX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// `BITPIX = 8`
    U8,
    /// `BITPIX = 16`
    U16,
    /// `BITPIX = -32`
    F32,
    /// `BITPIX = -64`
    F64,
}

impl BitDepth {
    pub fn from_bitpix(bitpix: i64) -> Option<Self> {
        match bitpix {
            8 => Some(BitDepth::U8),
            16 => Some(BitDepth::U16),
            -32 => Some(BitDepth::F32),
            -64 => Some(BitDepth::F64),
            _ => None,
        }
    }

    pub fn bitpix(self) -> i32 {
        match self {
            BitDepth::U8 => 8,
            BitDepth::U16 => 16,
            BitDepth::F32 => -32,
            BitDepth::F64 => -64,
        }
    }

    /// Bytes per sample, `|BITPIX| / 8`.
    pub fn sample_bytes(self) -> usize {
        (self.bitpix().unsigned_abs() / 8) as usize
    }

    pub fn is_float(self) -> bool {
        self.bitpix() < 0
    }
}

/// Raw values picked out of the header, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageMetadata {
    /// `BITPIX`
    pub bit_depth: i64,
    /// `NAXIS1`
    pub width: i64,
    /// `NAXIS2`
    pub height: i64,
    /// `NAXIS3`. 1 for a header declaring `NAXIS = 2` without it, 0 otherwise.
    pub channel_count: i64,
    /// `BZERO`. Parsed and reported, never applied to sample values.
    pub zero_offset: i64,
}

/// Image geometry that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLayout {
    pub width: usize,
    pub height: usize,
    pub channel_count: usize,
    pub bit_depth: BitDepth,
    pub zero_offset: i64,
}

impl ImageLayout {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// `width * height * channel_count`. Overflow is ruled out by validation.
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channel_count
    }

    pub fn payload_bytes(&self) -> u64 {
        self.sample_count() as u64 * self.bit_depth.sample_bytes() as u64
    }
}

/// Owned samples, one variant per supported bit depth.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl PixelData {
    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(samples) => samples.len(),
            PixelData::U16(samples) => samples.len(),
            PixelData::F32(samples) => samples.len(),
            PixelData::F64(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self {
            PixelData::U8(_) => BitDepth::U8,
            PixelData::U16(_) => BitDepth::U16,
            PixelData::F32(_) => BitDepth::F32,
            PixelData::F64(_) => BitDepth::F64,
        }
    }
}

/// Pixel-interleaved image: sample `c` of pixel `p` lives at `p * channel_count + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples per pixel (1 or 3)
    pub channel_count: usize,
    pub data: PixelData,
}

impl PixelBuffer {
    pub fn bit_depth(&self) -> BitDepth {
        self.data.bit_depth()
    }
}
