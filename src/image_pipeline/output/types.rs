//! Conversion configuration types

use std::fmt;

use crate::image_pipeline::common::sample::SampleByteOrder;

/// Encoder selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Strip-based uncompressed TIFF, 8 or 16 bits per sample
    #[default]
    Uncompressed,
    /// JPEG, 8 bits per sample
    LossyCompressed,
    /// PNG, 8 bits per sample
    LosslessCompressed,
}

impl OutputKind {
    /// File extension written by [`default_output_path`](crate::image_pipeline::default_output_path).
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Uncompressed => "tif",
            OutputKind::LossyCompressed => "jpg",
            OutputKind::LosslessCompressed => "png",
        }
    }

    /// Compressed encoders only take 8-bit samples.
    pub fn requires_8bit(self) -> bool {
        !matches!(self, OutputKind::Uncompressed)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Uncompressed => f.write_str("TIFF"),
            OutputKind::LossyCompressed => f.write_str("JPEG"),
            OutputKind::LosslessCompressed => f.write_str("PNG"),
        }
    }
}

/// Configuration for FITS conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Encoder to hand the finished buffer to
    pub output_kind: OutputKind,
    /// Whether to reconstruct RGB from an RGGB mosaic
    pub demosaic: bool,
    /// Byte order of multi-byte payload samples
    pub byte_order: SampleByteOrder,
    /// Quality for the lossy encoder, 1..=100
    pub jpeg_quality: u8,
}

pub const DEFAULT_JPEG_QUALITY: u8 = 100;

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_kind: OutputKind::Uncompressed,
            demosaic: false,
            byte_order: SampleByteOrder::LittleEndian,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    output_kind: Option<OutputKind>,
    demosaic: Option<bool>,
    byte_order: Option<SampleByteOrder>,
    jpeg_quality: Option<u8>,
}

impl ConversionConfigBuilder {
    pub fn output_kind(mut self, output_kind: OutputKind) -> Self {
        self.output_kind = Some(output_kind);
        self
    }

    pub fn demosaic(mut self, enable: bool) -> Self {
        self.demosaic = Some(enable);
        self
    }

    pub fn byte_order(mut self, byte_order: SampleByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            output_kind: self.output_kind.unwrap_or(default.output_kind),
            demosaic: self.demosaic.unwrap_or(default.demosaic),
            byte_order: self.byte_order.unwrap_or(default.byte_order),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality).clamp(1, 100),
        }
    }
}
