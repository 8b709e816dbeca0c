//! Sample value abstraction shared by the payload reader and the demosaicer.

use std::fmt::Debug;

/// Byte order used to decode multi-byte payload samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleByteOrder {
    /// Samples are taken as stored on a little-endian host, without swapping.
    #[default]
    LittleEndian,
    /// Samples are decoded big-endian, as the FITS standard stores them.
    BigEndian,
}

/// A fixed-width sample that can be decoded from payload bytes.
pub trait Sample: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Size of one sample on disk.
    const BYTES: usize;

    /// Decodes one sample from exactly `Self::BYTES` bytes.
    fn decode(bytes: &[u8], order: SampleByteOrder) -> Self;
}

macro_rules! impl_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                #[inline]
                fn decode(bytes: &[u8], order: SampleByteOrder) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(&bytes[..Self::BYTES]);
                    match order {
                        SampleByteOrder::LittleEndian => <$t>::from_le_bytes(raw),
                        SampleByteOrder::BigEndian => <$t>::from_be_bytes(raw),
                    }
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, f32, f64);

/// Integer samples the demosaicer can average.
///
/// Averaging widens both operands, adds, halves with truncation and narrows
/// back, so the result always fits the original width.
pub trait MosaicSample: Sample {
    fn widen(self) -> u64;
    fn narrow(value: u64) -> Self;

    #[inline]
    fn average(a: Self, b: Self) -> Self {
        Self::narrow((a.widen() + b.widen()) / 2)
    }
}

macro_rules! impl_mosaic_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl MosaicSample for $t {
                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                fn narrow(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_mosaic_sample!(u8, u16, u32);
