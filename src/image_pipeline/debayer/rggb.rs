//! Nearest-neighbour RGGB demosaic over interleaved 3-slot pixels.
//!
//! Each pixel keeps its native sample and fills the two missing colours with
//! the truncated mean of two neighbours, chosen by row/column parity:
//!
//! | row  | col  | native | missing colours from                                   |
//! |------|------|--------|--------------------------------------------------------|
//! | even | even | R      | G: right, below. B: below-right, below-left            |
//! | even | odd  | G      | R: left, right. B: below, below-left                   |
//! | odd  | even | G      | R: above, below. B: left, right                        |
//! | odd  | odd  | B      | G: above, below. R: above-left, below-right            |
//!
//! Neighbours outside the image are reflected back inside (`-1 -> 1`,
//! `n -> n - 2`), which keeps their CFA parity. Images one pixel wide or high
//! have nothing to reflect onto and clamp to the edge instead.

use crate::image_pipeline::common::buffer::try_alloc;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::sample::{MosaicSample, Sample};
use crate::image_pipeline::debayer::types::ColorSlot;

const SLOTS: usize = 3;

/// Reflects `i` into `0..n` without repeating the edge sample.
pub(crate) fn reflect(i: isize, n: usize) -> usize {
    let last = n as isize - 1;
    let reflected = if i < 0 {
        -i
    } else if i > last {
        2 * last - i
    } else {
        i
    };
    reflected.clamp(0, last.max(0)) as usize
}

struct Mosaic<'a, T> {
    samples: &'a [T],
    width: usize,
    height: usize,
}

impl<T: MosaicSample> Mosaic<'_, T> {
    #[inline]
    fn at(&self, x: isize, y: isize, slot: ColorSlot) -> T {
        let x = reflect(x, self.width);
        let y = reflect(y, self.height);
        self.samples[(y * self.width + x) * SLOTS + slot.index()]
    }

    #[inline]
    fn mean(&self, slot: ColorSlot, a: (isize, isize), b: (isize, isize)) -> T {
        T::average(self.at(a.0, a.1, slot), self.at(b.0, b.1, slot))
    }

    fn reconstruct(&self, x: isize, y: isize) -> [T; SLOTS] {
        use ColorSlot::{Blue, Green, Red};

        match (y % 2 == 0, x % 2 == 0) {
            (true, true) => [
                self.at(x, y, Red),
                self.mean(Green, (x + 1, y), (x, y + 1)),
                self.mean(Blue, (x + 1, y + 1), (x - 1, y + 1)),
            ],
            (true, false) => [
                self.mean(Red, (x - 1, y), (x + 1, y)),
                self.at(x, y, Green),
                self.mean(Blue, (x, y + 1), (x - 1, y + 1)),
            ],
            (false, true) => [
                self.mean(Red, (x, y - 1), (x, y + 1)),
                self.at(x, y, Green),
                self.mean(Blue, (x - 1, y), (x + 1, y)),
            ],
            (false, false) => [
                self.mean(Red, (x - 1, y - 1), (x + 1, y + 1)),
                self.mean(Green, (x, y - 1), (x, y + 1)),
                self.at(x, y, Blue),
            ],
        }
    }
}

/// Demosaics a 3-slot interleaved RGGB buffer into a new buffer of the same shape.
pub fn demosaic_rggb<T: MosaicSample>(samples: &[T], width: usize, height: usize) -> Result<Vec<T>> {
    let pixels = width * height;
    if pixels == 0 || samples.len() != pixels * SLOTS {
        let channels = if pixels == 0 { 0 } else { samples.len() / pixels };
        return Err(ConversionError::InvalidChannelCount(channels as i64));
    }

    let mosaic = Mosaic {
        samples,
        width,
        height,
    };
    let mut out = try_alloc::<T>(samples.len())?;

    for (y, row) in out.chunks_exact_mut(width * SLOTS).enumerate() {
        for (x, pixel) in row.chunks_exact_mut(SLOTS).enumerate() {
            pixel.copy_from_slice(&mosaic.reconstruct(x as isize, y as isize));
        }
    }

    Ok(out)
}

/// Copies each single-channel sample into all three slots of a new buffer.
pub fn spread_mosaic<T: Sample>(samples: &[T]) -> Result<Vec<T>> {
    let mut out = try_alloc::<T>(samples.len() * SLOTS)?;
    for (pixel, &sample) in out.chunks_exact_mut(SLOTS).zip(samples) {
        pixel.fill(sample);
    }
    Ok(out)
}
