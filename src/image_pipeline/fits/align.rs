//! Block alignment between the header and the payload.

use std::io::{self, Read};

use tracing::{debug, warn};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::fits::types::BLOCK_SIZE;

/// Bytes between `position` and the next block boundary. Zero when
/// `position` already sits on a boundary.
pub fn padding_after(position: u64) -> u64 {
    match position % BLOCK_SIZE {
        0 => 0,
        rem => BLOCK_SIZE - rem,
    }
}

/// Discards the padding that follows the header. Returns the bytes skipped.
///
/// A short skip is not an error here; the payload reader reports it.
pub fn skip_padding(input: &mut dyn Read, position: u64) -> Result<u64> {
    let padding = padding_after(position);
    debug!("Current file position: {}, padding: {}", position, padding);

    let skipped = io::copy(&mut Read::take(&mut *input, padding), &mut io::sink())?;
    if skipped < padding {
        warn!("Stream ended inside header padding ({} of {} bytes)", skipped, padding);
    }
    Ok(skipped)
}
