//! Header record parsing.
//!
//! A header is a run of 80-byte ASCII records ending with a record whose
//! first three bytes are `END`. Only six keywords matter to the converter;
//! everything else is skipped.

use std::fmt;
use std::io::Read;

use tracing::{debug, trace};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::types::{ImageMetadata, KEYWORD_LEN, RECORD_LEN};

/// First bytes of the terminator record.
pub const TERMINATOR: &[u8; 3] = b"END";

const BITPIX: &str = "BITPIX";
const NAXIS: &str = "NAXIS";
const NAXIS1: &str = "NAXIS1";
const NAXIS2: &str = "NAXIS2";
const NAXIS3: &str = "NAXIS3";
const BZERO: &str = "BZERO";

/// One fixed-width header record.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HeaderRecord([u8; RECORD_LEN]);

impl HeaderRecord {
    pub fn new(bytes: [u8; RECORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn keyword(&self) -> &[u8] {
        &self.0[..KEYWORD_LEN]
    }

    /// Exact keyword match, ignoring the blank padding of the keyword field.
    pub fn keyword_is(&self, keyword: &str) -> bool {
        self.keyword().trim_ascii_end() == keyword.as_bytes()
    }

    pub fn is_terminator(&self) -> bool {
        self.0.starts_with(TERMINATOR)
    }

    /// Integer value of this record if its keyword region starts with `keyword`.
    ///
    /// The value is the first integer after the first `=`: leading blanks are
    /// skipped, an optional sign is accepted, and scanning stops at the first
    /// non-digit, so `32768.0` reads as `32768`.
    pub fn integer_value(&self, keyword: &str) -> Option<i64> {
        if !self.0.starts_with(keyword.as_bytes()) {
            return None;
        }
        let equals = self.0.iter().position(|&b| b == b'=')?;
        parse_leading_integer(&self.0[equals + 1..])
    }
}

impl fmt::Display for HeaderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(String::from_utf8_lossy(&self.0).trim_end())
    }
}

impl fmt::Debug for HeaderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HeaderRecord({:?})", self.to_string())
    }
}

fn parse_leading_integer(bytes: &[u8]) -> Option<i64> {
    let start = bytes.iter().position(|b| !b.is_ascii_whitespace())?;
    let rest = &bytes[start..];
    let sign_len = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
    let digits = rest[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    std::str::from_utf8(&rest[..sign_len + digits])
        .ok()?
        .parse()
        .ok()
}

/// Header values plus how many records were consumed, terminator included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeader {
    pub metadata: ImageMetadata,
    pub records_read: usize,
}

impl ParsedHeader {
    /// Stream position right after the terminator, assuming the stream
    /// started at the first header record.
    pub fn bytes_consumed(&self) -> u64 {
        (self.records_read * RECORD_LEN) as u64
    }
}

fn apply_record(metadata: &mut ImageMetadata, record: &HeaderRecord) {
    let fields: [(&str, &mut i64); 5] = [
        (BITPIX, &mut metadata.bit_depth),
        (NAXIS1, &mut metadata.width),
        (NAXIS2, &mut metadata.height),
        (NAXIS3, &mut metadata.channel_count),
        (BZERO, &mut metadata.zero_offset),
    ];
    for (keyword, field) in fields {
        if let Some(value) = record.integer_value(keyword) {
            *field = value;
        }
    }
}

/// Reads records until the terminator. Records after it are left in the stream.
pub fn parse_header(input: &mut dyn Read) -> Result<ParsedHeader> {
    let mut metadata = ImageMetadata::default();
    let mut records_read = 0usize;
    let mut axis_count = None;
    let mut has_third_axis = false;

    loop {
        let mut bytes = [0u8; RECORD_LEN];
        input.read_exact(&mut bytes).map_err(|e| {
            ConversionError::HeaderReadError(format!(
                "record {} could not be read before END: {}",
                records_read, e
            ))
        })?;
        let record = HeaderRecord::new(bytes);
        records_read += 1;

        if record.is_terminator() {
            debug!("END card found after {} records", records_read);
            break;
        }

        trace!("Card {}: '{}'", records_read - 1, record);
        if record.keyword_is(NAXIS) {
            axis_count = record.integer_value(NAXIS).or(axis_count);
        }
        has_third_axis |= record.integer_value(NAXIS3).is_some();
        apply_record(&mut metadata, &record);
    }

    // A plain two-axis image is a single plane. Any other shape must name
    // its channel count, otherwise validation rejects the zero.
    if !has_third_axis && axis_count == Some(2) {
        metadata.channel_count = 1;
    }

    debug!(
        bitpix = metadata.bit_depth,
        width = metadata.width,
        height = metadata.height,
        channels = metadata.channel_count,
        bzero = metadata.zero_offset,
        naxis = ?axis_count,
        "Parsed FITS header values"
    );

    Ok(ParsedHeader {
        metadata,
        records_read,
    })
}
