//! Synthetic FITS builders for unit tests.

use crate::image_pipeline::fits::types::{BLOCK_SIZE, RECORD_LEN};

/// Pads `text` with spaces to a full record.
pub(crate) fn record(text: &str) -> [u8; RECORD_LEN] {
    let mut record = [b' '; RECORD_LEN];
    let bytes = text.as_bytes();
    let len = bytes.len().min(RECORD_LEN);
    record[..len].copy_from_slice(&bytes[..len]);
    record
}

/// A fixed-format integer record, e.g. `BITPIX  =                   16`.
pub(crate) fn int_record(keyword: &str, value: i64) -> [u8; RECORD_LEN] {
    record(&format!("{:<8}= {:>20} / test value", keyword, value))
}

/// Header records followed by `END` and zero padding up to the next block.
pub(crate) fn header_bytes(records: &[[u8; RECORD_LEN]]) -> Vec<u8> {
    let mut bytes: Vec<u8> = records.iter().flatten().copied().collect();
    bytes.extend_from_slice(&record("END"));
    let rem = bytes.len() as u64 % BLOCK_SIZE;
    if rem != 0 {
        bytes.resize(bytes.len() + (BLOCK_SIZE - rem) as usize, b' ');
    }
    bytes
}

/// Standard image header for the given geometry. `channels = None` omits `NAXIS3`.
pub(crate) fn image_header(bitpix: i64, width: i64, height: i64, channels: Option<i64>) -> Vec<u8> {
    let mut records = vec![
        record("SIMPLE  =                    T"),
        int_record("BITPIX", bitpix),
        int_record("NAXIS", if channels.is_some() { 3 } else { 2 }),
        int_record("NAXIS1", width),
        int_record("NAXIS2", height),
    ];
    if let Some(channels) = channels {
        records.push(int_record("NAXIS3", channels));
    }
    records.push(int_record("BZERO", 0));
    header_bytes(&records)
}

/// Complete 8-bit file with one payload plane per entry in `planes`.
pub(crate) fn fits_u8(width: i64, height: i64, planes: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = image_header(8, width, height, Some(planes.len() as i64));
    for plane in planes {
        bytes.extend_from_slice(plane);
    }
    bytes
}

/// Complete 16-bit file, samples written little-endian.
pub(crate) fn fits_u16_le(width: i64, height: i64, planes: &[Vec<u16>]) -> Vec<u8> {
    let mut bytes = image_header(16, width, height, Some(planes.len() as i64));
    for plane in planes {
        bytes.extend(plane.iter().flat_map(|v| v.to_le_bytes()));
    }
    bytes
}
