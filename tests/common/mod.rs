#![allow(dead_code)]

use std::path::Path;

fn card(text: &str) -> Vec<u8> {
    let mut record = text.as_bytes().to_vec();
    record.resize(80, b' ');
    record
}

/// Header for a `width x height x channels` image, padded to one block.
pub fn header(bitpix: i64, width: usize, height: usize, channels: Option<usize>) -> Vec<u8> {
    let mut bytes = card("SIMPLE  =                    T / file conforms");
    bytes.extend(card(&format!("BITPIX  = {:>20} / bits per sample", bitpix)));
    bytes.extend(card(&format!("NAXIS   = {:>20}", if channels.is_some() { 3 } else { 2 })));
    bytes.extend(card(&format!("NAXIS1  = {:>20}", width)));
    bytes.extend(card(&format!("NAXIS2  = {:>20}", height)));
    if let Some(channels) = channels {
        bytes.extend(card(&format!("NAXIS3  = {:>20}", channels)));
    }
    bytes.extend(card("BZERO   =              32768.0"));
    bytes.extend(card("END"));
    bytes.resize(2880, b' ');
    bytes
}

/// 16-bit file with one plane per entry, samples little-endian.
pub fn fits_u16(width: usize, height: usize, planes: &[Vec<u16>]) -> Vec<u8> {
    let mut bytes = header(16, width, height, Some(planes.len()));
    for plane in planes {
        bytes.extend(plane.iter().flat_map(|v| v.to_le_bytes()));
    }
    bytes
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    std::fs::write(path, bytes).unwrap();
}
