//! Bit-depth reduction for the 8-bit output paths

pub mod reducer;

pub use reducer::{BitDepthReducer, high_byte};
