//! Debayering module for reconstructing RGB from an RGGB sensor mosaic

pub mod cpu_debayer;
pub mod rggb;
pub mod types;

pub use cpu_debayer::CpuDebayer;
pub use rggb::{demosaic_rggb, spread_mosaic};
pub use types::ColorSlot;
