//! Types for debayering operations

/// Position of a colour within an interleaved `[R, G, B]` pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorSlot {
    pub fn index(self) -> usize {
        self as usize
    }
}
