use crate::core::clock::TimeStamp;

/// Frame metadata - carries frame number and the stamp it completed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub number: u64,
    pub stamp: TimeStamp,
}

impl FrameInfo {
    pub fn new(number: u64, stamp: TimeStamp) -> Self {
        Self { number, stamp }
    }
}
