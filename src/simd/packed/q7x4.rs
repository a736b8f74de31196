use crate::simd::packed::word::widen_pairs;
use crate::simd::packed::PackOrder;
use crate::types::Q7;

pub const LANE_COUNT: usize = 4;

/// Four Q7 lanes packed into one 32-bit word
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Q7x4 {
    word: u32,
}

impl Q7x4 {
    /// Loads the first four elements of `chunk` using the byte order `O`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` holds fewer than [`LANE_COUNT`] elements.
    #[inline(always)]
    pub fn load<O: PackOrder>(chunk: &[Q7]) -> Self {
        let bytes = [chunk[0] as u8, chunk[1] as u8, chunk[2] as u8, chunk[3] as u8];

        Self {
            word: O::load_word(bytes),
        }
    }

    #[inline(always)]
    pub fn word(self) -> u32 {
        self.word
    }

    /// Widens the four lanes into two words of two Q15 halves each, ordered
    /// as `O` stores them: the first word holds lanes 0 and 1.
    #[inline(always)]
    pub fn widen<O: PackOrder>(self) -> [u32; 2] {
        let (rotated, direct) = widen_pairs(self.word);

        O::pack(rotated, direct)
    }
}
