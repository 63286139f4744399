//! Low level encoding: codewords to bar/space module patterns.

pub mod generator;
pub mod indicator;
pub mod pdf417;

pub use generator::{RowIterator, START_PAT, STOP_PAT};
pub use indicator::IndicatorGenerator;
pub use pdf417::PDF417Row;

use core::iter;

use crate::tables::HL_TO_LL;

/// Number of modules of a symbol character (and of the start/stop patterns).
pub const MODULES_PER_CODEWORD: usize = 17;

/// Bar/space modules of a symbol character or of the start/stop patterns,
/// held in a single word with the first module at index 0. `true` is a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    bits: u32,
    len: u8,
}

impl Pattern {
    /// Builds a pattern authored most significant bit first: the highest set
    /// bit of `value` is the first module.
    pub const fn from_msb_first(value: u32) -> Self {
        let len = u32::BITS - value.leading_zeros();
        let bits = if len == 0 { 0 } else { value.reverse_bits() >> (u32::BITS - len) };
        Self { bits, len: len as u8 }
    }

    /// Number of modules.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len(), "module {index} out of pattern of {} modules", self.len);
        (self.bits >> index) & 1 == 1
    }

    /// Modules from left to right.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + iter::FusedIterator {
        let bits = self.bits;
        (0..self.len()).map(move |i| (bits >> i) & 1 == 1)
    }
}

/// Bar/space pattern of `value` in the given cluster (0, 1 or 2). The table
/// stores the 16 modules following the leading bar, most significant bit
/// first.
pub fn codeword_pattern(cluster: u8, value: u16) -> Pattern {
    debug_assert!(cluster < 3 && value < 929, "invalid symbol character {cluster}/{value}");
    Pattern::from_msb_first((1 << 16) | HL_TO_LL[cluster as usize * 929 + value as usize] as u32)
}
