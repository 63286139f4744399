//! Fixed-capacity packed bit storage.
//!
//! Bar patterns, indicator patterns and the rendered pixel grid are all held
//! in a [Bitfield]: a sequence of `len` bits packed in 64-bit words. The
//! length is fixed at construction, the storage never grows.
//!
//! Bit `0` is the least significant bit of the first word. Indices past `len`
//! but still inside the last word are readable and writable, only indices
//! past the storage capacity panic.

use core::{iter, ops};

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitfield {
    words: Vec<u64>,
    len: usize,
}

#[inline]
const fn words_for(len: usize) -> usize {
    (len + WORD_BITS - 1) / WORD_BITS
}

impl Bitfield {
    /// Creates a bitfield of `len` bits, all cleared or all set depending on
    /// `value`.
    pub fn new(len: usize, value: bool) -> Self {
        let fill = if value { u64::MAX } else { 0 };
        Self { words: vec![fill; words_for(len)], len }
    }

    /// Creates a single-word bitfield holding `value`. The length is the
    /// position of the highest set bit plus one.
    ///
    /// With `reverse` set, the bits are mirrored up to the highest set bit so
    /// that a pattern authored MSB-first (`0b1110` reads "bar, bar, bar,
    /// space") ends up with its first module at index 0. Trailing zeros of
    /// `value` are shifted out by the mirroring, they are not restored.
    pub fn from_value(value: u64, reverse: bool) -> Self {
        let len = (u64::BITS - value.leading_zeros()) as usize;
        let word = if reverse {
            let mut v = value;
            let mut r = 0u64;
            while v != 0 {
                r = (r << 1) | (v & 1);
                v >>= 1;
            }
            r
        } else {
            value
        };
        Self { words: vec![word], len }
    }

    /// Number of logical bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bits the backing words can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Raw access to the backing words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(index < self.capacity(), "bit index {index} out of storage capacity {}", self.capacity());
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        let (word, mask) = self.locate(index);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Sets every bit to `value`.
    pub fn set_all(&mut self, value: bool) {
        self.words.fill(if value { u64::MAX } else { 0 });
    }

    /// Overwrites the first words of `self` with the words of `other`.
    pub fn copy_from(&mut self, other: &Bitfield) {
        assert!(self.words.len() >= other.words.len(), "destination storage is too small");
        self.words[..other.words.len()].copy_from_slice(&other.words);
    }

    /// Exports the storage byte by byte, least significant byte of the first
    /// word first. With `use_msb`, the bit order of every exported byte is
    /// reversed so bit 0 lands in the most significant position.
    ///
    /// Copies `min(target.len(), storage bytes)` bytes.
    pub fn copy_to(&self, target: &mut [u8], use_msb: bool) {
        let bytes = self.words.iter().flat_map(|w| w.to_le_bytes());
        for (dst, byte) in target.iter_mut().zip(bytes) {
            *dst = if use_msb { byte.reverse_bits() } else { byte };
        }
    }

    /// True if every storage word is zero, including bits past `len`.
    pub fn is_false_for_all(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits { field: self, front: 0, back: self.len }
    }
}

impl<'a> ops::BitAnd for &'a Bitfield {
    type Output = Bitfield;

    /// The result is as large as the larger operand. Words that exist in only
    /// one operand are zero in the result.
    fn bitand(self, rhs: Self) -> Bitfield {
        let (large, small) = if self.words.len() >= rhs.words.len() { (self, rhs) } else { (rhs, self) };
        let mut out = Bitfield::new(large.len.max(small.len), false);
        out.words.resize(large.words.len(), 0);
        for (o, (a, b)) in out.words.iter_mut().zip(large.words.iter().zip(&small.words)) {
            *o = a & b;
        }
        out
    }
}

impl<'a> iter::IntoIterator for &'a Bitfield {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the logical bits of a [Bitfield], index 0 first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    field: &'a Bitfield,
    front: usize,
    back: usize,
}

impl<'a> iter::Iterator for Bits<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let bit = self.field.get(self.front);
            self.front += 1;
            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.back - self.front;
        (count, Some(count))
    }
}

impl<'a> iter::DoubleEndedIterator for Bits<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.field.get(self.back))
        } else {
            None
        }
    }
}

impl<'a> iter::ExactSizeIterator for Bits<'a> {}
impl<'a> iter::FusedIterator for Bits<'a> {}

#[cfg(test)]
mod tests {
    use super::Bitfield;

    #[test]
    fn test_new_default_value() {
        let zeros = Bitfield::new(70, false);
        assert_eq!(zeros.len(), 70);
        assert_eq!(zeros.words().len(), 2);
        assert!(zeros.is_false_for_all());

        let ones = Bitfield::new(70, true);
        assert!(ones.iter().all(|b| b));
        assert!(!ones.is_false_for_all());
    }

    #[test]
    fn test_get_set() {
        let mut field = Bitfield::new(130, false);
        field.set(0, true);
        field.set(64, true);
        field.set(129, true);
        assert!(field.get(0) && field.get(64) && field.get(129));
        assert!(!field.get(1) && !field.get(63));
        assert_eq!(field.words(), &[1, 1, 2]);

        field.set(64, false);
        assert!(!field.get(64));
    }

    #[test]
    fn test_access_past_len_within_word() {
        let mut field = Bitfield::new(17, false);
        field.set(40, true);
        assert!(field.get(40));
        assert_eq!(field.iter().filter(|&b| b).count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_access_past_capacity() {
        let field = Bitfield::new(17, false);
        field.get(64);
    }

    #[test]
    fn test_from_value_reversed() {
        let field = Bitfield::from_value(0b11111111010101000, true);
        assert_eq!(field.len(), 17);
        let modules: Vec<bool> = field.iter().collect();
        assert_eq!(modules, [true, true, true, true, true, true, true, true, false, true, false, true, false, true, false, false, false]);
    }

    #[test]
    fn test_from_value_reverse_drops_trailing_zeros() {
        // 0b1100 mirrored up to its highest bit is 0b0011
        let field = Bitfield::from_value(0b1100, true);
        assert_eq!(field.words(), &[0b0011]);
        assert_eq!(field.len(), 4);

        let field = Bitfield::from_value(0b1100, false);
        assert_eq!(field.words(), &[0b1100]);
    }

    #[test]
    fn test_clear_and_set_all() {
        let mut field = Bitfield::new(100, false);
        field.set_all(true);
        assert_eq!(field.words(), &[u64::MAX, u64::MAX]);
        field.clear();
        assert!(field.is_false_for_all());
    }

    #[test]
    fn test_copy_from() {
        let src = Bitfield::from_value(0xABCD, false);
        let mut dst = Bitfield::new(128, true);
        dst.copy_from(&src);
        assert_eq!(dst.words(), &[0xABCD, u64::MAX]);
    }

    #[test]
    fn test_copy_to_lsb_and_msb() {
        let field = Bitfield::from_value(0x0102, false);
        let mut lsb = [0u8; 3];
        field.copy_to(&mut lsb, false);
        assert_eq!(lsb, [0x02, 0x01, 0x00]);

        let mut msb = [0u8; 2];
        field.copy_to(&mut msb, true);
        assert_eq!(msb, [0x40, 0x80]);
    }

    #[test]
    fn test_bitand_sizes_to_larger_operand() {
        let mut a = Bitfield::new(130, true);
        a.set(3, false);
        let b = Bitfield::from_value(0b1111, false);

        let c = &a & &b;
        assert_eq!(c.words(), &[0b0111, 0, 0]);
        assert_eq!(c.len(), 130);
        assert_eq!((&b & &a).words(), c.words());
    }

    #[test]
    fn test_bits_double_ended() {
        let field = Bitfield::from_value(0b100, false);
        let rev: Vec<bool> = field.iter().rev().collect();
        assert_eq!(rev, [true, false, false]);
        assert_eq!(field.iter().len(), 3);
    }
}
