//! Text compaction.
//!
//! Characters are mapped to values 0-29 in one of four sub-modes (upper,
//! lower, mixed and punctuation) and two values are packed per codeword
//! (`high * 30 + low`). Values 25-29 of a sub-mode are reserved for the
//! latches and shifts between sub-modes. The punctuation sub-mode is only
//! entered with a shift: it covers the next character and then falls back to
//! the previous sub-mode.

use tracing::trace;

use crate::error::{Error, Result};

/// Marks the reserved slots of a sub-mode table.
const CTRL: u8 = 0xFF;

const UPPER_SET: [u8; 30] = [
    b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O',
    b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z', b' ', CTRL, CTRL, CTRL,
];
const LOWER_SET: [u8; 30] = [
    b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o',
    b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z', b' ', CTRL, CTRL, CTRL,
];
const MIXED_SET: [u8; 30] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'&', b'\r', b'\t', b',', b':',
    b'#', b'-', b'.', b'$', b'/', b'+', b'%', b'*', b'=', b'^', CTRL, b' ', CTRL, CTRL, CTRL,
];
const PUNC_SET: [u8; 30] = [
    b';', b'<', b'>', b'@', b'[', b'\\', b']', b'_', b'`', b'~', b'!', b'\r', b'\t', b',', b':',
    b'\n', b'-', b'.', b'$', b'/', b'"', b'|', b'*', b'(', b')', b'?', b'{', b'}', b'\'', CTRL,
];

/// Latch to lower (from upper or mixed).
const LATCH_LOWER: u8 = 27;
/// Shift to upper for one character (from lower).
const SHIFT_UPPER: u8 = 27;
/// Latch to mixed (from upper or lower).
const LATCH_MIXED: u8 = 28;
/// Latch to upper (from mixed).
const LATCH_UPPER: u8 = 28;
/// Shift to punctuation for one character (from upper, lower or mixed).
const SHIFT_PUNC: u8 = 29;

/// Text compaction sub-mode. The compactor only ever rests in `Upper`,
/// `Lower` or `Mixed`, `Punctuation` is reached through a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubMode {
    #[default]
    Upper,
    Lower,
    Mixed,
    Punctuation,
}

impl SubMode {
    /// Sub-modes in the order they are probed when a character is missing
    /// from the current one.
    const PRIORITY: [SubMode; 4] = [SubMode::Upper, SubMode::Lower, SubMode::Mixed, SubMode::Punctuation];

    const fn table(self) -> &'static [u8; 30] {
        match self {
            SubMode::Upper => &UPPER_SET,
            SubMode::Lower => &LOWER_SET,
            SubMode::Mixed => &MIXED_SET,
            SubMode::Punctuation => &PUNC_SET,
        }
    }

    /// Value of `c` in this sub-mode, if present.
    pub fn position(self, c: u8) -> Option<u8> {
        if c == CTRL {
            return None;
        }
        self.table().iter().position(|&r| r == c).map(|p| p as u8)
    }
}

/// Outcome of feeding one character to the compactor: the sub-mode to rest
/// in afterwards and the values to emit (latch/shift codes first, then the
/// character itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub mode: SubMode,
    values: [u8; 3],
    len: u8,
}

impl Transition {
    const fn new(mode: SubMode, values: &[u8]) -> Self {
        let mut buf = [0u8; 3];
        let mut i = 0;
        while i < values.len() {
            buf[i] = values[i];
            i += 1;
        }
        Self { mode, values: buf, len: values.len() as u8 }
    }

    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }
}

/// Computes the transition for character `c` while resting in `mode`.
/// `next` is the following character of the input, used to decide between
/// a shift and a latch when leaving the lower sub-mode for upper case.
///
/// Returns `None` when `c` has no sub-mode, or when `mode` is
/// [SubMode::Punctuation], which is never a resting sub-mode.
pub fn step(mode: SubMode, c: u8, next: Option<u8>) -> Option<Transition> {
    if mode == SubMode::Punctuation {
        return None;
    }
    if let Some(v) = mode.position(c) {
        return Some(Transition::new(mode, &[v]));
    }

    let (target, v) = SubMode::PRIORITY
        .iter()
        .filter(|&&m| m != mode)
        .find_map(|&m| m.position(c).map(|v| (m, v)))?;

    let transition = match (mode, target) {
        (_, SubMode::Punctuation) => Transition::new(mode, &[SHIFT_PUNC, v]),
        (SubMode::Lower, SubMode::Upper) => match next {
            // two upper case characters in a row: go back to upper for good
            // instead of shifting each of them
            Some(n) if n.is_ascii_uppercase() => Transition::new(SubMode::Upper, &[LATCH_MIXED, LATCH_UPPER, v]),
            _ => Transition::new(SubMode::Lower, &[SHIFT_UPPER, v]),
        },
        (SubMode::Mixed, SubMode::Upper) => Transition::new(SubMode::Upper, &[LATCH_UPPER, v]),
        (_, SubMode::Lower) => Transition::new(SubMode::Lower, &[LATCH_LOWER, v]),
        (_, SubMode::Mixed) => Transition::new(SubMode::Mixed, &[LATCH_MIXED, v]),
        // upper always holds what upper holds, punctuation was rejected above
        (SubMode::Upper | SubMode::Punctuation, SubMode::Upper) => return None,
    };
    Some(transition)
}

/// Accumulates text compaction values and packs them by pairs.
#[derive(Debug, Default)]
pub struct TextCompactor {
    mode: SubMode,
    codewords: Vec<u16>,
    /// Pending high value waiting for its low half
    high: Option<u8>,
}

impl TextCompactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current resting sub-mode.
    pub fn mode(&self) -> SubMode {
        self.mode
    }

    fn push(&mut self, value: u8) {
        match self.high.take() {
            Some(high) => self.codewords.push(high as u16 * 30 + value as u16),
            None => self.high = Some(value),
        }
    }

    /// Appends every character of `s`.
    pub fn append(&mut self, s: &str) -> Result<()> {
        let mut chars = s.chars().enumerate().peekable();
        while let Some((position, character)) = chars.next() {
            let next = chars.peek().and_then(|&(_, n)| u8::try_from(n).ok());
            let transition = u8::try_from(character)
                .ok()
                .filter(u8::is_ascii)
                .and_then(|c| step(self.mode, c, next))
                .ok_or(Error::UnsupportedCharacter { character, position })?;

            for &v in transition.values() {
                self.push(v);
            }
            if transition.mode != self.mode {
                trace!(from = ?self.mode, to = ?transition.mode, position, "text sub-mode latch");
            }
            self.mode = transition.mode;
        }
        Ok(())
    }

    /// Flushes the last half-filled codeword (padded with a punctuation
    /// shift) and returns the packed codewords.
    pub fn finish(mut self) -> Vec<u16> {
        if self.high.is_some() {
            self.push(SHIFT_PUNC);
        }
        self.codewords
    }
}

/// Compacts ASCII text into codewords. Fails on the first character that no
/// sub-mode can represent.
pub fn encode_text(s: &str) -> Result<Vec<u16>> {
    let mut compactor = TextCompactor::new();
    compactor.append(s)?;
    Ok(compactor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text_single_upper() {
        assert_eq!(encode_text("A").unwrap(), [29]);
    }

    #[test]
    fn test_encode_text_simple() {
        assert_eq!(encode_text("Test").unwrap(), [19 * 30 + 27, 4 * 30 + 18, 19 * 30 + 29]);
    }

    #[test]
    fn test_encode_text_empty() {
        assert!(encode_text("").unwrap().is_empty());
    }

    #[test]
    fn test_encode_text_switch_modes() {
        assert_eq!(
            encode_text("abc1D234").unwrap(),
            [27 * 30 + 0, 1 * 30 + 2, 28 * 30 + 1, 28 * 30 + 3, 28 * 30 + 2, 3 * 30 + 4]
        );
    }

    #[test]
    fn test_encode_text_upper_shift_from_lower() {
        // a single capital inside lower case text is shifted
        assert_eq!(encode_text("aBc").unwrap(), [27 * 30 + 0, 27 * 30 + 1, 2 * 30 + 29]);
    }

    #[test]
    fn test_encode_text_upper_latch_from_lower() {
        // consecutive capitals go back to upper through mixed
        assert_eq!(encode_text("aBC").unwrap(), [27 * 30 + 0, 28 * 30 + 28, 1 * 30 + 2]);
    }

    #[test]
    fn test_encode_text_punctuation_shift() {
        assert_eq!(encode_text("A!").unwrap(), [0 * 30 + 29, 10 * 30 + 29]);
        // the sub-mode is kept after the shifted character
        assert_eq!(encode_text("a!b").unwrap(), [27 * 30 + 0, 29 * 30 + 10, 1 * 30 + 29]);
    }

    #[test]
    fn test_encode_text_mixed_before_punctuation() {
        assert_eq!(encode_text("a,b").unwrap(), [27 * 30 + 0, 28 * 30 + 13, 27 * 30 + 1]);
    }

    #[test]
    fn test_encode_text_digits_and_spaces() {
        assert_eq!(
            encode_text("encoded 0123456789 as digits").unwrap(),
            [27 * 30 + 4, 13 * 30 + 2, 14 * 30 + 3, 4 * 30 + 3, 26 * 30 + 28, 0 * 30 + 1, 2 * 30 + 3, 4 * 30 + 5, 6 * 30 + 7, 8 * 30 + 9,
                26 * 30 + 27, 0 * 30 + 18, 26 * 30 + 3, 8 * 30 + 6, 8 * 30 + 19, 18 * 30 + 29]
        );
    }

    #[test]
    fn test_encode_text_unsupported() {
        assert_eq!(
            encode_text("AB\x7F"),
            Err(Error::UnsupportedCharacter { character: '\x7F', position: 2 })
        );
        assert_eq!(
            encode_text("\u{263A}"),
            Err(Error::UnsupportedCharacter { character: '\u{263A}', position: 0 })
        );
    }

    #[test]
    fn test_step_stays_in_mode() {
        let t = step(SubMode::Mixed, b' ', None).unwrap();
        assert_eq!(t.mode, SubMode::Mixed);
        assert_eq!(t.values(), [26]);
    }

    #[test]
    fn test_step_mixed_to_upper() {
        let t = step(SubMode::Mixed, b'Q', None).unwrap();
        assert_eq!(t.mode, SubMode::Upper);
        assert_eq!(t.values(), [LATCH_UPPER, 16]);
    }

    #[test]
    fn test_step_unknown() {
        assert!(step(SubMode::Upper, 0x01, None).is_none());
        assert!(step(SubMode::Upper, CTRL, None).is_none());
    }

    #[test]
    fn test_step_from_punctuation() {
        // 27 would read as '}' in the punctuation table
        assert!(step(SubMode::Punctuation, b'a', None).is_none());
        assert!(step(SubMode::Punctuation, b'!', None).is_none());
    }

    #[test]
    fn test_compactor_tracks_mode() {
        let mut compactor = TextCompactor::new();
        compactor.append("ab").unwrap();
        assert_eq!(compactor.mode(), SubMode::Lower);
        compactor.append("12").unwrap();
        assert_eq!(compactor.mode(), SubMode::Mixed);
        assert_eq!(compactor.finish(), [27 * 30 + 0, 1 * 30 + 28, 1 * 30 + 2]);
    }
}
