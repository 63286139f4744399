//! User data to high level encoding conversion functions

mod bytes;
mod text;

pub use bytes::encode_bytes;
pub use text::{encode_text, step, SubMode, TextCompactor, Transition};

use tracing::debug;

use crate::error::Result;

/// Codeword used to latch to text mode
pub const M_LATCH_TEXT: u16 = 900;
/// Codeword used to latch to byte mode (if length is multiple of 6 use
/// M_LATCH_BYTE_M6).
pub const M_LATCH_BYTE: u16 = 901;
/// Codeword used to latch to numeric mode
pub const M_LATCH_NUMERIC: u16 = 902;

// 903 to 912: reserved for future use

/// Codeword used to switch to byte mode for next codedword (usable only if
/// the current mode is text).
pub const M_SHIFT_BYTE: u16 = 913;

// 914 to 920: reserved for future use
// 921: used for reader initialization or programming
// 922 to 923: Macro PDF417

/// Codeword used to latch to byte mode when the number of bytes is a
/// multiple of 6.
pub const M_LATCH_BYTE_M6: u16 = 924;
/// Codeword used to specifiy a ECI code page
pub const ECI_CODE_PAGE: u16 = 927;
/// ECI code page designating UTF-8 (\000026)
pub const ECI_UTF8: u16 = 26;

/// Codeword used as padding at the end of the data section
pub const CW_PADDING: u16 = M_LATCH_TEXT;

/// Data carried by a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// ASCII text packed with the text compaction sub-modes.
    Text(&'a str),
    /// Arbitrary bytes, packed with byte compaction.
    Bytes(&'a [u8]),
    /// Any string, stored as UTF-8 bytes behind an ECI code page designator.
    /// Takes more space than [Payload::Text] for ASCII input.
    Utf8(&'a str),
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(s: &'a str) -> Self {
        Payload::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a> Payload<'a> {
    /// Compacts the payload into data codewords. The length codeword that
    /// leads every symbol is not included.
    pub fn encode(&self) -> Result<Vec<u16>> {
        let codewords = match *self {
            Payload::Text(s) => encode_text(s)?,
            Payload::Bytes(b) => encode_bytes(b),
            Payload::Utf8(s) => {
                let mut out = vec![ECI_CODE_PAGE, ECI_UTF8];
                out.extend(encode_bytes(s.as_bytes()));
                out
            }
        };
        debug!(count = codewords.len(), "compacted payload");
        Ok(codewords)
    }
}
