//! Byte compaction: groups of 6 bytes are packed into 5 base 900 codewords
//! (256^6 < 900^5), leftover bytes are stored one per codeword.

use super::{M_LATCH_BYTE, M_LATCH_BYTE_M6, M_SHIFT_BYTE};

/// Compacts `bytes` into codewords, mode codeword first.
///
/// A single byte is introduced with a byte shift (the symbol starts in text
/// mode), a whole number of 6-byte groups with [M_LATCH_BYTE_M6] and
/// anything else with [M_LATCH_BYTE].
pub fn encode_bytes(bytes: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(1 + bytes.len() / 6 * 5 + bytes.len() % 6);
    out.push(match bytes.len() {
        1 => M_SHIFT_BYTE,
        n if n % 6 == 0 => M_LATCH_BYTE_M6,
        _ => M_LATCH_BYTE,
    });

    let mut groups = bytes.chunks_exact(6);
    for group in &mut groups {
        // pack six bytes
        let mut s: u64 = 0;
        for &b in group {
            s = (s << 8) + b as u64;
        }
        // append five codewords, most significant first
        let mut cws = [0u16; 5];
        for cw in cws.iter_mut().rev() {
            *cw = (s % 900) as u16;
            s /= 900;
        }
        out.extend_from_slice(&cws);
    }

    // remaining
    out.extend(groups.remainder().iter().map(|&b| b as u16));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes_multiple() {
        assert_eq!(encode_bytes(b"alcool"), [924, 163, 238, 432, 766, 244]);
    }

    #[test]
    fn test_encode_bytes_not_multiple() {
        assert_eq!(encode_bytes(b"encode bin"), [901, 169, 883, 224, 680, 517, 32, 98, 105, 110]);
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode_bytes(&[0x01]), [M_SHIFT_BYTE, 1]);
    }

    #[test]
    fn test_encode_short_tail_only() {
        assert_eq!(encode_bytes(&[0xFF, 0x00, 0x7F]), [M_LATCH_BYTE, 255, 0, 127]);
    }

    #[test]
    fn test_encode_max_group() {
        // 256^6 - 1 = 281474976710655
        let cws = encode_bytes(&[0xFF; 6]);
        assert_eq!(cws[0], M_LATCH_BYTE_M6);
        let value = cws[1..].iter().fold(0u64, |acc, &cw| acc * 900 + cw as u64);
        assert_eq!(value, (1u64 << 48) - 1);
        assert!(cws[1..].iter().all(|&cw| cw < 900));
    }
}
