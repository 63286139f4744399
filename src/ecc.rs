//! Reed-Solomon error correction over GF(929).

use tracing::trace;

use crate::error::{Error, Result};
use crate::tables::*;

/// Highest supported error correction level.
pub const MAX_LEVEL: u8 = 8;

/// Returns the number of ECC codewords required by the specified level (0-8).
///
/// | ECC Level | Number of ECC codewords |
/// |-----------|-------------------------|
/// | 0         | 2                       |
/// | 1         | 4                       |
/// | 2         | 8                       |
/// | 3         | 16                      |
/// | 4         | 32                      |
/// | 5         | 64                      |
/// | 6         | 128                     |
/// | 7         | 256                     |
/// | 8         | 512                     |
pub const fn ecc_count(level: u8) -> usize {
    2 << level as usize
}

/// Generator polynomial coefficients of the given level.
pub fn factors(level: u8) -> Result<&'static [u16]> {
    let factors: &'static [u16] = match level {
        0 => &ECC_L0,
        1 => &ECC_L1,
        2 => &ECC_L2,
        3 => &ECC_L3,
        4 => &ECC_L4,
        5 => &ECC_L5,
        6 => &ECC_L6,
        7 => &ECC_L7,
        8 => &ECC_L8,
        _ => return Err(Error::UnsupportedCorrectionLevel(level)),
    };
    Ok(factors)
}

/// Computes the ECC codewords protecting `data` (length codeword and padding
/// included). The returned vector holds `ecc_count(level)` codewords in the
/// order they are appended to the symbol.
pub fn compute_ecc(data: &[u16], level: u8) -> Result<Vec<u16>> {
    let factors = factors(level)?;
    let k = factors.len();
    // ecc[0] is the highest degree term of the running remainder
    let mut ecc = vec![0u16; k];

    for &cw in data {
        let t = (cw as usize + ecc[0] as usize) % 929;

        for i in (0..k).rev() {
            let factor = (t * factors[i] as usize) % 929;
            let d = if i > 0 { ecc[k - i] as usize } else { 0 };
            ecc[k - 1 - i] = ((d + 929 - factor) % 929) as u16;
        }
    }

    for e in ecc.iter_mut() {
        if *e != 0 {
            *e = 929 - *e;
        }
    }

    trace!(level, count = k, "computed correction codewords");
    Ok(ecc)
}

/// Calculate and stores the ECC codewords in the slice `codewords` in-place.
/// The last **N** codewords are overwritten by the ECC codewords where **N**
/// is the number of ECC codewords of the level. The ECC is calculated for the
/// (total-N) first codewords where total is the length of the slice.
pub fn generate_ecc(codewords: &mut [u16], level: u8) -> Result<()> {
    let count = factors(level)?.len();
    if codewords.len() < count {
        return Err(Error::CapacityExceeded { required: count, capacity: codewords.len() });
    }

    let (data, ecc) = codewords.split_at_mut(codewords.len() - count);
    ecc.copy_from_slice(&compute_ecc(data, level)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{compute_ecc, ecc_count, generate_ecc};
    use crate::error::Error;

    const INPUT_DATA: [u16; 16] = [16, 902, 1, 278, 827, 900, 295, 902, 2, 326, 823, 544, 900, 149, 900, 900];

    fn ecc_of(level: u8) -> Vec<u16> {
        let mut data = vec![0u16; INPUT_DATA.len() + ecc_count(level)];
        data[..INPUT_DATA.len()].copy_from_slice(&INPUT_DATA);
        generate_ecc(&mut data, level).unwrap();
        data[INPUT_DATA.len()..].to_vec()
    }

    #[test]
    fn test_ecc_l0() {
        assert_eq!(ecc_of(0), [156, 765]);
    }

    #[test]
    fn test_ecc_l1() {
        assert_eq!(ecc_of(1), [168, 875, 63, 355]);
    }

    #[test]
    fn test_ecc_l2() {
        assert_eq!(ecc_of(2), [628, 715, 393, 299, 863, 601, 169, 708]);
    }

    #[test]
    fn test_ecc_l3() {
        assert_eq!(ecc_of(3), [232, 176, 793, 616, 476, 406, 855, 445, 84, 518, 522, 721, 607, 2, 42, 578]);
    }

    #[test]
    fn test_ecc_l4() {
        assert_eq!(ecc_of(4), [
            281, 156, 276, 668, 44, 252, 877, 30, 549, 856, 773, 639, 420, 330, 693, 329,
            283, 723, 480, 482, 102, 925, 535, 892, 374, 472, 837, 331, 343, 608, 390, 364
        ]);
    }

    #[test]
    fn test_ecc_count_per_level() {
        for level in 0..=8 {
            assert_eq!(compute_ecc(&INPUT_DATA, level).unwrap().len(), ecc_count(level));
        }
    }

    #[test]
    fn test_unknown_level() {
        assert_eq!(compute_ecc(&INPUT_DATA, 9), Err(Error::UnsupportedCorrectionLevel(9)));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut data = [0u16; 3];
        assert!(matches!(generate_ecc(&mut data, 2), Err(Error::CapacityExceeded { .. })));
    }
}
