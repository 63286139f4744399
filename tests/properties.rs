//! Property-based tests using proptest
//!
//! Invariants of the compaction, correction and layout stages that must hold
//! for every input in their domain.

use proptest::prelude::*;
use pdf417_symbol::ecc::{compute_ecc, ecc_count};
use pdf417_symbol::high_level::{encode_bytes, encode_text, M_LATCH_BYTE_M6, M_SHIFT_BYTE};
use pdf417_symbol::layout::{plan_layout, MAX_CODEWORDS};
use pdf417_symbol::{Bitfield, Error};

proptest! {
    // Upper case letters and spaces never leave the upper sub-mode, so no
    // value of the packed pairs is a latch or shift code (27-29), except the
    // padding of an odd final value.
    #[test]
    fn test_upper_text_never_switches(s in "[A-Z ]{1,60}") {
        let codewords = encode_text(&s).unwrap();
        prop_assert_eq!(codewords.len(), (s.len() + 1) / 2);
        for (i, &cw) in codewords.iter().enumerate() {
            let (high, low) = (cw / 30, cw % 30);
            prop_assert!(high <= 26);
            let is_padding = i == codewords.len() - 1 && s.len() % 2 == 1;
            if is_padding {
                prop_assert_eq!(low, 29);
            } else {
                prop_assert!(low <= 26);
            }
        }
    }

    #[test]
    fn test_bytes_multiple_of_six(n in 1usize..20, seed in any::<u8>()) {
        let bytes: Vec<u8> = (0..6 * n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();
        let codewords = encode_bytes(&bytes);
        prop_assert_eq!(codewords.len(), 5 * n + 1);
        prop_assert_eq!(codewords[0], M_LATCH_BYTE_M6);
    }

    #[test]
    fn test_single_byte_is_shifted(b in any::<u8>()) {
        prop_assert_eq!(encode_bytes(&[b]), vec![M_SHIFT_BYTE, b as u16]);
    }

    #[test]
    fn test_byte_group_round_trip(group in prop::array::uniform6(any::<u8>())) {
        let codewords = encode_bytes(&group);
        let expected = group.iter().fold(0u64, |acc, &b| acc * 256 + b as u64);
        let decoded = codewords[1..].iter().fold(0u64, |acc, &cw| acc * 900 + cw as u64);
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn test_ecc_length(level in 0u8..=8, data in prop::collection::vec(0u16..929, 1..100)) {
        prop_assert_eq!(compute_ecc(&data, level).unwrap().len(), 2usize << level);
        prop_assert_eq!(ecc_count(level), 2usize << level);
    }

    #[test]
    fn test_layout_capacity(count in 0usize..=925, ratio in 0.05f64..20.0, height in 1u32..10) {
        let layout = plan_layout(count, ratio, height as f64).unwrap();
        prop_assert!(layout.rows * layout.cols >= count);
        prop_assert!((3..=90).contains(&layout.rows));
        prop_assert!((1..=30).contains(&layout.cols));
    }

    #[test]
    fn test_layout_capacity_exceeded(count in 926usize..5000) {
        prop_assert_eq!(
            plan_layout(count, 3.0, 3.0),
            Err(Error::CapacityExceeded { required: count, capacity: MAX_CODEWORDS })
        );
    }

    #[test]
    fn test_bitand_with_self(value in any::<u64>(), len in 1usize..300) {
        let mut field = Bitfield::new(len, false);
        for i in 0..len {
            field.set(i, (value >> (i % 64)) & 1 == 1);
        }
        let and = &field & &field;
        prop_assert_eq!(and.len(), field.len());
        for i in 0..len {
            prop_assert_eq!(and.get(i), field.get(i));
        }
    }
}
