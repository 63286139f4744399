use pdf417_symbol::generators::{codeword_pattern, IndicatorGenerator};
use pdf417_symbol::high_level::{M_SHIFT_BYTE, CW_PADDING};
use pdf417_symbol::{Barcode, Canvas, CorrectionLevel, Error, Payload, Settings};

fn modules_at(barcode: &Barcode, row: usize, first: usize, count: usize) -> Vec<bool> {
    let s = barcode.settings();
    let y = s.quiet_zone as usize + row * (s.module_width * s.module_height) as usize;
    (first..first + count)
        .map(|m| barcode.bitmap().is_dark(s.quiet_zone as usize + m * s.module_width as usize, y))
        .collect()
}

#[test]
fn single_byte_with_default_settings() {
    let barcode = Barcode::from_bytes(&[0x01], &Settings::default()).unwrap();

    assert_eq!(barcode.codewords()[1], M_SHIFT_BYTE);
    assert_eq!(barcode.data_len(), 2);
    assert_eq!(barcode.correction_level(), 2);
    assert_eq!(barcode.ecc_codewords().len(), 8);
    assert!(barcode.codewords().len() >= 11);
    assert_eq!(barcode.columns_count(), (barcode.data_columns() + 4) * 17 + 1);
}

#[test]
fn single_upper_case_letter() {
    let barcode = Barcode::from_text("A", &Settings::default()).unwrap();
    let codewords = barcode.codewords();
    assert_eq!(codewords[1], 29);
    assert!(codewords[2..codewords[0] as usize].iter().all(|&cw| cw == CW_PADDING));
}

#[test]
fn grid_dimensions() {
    let settings = Settings::default().with_module_width(3).with_module_height(4).with_quiet_zone(5);
    let barcode = Barcode::from_text("PDF417 grid dimensions", &settings).unwrap();
    let bitmap = barcode.bitmap();

    assert_eq!(bitmap.width(), (4 + barcode.data_columns()) * 17 * 3 + 2 * 5 + 1);
    assert_eq!(bitmap.height(), barcode.rows() * 4 * 3 + 2 * 5);
    assert_eq!(barcode.codewords().len(), barcode.rows() * barcode.data_columns());
}

#[test]
fn rows_carry_patterns_of_their_cluster() {
    let barcode = Barcode::from_text("Rows and clusters", &Settings::default()).unwrap();
    let cols = barcode.data_columns();
    let indicators = IndicatorGenerator::new(barcode.rows(), cols, barcode.correction_level());

    for row in 0..barcode.rows() {
        let cluster = IndicatorGenerator::cluster(row);
        let (left, right) = indicators.codewords(row);

        let left_pattern: Vec<bool> = codeword_pattern(cluster, left).iter().collect();
        assert_eq!(modules_at(&barcode, row, 17, 17), left_pattern, "left indicator of row {row}");

        for col in 0..cols {
            let cw = barcode.codewords()[row * cols + col];
            let pattern: Vec<bool> = codeword_pattern(cluster, cw).iter().collect();
            assert_eq!(modules_at(&barcode, row, 34 + col * 17, 17), pattern, "codeword {col} of row {row}");
        }

        let right_pattern: Vec<bool> = codeword_pattern(cluster, right).iter().collect();
        assert_eq!(modules_at(&barcode, row, 34 + cols * 17, 17), right_pattern, "right indicator of row {row}");
    }
}

#[test]
fn explicit_correction_level() {
    let settings = Settings::default().with_correction_level(CorrectionLevel::Level(5));
    let barcode = Barcode::from_bytes(b"explicit level", &settings).unwrap();
    assert_eq!(barcode.correction_level(), 5);
    assert_eq!(barcode.ecc_codewords().len(), 64);
    // the caller's settings are not touched
    assert_eq!(settings.correction_level, CorrectionLevel::Level(5));
}

#[test]
fn unsupported_character() {
    assert_eq!(
        Barcode::from_text("tab\tok, bell\x07 not", &Settings::default()).unwrap_err(),
        Error::UnsupportedCharacter { character: '\x07', position: 12 }
    );
}

#[test]
fn utf8_payload_accepts_any_text() {
    let barcode = Barcode::new(Payload::Utf8("日本語"), &Settings::default()).unwrap();
    assert_eq!(&barcode.codewords()[1..3], &[927, 26]);
}

#[test]
fn capacity_exceeded() {
    let data = vec![0xA5u8; 1200];
    assert!(matches!(
        Barcode::from_bytes(&data, &Settings::default()),
        Err(Error::CapacityExceeded { .. })
    ));
}

#[test]
fn symbols_up_to_the_capacity_ceiling() {
    // totals of 925 or less near the ceiling, where the planned grid would
    // carry too much padding for the length codeword
    for len in [1088, 1097, 1098, 1102] {
        let barcode = Barcode::from_bytes(&vec![0x41; len], &Settings::default())
            .unwrap_or_else(|e| panic!("{len} bytes: {e}"));
        let level = barcode.correction_level();
        assert!(1 + barcode.data_len() + barcode.ecc_codewords().len() <= 925);
        assert!(barcode.codewords()[0] <= 928, "{len} bytes");
        assert_eq!(barcode.codewords()[0] as usize, barcode.layout().data_capacity(level));
        assert_eq!(barcode.codewords().len(), barcode.rows() * barcode.data_columns());
    }
}

#[test]
fn unsupported_correction_level() {
    let settings = Settings::default().with_correction_level(CorrectionLevel::Level(9));
    assert_eq!(Barcode::from_text("A", &settings).unwrap_err(), Error::UnsupportedCorrectionLevel(9));
}

#[test]
fn packed_rows_match_bitmap() {
    let barcode = Barcode::from_text("Packed", &Settings::default()).unwrap();
    let bitmap = barcode.bitmap();
    let packed = barcode.to_packed_rows();
    let stride = bitmap.stride();
    assert_eq!(packed.len(), stride * bitmap.height());

    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let bit = packed[y * stride + x / 8] & (0x80 >> (x % 8)) != 0;
            assert_eq!(bit, bitmap.is_dark(x, y), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn symbols_are_independent() {
    let settings = Settings::default();
    let a = Barcode::from_text("first", &settings).unwrap();
    let b = Barcode::from_text("second one", &settings).unwrap();
    let a_again = Barcode::from_text("first", &settings).unwrap();
    assert_eq!(a.codewords(), a_again.codewords());
    assert_eq!(a.bitmap(), a_again.bitmap());
    assert_ne!(a.codewords(), b.codewords());
}
