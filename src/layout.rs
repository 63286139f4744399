//! Symbol sizing: error correction level selection and rows/columns planning.

use tracing::debug;

use crate::ecc::{self, MAX_LEVEL};
use crate::error::{Error, Result};

/// Minimum number of rows in a PDF417 barcode.
pub const MIN_ROWS: usize = 3;
/// Maximum number of rows in a PDF417 barcode.
pub const MAX_ROWS: usize = 90;
/// Minimum number of data columns in a PDF417 barcode.
pub const MIN_COLS: usize = 1;
/// Maximum number of data columns in a PDF417 barcode.
pub const MAX_COLS: usize = 30;
/// Maximum number of codewords (length, data and correction) in a symbol.
pub const MAX_CODEWORDS: usize = 925;
/// Largest value of the length codeword, which counts itself, the data and
/// the padding.
pub const MAX_BLOCK_LEN: usize = 928;

/// Error correction level of a symbol. `Auto` picks a level from the amount
/// of data, see [CorrectionLevel::resolve].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionLevel {
    #[default]
    Auto,
    Level(u8),
}

impl CorrectionLevel {
    /// Returns the concrete level. Explicit levels are returned unchanged,
    /// `Auto` is resolved from the number of data codewords (the length
    /// codeword excluded) following the recommended minimums of the PDF417
    /// specification.
    pub fn resolve(self, data_len: usize) -> u8 {
        match self {
            CorrectionLevel::Level(level) => level,
            CorrectionLevel::Auto => match data_len {
                0..=40 | 912..=919 => 2,
                41..=160 | 896..=911 => 3,
                161..=320 | 864..=895 => 4,
                321..=863 => 5,
                920..=923 => 1,
                _ => 0,
            },
        }
    }

    /// Fails if the level has no correction coefficients.
    pub fn validate(self) -> Result<()> {
        match self {
            CorrectionLevel::Level(level) if level > MAX_LEVEL => Err(Error::UnsupportedCorrectionLevel(level)),
            _ => Ok(()),
        }
    }
}

impl From<u8> for CorrectionLevel {
    fn from(level: u8) -> Self {
        CorrectionLevel::Level(level)
    }
}

/// Dimensions of the codeword grid, excluding the start/stop patterns and
/// the row indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    /// Number of codeword slots in the grid.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Slots left for data (length codeword and padding included) once the
    /// correction codewords of `level` are reserved.
    #[inline]
    pub const fn data_capacity(&self, level: u8) -> usize {
        self.capacity() - ecc::ecc_count(level)
    }
}

/// Plans a grid of at least `count` codewords whose printed shape
/// approaches `aspect_ratio` (width over height) for rows `module_height`
/// modules tall.
///
/// The column count is the positive root of
/// `17x² + 69x = aspect_ratio · module_height · count`, rounded up. The rows
/// are `ceil(count / x)`, but the result is then adjusted to the PDF417
/// limits: columns clamped to 1..=30, rows raised to at least 3 and capped at
/// 90 (widening the grid instead).
pub fn plan_layout(count: usize, aspect_ratio: f64, module_height: f64) -> Result<Layout> {
    if count > MAX_CODEWORDS {
        return Err(Error::CapacityExceeded { required: count, capacity: MAX_CODEWORDS });
    }
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(Error::InvalidConfiguration("aspect ratio must be positive"));
    }
    if !(module_height.is_finite() && module_height > 0.0) {
        return Err(Error::InvalidConfiguration("module height must be positive"));
    }

    let area = aspect_ratio * module_height * count as f64;
    let x = (((4761.0 + 68.0 * area).sqrt() - 69.0) / 34.0).ceil();
    let mut cols = (x as usize).clamp(MIN_COLS, MAX_COLS);
    let mut rows = count.div_ceil(cols).max(MIN_ROWS);
    if rows > MAX_ROWS {
        rows = MAX_ROWS;
        cols = count.div_ceil(MAX_ROWS);
    }

    let layout = Layout { rows, cols };
    debug!(count, rows, cols, "planned symbol layout");
    Ok(layout)
}

/// Makes sure the padded data block of `layout` fits the length codeword.
///
/// Near the capacity ceiling the planned grid can hold so much padding that
/// `rows · cols - ecc` exceeds [MAX_BLOCK_LEN]. The closest column count
/// (by distance to the planned one) whose grid still holds `count` codewords
/// without overflowing the block is picked instead.
pub fn fit_block(layout: Layout, count: usize, level: u8) -> Result<Layout> {
    let ecc_count = ecc::ecc_count(level);
    let fits = |l: &Layout| l.capacity() >= count && l.capacity() <= MAX_BLOCK_LEN + ecc_count;
    if fits(&layout) {
        return Ok(layout);
    }

    let candidate = |cols: usize| Layout { rows: count.div_ceil(cols).max(MIN_ROWS), cols };
    let found = (1..MAX_COLS)
        .flat_map(|d| [layout.cols.checked_sub(d), Some(layout.cols + d)])
        .flatten()
        .filter(|cols| (MIN_COLS..=MAX_COLS).contains(cols))
        .map(candidate)
        .find(|l| l.rows <= MAX_ROWS && fits(l));

    match found {
        Some(fitted) => {
            debug!(count, from = ?layout, to = ?fitted, "layout widened to fit the length codeword");
            Ok(fitted)
        }
        None => Err(Error::CapacityExceeded {
            required: layout.data_capacity(level),
            capacity: MAX_BLOCK_LEN,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_level_unchanged() {
        assert_eq!(CorrectionLevel::Level(7).resolve(900), 7);
        assert_eq!(CorrectionLevel::from(0).resolve(10), 0);
    }

    #[test]
    fn test_resolve_auto_bands() {
        let auto = CorrectionLevel::Auto;
        assert_eq!(auto.resolve(0), 2);
        assert_eq!(auto.resolve(40), 2);
        assert_eq!(auto.resolve(41), 3);
        assert_eq!(auto.resolve(160), 3);
        assert_eq!(auto.resolve(161), 4);
        assert_eq!(auto.resolve(320), 4);
        assert_eq!(auto.resolve(321), 5);
        assert_eq!(auto.resolve(863), 5);
        assert_eq!(auto.resolve(864), 4);
        assert_eq!(auto.resolve(895), 4);
        assert_eq!(auto.resolve(896), 3);
        assert_eq!(auto.resolve(911), 3);
        assert_eq!(auto.resolve(912), 2);
        assert_eq!(auto.resolve(919), 2);
        assert_eq!(auto.resolve(920), 1);
        assert_eq!(auto.resolve(923), 1);
        assert_eq!(auto.resolve(924), 0);
        assert_eq!(auto.resolve(925), 0);
    }

    #[test]
    fn test_validate_level() {
        assert!(CorrectionLevel::Auto.validate().is_ok());
        assert!(CorrectionLevel::Level(8).validate().is_ok());
        assert_eq!(CorrectionLevel::Level(9).validate(), Err(Error::UnsupportedCorrectionLevel(9)));
    }

    #[test]
    fn test_plan_layout_single_byte() {
        // 17x² + 69x = 3 * 3 * 11 = 99 -> x ≈ 1.19
        let layout = plan_layout(11, 3.0, 3.0).unwrap();
        assert_eq!(layout, Layout { rows: 6, cols: 2 });
        assert!(layout.capacity() >= 11);
    }

    #[test]
    fn test_plan_layout_min_rows() {
        let layout = plan_layout(4, 50.0, 3.0).unwrap();
        assert_eq!(layout.rows, MIN_ROWS);
        assert!(layout.capacity() >= 4);
    }

    #[test]
    fn test_plan_layout_clamps_columns() {
        let layout = plan_layout(900, 100.0, 10.0).unwrap();
        assert_eq!(layout.cols, MAX_COLS);
        assert_eq!(layout.rows, 30);
    }

    #[test]
    fn test_plan_layout_clamps_rows() {
        let layout = plan_layout(925, 0.01, 1.0).unwrap();
        assert_eq!(layout.rows, MAX_ROWS);
        assert!(layout.capacity() >= 925);
    }

    #[test]
    fn test_plan_layout_capacity_exceeded() {
        assert_eq!(plan_layout(926, 3.0, 3.0), Err(Error::CapacityExceeded { required: 926, capacity: 925 }));
        assert!(plan_layout(925, 3.0, 3.0).is_ok());
    }

    #[test]
    fn test_fit_block_keeps_fitting_layout() {
        let layout = plan_layout(11, 3.0, 3.0).unwrap();
        assert_eq!(fit_block(layout, 11, 2), Ok(layout));
    }

    #[test]
    fn test_fit_block_near_ceiling() {
        // 925 codewords at level 1: the planned 45 x 21 grid leaves a 941
        // codeword block
        let layout = plan_layout(925, 3.0, 3.0).unwrap();
        assert_eq!(layout, Layout { rows: 45, cols: 21 });
        assert!(layout.data_capacity(1) > MAX_BLOCK_LEN);

        let fitted = fit_block(layout, 925, 1).unwrap();
        assert!(fitted.capacity() >= 925);
        assert!(fitted.data_capacity(1) <= MAX_BLOCK_LEN);
        assert!((MIN_ROWS..=MAX_ROWS).contains(&fitted.rows));
    }

    #[test]
    fn test_fit_block_every_total() {
        for level in 0..=MAX_LEVEL {
            for count in ecc::ecc_count(level) + 1..=MAX_CODEWORDS {
                let layout = plan_layout(count, 3.0, 3.0).unwrap();
                let fitted = fit_block(layout, count, level).unwrap();
                assert!(fitted.capacity() >= count);
                assert!(fitted.data_capacity(level) <= MAX_BLOCK_LEN, "count {count} level {level}");
            }
        }
    }

    #[test]
    fn test_plan_layout_rejects_bad_ratio() {
        assert!(matches!(plan_layout(10, 0.0, 3.0), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(plan_layout(10, f64::NAN, 3.0), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(plan_layout(10, 3.0, -1.0), Err(Error::InvalidConfiguration(_))));
    }
}
