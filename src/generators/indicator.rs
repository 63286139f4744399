use crate::generators::{codeword_pattern, Pattern};

/// Computes the left and right row indicator codewords. Each row tells the
/// reader, depending on its cluster, two of: the number of rows, the error
/// correction level and the number of data columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorGenerator {
    rows_val: u16,
    level_val: u16,
    cols_val: u16,
}

impl IndicatorGenerator {
    pub fn new(rows: usize, cols: usize, level: u8) -> Self {
        debug_assert!(rows > 0 && cols > 0, "empty symbol");
        Self {
            rows_val: ((rows - 1) / 3) as u16,
            level_val: level as u16 * 3 + ((rows - 1) % 3) as u16,
            cols_val: (cols - 1) as u16,
        }
    }

    /// Cluster (bar pattern table) used by `row`.
    #[inline]
    pub const fn cluster(row: usize) -> u8 {
        (row % 3) as u8
    }

    /// (left, right) indicator values of `row` before the row number is
    /// added.
    pub const fn raw(&self, row: usize) -> (u16, u16) {
        match Self::cluster(row) {
            0 => (self.rows_val, self.cols_val),
            1 => (self.level_val, self.rows_val),
            _ => (self.cols_val, self.level_val),
        }
    }

    /// (left, right) indicator codewords of `row`.
    pub const fn codewords(&self, row: usize) -> (u16, u16) {
        let row_id = (row / 3) as u16 * 30;
        let (left, right) = self.raw(row);
        (row_id + left, row_id + right)
    }

    /// (left, right) indicator bar patterns of `row`.
    pub fn patterns(&self, row: usize) -> (Pattern, Pattern) {
        let cluster = Self::cluster(row);
        let (left, right) = self.codewords(row);
        (codeword_pattern(cluster, left), codeword_pattern(cluster, right))
    }
}
