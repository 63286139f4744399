use core::iter;

use crate::generators::{IndicatorGenerator, PDF417Row};

/// Start pattern, first module as most significant bit.
pub const START_PAT: u32 = 0b11111111010101000;
/// Stop pattern, without the terminating bar module.
pub const STOP_PAT: u32 = 0b11111110100010100;

/// Iterates over the rows of a codeword grid.
#[derive(Debug, Clone)]
pub struct RowIterator<'a> {
    codewords: &'a [u16],
    cols: usize,
    indicators: IndicatorGenerator,

    row: usize,
    rows: usize,
}

impl<'a> RowIterator<'a> {
    /// `codewords` must hold exactly `rows * cols` codewords in row-major
    /// order.
    pub fn new(codewords: &'a [u16], rows: usize, cols: usize, level: u8) -> Self {
        assert_eq!(codewords.len(), rows * cols, "codewords do not fill the grid");
        Self {
            codewords,
            cols,
            indicators: IndicatorGenerator::new(rows, cols, level),
            row: 0,
            rows,
        }
    }
}

impl<'a> iter::Iterator for RowIterator<'a> {
    type Item = PDF417Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row == self.rows {
            return None;
        }

        let start = self.row * self.cols;
        let end = start + self.cols;
        let row = PDF417Row::new(&self.codewords[start..end], self.row, &self.indicators);

        self.row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.rows - self.row;
        (count, Some(count))
    }
}

impl<'a> ExactSizeIterator for RowIterator<'a> {}
impl<'a> iter::FusedIterator for RowIterator<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_iterator_splits_grid() {
        let codewords: Vec<u16> = (0..12).collect();
        let rows = RowIterator::new(&codewords, 4, 3, 0);
        assert_eq!(rows.len(), 4);
        let counts: Vec<usize> = rows.map(|row| row.len()).collect();
        // start, left, 3 data, right, stop
        assert_eq!(counts, [7, 7, 7, 7]);
    }

    #[test]
    #[should_panic]
    fn test_row_iterator_rejects_partial_grid() {
        let codewords = [0u16; 5];
        RowIterator::new(&codewords, 3, 2, 0);
    }
}
