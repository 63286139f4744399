use core::iter;

use crate::generators::{codeword_pattern, IndicatorGenerator, Pattern, START_PAT, STOP_PAT};

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
enum RowPattern {
    Start,
    Left,
    Data,
    Right,
    Stop,
    None,
}

/// Bar patterns of one row, left to right: start pattern, left indicator,
/// data codewords, right indicator and stop pattern. The terminating bar
/// module that follows the stop pattern is left to the renderer.
#[derive(Debug, Clone)]
pub struct PDF417Row<'a> {
    codewords: &'a [u16],
    next_pat: RowPattern,
    cluster: u8,
    /// (left, right)
    markers: (u16, u16),
}

impl<'a> PDF417Row<'a> {
    pub fn new(codewords: &'a [u16], row: usize, indicators: &IndicatorGenerator) -> Self {
        Self {
            codewords,
            next_pat: RowPattern::Start,
            cluster: IndicatorGenerator::cluster(row),
            markers: indicators.codewords(row),
        }
    }

    /// Cluster of the bar patterns in this row.
    pub const fn cluster(&self) -> u8 {
        self.cluster
    }
}

impl<'a> iter::Iterator for PDF417Row<'a> {
    type Item = Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, next) = match self.next_pat {
            RowPattern::Start => (Some(Pattern::from_msb_first(START_PAT)), RowPattern::Left),
            RowPattern::Left => {
                let next = if self.codewords.is_empty() { RowPattern::Right } else { RowPattern::Data };
                (Some(codeword_pattern(self.cluster, self.markers.0)), next)
            }
            RowPattern::Data => {
                let cw = self.codewords[0];
                self.codewords = &self.codewords[1..];

                let next = if self.codewords.is_empty() { RowPattern::Right } else { RowPattern::Data };

                (Some(codeword_pattern(self.cluster, cw)), next)
            }
            RowPattern::Right => (Some(codeword_pattern(self.cluster, self.markers.1)), RowPattern::Stop),
            RowPattern::Stop => (Some(Pattern::from_msb_first(STOP_PAT)), RowPattern::None),
            RowPattern::None => (None, RowPattern::None),
        };

        self.next_pat = next;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.codewords.len() + match self.next_pat {
            RowPattern::Start => 4,
            RowPattern::Left  => 3,
            RowPattern::Data  => 2,
            RowPattern::Right => 2,
            RowPattern::Stop  => 1,
            RowPattern::None  => 0,
        };
        (count, Some(count))
    }
}

impl<'a> ExactSizeIterator for PDF417Row<'a> {}
impl<'a> iter::FusedIterator for PDF417Row<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules(pattern: &Pattern) -> String {
        pattern.iter().map(|b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_row_layout() {
        let indicators = IndicatorGenerator::new(3, 2, 0);
        let codewords = [1u16, 2];
        let row: Vec<Pattern> = PDF417Row::new(&codewords, 0, &indicators).collect();

        assert_eq!(row.len(), 6);
        assert_eq!(modules(&row[0]), "11111111010101000");
        assert_eq!(row[1], codeword_pattern(0, 0));
        assert_eq!(row[2], codeword_pattern(0, 1));
        assert_eq!(row[3], codeword_pattern(0, 2));
        assert_eq!(row[4], codeword_pattern(0, 1));
        assert_eq!(modules(&row[5]), "11111110100010100");
    }

    #[test]
    fn test_row_size_hint_tracks_progress() {
        let indicators = IndicatorGenerator::new(6, 3, 1);
        let codewords = [10u16, 20, 30];
        let mut row = PDF417Row::new(&codewords, 4, &indicators);
        assert_eq!(row.cluster(), 1);
        assert_eq!(row.len(), 7);
        row.next();
        row.next();
        assert_eq!(row.len(), 5);
        assert_eq!(row.by_ref().count(), 5);
        assert!(row.next().is_none());
    }
}
