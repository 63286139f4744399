//! # PDF417 Generator
//!
//! Encodes text or bytes into a PDF417 symbol and renders it as a monochrome
//! pixel grid. The whole pipeline runs in [Barcode::new]:
//!
//! 1. the payload is compacted into codewords ([high_level]): text with the
//!    four text sub-modes, bytes in base 900;
//! 2. the error correction level is picked ([CorrectionLevel::resolve]) and
//!    the grid is sized to the requested aspect ratio ([layout]);
//! 3. the data block is padded, then Reed-Solomon codewords are appended
//!    ([ecc]);
//! 4. every row gets its indicators and is drawn with the bar patterns of
//!    its cluster ([generators], [render]).
//!
//! #### Basic Example
//! ```
//! # use pdf417_symbol::*;
//! let barcode = Barcode::from_text("Hello, world!", &Settings::default())?;
//! assert_eq!(barcode.columns_count(), (barcode.data_columns() + 4) * 17 + 1);
//!
//! let bitmap = barcode.bitmap();
//! // quiet zone
//! assert!(bitmap.get(0, 0));
//! # Ok::<(), pdf417_symbol::Error>(())
//! ```
//!
//! Text that does not fit the text sub-modes can be stored as bytes or as
//! UTF-8 (see [Payload]).
//!
//! ```
//! # use pdf417_symbol::*;
//! let settings = Settings::default().with_correction_level(CorrectionLevel::Level(4));
//! let barcode = Barcode::new(Payload::Utf8("Grüße"), &settings)?;
//! assert_eq!(barcode.correction_level(), 4);
//! # Ok::<(), pdf417_symbol::Error>(())
//! ```

pub mod bitfield;
pub mod ecc;
mod error;
pub mod generators;
pub mod high_level;
pub mod layout;
pub mod render;
mod settings;
mod tables;

#[cfg(feature = "embedded-graphics")]
mod embedded;

pub use bitfield::Bitfield;
pub use error::{Error, Result};
pub use high_level::Payload;
pub use layout::{CorrectionLevel, Layout};
pub use render::{Bitmap, Canvas, SymbolRenderer};
pub use settings::{ResolvedSettings, Settings};

use tracing::debug;

use high_level::CW_PADDING;

/// Highest codeword value.
pub const MAX_CODEWORD: u16 = layout::MAX_BLOCK_LEN as u16;

/// A fully encoded and rendered PDF417 symbol.
#[derive(Debug, Clone)]
pub struct Barcode {
    codewords: Vec<u16>,
    data_len: usize,
    layout: Layout,
    settings: ResolvedSettings,
    bitmap: Bitmap,
}

impl Barcode {
    /// Encodes `payload` and renders it with `settings`.
    pub fn new(payload: Payload<'_>, settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let data = payload.encode()?;
        let data_len = data.len();
        let settings = settings.resolve(data_len)?;
        let level = settings.level;
        let ecc_count = ecc::ecc_count(level);
        debug!(data_len, level, ecc_count, "resolved error correction level");

        let count = 1 + data_len + ecc_count;
        let layout = layout::plan_layout(count, settings.aspect_ratio, settings.module_height as f64)?;
        let layout = layout::fit_block(layout, count, level)?;
        let block_len = layout.data_capacity(level);

        let mut codewords = Vec::with_capacity(layout.capacity());
        codewords.push(block_len as u16); // length indicator
        codewords.extend_from_slice(&data);
        codewords.resize(block_len, CW_PADDING);
        let ecc = ecc::compute_ecc(&codewords, level)?;
        codewords.extend_from_slice(&ecc);

        let bitmap = SymbolRenderer::new(layout, &settings).render(&codewords);
        Ok(Self { codewords, data_len, layout, settings, bitmap })
    }

    /// Encodes ASCII text with text compaction.
    pub fn from_text(text: &str, settings: &Settings) -> Result<Self> {
        Self::new(Payload::Text(text), settings)
    }

    /// Encodes raw bytes with byte compaction.
    pub fn from_bytes(bytes: &[u8], settings: &Settings) -> Result<Self> {
        Self::new(Payload::Bytes(bytes), settings)
    }

    /// Number of rows of the symbol.
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    /// Number of data codeword columns (indicators excluded).
    #[inline]
    pub fn data_columns(&self) -> usize {
        self.layout.cols
    }

    /// Width of the symbol in modules, from the start pattern to the
    /// terminating bar.
    #[inline]
    pub fn columns_count(&self) -> usize {
        self.renderer().columns_count()
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Error correction level actually used.
    #[inline]
    pub fn correction_level(&self) -> u8 {
        self.settings.level
    }

    #[inline]
    pub fn settings(&self) -> &ResolvedSettings {
        &self.settings
    }

    /// Number of codewords produced by the compaction, length codeword and
    /// padding excluded.
    #[inline]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Every codeword of the symbol in row-major order: length, data,
    /// padding and correction codewords.
    #[inline]
    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    /// The error correction codewords.
    pub fn ecc_codewords(&self) -> &[u16] {
        &self.codewords[self.layout.data_capacity(self.settings.level)..]
    }

    /// The rendered pixels.
    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// See [Bitmap::to_packed_rows].
    pub fn to_packed_rows(&self) -> Vec<u8> {
        self.bitmap.to_packed_rows()
    }

    fn renderer(&self) -> SymbolRenderer {
        SymbolRenderer::new(self.layout, &self.settings)
    }

    /// Draws the symbol again on a caller provided canvas, at least as large
    /// as [Barcode::bitmap].
    pub fn draw_on<C: Canvas>(&self, canvas: &mut C) {
        self.renderer().draw(&self.codewords, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_scenario() {
        let barcode = Barcode::from_bytes(&[0x01], &Settings::default()).unwrap();
        assert_eq!(barcode.data_len(), 2);
        assert_eq!(barcode.correction_level(), 2);
        assert_eq!(barcode.ecc_codewords().len(), 8);
        assert_eq!(barcode.layout(), Layout { rows: 6, cols: 2 });

        let codewords = barcode.codewords();
        assert_eq!(codewords.len(), 12);
        assert_eq!(&codewords[..4], &[4, high_level::M_SHIFT_BYTE, 1, CW_PADDING]);
        assert_eq!(barcode.columns_count(), (barcode.data_columns() + 4) * 17 + 1);
    }

    #[test]
    fn test_single_char_text() {
        let barcode = Barcode::from_text("A", &Settings::default()).unwrap();
        assert_eq!(barcode.data_len(), 1);
        assert_eq!(&barcode.codewords()[..2], &[barcode.codewords()[0], 29]);
    }

    #[test]
    fn test_ecc_protects_block() {
        let barcode = Barcode::from_text("Test", &Settings::default()).unwrap();
        let level = barcode.correction_level();
        let block = &barcode.codewords()[..barcode.layout().data_capacity(level)];
        assert_eq!(block[0] as usize, block.len());
        assert_eq!(ecc::compute_ecc(block, level).unwrap(), barcode.ecc_codewords());
    }

    #[test]
    fn test_full_symbol_block_fits_length_codeword() {
        // 1102 bytes compact to 920 codewords, 925 with the length and level 1
        let barcode = Barcode::from_bytes(&[0x41; 1102], &Settings::default()).unwrap();
        assert_eq!(barcode.data_len(), 920);
        assert_eq!(barcode.correction_level(), 1);
        assert!(barcode.codewords()[0] <= MAX_CODEWORD);
        assert_eq!(barcode.codewords()[0] as usize, barcode.layout().data_capacity(1));
    }

    #[test]
    fn test_invalid_settings() {
        let settings = Settings::default().with_module_width(0);
        assert!(matches!(Barcode::from_text("A", &settings), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_draw_on_matches_bitmap() {
        let barcode = Barcode::from_text("draw me", &Settings::default()).unwrap();
        let mut other = Bitmap::new(barcode.bitmap().width(), barcode.bitmap().height());
        barcode.draw_on(&mut other);
        assert_eq!(&other, barcode.bitmap());
    }
}
