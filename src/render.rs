//! Module grid to pixels.
//!
//! Every row of the symbol is laid out as start pattern, left indicator,
//! data codewords, right indicator, stop pattern and a terminating bar, then
//! scaled to `module_width × (module_width · module_height)` pixel blocks
//! and offset by the quiet zone.

use tracing::debug;

use crate::bitfield::Bitfield;
use crate::generators::{Pattern, RowIterator, MODULES_PER_CODEWORD};
use crate::layout::Layout;
use crate::settings::ResolvedSettings;

/// A monochrome pixel surface the symbol is drawn on.
///
/// Pixels are addressed by `(x, y)` from the top left corner; `true` is the
/// background (white) and `false` a mark (black).
pub trait Canvas: Sized {
    /// Creates an all white canvas.
    fn new(width: usize, height: usize) -> Self;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn set(&mut self, x: usize, y: usize, white: bool);

    fn get(&self, x: usize, y: usize) -> bool;

    /// Paints the whole pixel line `y`. Set bits of `dark` are black pixels.
    fn draw_line(&mut self, y: usize, dark: &Bitfield) {
        for (x, on) in dark.iter().enumerate() {
            self.set(x, y, !on);
        }
    }
}

/// Default [Canvas]: one packed [Bitfield] per pixel line, a set bit being a
/// black pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    lines: Vec<Bitfield>,
}

impl Bitmap {
    /// True if the pixel at `(x, y)` is black.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width, "x {x} out of bitmap width {}", self.width);
        self.lines[y].get(x)
    }

    /// True if no pixel is black.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(Bitfield::is_false_for_all)
    }

    /// Number of bytes of a packed line, see [Bitmap::to_packed_rows].
    #[inline]
    pub const fn stride(&self) -> usize {
        (self.width + 7) / 8
    }

    /// Exports the pixels as packed lines of [Bitmap::stride] bytes, the
    /// leftmost pixel in the most significant bit and a set bit for a black
    /// pixel. Padding bits at the end of each line are zero.
    pub fn to_packed_rows(&self) -> Vec<u8> {
        let stride = self.stride();
        let mut out = vec![0u8; stride * self.lines.len()];
        if stride == 0 {
            return out;
        }
        for (line, chunk) in self.lines.iter().zip(out.chunks_exact_mut(stride)) {
            line.copy_to(chunk, true);
        }
        out
    }

    /// Iterates over the pixel lines, `true` for black pixels.
    pub fn lines(&self) -> impl Iterator<Item = &Bitfield> + '_ {
        self.lines.iter()
    }
}

impl Canvas for Bitmap {
    fn new(width: usize, height: usize) -> Self {
        Self { width, lines: vec![Bitfield::new(width, false); height] }
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.lines.len()
    }

    fn set(&mut self, x: usize, y: usize, white: bool) {
        assert!(x < self.width, "x {x} out of bitmap width {}", self.width);
        self.lines[y].set(x, !white);
    }

    fn get(&self, x: usize, y: usize) -> bool {
        !self.is_dark(x, y)
    }

    fn draw_line(&mut self, y: usize, dark: &Bitfield) {
        let line = &mut self.lines[y];
        line.clear();
        line.copy_from(dark);
    }
}

/// Draws codeword grids with the pixel geometry of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRenderer {
    layout: Layout,
    level: u8,
    module_width: usize,
    module_height: usize,
    quiet_zone: usize,
}

impl SymbolRenderer {
    pub fn new(layout: Layout, settings: &ResolvedSettings) -> Self {
        Self {
            layout,
            level: settings.level,
            module_width: settings.module_width as usize,
            module_height: settings.module_height as usize,
            quiet_zone: settings.quiet_zone as usize,
        }
    }

    /// Number of modules in a row, terminating bar included.
    pub const fn columns_count(&self) -> usize {
        (self.layout.cols + 4) * MODULES_PER_CODEWORD + 1
    }

    /// Height of a row in pixels.
    #[inline]
    pub const fn row_height(&self) -> usize {
        self.module_width * self.module_height
    }

    /// Canvas width in pixels. The terminating bar is one pixel wide.
    pub const fn width(&self) -> usize {
        (self.layout.cols + 4) * MODULES_PER_CODEWORD * self.module_width + 2 * self.quiet_zone + 1
    }

    /// Canvas height in pixels.
    pub const fn height(&self) -> usize {
        self.layout.rows * self.row_height() + 2 * self.quiet_zone
    }

    /// Pixel line of one symbol row.
    fn line(&self, patterns: impl Iterator<Item = Pattern>, width: usize) -> Bitfield {
        let mut line = Bitfield::new(width, false);
        let mut x = self.quiet_zone;
        for pattern in patterns {
            for on in pattern.iter() {
                if on {
                    for px in x..x + self.module_width {
                        line.set(px, true);
                    }
                }
                x += self.module_width;
            }
        }
        // terminating bar
        line.set(x, true);
        line
    }

    /// Draws `codewords` (`rows × cols`, row-major) on `canvas`, which must
    /// be at least [SymbolRenderer::width] × [SymbolRenderer::height] pixels.
    pub fn draw<C: Canvas>(&self, codewords: &[u16], canvas: &mut C) {
        let width = self.width();
        assert!(canvas.width() >= width && canvas.height() >= self.height(), "canvas is too small");

        let rows = RowIterator::new(codewords, self.layout.rows, self.layout.cols, self.level);
        for (r, row) in rows.enumerate() {
            let line = self.line(row, width);
            let top = self.quiet_zone + r * self.row_height();
            for y in top..top + self.row_height() {
                canvas.draw_line(y, &line);
            }
        }
    }

    /// Creates a canvas of the right size and draws `codewords` on it.
    pub fn render<C: Canvas>(&self, codewords: &[u16]) -> C {
        let mut canvas = C::new(self.width(), self.height());
        self.draw(codewords, &mut canvas);
        debug!(width = canvas.width(), height = canvas.height(), "rendered symbol");
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(module_width: u32, module_height: u32, quiet_zone: u32) -> ResolvedSettings {
        ResolvedSettings { module_height, module_width, level: 0, aspect_ratio: 3.0, quiet_zone }
    }

    #[test]
    fn test_bitmap_canvas() {
        let mut bitmap = Bitmap::new(10, 2);
        assert!(bitmap.is_blank());
        assert!(bitmap.get(9, 1));
        bitmap.set(9, 1, false);
        assert!(bitmap.is_dark(9, 1));
        assert!(!bitmap.get(9, 1));
        assert!(!bitmap.is_blank());
    }

    #[test]
    fn test_bitmap_packed_rows() {
        let mut bitmap = Bitmap::new(10, 2);
        bitmap.set(0, 0, false);
        bitmap.set(9, 0, false);
        bitmap.set(1, 1, false);
        assert_eq!(bitmap.stride(), 2);
        assert_eq!(bitmap.to_packed_rows(), [0b1000_0000, 0b0100_0000, 0b0100_0000, 0]);
    }

    #[test]
    fn test_bitmap_draw_line_overwrites() {
        let mut bitmap = Bitmap::new(4, 1);
        bitmap.set(3, 0, false);
        let mut dark = Bitfield::new(4, false);
        dark.set(0, true);
        bitmap.draw_line(0, &dark);
        assert!(bitmap.is_dark(0, 0));
        assert!(!bitmap.is_dark(3, 0));
    }

    #[test]
    fn test_renderer_geometry() {
        let renderer = SymbolRenderer::new(Layout { rows: 3, cols: 2 }, &settings(2, 3, 4));
        assert_eq!(renderer.columns_count(), 6 * 17 + 1);
        assert_eq!(renderer.width(), 6 * 17 * 2 + 8 + 1);
        assert_eq!(renderer.height(), 3 * 6 + 8);
    }

    #[test]
    fn test_render_first_row() {
        let renderer = SymbolRenderer::new(Layout { rows: 3, cols: 1 }, &settings(1, 2, 1));
        let bitmap: Bitmap = renderer.render(&[2, 900, 900]);
        assert_eq!(bitmap.width(), 5 * 17 + 3);
        assert_eq!(bitmap.height(), 3 * 2 + 2);

        // quiet zone
        assert!((0..bitmap.width()).all(|x| bitmap.get(x, 0)));
        assert!((0..bitmap.height()).all(|y| bitmap.get(0, y)));

        // start pattern, then the terminating bar on the last column
        let line: String = (1..18).map(|x| if bitmap.is_dark(x, 1) { '1' } else { '0' }).collect();
        assert_eq!(line, "11111111010101000");
        assert!(bitmap.is_dark(bitmap.width() - 2, 1));
        assert_eq!(bitmap.lines().nth(1), bitmap.lines().nth(2));
    }

    #[test]
    fn test_render_scales_modules() {
        let renderer = SymbolRenderer::new(Layout { rows: 3, cols: 1 }, &settings(3, 1, 0));
        let bitmap: Bitmap = renderer.render(&[2, 900, 900]);
        // 8 bars of the start pattern, 3 pixels each
        assert!((0..24).all(|x| bitmap.is_dark(x, 0)));
        assert!(!bitmap.is_dark(24, 0));
        assert!(bitmap.is_dark(bitmap.width() - 1, 0));
        assert!(!bitmap.is_dark(bitmap.width() - 2, 0));
    }
}
