//! [embedded-graphics](embedded_graphics) integration: a [Barcode] can be
//! drawn on any binary color draw target, black pixels as
//! [BinaryColor::On].

use embedded_graphics::{
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    Drawable, Pixel,
    draw_target::DrawTarget,
};

use crate::{render::Canvas, Barcode};

impl OriginDimensions for Barcode {
    fn size(&self) -> Size {
        let bitmap = self.bitmap();
        Size::new(bitmap.width() as u32, bitmap.height() as u32)
    }
}

impl Drawable for Barcode {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let pixels = self.bitmap().lines().enumerate().flat_map(|(y, line)| {
            line.iter().enumerate().map(move |(x, on)| {
                let color = if on { BinaryColor::On } else { BinaryColor::Off };
                Pixel(Point::new(x as i32, y as i32), color)
            })
        });
        target.draw_iter(pixels)
    }
}
