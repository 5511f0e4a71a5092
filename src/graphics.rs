//! Graphics support via embedded-graphics
//!
//! [`Accelerator`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem. There is no framebuffer on the host side:
//! single pixels become `PutPixel` commands and solid fills become rows of
//! `DrawHLine` commands.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use graphics_accel::{Accelerator, Color, Config};
//!
//! let mut gfx = Accelerator::new(interface, Config::default());
//!
//! Rectangle::new(Point::new(10, 10), Size::new(100, 50))
//!     .into_styled(PrimitiveStyle::with_fill(Color::BLUE))
//!     .draw(&mut gfx)?;
//! Circle::new(Point::new(200, 200), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::YELLOW, 1))
//!     .draw(&mut gfx)?;
//! ```

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    primitives::Rectangle,
};

use crate::accelerator::Accelerator;
use crate::color::Color;
use crate::error::Error;
use crate::interface::GraphicsInterface;

impl<I> DrawTarget for Accelerator<I>
where
    I: GraphicsInterface,
{
    type Color = Color;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let dims = *self.dimensions();

        for Pixel(Point { x, y }, color) in pixels {
            if !dims.contains(x, y) {
                continue;
            }
            self.write_pixel(x, y, color)?;
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        self.filled_rectangle(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            color,
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}

impl<I> OriginDimensions for Accelerator<I>
where
    I: GraphicsInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}
