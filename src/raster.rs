//! Software line rasterizer
//!
//! Integer Bresenham rasterization covering all eight octants, used when the
//! accelerator's `DrawLine` command is unavailable. The line steps once per
//! unit along its dominant axis, so a line with deltas (dx, dy) yields
//! `max(|dx|, |dy|)` pixels: the start point is plotted, the end point is
//! not. A zero-length line yields nothing.
//!
//! ## Example
//!
//! ```
//! use graphics_accel::raster::BresenhamLine;
//!
//! let pixels: Vec<(i32, i32)> = BresenhamLine::new(0, 0, 4, 2).collect();
//! assert_eq!(pixels, [(0, 0), (1, 1), (2, 1), (3, 2)]);
//! ```

use crate::accelerator::{AccelResult, Accelerator};
use crate::color::Color;
use crate::interface::GraphicsInterface;

/// Iterator over the pixels of a Bresenham line
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
    /// Delta along the dominant axis
    major: i64,
    /// Delta along the minor axis
    minor: i64,
    /// Whether y is the dominant axis
    interchanged: bool,
    /// Widened so the full `i32` coordinate range cannot overflow
    error: i64,
    remaining: i64,
}

impl BresenhamLine {
    /// Rasterize the line from (x1, y1) towards (x2, y2)
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = i64::from(x1.abs_diff(x2));
        let dy = i64::from(y1.abs_diff(y2));
        let interchanged = dy > dx;
        let (major, minor) = if interchanged { (dy, dx) } else { (dx, dy) };

        Self {
            x: x1,
            y: y1,
            step_x: x2.cmp(&x1) as i32,
            step_y: y2.cmp(&y1) as i32,
            major,
            minor,
            interchanged,
            error: 2 * minor - major,
            remaining: major,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= 0 {
            return None;
        }
        let pixel = (self.x, self.y);

        while self.error >= 0 {
            if self.interchanged {
                self.x += self.step_x;
            } else {
                self.y += self.step_y;
            }
            self.error -= 2 * self.major;
        }

        if self.interchanged {
            self.y += self.step_y;
        } else {
            self.x += self.step_x;
        }
        self.error += 2 * self.minor;
        self.remaining -= 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl<I> Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Draw a line one pixel at a time with the software rasterizer
    ///
    /// Each pixel goes through [`write_pixel`](Self::write_pixel), so pixels
    /// with negative coordinates are dropped.
    pub fn draw_line_software(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> AccelResult<I> {
        for (x, y) in BresenhamLine::new(x1, y1, x2, y2) {
            self.write_pixel(x, y, color)?;
        }
        Ok(())
    }
}
