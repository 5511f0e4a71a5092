//! Primitive drawing commands
//!
//! Each primitive maps onto a single accelerator command. Pixel writes and
//! horizontal/vertical lines are clipped against negative coordinates before
//! they reach the device; arbitrary lines and circles are passed through
//! unchanged and left to the hardware.
//!
//! Stop coordinates differ between the two axis-aligned lines: `DrawHLine`
//! takes an exclusive X2, `DrawVLine` an inclusive Y2. Both are what the
//! accelerator expects.

use crate::accelerator::{AccelResult, Accelerator};
use crate::color::Color;
use crate::command::Command;
use crate::config::LineMode;
use crate::error::Error;
use crate::interface::GraphicsInterface;
use crate::register::{Register, coord};

/// Clip a span starting at `start` against the origin.
///
/// Returns the new start and length, or `None` if nothing remains on screen.
fn clip_span(start: i32, length: i32) -> Option<(i32, i32)> {
    if length <= 0 {
        return None;
    }
    if start < 0 {
        let end = start.saturating_add(length);
        if end <= 0 {
            return None;
        }
        return Some((0, end));
    }
    Some((start, length))
}

impl<I> Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Write a single pixel
    ///
    /// Pixels with a negative coordinate are dropped.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> AccelResult<I> {
        if x < 0 || y < 0 {
            return Ok(());
        }
        self.issue(
            Command::PutPixel,
            &[
                (Register::X1, coord(x)),
                (Register::Y1, coord(y)),
                (Register::Color, color.raw()),
            ],
        )
    }

    /// Read the palette index of a single pixel
    ///
    /// No clipping is performed; the caller is responsible for bounds.
    pub fn read_pixel(&mut self, x: i32, y: i32) -> Result<Color, Error<I>> {
        self.issue(
            Command::GetPixel,
            &[(Register::X1, coord(x)), (Register::Y1, coord(y))],
        )?;
        self.read_pixel_result()
    }

    /// Draw a horizontal line of `length` pixels starting at (x, y)
    ///
    /// Nothing is drawn if `length <= 0` or `y < 0`. A line starting left of
    /// the screen is truncated to start at x = 0 with its right end preserved.
    pub fn draw_hline(&mut self, x: i32, y: i32, length: i32, color: Color) -> AccelResult<I> {
        if y < 0 {
            return Ok(());
        }
        let Some((x, length)) = clip_span(x, length) else {
            return Ok(());
        };
        let x2 = x.saturating_add(length);
        self.issue(
            Command::DrawHLine,
            &[
                (Register::X1, coord(x)),
                (Register::Y1, coord(y)),
                (Register::X2, coord(x2)),
                (Register::Y2, coord(y)),
                (Register::Color, color.raw()),
            ],
        )
    }

    /// Draw a vertical line of `length` pixels starting at (x, y)
    ///
    /// Nothing is drawn if `length <= 0` or `x < 0`. A line starting above
    /// the screen is truncated to start at y = 0, shortened by the clipped
    /// amount so its bottom end is preserved.
    pub fn draw_vline(&mut self, x: i32, y: i32, length: i32, color: Color) -> AccelResult<I> {
        if x < 0 {
            return Ok(());
        }
        let Some((y, length)) = clip_span(y, length) else {
            return Ok(());
        };
        let y2 = y.saturating_add(length - 1);
        self.issue(
            Command::DrawVLine,
            &[
                (Register::X1, coord(x)),
                (Register::Y1, coord(y)),
                (Register::X2, coord(x)),
                (Register::Y2, coord(y2)),
                (Register::Color, color.raw()),
            ],
        )
    }

    /// Draw a line between two points
    ///
    /// Uses the accelerator's `DrawLine` command or the software rasterizer,
    /// depending on the configured [`LineMode`].
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> AccelResult<I> {
        match self.config().line_mode {
            LineMode::Hardware => self.draw_line_hardware(x1, y1, x2, y2, color),
            LineMode::Software => self.draw_line_software(x1, y1, x2, y2, color),
        }
    }

    /// Draw a line with the accelerator's `DrawLine` command
    ///
    /// Endpoints are passed through unclipped.
    pub fn draw_line_hardware(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> AccelResult<I> {
        self.issue(
            Command::DrawLine,
            &[
                (Register::X1, coord(x1)),
                (Register::Y1, coord(y1)),
                (Register::X2, coord(x2)),
                (Register::Y2, coord(y2)),
                (Register::Color, color.raw()),
            ],
        )
    }

    /// Draw a circle outline of `radius` around (cx, cy)
    ///
    /// Centre and radius are passed through unclipped.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> AccelResult<I> {
        self.issue(
            Command::DrawCircle,
            &[
                (Register::X1, coord(cx)),
                (Register::Y1, coord(cy)),
                (Register::X2, coord(radius)),
                (Register::Color, color.raw()),
            ],
        )
    }
}
