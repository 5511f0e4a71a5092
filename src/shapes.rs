//! Composite shapes built from primitive commands
//!
//! Shapes are not retained: each call expands into a fixed sequence of
//! primitive drawing calls and is finished once those commands are issued.

use crate::accelerator::{AccelResult, Accelerator};
use crate::color::Color;
use crate::interface::GraphicsInterface;

/// A screen coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::geometry::Point> for Point {
    fn from(p: embedded_graphics_core::geometry::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A drawable shape description
///
/// Every variant corresponds to one drawing call on [`Accelerator`]; see
/// [`Accelerator::draw_shape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Single pixel
    Pixel {
        /// Position
        at: Point,
        /// Palette index
        color: Color,
    },
    /// Arbitrary line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Palette index
        color: Color,
    },
    /// Horizontal line
    HLine {
        /// Left end
        at: Point,
        /// Length in pixels
        length: i32,
        /// Palette index
        color: Color,
    },
    /// Vertical line
    VLine {
        /// Top end
        at: Point,
        /// Length in pixels
        length: i32,
        /// Palette index
        color: Color,
    },
    /// Rectangle outline
    Rectangle {
        /// Top-left corner
        at: Point,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
        /// Palette index
        color: Color,
    },
    /// Solid rectangle
    FilledRectangle {
        /// Top-left corner
        at: Point,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
        /// Palette index
        color: Color,
    },
    /// Solid rectangle with a border of a different color
    BorderedFilledRectangle {
        /// Top-left corner of the border
        at: Point,
        /// Outer width in pixels
        width: i32,
        /// Outer height in pixels
        height: i32,
        /// Border thickness in pixels
        border_width: i32,
        /// Interior palette index
        fill_color: Color,
        /// Border palette index
        border_color: Color,
    },
    /// Triangle outline
    Triangle {
        /// Corners, drawn p0 -> p1 -> p2 -> p0
        points: [Point; 3],
        /// Palette index
        color: Color,
    },
    /// Circle outline
    Circle {
        /// Centre
        center: Point,
        /// Radius in pixels
        radius: i32,
        /// Palette index
        color: Color,
    },
    /// Solid circle approximated by concentric outlines
    FilledCircle {
        /// Centre
        center: Point,
        /// Radius in pixels
        radius: i32,
        /// Palette index
        color: Color,
    },
}

impl<I> Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Draw a triangle outline as three lines: p1->p2, p2->p3, p3->p1
    pub fn triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Color) -> AccelResult<I> {
        self.draw_line(p1.x, p1.y, p2.x, p2.y, color)?;
        self.draw_line(p2.x, p2.y, p3.x, p3.y, color)?;
        self.draw_line(p3.x, p3.y, p1.x, p1.y, color)
    }

    /// Draw a rectangle outline
    ///
    /// Top and bottom edges are horizontal lines, left and right edges are
    /// vertical lines. Each corner pixel is drawn twice.
    pub fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> AccelResult<I> {
        let bottom = y.saturating_add(height.saturating_sub(1));
        let right = x.saturating_add(width.saturating_sub(1));
        self.draw_hline(x, y, width, color)?;
        self.draw_hline(x, bottom, width, color)?;
        self.draw_vline(x, y, height, color)?;
        self.draw_vline(right, y, height, color)
    }

    /// Draw a solid rectangle as `height` horizontal lines, top to bottom
    ///
    /// A non-positive height draws no rows. Rows past `i32::MAX` saturate.
    pub fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> AccelResult<I> {
        for row in 0..height.max(0) {
            self.draw_hline(x, y.saturating_add(row), width, color)?;
        }
        Ok(())
    }

    /// Draw a solid rectangle surrounded by a border
    ///
    /// The border is four solid rectangles of thickness `border_width`; the
    /// interior is filled afterwards at `(x + bw, y + bw)` with size
    /// `(width - 2bw, height - 2bw)`. When the border is too thick for the
    /// rectangle the interior fill draws nothing.
    pub fn bordered_filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        border_width: i32,
        fill_color: Color,
        border_color: Color,
    ) -> AccelResult<I> {
        let bw = border_width;
        let bottom = y.saturating_add(height).saturating_sub(bw);
        let right = x.saturating_add(width).saturating_sub(bw);
        let twice = bw.saturating_mul(2);
        self.filled_rectangle(x, y, width, bw, border_color)?;
        self.filled_rectangle(x, bottom, width, bw, border_color)?;
        self.filled_rectangle(x, y, bw, height, border_color)?;
        self.filled_rectangle(right, y, bw, height, border_color)?;
        self.filled_rectangle(
            x.saturating_add(bw),
            y.saturating_add(bw),
            width.saturating_sub(twice),
            height.saturating_sub(twice),
            fill_color,
        )
    }

    /// Draw a solid circle as concentric outlines of radius 1 through `radius`
    pub fn filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> AccelResult<I> {
        for r in 1..=radius {
            self.draw_circle(cx, cy, r, color)?;
        }
        Ok(())
    }

    /// Draw any [`Shape`]
    pub fn draw_shape(&mut self, shape: &Shape) -> AccelResult<I> {
        match *shape {
            Shape::Pixel { at, color } => self.write_pixel(at.x, at.y, color),
            Shape::Line { from, to, color } => self.draw_line(from.x, from.y, to.x, to.y, color),
            Shape::HLine { at, length, color } => self.draw_hline(at.x, at.y, length, color),
            Shape::VLine { at, length, color } => self.draw_vline(at.x, at.y, length, color),
            Shape::Rectangle {
                at,
                width,
                height,
                color,
            } => self.rectangle(at.x, at.y, width, height, color),
            Shape::FilledRectangle {
                at,
                width,
                height,
                color,
            } => self.filled_rectangle(at.x, at.y, width, height, color),
            Shape::BorderedFilledRectangle {
                at,
                width,
                height,
                border_width,
                fill_color,
                border_color,
            } => self.bordered_filled_rectangle(
                at.x,
                at.y,
                width,
                height,
                border_width,
                fill_color,
                border_color,
            ),
            Shape::Triangle { points, color } => {
                self.triangle(points[0], points[1], points[2], color)
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => self.draw_circle(center.x, center.y, radius, color),
            Shape::FilledCircle {
                center,
                radius,
                color,
            } => self.filled_circle(center.x, center.y, radius, color),
        }
    }
}
