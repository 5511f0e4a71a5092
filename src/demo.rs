//! Demo and fuzz driver for manual visual testing
//!
//! [`Fuzzer`] turns a stream of pseudo-random bytes into random, on-screen
//! [`Shape`]s and draws them. The byte stream is supplied by the host through
//! [`RandomSource`]; this crate does not ship a generator.

use crate::accelerator::{AccelResult, Accelerator};
use crate::color::Color;
use crate::config::Dimensions;
use crate::error::Error;
use crate::interface::GraphicsInterface;
use crate::shapes::{Point, Shape};

/// Source of pseudo-random bytes
pub trait RandomSource {
    /// Return the next byte of the stream
    fn next_byte(&mut self) -> u8;
}

impl<F> RandomSource for F
where
    F: FnMut() -> u8,
{
    fn next_byte(&mut self) -> u8 {
        self()
    }
}

/// Random shape generator
pub struct Fuzzer<R> {
    rng: R,
    dimensions: Dimensions,
}

impl<R> Fuzzer<R>
where
    R: RandomSource,
{
    /// Create a fuzzer producing shapes that start within `dimensions`
    pub fn new(rng: R, dimensions: Dimensions) -> Self {
        Self { rng, dimensions }
    }

    fn next_u16(&mut self) -> u16 {
        u16::from_le_bytes([self.rng.next_byte(), self.rng.next_byte()])
    }

    /// Uniform-ish value in `0..bound`, or 0 when `bound` is 0
    fn below(&mut self, bound: u16) -> i32 {
        i32::from(self.next_u16() % bound.max(1))
    }

    fn point(&mut self) -> Point {
        Point::new(
            self.below(self.dimensions.width),
            self.below(self.dimensions.height),
        )
    }

    fn color(&mut self) -> Color {
        Color::new(self.rng.next_byte())
    }

    /// Size of at least 1 that stays on screen from `start` along an axis of `extent`
    fn span(&mut self, start: i32, extent: u16) -> i32 {
        let room = (i32::from(extent) - start).max(1);
        self.below(room as u16) + 1
    }

    /// Generate the next random shape
    pub fn next_shape(&mut self) -> Shape {
        match self.rng.next_byte() % 10 {
            0 => Shape::Pixel {
                at: self.point(),
                color: self.color(),
            },
            1 => Shape::Line {
                from: self.point(),
                to: self.point(),
                color: self.color(),
            },
            2 => {
                let at = self.point();
                Shape::HLine {
                    at,
                    length: self.span(at.x, self.dimensions.width),
                    color: self.color(),
                }
            }
            3 => {
                let at = self.point();
                Shape::VLine {
                    at,
                    length: self.span(at.y, self.dimensions.height),
                    color: self.color(),
                }
            }
            4 => {
                let at = self.point();
                Shape::Rectangle {
                    at,
                    width: self.span(at.x, self.dimensions.width),
                    height: self.span(at.y, self.dimensions.height),
                    color: self.color(),
                }
            }
            5 => {
                let at = self.point();
                Shape::FilledRectangle {
                    at,
                    width: self.span(at.x, self.dimensions.width),
                    height: self.span(at.y, self.dimensions.height),
                    color: self.color(),
                }
            }
            6 => {
                let at = self.point();
                let width = self.span(at.x, self.dimensions.width);
                let height = self.span(at.y, self.dimensions.height);
                let thinnest = width.min(height);
                let border_width = self.below(((thinnest + 1) / 2) as u16 + 1);
                Shape::BorderedFilledRectangle {
                    at,
                    width,
                    height,
                    border_width,
                    fill_color: self.color(),
                    border_color: self.color(),
                }
            }
            7 => Shape::Triangle {
                points: [self.point(), self.point(), self.point()],
                color: self.color(),
            },
            8 => Shape::Circle {
                center: self.point(),
                radius: i32::from(self.rng.next_byte()) + 1,
                color: self.color(),
            },
            _ => Shape::FilledCircle {
                center: self.point(),
                radius: i32::from(self.rng.next_byte() % 64) + 1,
                color: self.color(),
            },
        }
    }

    /// Generate one random shape, draw it, and return it
    pub fn draw_next<I>(&mut self, gfx: &mut Accelerator<I>) -> Result<Shape, Error<I>>
    where
        I: GraphicsInterface,
    {
        let shape = self.next_shape();
        log::trace!("fuzz {shape:?}");
        gfx.draw_shape(&shape)?;
        Ok(shape)
    }

    /// Draw `count` random shapes
    pub fn run<I>(&mut self, gfx: &mut Accelerator<I>, count: usize) -> AccelResult<I>
    where
        I: GraphicsInterface,
    {
        for _ in 0..count {
            self.draw_next(gfx)?;
        }
        Ok(())
    }

    /// Give back the random source
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Draw the bring-up pattern: a 150x150 box at (150, 150) with red top,
/// lime right, blue bottom and magenta left edges, and a yellow pixel in the
/// middle.
pub fn draw_test_pattern<I>(gfx: &mut Accelerator<I>) -> AccelResult<I>
where
    I: GraphicsInterface,
{
    gfx.draw_hline(150, 150, 150, Color::RED)?;
    gfx.draw_vline(299, 150, 150, Color::LIME)?;
    gfx.draw_hline(150, 299, 150, Color::BLUE)?;
    gfx.draw_vline(150, 150, 150, Color::MAGENTA)?;
    gfx.write_pixel(225, 225, Color::YELLOW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::config::Config;
    use crate::mock::MockInterface;

    /// xorshift32, deterministic for repeatable tests
    struct XorShift(u32);

    impl RandomSource for XorShift {
        fn next_byte(&mut self) -> u8 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 17;
            self.0 ^= self.0 << 5;
            (self.0 >> 24) as u8
        }
    }

    fn starts_on_screen(shape: &Shape, dims: Dimensions) -> bool {
        let on = |p: Point| dims.contains(p.x, p.y);
        match *shape {
            Shape::Pixel { at, .. }
            | Shape::HLine { at, .. }
            | Shape::VLine { at, .. }
            | Shape::Rectangle { at, .. }
            | Shape::FilledRectangle { at, .. }
            | Shape::BorderedFilledRectangle { at, .. } => on(at),
            Shape::Line { from, to, .. } => on(from) && on(to),
            Shape::Triangle { points, .. } => points.iter().all(|&p| on(p)),
            Shape::Circle { center, radius, .. } | Shape::FilledCircle { center, radius, .. } => {
                on(center) && radius > 0
            }
        }
    }

    #[test]
    fn test_fuzzer_shapes_start_on_screen() {
        let dims = Dimensions::default();
        let mut fuzzer = Fuzzer::new(XorShift(0x1234_5678), dims);
        for _ in 0..500 {
            let shape = fuzzer.next_shape();
            assert!(starts_on_screen(&shape, dims), "{shape:?}");
        }
    }

    #[test]
    fn test_fuzzer_extents_stay_on_screen() {
        let dims = Dimensions::new(64, 32).unwrap();
        let mut fuzzer = Fuzzer::new(XorShift(42), dims);
        for _ in 0..500 {
            match fuzzer.next_shape() {
                Shape::HLine { at, length, .. } => {
                    assert!(length >= 1 && at.x + length <= 64);
                }
                Shape::VLine { at, length, .. } => {
                    assert!(length >= 1 && at.y + length <= 32);
                }
                Shape::Rectangle {
                    at, width, height, ..
                }
                | Shape::FilledRectangle {
                    at, width, height, ..
                } => {
                    assert!(at.x + width <= 64 && at.y + height <= 32);
                }
                Shape::BorderedFilledRectangle {
                    width,
                    height,
                    border_width,
                    ..
                } => {
                    assert!(border_width >= 0 && 2 * border_width <= width.min(height) + 1);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_fuzzer_is_deterministic_for_a_seed() {
        let dims = Dimensions::default();
        let mut a = Fuzzer::new(XorShift(7), dims);
        let mut b = Fuzzer::new(XorShift(7), dims);
        for _ in 0..50 {
            assert_eq!(a.next_shape(), b.next_shape());
        }
    }

    #[test]
    fn test_unvalidated_zero_dimensions_do_not_panic() {
        let dims = Dimensions {
            width: 0,
            height: 0,
        };
        let mut fuzzer = Fuzzer::new(XorShift(3), dims);
        for _ in 0..100 {
            match fuzzer.next_shape() {
                Shape::Pixel { at, .. } => assert_eq!(at, Point::new(0, 0)),
                Shape::HLine { length, .. } | Shape::VLine { length, .. } => {
                    assert_eq!(length, 1);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_closure_random_source() {
        let mut counter = 0u8;
        let source = move || {
            counter = counter.wrapping_add(1);
            counter
        };
        let mut fuzzer = Fuzzer::new(source, Dimensions::default());
        // first byte 1 selects a line
        assert!(matches!(fuzzer.next_shape(), Shape::Line { .. }));
    }

    #[test]
    fn test_run_issues_commands() {
        let mut gfx = Accelerator::new(MockInterface::new(), Config::default());
        let mut fuzzer = Fuzzer::new(XorShift(99), Dimensions::default());
        fuzzer.run(&mut gfx, 20).unwrap();
        assert!(!gfx.interface().issued.is_empty());
    }

    #[test]
    fn test_draw_test_pattern() {
        let mut gfx = Accelerator::new(MockInterface::new(), Config::default());
        draw_test_pattern(&mut gfx).unwrap();
        assert_eq!(
            gfx.interface().commands(),
            [
                Command::DrawHLine,
                Command::DrawVLine,
                Command::DrawHLine,
                Command::DrawVLine,
                Command::PutPixel,
            ]
        );
        let last = gfx.interface().issued[4];
        assert_eq!((last.x1, last.y1, last.color), (225, 225, 5));
    }
}
