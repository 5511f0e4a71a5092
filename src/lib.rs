//! Graphics Accelerator Driver
//!
//! A driver for a memory-mapped, command-based 2D graphics accelerator with
//! an 8-bit palette-indexed framebuffer.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 delays for status polling
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Hardware palette programming
//! - Clipped pixel and line primitives
//! - Software Bresenham line fallback
//! - Composite shapes and a random shape fuzzer
//!
//! ## Usage
//!
//! ```rust
//! use core::convert::Infallible;
//! use graphics_accel::{Accelerator, Color, Config, GraphicsInterface, Register};
//!
//! # #[derive(Debug, Default)]
//! # struct Registers([u16; 9]);
//! # impl GraphicsInterface for Registers {
//! #     type Error = Infallible;
//! #     fn write_register(&mut self, register: Register, value: u16) -> Result<(), Self::Error> {
//! #         self.0[register.offset() / 2] = value;
//! #         Ok(())
//! #     }
//! #     fn read_register(&mut self, register: Register) -> Result<u16, Self::Error> {
//! #         Ok(self.0[register.offset() / 2])
//! #     }
//! #     fn busy_wait(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let interface = Registers::default();
//! let mut gfx = Accelerator::new(interface, Config::default());
//!
//! gfx.restore_default_palette()?;
//! gfx.draw_hline(150, 150, 150, Color::RED)?;
//! gfx.draw_circle(400, 240, 60, Color::CYAN)?;
//! gfx.bordered_filled_rectangle(10, 10, 100, 60, 4, Color::YELLOW, Color::BLUE)?;
//! # Ok::<(), graphics_accel::Error<Registers>>(())
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Core accelerator operations
pub mod accelerator;
/// Palette-indexed color type
pub mod color;
/// Accelerator command opcodes
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Random shape generation and test patterns
pub mod demo;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Hardware palette programming
pub mod palette;
/// Clipped pixel, line and circle commands
pub mod primitives;
/// Software line rasterizer
pub mod raster;
/// Register map
pub mod register;
/// Composite shapes
pub mod shapes;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use accelerator::Accelerator;
pub use color::Color;
pub use command::Command;
pub use config::{Builder, Config, Dimensions, LineMode};
pub use demo::{Fuzzer, RandomSource, draw_test_pattern};
pub use error::{BuilderError, Error, MAX_DIMENSION, PALETTE_SIZE};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_BUSY_TIMEOUT, GraphicsInterface, Interface};
pub use palette::{DEFAULT_PALETTE, Rgb};
pub use raster::BresenhamLine;
pub use register::{DEFAULT_BASE_ADDRESS, Register, STATUS_IDLE};
pub use shapes::{Point, Shape};
