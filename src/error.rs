//! Error types for the driver
//!
//! The accelerator itself has no failure-reporting channel beyond its idle
//! bit. Out-of-range drawing requests are clipped or dropped silently, so the
//! errors here only cover the register transport, misuse of the raw
//! [`issue`](crate::Accelerator::issue) entry point, and configuration.
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during drawing operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Errors from the memory-mapped interface
//!
//! ## Example
//!
//! ```
//! use graphics_accel::{BuilderError, Dimensions};
//!
//! let result = Dimensions::new(0, 480);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { width: 0, .. })));
//! ```

use crate::interface::GraphicsInterface;
use crate::register::Register;

/// Largest width or height accepted by [`crate::Dimensions`]
///
/// Coordinates travel through 16-bit registers and are treated as signed by
/// the clipping logic.
pub const MAX_DIMENSION: u16 = 0x7FFF;

/// Number of entries in the hardware palette
pub const PALETTE_SIZE: usize = 256;

/// Errors that can occur when driving the accelerator
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: GraphicsInterface> {
    /// Interface error
    ///
    /// Wraps the underlying error from the [`GraphicsInterface`] implementation.
    Interface(I::Error),
    /// A register that cannot carry an operand was passed to `issue`
    ///
    /// Command and Status are written only by the command handshake itself.
    InvalidOperand {
        /// The rejected register
        register: Register,
    },
    /// More palette entries were supplied than the hardware holds
    PaletteTooLarge {
        /// Number of entries provided
        provided: usize,
    },
}

impl<I: GraphicsInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidOperand { register } => {
                write!(f, "Register {register:?} cannot be used as an operand")
            }
            Self::PaletteTooLarge { provided } => write!(
                f,
                "Palette too large: {provided} entries provided, at most {PALETTE_SIZE} supported"
            ),
        }
    }
}

impl<I: GraphicsInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (each axis must be 1..={MAX_DIMENSION})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
