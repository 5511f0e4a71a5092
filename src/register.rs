//! Register map of the graphics accelerator
//!
//! The accelerator exposes a small file of 16-bit registers at fixed offsets
//! from a base address. The Command and Status registers share one address:
//! writing it issues a command, reading it returns the status word.
//!
//! | Register          | Offset | Access |
//! |-------------------|--------|--------|
//! | Command / Status  | 0x00   | W / R  |
//! | X1                | 0x02   | R/W    |
//! | Y1                | 0x04   | R/W    |
//! | X2                | 0x06   | R/W    |
//! | Y2                | 0x08   | R/W    |
//! | Color             | 0x0E   | R/W    |
//! | BackgroundColor   | 0x10   | R/W    |

/// Base address of the register file on the reference board
pub const DEFAULT_BASE_ADDRESS: usize = 0xFF21_0000;

/// Status bit set by the accelerator when it can accept a new command
pub const STATUS_IDLE: u16 = 0x0001;

/// Size in bytes of the register window
pub const REGISTER_WINDOW_SIZE: usize = 0x12;

/// A named register of the accelerator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Command register (write side of offset 0x00)
    Command,
    /// Status register (read side of offset 0x00)
    Status,
    /// First X coordinate operand
    X1,
    /// First Y coordinate operand
    Y1,
    /// Second X coordinate operand (also radius for circles)
    X2,
    /// Second Y coordinate operand
    Y2,
    /// Foreground palette index, also returns the result of a pixel read
    Color,
    /// Background palette index
    BackgroundColor,
}

impl Register {
    /// Byte offset of the register from the base address
    ///
    /// ```
    /// use graphics_accel::Register;
    ///
    /// assert_eq!(Register::Command.offset(), Register::Status.offset());
    /// assert_eq!(Register::Color.offset(), 0x0E);
    /// ```
    pub const fn offset(self) -> usize {
        match self {
            Self::Command | Self::Status => 0x00,
            Self::X1 => 0x02,
            Self::Y1 => 0x04,
            Self::X2 => 0x06,
            Self::Y2 => 0x08,
            Self::Color => 0x0E,
            Self::BackgroundColor => 0x10,
        }
    }

    /// Whether the register may be written as a command operand
    pub const fn is_operand(self) -> bool {
        !matches!(self, Self::Command | Self::Status)
    }
}

/// Convert a signed coordinate to its 16-bit register encoding
///
/// Values outside `0..=0xFFFF` wrap, exactly as a store to the 16-bit
/// register would.
pub(crate) const fn coord(value: i32) -> u16 {
    value as u16
}
