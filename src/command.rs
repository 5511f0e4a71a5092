//! Accelerator command opcodes
//!
//! A command is triggered by writing its opcode to the Command register. The
//! operand registers it consumes must be written first, and the accelerator
//! must report idle before either happens.
//!
//! | Command                | Opcode | Operands                       |
//! |------------------------|--------|--------------------------------|
//! | `DrawHLine`            | 0x01   | X1, Y1, X2 (exclusive), Y2, Color |
//! | `DrawVLine`            | 0x02   | X1, Y1, X2, Y2 (inclusive), Color |
//! | `DrawLine`             | 0x03   | X1, Y1, X2, Y2, Color          |
//! | `PutPixel`             | 0x0A   | X1, Y1, Color                  |
//! | `GetPixel`             | 0x0B   | X1, Y1 (result in Color)       |
//! | `ProgramPaletteColor`  | 0x10   | Color (index), X1 (red), Y1 (green/blue) |
//! | `DrawCircle`           | 0x11   | X1, Y1 (centre), X2 (radius), Color |

/// Command opcodes understood by the accelerator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Command {
    /// Draw a horizontal line
    DrawHLine = 0x01,
    /// Draw a vertical line
    DrawVLine = 0x02,
    /// Draw an arbitrary line between two points
    DrawLine = 0x03,
    /// Write a single pixel
    PutPixel = 0x0A,
    /// Read a single pixel back into the Color register
    GetPixel = 0x0B,
    /// Program one palette entry with a 24-bit RGB value
    ProgramPaletteColor = 0x10,
    /// Draw a circle outline
    DrawCircle = 0x11,
}

impl Command {
    /// The value written to the Command register
    pub const fn opcode(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for Command {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::DrawHLine),
            0x02 => Ok(Self::DrawVLine),
            0x03 => Ok(Self::DrawLine),
            0x0A => Ok(Self::PutPixel),
            0x0B => Ok(Self::GetPixel),
            0x10 => Ok(Self::ProgramPaletteColor),
            0x11 => Ok(Self::DrawCircle),
            other => Err(other),
        }
    }
}
