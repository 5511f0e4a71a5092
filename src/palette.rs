//! Hardware palette programming
//!
//! The accelerator maps each 8-bit [`Color`] index to a 24-bit RGB value.
//! Programming an entry places the red channel in X1 and the packed
//! green/blue channels in Y1, then issues `ProgramPaletteColor`. There is no
//! read-back; the entry is in effect once the accelerator reports idle again.

use crate::accelerator::{AccelResult, Accelerator};
use crate::color::Color;
use crate::command::Command;
use crate::error::{Error, PALETTE_SIZE};
use crate::interface::GraphicsInterface;
use crate::register::Register;

/// A 24-bit RGB value in `0x00RRGGBB` layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Build a value from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Value written to X1: the red channel
    pub const fn x1(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Value written to Y1: green in the high byte, blue in the low byte
    pub const fn y1(self) -> u16 {
        self.0 as u16
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// RGB values of the eight named colors, indexed by palette number
pub const DEFAULT_PALETTE: [Rgb; 8] = [
    Rgb(0x00_00_00),
    Rgb(0xFF_FF_FF),
    Rgb(0xFF_00_00),
    Rgb(0x00_FF_00),
    Rgb(0x00_00_FF),
    Rgb(0xFF_FF_00),
    Rgb(0x00_FF_FF),
    Rgb(0xFF_00_FF),
];

impl<I> Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Program one palette entry
    ///
    /// ```ignore
    /// gfx.program_palette(Color::new(8), Rgb(0x00FF_8000))?; // orange
    /// ```
    pub fn program_palette(&mut self, index: Color, rgb: Rgb) -> AccelResult<I> {
        log::debug!("palette[{}] = {:06X}", index.index(), rgb.0);
        self.issue(
            Command::ProgramPaletteColor,
            &[
                (Register::Color, index.raw()),
                (Register::X1, rgb.x1()),
                (Register::Y1, rgb.y1()),
            ],
        )
    }

    /// Program consecutive palette entries starting at index 0
    ///
    /// # Errors
    ///
    /// Returns [`Error::PaletteTooLarge`] without touching the device if more
    /// than 256 entries are given.
    pub fn load_palette(&mut self, entries: &[Rgb]) -> AccelResult<I> {
        if entries.len() > PALETTE_SIZE {
            return Err(Error::PaletteTooLarge {
                provided: entries.len(),
            });
        }
        for (index, &rgb) in entries.iter().enumerate() {
            self.program_palette(Color::new(index as u8), rgb)?;
        }
        Ok(())
    }

    /// Reprogram the eight named colors with their standard RGB values
    pub fn restore_default_palette(&mut self) -> AccelResult<I> {
        self.load_palette(&DEFAULT_PALETTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mock::{Event, MockInterface};

    fn test_accelerator() -> Accelerator<MockInterface> {
        Accelerator::new(MockInterface::new(), Config::default())
    }

    #[test]
    fn test_rgb_channel_split() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(rgb, Rgb(0x12_34_56));
        assert_eq!(rgb.x1(), 0x0012);
        assert_eq!(rgb.y1(), 0x3456);
    }

    #[test]
    fn test_rgb_truncates_unmasked_high_bits() {
        let rgb = Rgb(0xAB_12_34_56);
        assert_eq!(rgb.x1(), 0xAB12);
        assert_eq!(rgb.y1(), 0x3456);
    }

    #[test]
    fn test_program_palette_register_sequence() {
        let mut gfx = test_accelerator();
        gfx.program_palette(Color::RED, Rgb(0x00FF_0000)).unwrap();

        assert_eq!(
            gfx.interface().events,
            alloc::vec![
                Event::Wait,
                Event::Write(Register::Color, 2),
                Event::Write(Register::X1, 0x00FF),
                Event::Write(Register::Y1, 0x0000),
                Event::Write(Register::Command, 0x10),
            ]
        );
    }

    #[test]
    fn test_restore_default_palette_programs_named_colors_in_order() {
        let mut gfx = test_accelerator();
        gfx.restore_default_palette().unwrap();

        let issued = &gfx.interface().issued;
        assert_eq!(issued.len(), 8);
        for (index, entry) in issued.iter().enumerate() {
            assert_eq!(entry.command, Command::ProgramPaletteColor);
            assert_eq!(usize::from(entry.color), index);
            assert_eq!(entry.x1, DEFAULT_PALETTE[index].x1());
            assert_eq!(entry.y1, DEFAULT_PALETTE[index].y1());
        }
    }

    #[test]
    fn test_load_palette_rejects_oversized_table() {
        let mut gfx = test_accelerator();
        let table = [Rgb(0); PALETTE_SIZE + 1];
        let result = gfx.load_palette(&table);
        assert!(matches!(result, Err(Error::PaletteTooLarge { provided: 257 })));
        assert!(gfx.interface().events.is_empty());
    }

    #[test]
    fn test_load_full_palette_reaches_last_index() {
        let mut gfx = test_accelerator();
        let table = [Rgb(0x10_20_30); PALETTE_SIZE];
        gfx.load_palette(&table).unwrap();
        let issued = &gfx.interface().issued;
        assert_eq!(issued.len(), PALETTE_SIZE);
        assert_eq!(issued[PALETTE_SIZE - 1].color, 255);
    }
}
