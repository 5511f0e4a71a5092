//! Palette-indexed colors
//!
//! The accelerator draws with 8-bit palette indices, not RGB values. Each of
//! the 256 indices maps to a 24-bit RGB value held in the hardware palette
//! (see [`crate::palette`]). The first eight indices are programmed with the
//! named colors below at power-up.
//!
//! ## Example
//!
//! ```
//! use graphics_accel::Color;
//!
//! assert_eq!(Color::RED.index(), 2);
//! assert_eq!(Color::from(200u8), Color::new(200));
//! ```

/// An 8-bit palette index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u8);

impl Color {
    /// Palette index 0
    pub const BLACK: Self = Self(0);
    /// Palette index 1
    pub const WHITE: Self = Self(1);
    /// Palette index 2
    pub const RED: Self = Self(2);
    /// Palette index 3
    pub const LIME: Self = Self(3);
    /// Palette index 4
    pub const BLUE: Self = Self(4);
    /// Palette index 5
    pub const YELLOW: Self = Self(5);
    /// Palette index 6
    pub const CYAN: Self = Self(6);
    /// Palette index 7
    pub const MAGENTA: Self = Self(7);

    /// Named colors in palette order
    pub const NAMED: [Self; 8] = [
        Self::BLACK,
        Self::WHITE,
        Self::RED,
        Self::LIME,
        Self::BLUE,
        Self::YELLOW,
        Self::CYAN,
        Self::MAGENTA,
    ];

    /// Create a color from a palette index
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The palette index
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Register encoding of the index
    pub(crate) const fn raw(self) -> u16 {
        self.0 as u16
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::raw::RawU8> for Color {
    fn from(raw: embedded_graphics_core::pixelcolor::raw::RawU8) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawData;
        Self(raw.into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::raw::RawU8 {
    fn from(color: Color) -> Self {
        Self::new(color.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_occupy_first_eight_indices() {
        for (index, color) in Color::NAMED.iter().enumerate() {
            assert_eq!(usize::from(color.index()), index);
        }
    }

    #[test]
    fn test_raw_is_zero_extended() {
        assert_eq!(Color::new(0xFF).raw(), 0x00FF);
    }
}
