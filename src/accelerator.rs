//! Core accelerator operations
//!
//! [`Accelerator`] is the sole owner of the register file. Every drawing
//! operation in this crate is an `impl` block on it, so all register traffic
//! flows through [`Accelerator::issue`] and the idle handshake it enforces.
//! Callers sharing one accelerator between threads or interrupt contexts must
//! serialize access to the whole `Accelerator` (for example behind a mutex).

use crate::color::Color;
use crate::command::Command;
use crate::config::Config;
use crate::error::Error;
use crate::interface::GraphicsInterface;
use crate::register::Register;

pub(crate) type AccelResult<I> = core::result::Result<(), Error<I>>;

/// Core driver for the graphics accelerator
pub struct Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Hardware interface
    interface: I,
    /// Driver configuration
    config: Config,
}

impl<I> Accelerator<I>
where
    I: GraphicsInterface,
{
    /// Create a new Accelerator instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Block until the accelerator reports idle
    pub fn await_idle(&mut self) -> AccelResult<I> {
        self.interface.busy_wait().map_err(Error::Interface)
    }

    /// Issue one command
    ///
    /// Waits for idle, writes each operand register in the order given, then
    /// writes the opcode to the Command register.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] without touching the device if an
    /// operand names the Command or Status register.
    pub fn issue(&mut self, command: Command, operands: &[(Register, u16)]) -> AccelResult<I> {
        if let Some(&(register, _)) = operands.iter().find(|(reg, _)| !reg.is_operand()) {
            return Err(Error::InvalidOperand { register });
        }

        self.await_idle()?;
        for &(register, value) in operands {
            self.write(register, value)?;
        }
        log::trace!("issue {command:?} {operands:?}");
        self.write(Register::Command, command.opcode())
    }

    /// Wait for the previous command to finish and read its result
    ///
    /// After a `GetPixel` command the Color register holds the palette index
    /// of the queried pixel.
    pub fn read_pixel_result(&mut self) -> Result<Color, Error<I>> {
        self.await_idle()?;
        let raw = self
            .interface
            .read_register(Register::Color)
            .map_err(Error::Interface)?;
        Ok(Color::new(raw as u8))
    }

    /// Set the background palette index
    ///
    /// No command is issued; the register is written once the accelerator
    /// is idle.
    pub fn set_background_color(&mut self, color: Color) -> AccelResult<I> {
        self.await_idle()?;
        self.write(Register::BackgroundColor, color.raw())
    }

    fn write(&mut self, register: Register, value: u16) -> AccelResult<I> {
        self.interface
            .write_register(register, value)
            .map_err(Error::Interface)
    }

    /// Get screen dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, MockInterface, Stuck, StuckInterface};

    fn test_accelerator() -> Accelerator<MockInterface> {
        Accelerator::new(MockInterface::new(), Config::default())
    }

    #[test]
    fn test_issue_waits_then_writes_operands_then_command() {
        let mut gfx = test_accelerator();
        gfx.issue(
            Command::PutPixel,
            &[(Register::X1, 3), (Register::Y1, 4), (Register::Color, 2)],
        )
        .unwrap();

        assert_eq!(
            gfx.interface().events,
            alloc::vec![
                Event::Wait,
                Event::Write(Register::X1, 3),
                Event::Write(Register::Y1, 4),
                Event::Write(Register::Color, 2),
                Event::Write(Register::Command, 0x0A),
            ]
        );
    }

    #[test]
    fn test_issue_rejects_command_register_operand() {
        let mut gfx = test_accelerator();
        let result = gfx.issue(Command::DrawLine, &[(Register::X1, 1), (Register::Status, 1)]);
        assert!(matches!(
            result,
            Err(Error::InvalidOperand {
                register: Register::Status
            })
        ));
        assert!(gfx.interface().events.is_empty());
    }

    #[test]
    fn test_read_pixel_result_waits_before_reading() {
        let mut mock = MockInterface::new();
        mock.pixel_value = 42;
        let mut gfx = Accelerator::new(mock, Config::default());
        gfx.issue(Command::GetPixel, &[(Register::X1, 1), (Register::Y1, 1)])
            .unwrap();
        let color = gfx.read_pixel_result().unwrap();

        assert_eq!(color, Color::new(42));
        let events = &gfx.interface().events;
        assert_eq!(
            &events[events.len() - 2..],
            &[Event::Wait, Event::Read(Register::Color)]
        );
    }

    #[test]
    fn test_set_background_color_issues_no_command() {
        let mut gfx = test_accelerator();
        gfx.set_background_color(Color::BLUE).unwrap();
        assert!(gfx.interface().issued.is_empty());
        assert_eq!(
            gfx.interface().events,
            alloc::vec![Event::Wait, Event::Write(Register::BackgroundColor, 4)]
        );
    }

    #[test]
    fn test_busy_failure_stops_before_any_write() {
        let mut gfx = Accelerator::new(StuckInterface::default(), Config::default());
        let result = gfx.issue(Command::DrawCircle, &[(Register::X1, 10)]);
        assert!(matches!(result, Err(Error::Interface(Stuck))));
        assert_eq!(gfx.interface().writes, 0);
    }
}
