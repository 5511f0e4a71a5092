//! Recording register file shared by the unit tests

use alloc::vec::Vec;

use crate::command::Command;
use crate::interface::GraphicsInterface;
use crate::register::Register;

/// One access observed by the mock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Wait,
    Write(Register, u16),
    Read(Register),
}

/// Operand snapshot taken when a command was written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Issued {
    pub command: Command,
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
    pub color: u16,
}

#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub events: Vec<Event>,
    pub issued: Vec<Issued>,
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
    color: u16,
    background: u16,
    /// Value the Color register takes after a `GetPixel` command
    pub pixel_value: u16,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Write(..)))
            .count()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.issued.iter().map(|issued| issued.command).collect()
    }
}

impl GraphicsInterface for MockInterface {
    type Error = core::convert::Infallible;

    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Self::Error> {
        self.events.push(Event::Write(register, value));
        match register {
            Register::Command | Register::Status => {
                if let Ok(command) = Command::try_from(value) {
                    self.issued.push(Issued {
                        command,
                        x1: self.x1,
                        y1: self.y1,
                        x2: self.x2,
                        y2: self.y2,
                        color: self.color,
                    });
                    if command == Command::GetPixel {
                        self.color = self.pixel_value;
                    }
                }
            }
            Register::X1 => self.x1 = value,
            Register::Y1 => self.y1 = value,
            Register::X2 => self.x2 = value,
            Register::Y2 => self.y2 = value,
            Register::Color => self.color = value,
            Register::BackgroundColor => self.background = value,
        }
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u16, Self::Error> {
        self.events.push(Event::Read(register));
        Ok(match register {
            Register::Command | Register::Status => crate::register::STATUS_IDLE,
            Register::X1 => self.x1,
            Register::Y1 => self.y1,
            Register::X2 => self.x2,
            Register::Y2 => self.y2,
            Register::Color => self.color,
            Register::BackgroundColor => self.background,
        })
    }

    fn busy_wait(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Wait);
        Ok(())
    }
}

/// Interface whose idle wait always fails
#[derive(Debug, Default)]
pub(crate) struct StuckInterface {
    pub writes: usize,
}

#[derive(Debug, PartialEq)]
pub(crate) struct Stuck;

impl GraphicsInterface for StuckInterface {
    type Error = Stuck;

    fn write_register(&mut self, _register: Register, _value: u16) -> Result<(), Self::Error> {
        self.writes += 1;
        Ok(())
    }

    fn read_register(&mut self, _register: Register) -> Result<u16, Self::Error> {
        Ok(0)
    }

    fn busy_wait(&mut self) -> Result<(), Self::Error> {
        Err(Stuck)
    }
}
