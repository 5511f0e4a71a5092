//! Hardware interface abstraction
//!
//! This module provides the [`GraphicsInterface`] trait and the memory-mapped
//! [`Interface`] struct that talks to the accelerator's register file.
//!
//! ## Handshake
//!
//! The accelerator executes one command at a time. Before any command is
//! issued the driver polls the Status register until bit 0 ([`STATUS_IDLE`])
//! reads 1. The device has no other way of reporting completion or failure.
//!
//! ## Example
//!
//! ```ignore
//! use graphics_accel::{Accelerator, Config, Interface, DEFAULT_BASE_ADDRESS};
//!
//! // SAFETY: the accelerator's register file is mapped at DEFAULT_BASE_ADDRESS
//! // and nothing else accesses it.
//! let mut interface = unsafe { Interface::new(DEFAULT_BASE_ADDRESS, delay) };
//! interface.set_busy_timeout(100_000);
//! let mut gfx = Accelerator::new(interface, Config::default());
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;

use crate::register::{Register, STATUS_IDLE};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for raw access to the accelerator's register file
///
/// This trait abstracts over the way the registers are reached, allowing the
/// [`Accelerator`](crate::accelerator::Accelerator) to work with the
/// memory-mapped [`Interface`], a simulator, or a bridge over another bus.
///
/// ## Implementing
///
/// Implementations must perform every access as a single, un-reordered
/// 16-bit transfer: the accelerator latches operands and triggers on the
/// Command write, so the order of writes is part of the protocol.
pub trait GraphicsInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write a 16-bit value to a register
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport fails.
    fn write_register(&mut self, register: Register, value: u16) -> InterfaceResult<(), Self::Error>;

    /// Read a 16-bit value from a register
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport fails.
    fn read_register(&mut self, register: Register) -> InterfaceResult<u16, Self::Error>;

    /// Block until the Status register reports idle
    ///
    /// # Errors
    ///
    /// Implementations may give up after an implementation-specific bound and
    /// return an error. An unbounded wait never returns an error.
    fn busy_wait(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the memory-mapped interface level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError {
    /// The accelerator did not report idle within the configured number of polls
    Timeout,
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout => write!(f, "Timeout waiting for graphics accelerator"),
        }
    }
}

impl core::error::Error for InterfaceError {}

/// Default busy-wait bound in polls (0 = wait forever)
pub const DEFAULT_BUSY_TIMEOUT: u32 = 0;

/// Memory-mapped interface to the accelerator
///
/// Every register access is a volatile 16-bit load or store at
/// `base + register.offset()`.
///
/// ## Type Parameters
///
/// * `D` - Delay used between status polls, implementing [`DelayNs`]
pub struct Interface<D> {
    /// Address of the Command/Status register
    base: usize,
    /// Delay provider for poll spacing
    delay: D,
    /// Maximum number of status polls (0 = unbounded)
    busy_timeout: u32,
    /// Delay between status polls in nanoseconds (0 = spin)
    poll_interval_ns: u32,
}

impl<D> Interface<D>
where
    D: DelayNs,
{
    /// Create a new Interface over the register file at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of the accelerator's register window (or of
    /// at least [`REGISTER_WINDOW_SIZE`](crate::register::REGISTER_WINDOW_SIZE)
    /// bytes of 2-byte aligned memory standing in for it), valid for volatile
    /// reads and writes for as long as the Interface exists. No other code may
    /// access the window while the Interface is alive.
    #[allow(unsafe_code)]
    pub unsafe fn new(base: usize, delay: D) -> Self {
        Self {
            base,
            delay,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            poll_interval_ns: 0,
        }
    }

    /// Set the busy-wait bound in polls
    ///
    /// Default is 0, which waits forever like the bare hardware contract.
    pub fn set_busy_timeout(&mut self, polls: u32) -> &mut Self {
        self.busy_timeout = polls;
        self
    }

    /// Get the current busy-wait bound in polls
    pub fn busy_timeout(&self) -> u32 {
        self.busy_timeout
    }

    /// Set the delay between status polls in nanoseconds
    ///
    /// Default is 0, which spins without calling the delay provider.
    pub fn set_poll_interval_ns(&mut self, interval_ns: u32) -> &mut Self {
        self.poll_interval_ns = interval_ns;
        self
    }

    /// Get the delay between status polls in nanoseconds
    pub fn poll_interval_ns(&self) -> u32 {
        self.poll_interval_ns
    }

    /// Base address of the register window
    pub fn base_address(&self) -> usize {
        self.base
    }

    fn register_ptr(&self, register: Register) -> *mut u16 {
        (self.base + register.offset()) as *mut u16
    }
}

impl<D> GraphicsInterface for Interface<D>
where
    D: DelayNs,
{
    type Error = InterfaceError;

    #[allow(unsafe_code)]
    fn write_register(&mut self, register: Register, value: u16) -> InterfaceResult<(), Self::Error> {
        // SAFETY: `new` requires the window to be valid for volatile access.
        unsafe { core::ptr::write_volatile(self.register_ptr(register), value) };
        Ok(())
    }

    #[allow(unsafe_code)]
    fn read_register(&mut self, register: Register) -> InterfaceResult<u16, Self::Error> {
        // SAFETY: `new` requires the window to be valid for volatile access.
        Ok(unsafe { core::ptr::read_volatile(self.register_ptr(register)) })
    }

    fn busy_wait(&mut self) -> InterfaceResult<(), Self::Error> {
        let mut polls = 0u32;

        loop {
            let status = self.read_register(Register::Status)?;
            if status & STATUS_IDLE == STATUS_IDLE {
                return Ok(());
            }

            if self.poll_interval_ns > 0 {
                self.delay.delay_ns(self.poll_interval_ns);
            } else {
                core::hint::spin_loop();
            }

            polls = polls.saturating_add(1);
            if self.busy_timeout > 0 && polls >= self.busy_timeout {
                log::warn!("graphics accelerator still busy after {polls} polls");
                return Err(InterfaceError::Timeout);
            }
        }
    }
}
