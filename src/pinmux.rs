//! # Pin multiplexer driver
//!
//! Resolves a flat [`PinId`] to the pin control register of its port and
//! writes [`PinFunction`]s into it. The register address of a pin is
//!
//! ```text
//! base(port) + (id mod pins-per-port) * register-stride
//! ```
//!
//! Writes are single aligned stores of the complete function code, there is
//! no read-modify-write. The driver is meant to be used from a single context,
//! usually the board setup at boot. Concurrent reconfiguration of pins needs
//! external synchronization.
//!
//! ## Example
//!
//! ```no_run
//! use k64_pinmux::pin::PTB21;
//! use k64_pinmux::prelude::*;
//!
//! let mut pinmux = unsafe { Pinmux::k64() };
//! pinmux.set_pin(PTB21, PinFunction::GPIO).unwrap();
//! ```
use crate::config::PinmuxConfig;
use crate::function::PinFunction;
use crate::pin::{PinId, Port};
use crate::reg::{Mmio, RegisterAccess};
use core::fmt;

/// Status codes reported to boot frameworks which only understand integers
pub mod errno {
    /// Operation not permitted, a required device is missing
    pub const EPERM: i32 = 1;
    /// Permission denied, the port of the pin is disabled
    pub const EACCES: i32 = 13;
    /// Invalid argument, the register address does not fit the address space
    pub const EINVAL: i32 = 22;
    /// Not supported, the pin identifier is out of range
    pub const ENOTSUP: i32 = 134;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinmuxError {
    /// Pin identifier is not below the configured pin count
    UnsupportedPin(PinId),
    /// The pin belongs to a port which is disabled in the configuration
    PortUnavailable(Port),
    /// Base address plus register offset of the pin does not fit into 32 bits
    AddressOverflow(PinId),
}

impl PinmuxError {
    /// Negative status code of the error
    pub const fn errno(&self) -> i32 {
        match self {
            PinmuxError::UnsupportedPin(_) => -errno::ENOTSUP,
            PinmuxError::PortUnavailable(_) => -errno::EACCES,
            PinmuxError::AddressOverflow(_) => -errno::EINVAL,
        }
    }
}

impl fmt::Display for PinmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinmuxError::UnsupportedPin(pin) => write!(f, "pin {} is not supported", pin),
            PinmuxError::PortUnavailable(port) => write!(f, "{} is not enabled", port),
            PinmuxError::AddressOverflow(pin) => {
                write!(f, "register address of pin {} overflows", pin)
            }
        }
    }
}

/// Interface of a pin multiplexer as seen by board code and peripheral drivers
pub trait PinmuxApi {
    /// Apply a function code to a pin
    fn set(&mut self, pin: PinId, func: PinFunction) -> Result<(), PinmuxError>;

    /// Read back the current function code of a pin
    fn get(&self, pin: PinId) -> Result<PinFunction, PinmuxError>;
}

//==================================================================================================
//  Pinmux
//==================================================================================================

pub struct Pinmux<R> {
    regs: R,
    cfg: PinmuxConfig,
}

impl Pinmux<Mmio> {
    /// Driver for the pin control registers of the K64, using the ports enabled
    /// by the cargo features
    ///
    /// # Safety
    ///
    /// Only one instance may exist at a time. See [`Mmio::new`].
    pub unsafe fn k64() -> Self {
        Pinmux::new(Mmio::new(), PinmuxConfig::k64())
    }
}

impl<R: RegisterAccess> Pinmux<R> {
    pub fn new(regs: R, cfg: PinmuxConfig) -> Self {
        Pinmux { regs, cfg }
    }

    #[inline]
    pub fn config(&self) -> &PinmuxConfig {
        &self.cfg
    }

    /// Release the register surface
    pub fn release(self) -> R {
        self.regs
    }

    /// Determine the port owning `pin` and its base address
    ///
    /// Any identifier is accepted, identifiers past the start of port E
    /// resolve to port E. Returns [`PinmuxError::PortUnavailable`] if the port
    /// is disabled.
    pub fn port_base(&self, pin: PinId) -> Result<(Port, u32), PinmuxError> {
        let port = pin.port();
        match self.cfg.port_base(port) {
            Some(base) => Ok((port, base)),
            None => Err(PinmuxError::PortUnavailable(port)),
        }
    }

    /// Address of the pin control register of `pin`
    ///
    /// Returns [`PinmuxError::AddressOverflow`] instead of a wrapped address if
    /// the configured base and stride do not fit the 32-bit address space.
    pub fn pcr_address(&self, pin: PinId) -> Result<u32, PinmuxError> {
        if pin.raw() >= self.cfg.num_pins() {
            return Err(PinmuxError::UnsupportedPin(pin));
        }
        let (_, base) = self.port_base(pin)?;
        let offset = pin.raw() % self.cfg.pins_per_port();
        offset
            .checked_mul(self.cfg.register_stride())
            .and_then(|offset| base.checked_add(offset))
            .ok_or(PinmuxError::AddressOverflow(pin))
    }

    /// Write `func` to the control register of `pin`
    ///
    /// Nothing is written if the pin can not be resolved.
    pub fn set_pin(&mut self, pin: PinId, func: PinFunction) -> Result<(), PinmuxError> {
        let addr = self.pcr_address(pin)?;
        log::trace!("{}: {:#010x} <- {:#010x}", pin, addr, func.bits());
        self.regs.write32(addr, func.bits());
        Ok(())
    }

    /// Read the control register of `pin`
    pub fn get_pin(&self, pin: PinId) -> Result<PinFunction, PinmuxError> {
        let addr = self.pcr_address(pin)?;
        Ok(PinFunction::from_bits_retain(self.regs.read32(addr)))
    }
}

impl<R: RegisterAccess> PinmuxApi for Pinmux<R> {
    #[inline]
    fn set(&mut self, pin: PinId, func: PinFunction) -> Result<(), PinmuxError> {
        self.set_pin(pin, func)
    }

    #[inline]
    fn get(&self, pin: PinId) -> Result<PinFunction, PinmuxError> {
        self.get_pin(pin)
    }
}
