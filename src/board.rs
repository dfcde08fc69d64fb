//! # FRDM-K64F board pin setup
//!
//! Default configuration of the Arduino R3 header pins of the FRDM-K64F board.
//!
//! The board routes PTA0, PTA1 and PTA2 to the JTAG/SWD signals of the
//! OpenSDAv2 debug interface as well as to the header pins D8, D3 and D5. The
//! K64 configures these pins for JTAG/SWD at reset, so they should only be
//! re-configured if the debug interface is not used. See
//! [`BoardConfig::preserve_jtag_io_pins`].
//!
//! Change the function codes in [`FRDM_K64F_PINS`] to alter the default setup.
use crate::device::{DeviceRegistry, PINMUX_NAME};
use crate::function::{Mux, PinFunction};
use crate::pin::*;
use crate::pinmux::{errno, PinmuxApi, PinmuxError};
use core::fmt;
use heapless::Vec;

/// Number of entries of the full board table
pub const NUM_BOARD_PINS: usize = 22;

/// Desired function of a single pin
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinConfig {
    pub pin: PinId,
    pub func: PinFunction,
}

impl PinConfig {
    pub const fn new(pin: PinId, func: PinFunction) -> Self {
        PinConfig { pin, func }
    }
}

/// Board table entry
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardPin {
    pub config: PinConfig,
    /// The pin doubles as a JTAG/SWD signal of the debug interface
    pub debug_interface: bool,
}

const fn pin(pin: PinId, func: PinFunction) -> BoardPin {
    BoardPin {
        config: PinConfig::new(pin, func),
        debug_interface: false,
    }
}

const fn debug_pin(pin: PinId, func: PinFunction) -> BoardPin {
    BoardPin {
        config: PinConfig::new(pin, func),
        debug_interface: true,
    }
}

const I2C: PinFunction = PinFunction::alt(Mux::Alt5).union(PinFunction::OPEN_DRAIN);

/// Arduino header pins in the order of the board documentation
pub static FRDM_K64F_PINS: [BoardPin; NUM_BOARD_PINS] = [
    pin(PTC16, PinFunction::GPIO),
    pin(PTC17, PinFunction::GPIO),
    pin(PTB9, PinFunction::GPIO),
    debug_pin(PTA1, PinFunction::GPIO),
    pin(PTB23, PinFunction::GPIO),
    debug_pin(PTA2, PinFunction::GPIO),
    pin(PTC2, PinFunction::GPIO),
    pin(PTC3, PinFunction::GPIO),
    debug_pin(PTA0, PinFunction::GPIO),
    pin(PTC4, PinFunction::GPIO),
    pin(PTD0, PinFunction::GPIO),
    pin(PTD2, PinFunction::GPIO),
    pin(PTD3, PinFunction::GPIO),
    pin(PTD1, PinFunction::GPIO),
    // I2C0_SDA
    pin(PTE25, I2C),
    // I2C0_SCL
    pin(PTE24, I2C),
    // ADC0_SE12, analog in 0
    pin(PTB2, PinFunction::ANALOG),
    // ADC0_SE13, analog in 1
    pin(PTB3, PinFunction::ANALOG),
    // ADC1_SE14, analog in 2
    pin(PTB10, PinFunction::ANALOG),
    // ADC1_SE15, analog in 3
    pin(PTB11, PinFunction::ANALOG),
    // ADC1_SE7b, analog in 4
    pin(PTC11, PinFunction::ANALOG),
    // ADC1_SE6b, analog in 5
    pin(PTC10, PinFunction::ANALOG),
];

//==================================================================================================
//  Board configuration
//==================================================================================================

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Leave the debug interface pins in their reset configuration
    pub preserve_jtag_io_pins: bool,
}

impl BoardConfig {
    /// Configuration selected by the `preserve-jtag-io-pins` cargo feature
    pub const fn from_features() -> Self {
        BoardConfig {
            preserve_jtag_io_pins: cfg!(feature = "preserve-jtag-io-pins"),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::from_features()
    }
}

/// Entry sequence of the board table for the given configuration
pub fn pin_table(board: &BoardConfig) -> impl Iterator<Item = PinConfig> {
    let preserve_jtag = board.preserve_jtag_io_pins;
    FRDM_K64F_PINS
        .iter()
        .filter(move |entry| !(preserve_jtag && entry.debug_interface))
        .map(|entry| entry.config)
}

//==================================================================================================
//  Table application
//==================================================================================================

/// Outcome of a best-effort table application
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PinReport {
    applied: usize,
    failed: usize,
    failures: Vec<(PinId, PinmuxError), NUM_BOARD_PINS>,
}

impl PinReport {
    /// Number of pins which were written
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Number of pins which could not be written
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Failed pins with their error. Only the first [`NUM_BOARD_PINS`]
    /// failures are kept, [`PinReport::failed`] counts all of them.
    pub fn failures(&self) -> &[(PinId, PinmuxError)] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Apply every entry, continuing past pins which fail
///
/// A failing pin stays in its reset configuration. The failures are returned
/// so the caller can decide whether a partial setup is acceptable.
pub fn apply_table<I>(pinmux: &mut dyn PinmuxApi, entries: I) -> PinReport
where
    I: IntoIterator<Item = PinConfig>,
{
    let mut report = PinReport::default();
    for PinConfig { pin, func } in entries {
        match pinmux.set(pin, func) {
            Ok(()) => {
                log::debug!("{} set to {:#06x}", pin, func.bits());
                report.applied += 1;
            }
            Err(e) => {
                log::warn!("{} left at reset configuration: {}", pin, e);
                report.failed += 1;
                report.failures.push((pin, e)).ok();
            }
        }
    }
    report
}

//==================================================================================================
//  Board initialization
//==================================================================================================

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InitError {
    /// A required device is not registered
    DependencyMissing(&'static str),
}

impl InitError {
    /// Negative status code of the error
    pub const fn errno(&self) -> i32 {
        match self {
            InitError::DependencyMissing(_) => -errno::EPERM,
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::DependencyMissing(name) => write!(f, "device {} not found", name),
        }
    }
}

/// Apply the FRDM-K64F pin table through the registered pin multiplexer
///
/// Must run after the ports are clocked and before any driver using the
/// header pins is initialized. Returns [`InitError::DependencyMissing`]
/// without touching any pin if no device is registered as [`PINMUX_NAME`].
pub fn frdm_k64f_pin_init<const N: usize>(
    registry: &mut DeviceRegistry<'_, N>,
    board: &BoardConfig,
) -> Result<PinReport, InitError> {
    let pinmux = match registry.get_binding(PINMUX_NAME) {
        Some(pinmux) => pinmux,
        None => {
            log::error!("FRDM-K64F pin setup: {} not registered", PINMUX_NAME);
            return Err(InitError::DependencyMissing(PINMUX_NAME));
        }
    };
    let report = apply_table(pinmux, pin_table(board));
    log::info!(
        "FRDM-K64F pin setup: {} pins configured, {} failed",
        report.applied(),
        report.failed()
    );
    Ok(report)
}
