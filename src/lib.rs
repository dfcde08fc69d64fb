//! # Pin multiplexing for the Kinetis K64 family
//!
//! Each K64 pin has a pin control register (PORTx_PCRn) which selects the
//! peripheral function routed to the pin and its electrical attributes. This
//! crate resolves flat pin identifiers to those registers and applies the
//! default pin setup of the FRDM-K64F board at boot.
//!
//! - [`pin`]: flat pin identifiers and ports
//! - [`function`]: function codes written into the control registers
//! - [`config`]: memory map and enabled ports
//! - [`reg`]: register surface
//! - [`pinmux`]: the resolver and register writer
//! - [`device`]: lookup of components by name
//! - [`board`]: the FRDM-K64F pin table and its initialization routine
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod device;
pub mod function;
pub mod pin;
pub mod pinmux;
pub mod prelude;
pub mod reg;

pub use pinmux::{Pinmux, PinmuxApi, PinmuxError};
