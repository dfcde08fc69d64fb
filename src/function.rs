//! # Function codes
//!
//! A [`PinFunction`] is the raw word written into a pin control register. The
//! [`Pinmux`](crate::pinmux::Pinmux) never interprets it, so any value can be
//! built with [`PinFunction::from_bits_retain`]. The helpers in this module follow the
//! PORTx_PCRn layout of the K64:
//!
//! | Bits  | Field                      |
//! |-------|----------------------------|
//! | 0     | PS, pull select (1 = up)   |
//! | 1     | PE, pull enable            |
//! | 2     | SRE, slow slew rate        |
//! | 4     | PFE, passive filter        |
//! | 5     | ODE, open drain            |
//! | 6     | DSE, high drive strength   |
//! | 10:8  | MUX, function select       |
//! | 15    | LK, lock until next reset  |
//!
//! Attribute flags are combined with the function select by bitwise OR:
//!
//! ```
//! use k64_pinmux::function::{Mux, PinFunction};
//! let i2c_sda = PinFunction::alt(Mux::Alt5) | PinFunction::OPEN_DRAIN;
//! assert_eq!(i2c_sda.bits(), 0x520);
//! ```
use bitflags::bitflags;

const MUX_SHIFT: u32 = 8;
const MUX_MASK: u32 = 0b111 << MUX_SHIFT;

/// Function select for the MUX field
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
pub enum Mux {
    /// Pin disabled, analog function
    Alt0 = 0,
    /// GPIO
    Alt1 = 1,
    Alt2 = 2,
    Alt3 = 3,
    Alt4 = 4,
    Alt5 = 5,
    Alt6 = 6,
    Alt7 = 7,
}

impl Mux {
    const fn from_field(field: u32) -> Self {
        match field & 0b111 {
            0 => Mux::Alt0,
            1 => Mux::Alt1,
            2 => Mux::Alt2,
            3 => Mux::Alt3,
            4 => Mux::Alt4,
            5 => Mux::Alt5,
            6 => Mux::Alt6,
            _ => Mux::Alt7,
        }
    }
}

bitflags! {
    /// Opaque pin control word
    ///
    /// Bits without a named flag are kept as they are, the word is written to
    /// the register verbatim.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct PinFunction: u32 {
        const PULL_SELECT = 1 << 0;
        const PULL_ENABLE = 1 << 1;
        const SLOW_SLEW = 1 << 2;
        const PASSIVE_FILTER = 1 << 4;
        const OPEN_DRAIN = 1 << 5;
        const HIGH_DRIVE = 1 << 6;
        /// Function select field, use [`PinFunction::alt`] to fill it
        const MUX = MUX_MASK;
        const LOCK = 1 << 15;
    }
}

impl PinFunction {
    /// Analog function, digital input buffer disabled
    pub const ANALOG: PinFunction = PinFunction::alt(Mux::Alt0);
    pub const GPIO: PinFunction = PinFunction::alt(Mux::Alt1);

    /// Select an alternate function with no attributes set
    #[inline]
    pub const fn alt(mux: Mux) -> Self {
        PinFunction::from_bits_retain((mux as u32) << MUX_SHIFT)
    }

    pub const fn with_pull_up(self) -> Self {
        self.union(Self::PULL_ENABLE).union(Self::PULL_SELECT)
    }

    pub const fn with_pull_down(self) -> Self {
        self.union(Self::PULL_ENABLE).difference(Self::PULL_SELECT)
    }

    #[inline]
    pub const fn mux(self) -> Mux {
        Mux::from_field((self.bits() & MUX_MASK) >> MUX_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mux_field_position() {
        assert_eq!(PinFunction::ANALOG.bits(), 0x000);
        assert_eq!(PinFunction::GPIO.bits(), 0x100);
        assert_eq!(PinFunction::alt(Mux::Alt7).bits(), 0x700);
        assert_eq!(PinFunction::from_bits_retain(0x520).mux(), Mux::Alt5);
    }

    #[test]
    fn attributes_combine_with_function_select() {
        let func = PinFunction::alt(Mux::Alt5) | PinFunction::OPEN_DRAIN;
        assert_eq!(func.bits(), 0x520);
        assert_eq!(func.mux(), Mux::Alt5);
        assert!(func.contains(PinFunction::OPEN_DRAIN));
        assert!(!func.contains(PinFunction::PULL_ENABLE));

        let mut func = PinFunction::GPIO;
        func |= PinFunction::HIGH_DRIVE;
        assert_eq!(func.bits(), 0x140);
    }

    #[test]
    fn pull_direction() {
        let up = PinFunction::GPIO.with_pull_up();
        assert!(up.contains(PinFunction::PULL_ENABLE | PinFunction::PULL_SELECT));
        let down = up.with_pull_down();
        assert!(down.contains(PinFunction::PULL_ENABLE));
        assert!(!down.contains(PinFunction::PULL_SELECT));
        assert_eq!(down.mux(), Mux::Alt1);
    }

    #[test]
    fn unnamed_bits_are_kept() {
        // IRQC = falling edge, bits 19:16
        let word = 0x000A_0100;
        let func = PinFunction::from_bits_retain(word);
        assert_eq!(func.bits(), word);
        assert_eq!(func.mux(), Mux::Alt1);
        assert_eq!((func | PinFunction::PULL_ENABLE).bits(), word | 0b10);
        assert_eq!(PinFunction::from_bits(word), None);
    }
}
