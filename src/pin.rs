//! # Pin identifiers
//!
//! All pins of the device live in one flat namespace. Every port owns a
//! contiguous range of [`PINS_PER_PORT`] identifiers and the ranges increase
//! from port A to port E, so `PTC16` is identifier `2 * 32 + 16 = 80`.
//!
//! The constants [`PTA0`] to [`PTE31`] name every identifier of the namespace.
//! Not all of them are bonded out on every package.
use core::fmt;
use paste::paste;

/// Number of pin control registers of a single port
pub const PINS_PER_PORT: u32 = 32;

pub const NUM_PORTS: usize = 5;

/// Total number of pin identifiers on the K64
pub const NUM_PINS: u32 = NUM_PORTS as u32 * PINS_PER_PORT;

//==================================================================================================
//  Port
//==================================================================================================

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl Port {
    /// All ports in ascending identifier order
    pub const ALL: [Port; NUM_PORTS] = [Port::A, Port::B, Port::C, Port::D, Port::E];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// First pin identifier owned by this port
    #[inline]
    pub const fn first_pin(self) -> PinId {
        PinId(self as u32 * PINS_PER_PORT)
    }

    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PORT{}", self.letter())
    }
}

//==================================================================================================
//  PinId
//==================================================================================================

/// Flat pin identifier spanning all ports
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(pub(crate) u32);

impl PinId {
    /// Any value is accepted here. Range checks happen when the pin is used.
    #[inline]
    pub const fn new(id: u32) -> Self {
        PinId(id)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Classify the identifier by the first pin of each port, in ascending order.
    ///
    /// Identifiers past the start of port E classify as port E. Whether the
    /// identifier is actually supported is checked by the
    /// [`Pinmux`](crate::pinmux::Pinmux), not here.
    pub const fn port(self) -> Port {
        if self.0 < Port::B.first_pin().0 {
            Port::A
        } else if self.0 < Port::C.first_pin().0 {
            Port::B
        } else if self.0 < Port::D.first_pin().0 {
            Port::C
        } else if self.0 < Port::E.first_pin().0 {
            Port::D
        } else {
            Port::E
        }
    }

    /// Pin number within the owning port
    #[inline]
    pub const fn pin_in_port(self) -> u32 {
        self.0 % PINS_PER_PORT
    }
}

impl From<u32> for PinId {
    fn from(id: u32) -> Self {
        PinId(id)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < NUM_PINS {
            write!(f, "PT{}{}", self.port().letter(), self.pin_in_port())
        } else {
            write!(f, "PIN{}", self.0)
        }
    }
}

//==================================================================================================
//  Pin constants
//==================================================================================================

macro_rules! pin_ids {
    ($($port:ident: [$($num:literal),+ $(,)?]),+ $(,)?) => {
        paste! {
            $(
                $(
                    pub const [<PT $port $num>]: PinId =
                        PinId(Port::$port as u32 * PINS_PER_PORT + $num);
                )+
            )+
        }
    };
}

pin_ids!(
    A: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31
    ],
    B: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31
    ],
    C: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31
    ],
    D: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31
    ],
    E: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_boundaries() {
        assert_eq!(PTA0.raw(), 0);
        assert_eq!(PTB0.raw(), 32);
        assert_eq!(PTC0.raw(), 64);
        assert_eq!(PTD0.raw(), 96);
        assert_eq!(PTE0.raw(), 128);
        assert_eq!(PTE31.raw(), NUM_PINS - 1);
        for port in Port::ALL {
            assert_eq!(port.first_pin().port(), port);
        }
    }

    #[test]
    fn every_id_resolves_to_its_range() {
        for id in 0..NUM_PINS {
            let pin = PinId::new(id);
            let expected = Port::ALL[(id / PINS_PER_PORT) as usize];
            assert_eq!(pin.port(), expected, "pin {}", pin);
            assert_eq!(pin.pin_in_port(), id % PINS_PER_PORT);
        }
        // Last pin before a boundary still belongs to the lower port
        assert_eq!(PinId::new(PTB0.raw() - 1).port(), Port::A);
        assert_eq!(PinId::new(PTE0.raw() - 1).port(), Port::D);
    }

    #[test]
    fn ids_past_the_namespace_classify_as_port_e() {
        assert_eq!(PinId::new(NUM_PINS).port(), Port::E);
        assert_eq!(PinId::new(u32::MAX).port(), Port::E);
    }

    #[test]
    fn display_names() {
        assert_eq!(PTC16.to_string(), "PTC16");
        assert_eq!(PTA0.to_string(), "PTA0");
        assert_eq!(PTE25.to_string(), "PTE25");
        assert_eq!(PinId::new(200).to_string(), "PIN200");
        assert_eq!(Port::D.to_string(), "PORTD");
    }
}
