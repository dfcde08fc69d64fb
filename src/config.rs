//! # Pin multiplexer configuration
//!
//! The port base addresses are part of the build configuration. A port which
//! is disabled has no base address at all, it is not mapped to zero. By default
//! the enabled ports follow the `port-a` to `port-e` cargo features.
use crate::pin::{Port, NUM_PINS, NUM_PORTS, PINS_PER_PORT};

/// PORTA base address. The other ports follow at [`K64_PORT_SPACING`].
pub const K64_PORTA_BASE: u32 = 0x4004_9000;
pub const K64_PORT_SPACING: u32 = 0x1000;
/// Distance between two pin control registers
pub const K64_PCR_STRIDE: u32 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinmuxConfig {
    port_base: [Option<u32>; NUM_PORTS],
    num_pins: u32,
    pins_per_port: u32,
    register_stride: u32,
}

impl PinmuxConfig {
    /// Configuration with every port disabled
    pub const fn empty() -> Self {
        PinmuxConfig {
            port_base: [None; NUM_PORTS],
            num_pins: NUM_PINS,
            pins_per_port: PINS_PER_PORT,
            register_stride: K64_PCR_STRIDE,
        }
    }

    /// K64 memory map with the ports selected by the cargo features
    pub const fn k64() -> Self {
        let mut cfg = Self::empty();
        if cfg!(feature = "port-a") {
            cfg = cfg.with_port(Port::A, k64_port_base(Port::A));
        }
        if cfg!(feature = "port-b") {
            cfg = cfg.with_port(Port::B, k64_port_base(Port::B));
        }
        if cfg!(feature = "port-c") {
            cfg = cfg.with_port(Port::C, k64_port_base(Port::C));
        }
        if cfg!(feature = "port-d") {
            cfg = cfg.with_port(Port::D, k64_port_base(Port::D));
        }
        if cfg!(feature = "port-e") {
            cfg = cfg.with_port(Port::E, k64_port_base(Port::E));
        }
        cfg
    }

    /// K64 memory map with all ports enabled, independent of the cargo features
    pub const fn k64_all_ports() -> Self {
        let mut cfg = Self::empty();
        let mut idx = 0;
        while idx < NUM_PORTS {
            let port = Port::ALL[idx];
            cfg = cfg.with_port(port, k64_port_base(port));
            idx += 1;
        }
        cfg
    }

    pub const fn with_port(mut self, port: Port, base: u32) -> Self {
        self.port_base[port.index()] = Some(base);
        self
    }

    pub const fn without_port(mut self, port: Port) -> Self {
        self.port_base[port.index()] = None;
        self
    }

    /// Pin identifiers starting at `num_pins` are rejected as unsupported
    pub const fn with_num_pins(mut self, num_pins: u32) -> Self {
        self.num_pins = num_pins;
        self
    }

    pub const fn with_register_stride(mut self, stride: u32) -> Self {
        self.register_stride = stride;
        self
    }

    /// Base address of the port, `None` if the port is disabled
    #[inline]
    pub const fn port_base(&self, port: Port) -> Option<u32> {
        self.port_base[port.index()]
    }

    #[inline]
    pub const fn is_enabled(&self, port: Port) -> bool {
        self.port_base[port.index()].is_some()
    }

    #[inline]
    pub const fn num_pins(&self) -> u32 {
        self.num_pins
    }

    #[inline]
    pub const fn pins_per_port(&self) -> u32 {
        self.pins_per_port
    }

    #[inline]
    pub const fn register_stride(&self) -> u32 {
        self.register_stride
    }
}

impl Default for PinmuxConfig {
    fn default() -> Self {
        Self::k64()
    }
}

const fn k64_port_base(port: Port) -> u32 {
    K64_PORTA_BASE + port as u32 * K64_PORT_SPACING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k64_memory_map() {
        let cfg = PinmuxConfig::k64_all_ports();
        assert_eq!(cfg.port_base(Port::A), Some(0x4004_9000));
        assert_eq!(cfg.port_base(Port::B), Some(0x4004_A000));
        assert_eq!(cfg.port_base(Port::C), Some(0x4004_B000));
        assert_eq!(cfg.port_base(Port::D), Some(0x4004_C000));
        assert_eq!(cfg.port_base(Port::E), Some(0x4004_D000));
        assert_eq!(cfg.num_pins(), 160);
        assert_eq!(cfg.pins_per_port(), 32);
        assert_eq!(cfg.register_stride(), 4);
    }

    #[test]
    fn disabled_port_has_no_address() {
        let cfg = PinmuxConfig::k64_all_ports().without_port(Port::C);
        assert!(!cfg.is_enabled(Port::C));
        assert_eq!(cfg.port_base(Port::C), None);
        assert!(cfg.is_enabled(Port::D));

        let empty = PinmuxConfig::empty();
        assert!(Port::ALL.iter().all(|port| !empty.is_enabled(*port)));
    }

    #[test]
    fn default_follows_features() {
        let cfg = PinmuxConfig::default();
        assert_eq!(cfg.is_enabled(Port::A), cfg!(feature = "port-a"));
        assert_eq!(cfg.is_enabled(Port::E), cfg!(feature = "port-e"));
    }
}
