//! # Register surface
//!
//! The [`Pinmux`](crate::pinmux::Pinmux) performs all of its register accesses
//! through [`RegisterAccess`]. On the target this is [`Mmio`], which accesses
//! the physical address space with volatile 32-bit loads and stores.

/// 32-bit register access by absolute address
pub trait RegisterAccess {
    /// Store `value` to the register at `addr`. `addr` must be 4-byte aligned.
    fn write32(&mut self, addr: u32, value: u32);

    /// Load the register at `addr`. `addr` must be 4-byte aligned.
    fn read32(&self, addr: u32) -> u32;
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &mut R {
    #[inline]
    fn write32(&mut self, addr: u32, value: u32) {
        (**self).write32(addr, value)
    }

    #[inline]
    fn read32(&self, addr: u32) -> u32 {
        (**self).read32(addr)
    }
}

/// Memory-mapped register access
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a new instance of [`Mmio`]
    ///
    /// # Safety
    ///
    /// Every address passed to [`RegisterAccess`] must be a valid, aligned
    /// register of the device and the caller must have exclusive access to the
    /// pin control registers while this instance is in use.
    #[inline]
    pub const unsafe fn new() -> Self {
        Mmio { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline]
    fn write32(&mut self, addr: u32, value: u32) {
        // Safety: Validity of the address is guaranteed by the constructor contract
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) };
        // Complete the store before a peripheral driver uses the pin
        #[cfg(target_arch = "arm")]
        cortex_m::asm::dsb();
    }

    #[inline]
    fn read32(&self, addr: u32) -> u32 {
        // Safety: Validity of the address is guaranteed by the constructor contract
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }
}

/// Simulated register file which records every store in order
#[cfg(test)]
#[derive(Default, Debug)]
pub(crate) struct SimRegisters {
    regs: std::collections::BTreeMap<u32, u32>,
    pub writes: std::vec::Vec<(u32, u32)>,
}

#[cfg(test)]
impl RegisterAccess for SimRegisters {
    fn write32(&mut self, addr: u32, value: u32) {
        assert_eq!(addr % 4, 0, "unaligned store to {:#010x}", addr);
        self.regs.insert(addr, value);
        self.writes.push((addr, value));
    }

    fn read32(&self, addr: u32) -> u32 {
        assert_eq!(addr % 4, 0, "unaligned load from {:#010x}", addr);
        self.regs.get(&addr).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_registers_default_to_zero() {
        let regs = SimRegisters::default();
        assert_eq!(regs.read32(0x4004_9000), 0);
    }

    #[test]
    fn sim_registers_record_writes_in_order() {
        let mut regs = SimRegisters::default();
        regs.write32(0x4004_B040, 0x100);
        regs.write32(0x4004_9000, 0x700);
        regs.write32(0x4004_B040, 0x000);
        assert_eq!(
            regs.writes,
            [(0x4004_B040, 0x100), (0x4004_9000, 0x700), (0x4004_B040, 0x000)]
        );
        assert_eq!(regs.read32(0x4004_B040), 0);
        assert_eq!(regs.read32(0x4004_9000), 0x700);
    }
}
