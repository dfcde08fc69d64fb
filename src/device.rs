//! # Named device lookup
//!
//! Board code does not own the pin multiplexer. It looks the driver up by a
//! fixed name in a [`DeviceRegistry`] which the boot code filled beforehand.
use crate::pinmux::PinmuxApi;
use core::fmt;
use heapless::Vec;

/// Name under which the pin multiplexer driver is registered
pub const PINMUX_NAME: &str = "PINMUX";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// All slots of the registry are in use
    Full,
    /// A device with the same name is already registered
    Duplicate(&'static str),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Full => write!(f, "device registry is full"),
            RegistryError::Duplicate(name) => write!(f, "device {} already registered", name),
        }
    }
}

/// Fixed capacity table of devices with their names
pub struct DeviceRegistry<'a, const N: usize> {
    devices: Vec<(&'static str, &'a mut dyn PinmuxApi), N>,
}

impl<'a, const N: usize> DeviceRegistry<'a, N> {
    pub const fn new() -> Self {
        DeviceRegistry { devices: Vec::new() }
    }

    pub fn register(
        &mut self,
        name: &'static str,
        device: &'a mut dyn PinmuxApi,
    ) -> Result<(), RegistryError> {
        if self.devices.iter().any(|(registered, _)| *registered == name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.devices
            .push((name, device))
            .map_err(|_| RegistryError::Full)
    }

    /// Look up a device by name
    pub fn get_binding(&mut self, name: &str) -> Option<&mut (dyn PinmuxApi + 'a)> {
        self.devices
            .iter_mut()
            .find(|(registered, _)| *registered == name)
            .map(|(_, device)| &mut **device)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a, const N: usize> Default for DeviceRegistry<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}
