//! Prelude
pub use crate::board::{frdm_k64f_pin_init, BoardConfig, PinConfig};
pub use crate::config::PinmuxConfig;
pub use crate::device::{DeviceRegistry, PINMUX_NAME};
pub use crate::function::{Mux, PinFunction};
pub use crate::pin::{PinId, Port};
pub use crate::pinmux::{Pinmux, PinmuxApi, PinmuxError};
pub use crate::reg::{Mmio, RegisterAccess};
