#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod als;
pub mod device;
pub mod interface;
pub mod interrupt;
pub mod proximity;
pub mod registers;

// Re-export main types
pub use als::{AmbientRate, Averaging};
pub use device::Vcnl4020Driver;
pub use interface::I2cInterface;
pub use interrupt::{InterruptConfig, InterruptCount, InterruptStatus, ThresholdSource};
pub use proximity::{ProxFrequency, ProxRate};

/// VCNL4020 I2C address (fixed, not configurable in hardware)
pub const I2C_ADDRESS: u8 = 0x13;

/// Expected value of the product ID revision register
///
/// Upper nibble is the product ID (0x2), lower nibble the silicon revision
/// (0x1). This driver talks to this one revision only.
pub const PRODUCT_REVISION_VALUE: u8 = 0x21;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Unexpected product ID revision register value (contains the actual value read)
    InvalidDevice(u8),
    /// Device never acknowledged its address during initialization
    InitializationTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
