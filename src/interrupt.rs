//! Interrupt configuration and status
//!
//! The VCNL4020 has a single open-drain INT pin that can fire on four events:
//! - High threshold exceeded
//! - Low threshold exceeded
//! - ALS data ready
//! - Proximity data ready
//!
//! The driver only configures the sources and reads/clears the status flags;
//! wiring the physical interrupt line is up to the embedding application.
//!
//! # Example
//!
//! ```ignore
//! # use vcnl4020::{Vcnl4020Driver, InterruptConfig, InterruptCount, ThresholdSource};
//! # let mut sensor: Vcnl4020Driver<_> = todo!();
//! // Fire on proximity crossing the programmed thresholds twice in a row
//! let config = InterruptConfig {
//!     threshold: true,
//!     threshold_source: ThresholdSource::Proximity,
//!     count: InterruptCount::Count2,
//!     ..Default::default()
//! };
//! sensor.configure_interrupts(&config)?;
//!
//! let status = sensor.interrupt_status()?;
//! if status.th_high {
//!     sensor.clear_interrupts(false, false, false, true)?;
//! }
//! # Ok::<(), vcnl4020::Error<()>>(())
//! ```

/// Interrupt status register masks
pub(crate) mod masks {
    /// High threshold exceeded
    pub const TH_HIGH: u8 = 0x01;
    /// Low threshold exceeded
    pub const TH_LOW: u8 = 0x02;
    /// ALS data ready
    pub const ALS_READY: u8 = 0x04;
    /// Proximity data ready
    pub const PROX_READY: u8 = 0x08;
}

/// Number of consecutive out-of-threshold measurements before INT fires
///
/// Higher counts filter short spikes at the cost of interrupt latency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptCount {
    /// 1 measurement (default)
    #[default]
    Count1 = 0,
    /// 2 consecutive measurements
    Count2 = 1,
    /// 4 consecutive measurements
    Count4 = 2,
    /// 8 consecutive measurements
    Count8 = 3,
    /// 16 consecutive measurements
    Count16 = 4,
    /// 32 consecutive measurements
    Count32 = 5,
    /// 64 consecutive measurements
    Count64 = 6,
    /// 128 consecutive measurements
    Count128 = 7,
}

impl InterruptCount {
    /// Get the number of consecutive measurements (2^n)
    #[must_use]
    pub const fn count(self) -> u8 {
        1 << (self as u8)
    }

    /// Decode from the raw 3-bit register field
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x07 {
            1 => Self::Count2,
            2 => Self::Count4,
            3 => Self::Count8,
            4 => Self::Count16,
            5 => Self::Count32,
            6 => Self::Count64,
            7 => Self::Count128,
            _ => Self::Count1,
        }
    }
}

/// Which measurement the threshold interrupt compares against
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdSource {
    /// Compare proximity results against the thresholds (default)
    #[default]
    Proximity = 0,
    /// Compare ambient light results against the thresholds
    Als = 1,
}

/// Interrupt source configuration
///
/// All five fields are written together in one register update; there is no
/// partial-update variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig {
    /// Fire when a proximity measurement completes
    pub prox_ready: bool,
    /// Fire when an ambient light measurement completes
    pub als_ready: bool,
    /// Fire when results leave the programmed threshold window
    pub threshold: bool,
    /// Measurement the threshold window applies to
    pub threshold_source: ThresholdSource,
    /// Consecutive out-of-window measurements required
    pub count: InterruptCount,
}

impl InterruptConfig {
    /// Create configuration firing on both data-ready events (no thresholds)
    pub const fn data_ready() -> Self {
        Self {
            prox_ready: true,
            als_ready: true,
            threshold: false,
            threshold_source: ThresholdSource::Proximity,
            count: InterruptCount::Count1,
        }
    }

    /// Check if any interrupt source is enabled
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.prox_ready || self.als_ready || self.threshold
    }
}

/// Interrupt status flags (lower 4 bits of the status register)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// High threshold exceeded
    pub th_high: bool,
    /// Low threshold exceeded
    pub th_low: bool,
    /// ALS data ready
    pub als_ready: bool,
    /// Proximity data ready
    pub prox_ready: bool,
}

impl InterruptStatus {
    /// Decode from the raw status register value (upper 4 bits ignored)
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            th_high: raw & masks::TH_HIGH != 0,
            th_low: raw & masks::TH_LOW != 0,
            als_ready: raw & masks::ALS_READY != 0,
            prox_ready: raw & masks::PROX_READY != 0,
        }
    }

    /// Convert the flags back to the raw register bit positions
    #[must_use]
    pub const fn to_raw(&self) -> u8 {
        let mut value = 0u8;
        if self.th_high {
            value |= masks::TH_HIGH;
        }
        if self.th_low {
            value |= masks::TH_LOW;
        }
        if self.als_ready {
            value |= masks::ALS_READY;
        }
        if self.prox_ready {
            value |= masks::PROX_READY;
        }
        value
    }

    /// Check if any interrupt flag is set
    #[must_use]
    pub const fn any_set(&self) -> bool {
        self.th_high || self.th_low || self.als_ready || self.prox_ready
    }
}
