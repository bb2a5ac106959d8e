//! Proximity measurement configuration types
//!
//! The proximity sensor measures reflected IR from the on-chip emitter. Its
//! self-timed measurement rate and the squarewave carrier frequency driving
//! the emitter are both register bit-fields, exposed here as typed enums.

/// Rate of self-timed proximity measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProxRate {
    /// 1.95 measurements/s (default)
    Hz1_95 = 0,
    /// 3.90625 measurements/s
    Hz3_90 = 1,
    /// 7.8125 measurements/s
    Hz7_81 = 2,
    /// 16.625 measurements/s
    Hz16_62 = 3,
    /// 31.25 measurements/s
    Hz31_25 = 4,
    /// 62.5 measurements/s
    Hz62_5 = 5,
    /// 125 measurements/s
    Hz125 = 6,
    /// 250 measurements/s (fastest)
    Hz250 = 7,
}

impl ProxRate {
    /// Get the measurement rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz1_95 => 1.95,
            Self::Hz3_90 => 3.906_25,
            Self::Hz7_81 => 7.8125,
            Self::Hz16_62 => 16.625,
            Self::Hz31_25 => 31.25,
            Self::Hz62_5 => 62.5,
            Self::Hz125 => 125.0,
            Self::Hz250 => 250.0,
        }
    }

    /// Decode from the raw 3-bit register field
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x07 {
            1 => Self::Hz3_90,
            2 => Self::Hz7_81,
            3 => Self::Hz16_62,
            4 => Self::Hz31_25,
            5 => Self::Hz62_5,
            6 => Self::Hz125,
            7 => Self::Hz250,
            _ => Self::Hz1_95,
        }
    }
}

/// Proximity IR test signal carrier frequency
///
/// Advanced tuning only; 390.625 kHz is the recommended default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProxFrequency {
    /// 390.625 kHz (default)
    Khz390 = 0,
    /// 781.25 kHz
    Khz781 = 1,
    /// 1.5625 MHz
    Mhz1_5625 = 2,
    /// 3.125 MHz
    Mhz3_125 = 3,
}

impl ProxFrequency {
    /// Get the carrier frequency in Hz
    #[must_use]
    pub const fn hz(self) -> u32 {
        match self {
            Self::Khz390 => 390_625,
            Self::Khz781 => 781_250,
            Self::Mhz1_5625 => 1_562_500,
            Self::Mhz3_125 => 3_125_000,
        }
    }

    /// Decode from the raw 2-bit register field
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x03 {
            1 => Self::Khz781,
            2 => Self::Mhz1_5625,
            3 => Self::Mhz3_125,
            _ => Self::Khz390,
        }
    }
}
