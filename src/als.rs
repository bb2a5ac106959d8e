//! Ambient light measurement configuration types
//!
//! Rate and averaging share the ambient light parameter register with the
//! continuous-conversion and auto-offset-compensation bits; each accessor on
//! the driver touches only its own field.

/// Rate of self-timed ambient light measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmbientRate {
    /// 1 sample/s
    Sps1 = 0,
    /// 2 samples/s (default)
    Sps2 = 1,
    /// 3 samples/s
    Sps3 = 2,
    /// 4 samples/s
    Sps4 = 3,
    /// 5 samples/s
    Sps5 = 4,
    /// 6 samples/s
    Sps6 = 5,
    /// 8 samples/s
    Sps8 = 6,
    /// 10 samples/s (fastest)
    Sps10 = 7,
}

impl AmbientRate {
    /// Get the measurement rate in samples per second
    #[must_use]
    pub const fn samples_per_sec(self) -> u8 {
        match self {
            Self::Sps1 => 1,
            Self::Sps2 => 2,
            Self::Sps3 => 3,
            Self::Sps4 => 4,
            Self::Sps5 => 5,
            Self::Sps6 => 6,
            Self::Sps8 => 8,
            Self::Sps10 => 10,
        }
    }

    /// Decode from the raw 3-bit register field
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x07 {
            0 => Self::Sps1,
            2 => Self::Sps3,
            3 => Self::Sps4,
            4 => Self::Sps5,
            5 => Self::Sps6,
            6 => Self::Sps8,
            7 => Self::Sps10,
            _ => Self::Sps2,
        }
    }
}

/// Number of single conversions averaged into one ambient light result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Averaging {
    /// 1 conversion per measurement
    Samples1 = 0,
    /// 2 conversions averaged
    Samples2 = 1,
    /// 4 conversions averaged
    Samples4 = 2,
    /// 8 conversions averaged
    Samples8 = 3,
    /// 16 conversions averaged
    Samples16 = 4,
    /// 32 conversions averaged (default)
    Samples32 = 5,
    /// 64 conversions averaged
    Samples64 = 6,
    /// 128 conversions averaged
    Samples128 = 7,
}

impl Averaging {
    /// Get the number of conversions averaged (2^n)
    #[must_use]
    pub const fn samples(self) -> u8 {
        1 << (self as u8)
    }

    /// Decode from the raw 3-bit register field
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0x07 {
            1 => Self::Samples2,
            2 => Self::Samples4,
            3 => Self::Samples8,
            4 => Self::Samples16,
            5 => Self::Samples32,
            6 => Self::Samples64,
            7 => Self::Samples128,
            _ => Self::Samples1,
        }
    }
}
