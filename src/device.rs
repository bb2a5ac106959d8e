//! High-level driver API for the VCNL4020
//!
//! This module provides the user-facing interface to the sensor: presence
//! probing and power-up configuration, typed accessors for every register
//! field, measurement reads and interrupt handling.

use crate::registers::Vcnl4020 as RegisterDevice;
use crate::{Error, PRODUCT_REVISION_VALUE};

use crate::als::{AmbientRate, Averaging};
use crate::interrupt::{InterruptConfig, InterruptStatus};
use crate::proximity::{ProxFrequency, ProxRate};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Attempts to reach the device during initialization
const PRESENCE_RETRIES: u8 = 5;
/// Delay between presence probe attempts in milliseconds
const PRESENCE_RETRY_DELAY_MS: u32 = 10;

/// Main driver for the VCNL4020
///
/// Holds no state beyond the register device handle; every operation is a
/// direct translation between typed values and register bit-fields. The
/// driver assumes exclusive ownership of the bus transport for the duration
/// of each call and provides no internal locking.
pub struct Vcnl4020Driver<I> {
    device: RegisterDevice<I>,
}

impl<I> Vcnl4020Driver<I> {
    /// Create a new VCNL4020 driver instance
    ///
    /// This does not touch the bus. Call [`init()`](Self::init) to probe the
    /// device and configure continuous measurement.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Consume the driver and return the bus interface
    pub fn release(self) -> I {
        self.device.interface
    }
}

#[cfg(not(feature = "async"))]
impl<I> Vcnl4020Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Probe the device and configure continuous measurement
    ///
    /// Retries the bus presence check up to 5 times with a 10 ms delay
    /// between attempts, then validates the product ID revision register
    /// against the single supported silicon revision (0x21).
    ///
    /// On success the canonical power-up sequence runs: all measurement
    /// modes and on-demand triggers disabled, proximity rate set to the
    /// fastest supported value, LED current 200 mA, ambient rate 10
    /// samples/s, averaging 1 sample, interrupts configured for both
    /// data-ready events with a trigger count of 1, default carrier
    /// frequency, then ALS + proximity + self-timed measurement enabled.
    ///
    /// # Errors
    ///
    /// - [`Error::InitializationTimeout`] if the device never responds
    /// - [`Error::InvalidDevice`] if the revision register is not 0x21
    /// - [`Error::Bus`] if configuration traffic fails after the probe
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let mut revision = None;
        for _ in 0..PRESENCE_RETRIES {
            if let Ok(reg) = self.device.product_id().read() {
                revision = Some(reg.revision());
                break;
            }
            delay.delay_ms(PRESENCE_RETRY_DELAY_MS);
        }

        let Some(revision) = revision else {
            return Err(Error::InitializationTimeout);
        };
        if revision != PRODUCT_REVISION_VALUE {
            return Err(Error::InvalidDevice(revision));
        }

        // Quiesce the device before reconfiguring it
        self.enable(false, false, false)?;
        self.set_on_demand(false, false)?;

        // Fastest rates so first readings appear immediately; callers can
        // configure lower power afterwards
        self.set_prox_rate(ProxRate::Hz250)?;
        self.set_prox_led_current_ma(200)?;
        self.set_ambient_rate(AmbientRate::Sps10)?;
        self.set_ambient_averaging(Averaging::Samples1)?;

        self.configure_interrupts(&InterruptConfig::data_ready())?;
        self.set_prox_frequency(ProxFrequency::Khz390)?;

        self.enable(true, true, true)?;

        Ok(())
    }

    /// Read the product ID revision register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn product_revision(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.product_id().read()?.revision())
    }

    /// Trigger single on-demand measurements
    ///
    /// The bits self-clear in hardware when the requested measurement
    /// completes, which is why no getter is exposed.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_on_demand(&mut self, als: bool, prox: bool) -> Result<(), Error<I::Error>> {
        self.device.command().modify(|w| {
            w.set_als_od(als);
            w.set_prox_od(prox);
        })?;
        Ok(())
    }

    /// Enable or disable the ALS, proximity and self-timed measurement modes
    ///
    /// The periodic ALS and proximity measurements only run while the
    /// self-timed state machine is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable(&mut self, als: bool, prox: bool, selftimed: bool) -> Result<(), Error<I::Error>> {
        self.device.command().modify(|w| {
            w.set_als_en(als);
            w.set_prox_en(prox);
            w.set_selftimed_en(selftimed);
        })?;
        Ok(())
    }

    /// Set the self-timed proximity measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_prox_rate(&mut self, rate: ProxRate) -> Result<(), Error<I::Error>> {
        self.device.prox_rate().modify(|w| {
            w.set_rate(rate as u8);
        })?;
        Ok(())
    }

    /// Get the self-timed proximity measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn prox_rate(&mut self) -> Result<ProxRate, Error<I::Error>> {
        Ok(ProxRate::from_raw(self.device.prox_rate().read()?.rate()))
    }

    /// Set the IR LED current for proximity measurement in mA
    ///
    /// The register stores the current in 10 mA steps; the supplied value
    /// truncates by integer division, so `set_prox_led_current_ma(255)`
    /// programs 250 mA. Values above the 200 mA absolute maximum are not
    /// rejected here.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_prox_led_current_ma(&mut self, current_ma: u8) -> Result<(), Error<I::Error>> {
        self.device.ir_led_current().modify(|w| {
            w.set_current(current_ma / 10);
        })?;
        Ok(())
    }

    /// Get the configured IR LED current in mA
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn prox_led_current_ma(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.ir_led_current().read()?.current() * 10)
    }

    /// Enable or disable continuous conversion mode
    ///
    /// Speeds up on-demand ambient light measurements. Only meant for
    /// on-demand use; do not combine with self-timed mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_continuous_conversion(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ambient_param().modify(|w| {
            w.set_continuous_conversion(enable);
        })?;
        Ok(())
    }

    /// Enable or disable automatic offset compensation
    ///
    /// When enabled the sensor measures its offset before each ambient light
    /// measurement and subtracts it from the reading, compensating package
    /// and temperature drift.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_auto_offset_compensation(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ambient_param().modify(|w| {
            w.set_auto_offset_comp(enable);
        })?;
        Ok(())
    }

    /// Set the self-timed ambient light measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_rate(&mut self, rate: AmbientRate) -> Result<(), Error<I::Error>> {
        self.device.ambient_param().modify(|w| {
            w.set_rate(rate as u8);
        })?;
        Ok(())
    }

    /// Get the self-timed ambient light measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ambient_rate(&mut self) -> Result<AmbientRate, Error<I::Error>> {
        Ok(AmbientRate::from_raw(
            self.device.ambient_param().read()?.rate(),
        ))
    }

    /// Set the ambient light averaging factor
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_averaging(&mut self, avg: Averaging) -> Result<(), Error<I::Error>> {
        self.device.ambient_param().modify(|w| {
            w.set_averaging(avg as u8);
        })?;
        Ok(())
    }

    /// Get the ambient light averaging factor
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ambient_averaging(&mut self) -> Result<Averaging, Error<I::Error>> {
        Ok(Averaging::from_raw(
            self.device.ambient_param().read()?.averaging(),
        ))
    }

    /// Set the proximity IR carrier frequency
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_prox_frequency(&mut self, freq: ProxFrequency) -> Result<(), Error<I::Error>> {
        self.device.prox_adjust().modify(|w| {
            w.set_frequency(freq as u8);
        })?;
        Ok(())
    }

    /// Get the proximity IR carrier frequency
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn prox_frequency(&mut self) -> Result<ProxFrequency, Error<I::Error>> {
        Ok(ProxFrequency::from_raw(
            self.device.prox_adjust().read()?.frequency(),
        ))
    }

    /// Configure the interrupt sources
    ///
    /// All five fields of the interrupt control register are written in one
    /// register update.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupts(&mut self, config: &InterruptConfig) -> Result<(), Error<I::Error>> {
        self.device.interrupt_ctrl().modify(|w| {
            w.set_count_exceed(config.count as u8);
            w.set_prox_ready_en(config.prox_ready);
            w.set_als_ready_en(config.als_ready);
            w.set_thresh_en(config.threshold);
            w.set_thresh_sel(config.threshold_source as u8 != 0);
        })?;
        Ok(())
    }

    /// Read the interrupt status flags
    ///
    /// Reading does not clear the flags; use
    /// [`clear_interrupts()`](Self::clear_interrupts).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let reg = self.device.interrupt_status().read()?;
        Ok(InterruptStatus {
            th_high: reg.th_high(),
            th_low: reg.th_low(),
            als_ready: reg.als_ready(),
            prox_ready: reg.prox_ready(),
        })
    }

    /// Clear the selected interrupt status flags
    ///
    /// The status register is write-1-to-clear: the current flags are read,
    /// the selected ones ORed in, and the result written back in a single
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_interrupts(
        &mut self,
        prox_ready: bool,
        als_ready: bool,
        th_low: bool,
        th_high: bool,
    ) -> Result<(), Error<I::Error>> {
        let current = self.device.interrupt_status().read()?;
        self.device.interrupt_status().write(|w| {
            w.set_prox_ready(current.prox_ready() || prox_ready);
            w.set_als_ready(current.als_ready() || als_ready);
            w.set_th_low(current.th_low() || th_low);
            w.set_th_high(current.th_high() || th_high);
        })?;
        Ok(())
    }

    /// Check if ambient light data is ready
    ///
    /// The flag lives in the command register and is not cleared by reading.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_ambient_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.command().read()?.als_data_rdy())
    }

    /// Check if proximity data is ready
    ///
    /// The flag lives in the command register and is not cleared by reading.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_prox_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.command().read()?.prox_data_rdy())
    }

    /// Read the 16-bit ambient light measurement result
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_ambient(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.ambient_result().read()?.value())
    }

    /// Read the 16-bit proximity measurement result
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_proximity(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.prox_result().read()?.value())
    }

    /// Set the low threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_low_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.low_threshold().write(|w| {
            w.set_value(threshold);
        })?;
        Ok(())
    }

    /// Get the low threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn low_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.low_threshold().read()?.value())
    }

    /// Set the high threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_high_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.high_threshold().write(|w| {
            w.set_value(threshold);
        })?;
        Ok(())
    }

    /// Get the high threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn high_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.high_threshold().read()?.value())
    }
}

#[cfg(feature = "async")]
impl<I> Vcnl4020Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Probe the device and configure continuous measurement
    ///
    /// Async variant of the blocking `init()`; see that method for the full
    /// power-up sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::InitializationTimeout`] if the device never responds
    /// - [`Error::InvalidDevice`] if the revision register is not 0x21
    /// - [`Error::Bus`] if configuration traffic fails after the probe
    pub async fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let mut revision = None;
        for _ in 0..PRESENCE_RETRIES {
            if let Ok(reg) = self.device.product_id().read_async().await {
                revision = Some(reg.revision());
                break;
            }
            delay.delay_ms(PRESENCE_RETRY_DELAY_MS).await;
        }

        let Some(revision) = revision else {
            return Err(Error::InitializationTimeout);
        };
        if revision != PRODUCT_REVISION_VALUE {
            return Err(Error::InvalidDevice(revision));
        }

        self.enable(false, false, false).await?;
        self.set_on_demand(false, false).await?;

        self.set_prox_rate(ProxRate::Hz250).await?;
        self.set_prox_led_current_ma(200).await?;
        self.set_ambient_rate(AmbientRate::Sps10).await?;
        self.set_ambient_averaging(Averaging::Samples1).await?;

        self.configure_interrupts(&InterruptConfig::data_ready())
            .await?;
        self.set_prox_frequency(ProxFrequency::Khz390).await?;

        self.enable(true, true, true).await?;

        Ok(())
    }

    /// Read the product ID revision register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn product_revision(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.product_id().read_async().await?.revision())
    }

    /// Trigger single on-demand measurements
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_on_demand(&mut self, als: bool, prox: bool) -> Result<(), Error<I::Error>> {
        self.device
            .command()
            .modify_async(|w| {
                w.set_als_od(als);
                w.set_prox_od(prox);
            })
            .await?;
        Ok(())
    }

    /// Enable or disable the ALS, proximity and self-timed measurement modes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn enable(
        &mut self,
        als: bool,
        prox: bool,
        selftimed: bool,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .command()
            .modify_async(|w| {
                w.set_als_en(als);
                w.set_prox_en(prox);
                w.set_selftimed_en(selftimed);
            })
            .await?;
        Ok(())
    }

    /// Set the self-timed proximity measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_prox_rate(&mut self, rate: ProxRate) -> Result<(), Error<I::Error>> {
        self.device
            .prox_rate()
            .modify_async(|w| {
                w.set_rate(rate as u8);
            })
            .await?;
        Ok(())
    }

    /// Get the self-timed proximity measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn prox_rate(&mut self) -> Result<ProxRate, Error<I::Error>> {
        Ok(ProxRate::from_raw(
            self.device.prox_rate().read_async().await?.rate(),
        ))
    }

    /// Set the IR LED current for proximity measurement in mA
    ///
    /// The register stores the current in 10 mA steps; the supplied value
    /// truncates by integer division.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_prox_led_current_ma(&mut self, current_ma: u8) -> Result<(), Error<I::Error>> {
        self.device
            .ir_led_current()
            .modify_async(|w| {
                w.set_current(current_ma / 10);
            })
            .await?;
        Ok(())
    }

    /// Get the configured IR LED current in mA
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn prox_led_current_ma(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.ir_led_current().read_async().await?.current() * 10)
    }

    /// Enable or disable continuous conversion mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_continuous_conversion(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ambient_param()
            .modify_async(|w| {
                w.set_continuous_conversion(enable);
            })
            .await?;
        Ok(())
    }

    /// Enable or disable automatic offset compensation
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_auto_offset_compensation(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .ambient_param()
            .modify_async(|w| {
                w.set_auto_offset_comp(enable);
            })
            .await?;
        Ok(())
    }

    /// Set the self-timed ambient light measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_ambient_rate(&mut self, rate: AmbientRate) -> Result<(), Error<I::Error>> {
        self.device
            .ambient_param()
            .modify_async(|w| {
                w.set_rate(rate as u8);
            })
            .await?;
        Ok(())
    }

    /// Get the self-timed ambient light measurement rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn ambient_rate(&mut self) -> Result<AmbientRate, Error<I::Error>> {
        Ok(AmbientRate::from_raw(
            self.device.ambient_param().read_async().await?.rate(),
        ))
    }

    /// Set the ambient light averaging factor
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_ambient_averaging(&mut self, avg: Averaging) -> Result<(), Error<I::Error>> {
        self.device
            .ambient_param()
            .modify_async(|w| {
                w.set_averaging(avg as u8);
            })
            .await?;
        Ok(())
    }

    /// Get the ambient light averaging factor
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn ambient_averaging(&mut self) -> Result<Averaging, Error<I::Error>> {
        Ok(Averaging::from_raw(
            self.device.ambient_param().read_async().await?.averaging(),
        ))
    }

    /// Set the proximity IR carrier frequency
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_prox_frequency(&mut self, freq: ProxFrequency) -> Result<(), Error<I::Error>> {
        self.device
            .prox_adjust()
            .modify_async(|w| {
                w.set_frequency(freq as u8);
            })
            .await?;
        Ok(())
    }

    /// Get the proximity IR carrier frequency
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn prox_frequency(&mut self) -> Result<ProxFrequency, Error<I::Error>> {
        Ok(ProxFrequency::from_raw(
            self.device.prox_adjust().read_async().await?.frequency(),
        ))
    }

    /// Configure the interrupt sources
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_interrupts(
        &mut self,
        config: &InterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .interrupt_ctrl()
            .modify_async(|w| {
                w.set_count_exceed(config.count as u8);
                w.set_prox_ready_en(config.prox_ready);
                w.set_als_ready_en(config.als_ready);
                w.set_thresh_en(config.threshold);
                w.set_thresh_sel(config.threshold_source as u8 != 0);
            })
            .await?;
        Ok(())
    }

    /// Read the interrupt status flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let reg = self.device.interrupt_status().read_async().await?;
        Ok(InterruptStatus {
            th_high: reg.th_high(),
            th_low: reg.th_low(),
            als_ready: reg.als_ready(),
            prox_ready: reg.prox_ready(),
        })
    }

    /// Clear the selected interrupt status flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn clear_interrupts(
        &mut self,
        prox_ready: bool,
        als_ready: bool,
        th_low: bool,
        th_high: bool,
    ) -> Result<(), Error<I::Error>> {
        let current = self.device.interrupt_status().read_async().await?;
        self.device
            .interrupt_status()
            .write_async(|w| {
                w.set_prox_ready(current.prox_ready() || prox_ready);
                w.set_als_ready(current.als_ready() || als_ready);
                w.set_th_low(current.th_low() || th_low);
                w.set_th_high(current.th_high() || th_high);
            })
            .await?;
        Ok(())
    }

    /// Check if ambient light data is ready
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_ambient_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.command().read_async().await?.als_data_rdy())
    }

    /// Check if proximity data is ready
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_prox_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.command().read_async().await?.prox_data_rdy())
    }

    /// Read the 16-bit ambient light measurement result
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_ambient(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.ambient_result().read_async().await?.value())
    }

    /// Read the 16-bit proximity measurement result
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_proximity(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.prox_result().read_async().await?.value())
    }

    /// Set the low threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_low_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device
            .low_threshold()
            .write_async(|w| {
                w.set_value(threshold);
            })
            .await?;
        Ok(())
    }

    /// Get the low threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn low_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.low_threshold().read_async().await?.value())
    }

    /// Set the high threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_high_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device
            .high_threshold()
            .write_async(|w| {
                w.set_value(threshold);
            })
            .await?;
        Ok(())
    }

    /// Get the high threshold for the threshold interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn high_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.high_threshold().read_async().await?.value())
    }
}
