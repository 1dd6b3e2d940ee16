//! Driver configuration: device address, polling behaviour and the
//! device-side selections (cycle period, particle sensor type).

use crate::measurement::Unit;
use crate::registers::{I2C_ADDR_SB_CLOSED, I2C_ADDR_SB_OPEN};

/// Measurement period for cycle mode.
///
/// Selected when entering cycle mode and fixed until the next mode change.
/// Air quality self-calibration accumulates fastest with the 3 s period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CyclePeriod {
    /// One measurement every 3 seconds.
    #[default]
    ThreeSeconds = 0,
    /// One measurement every 100 seconds.
    HundredSeconds = 1,
    /// One measurement every 300 seconds.
    ThreeHundredSeconds = 2,
}

/// External particle sensor attached to the MS430's particle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ParticleSensor {
    /// No particle sensor connected; particle data is not valid.
    #[default]
    Off = 0,
    /// Shinyei PPD42, concentration reported in ppL.
    Ppd42 = 1,
    /// Nova SDS011, concentration reported in µg/m³.
    Sds011 = 2,
}

impl ParticleSensor {
    /// Unit of the reported particle concentration, `None` when no sensor
    /// is attached.
    pub const fn concentration_unit(self) -> Option<Unit> {
        match self {
            ParticleSensor::Off => None,
            ParticleSensor::Ppd42 => Some(Unit::PartsPerLitre),
            ParticleSensor::Sds011 => Some(Unit::MicrogramsPerCubicMetre),
        }
    }
}

/// Static driver configuration.
///
/// The poll interval is the cooperative sleep between ready-line checks;
/// `timeout_ms` bounds every wait loop and turns unbounded blocking into a
/// `Timeout` error. `None` reproduces the unbounded behaviour of the
/// device's reference host software.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit device address, determined by the solder bridge.
    pub address: u8,
    /// Sleep between ready-line polls, in milliseconds.
    pub poll_interval_ms: u32,
    /// Upper bound for the wait loops, in milliseconds.
    pub timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: I2C_ADDR_SB_OPEN,
            poll_interval_ms: 50,
            timeout_ms: None,
        }
    }
}

/// Fluent builder for [`Config`].
///
/// ```rust
/// use ms430_driver::Ms430Builder;
///
/// let config = Ms430Builder::new()
///     .poll_interval_ms(20)
///     .timeout_ms(2_000)
///     .build();
/// assert_eq!(config.poll_interval_ms, 20);
/// ```
#[derive(Default)]
pub struct Ms430Builder {
    config: Config,
}

impl Ms430Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit 7-bit device address.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Address the device with its solder bridge closed (0x70).
    pub fn solder_bridge_closed(mut self) -> Self {
        self.config.address = I2C_ADDR_SB_CLOSED;
        self
    }

    /// Sleep between ready-line polls.
    pub fn poll_interval_ms(mut self, interval: u32) -> Self {
        self.config.poll_interval_ms = interval;
        self
    }

    /// Bound the wait loops; they fail with `Timeout` once exceeded.
    pub fn timeout_ms(mut self, timeout: u32) -> Self {
        self.config.timeout_ms = Some(timeout);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
