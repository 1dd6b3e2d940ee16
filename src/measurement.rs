//! Decoded measurement records and their unit-tagged wrappers.
//!
//! The decode functions in [`crate::decode`] produce the plain records in
//! this module. [`Measurement`] attaches a unit tag for display; the
//! classification helpers ([`AirQualityBand`], [`AqiAccuracy`]) map the
//! device-reported index values to qualitative descriptions.

use core::fmt;

use crate::registers::SOUND_FREQ_BANDS;

/// Physical unit attached to a [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Celsius,
    Kilopascal,
    Percent,
    Ohm,
    PartsPerMillion,
    /// Particle count per litre (PPD42).
    PartsPerLitre,
    /// Particle mass concentration (SDS011).
    MicrogramsPerCubicMetre,
    Lux,
    Decibel,
}

impl Unit {
    /// Display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Kilopascal => "kPa",
            Unit::Percent => "%",
            Unit::Ohm => "Ω",
            Unit::PartsPerMillion => "ppm",
            Unit::PartsPerLitre => "ppL",
            Unit::MicrogramsPerCubicMetre => "µg/m³",
            Unit::Lux => "lux",
            Unit::Decibel => "dB",
        }
    }
}

/// A numeric value with an optional unit tag.
///
/// Index-style values (AQI, particle concentration) carry no unit.
///
/// # Example
/// ```rust
/// use ms430_driver::{Measurement, Unit};
/// let t = Measurement::new(10.5, Unit::Celsius);
/// assert_eq!(format!("{t}"), "10.5 °C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub value: f32,
    pub unit: Option<Unit>,
}

impl Measurement {
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// A bare index value without a unit.
    pub const fn dimensionless(value: f32) -> Self {
        Self { value, unit: None }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit.symbol()),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Temperature, pressure, humidity and gas sensor resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AirData {
    /// Temperature in °C.
    pub temperature: f32,
    /// Barometric pressure in Pa.
    pub pressure: u32,
    /// Relative humidity in %.
    pub humidity: f32,
    /// Gas sensor resistance in Ω.
    pub gas_sensor_resistance: u32,
}

impl AirData {
    pub fn temperature(&self) -> Measurement {
        Measurement::new(self.temperature, Unit::Celsius)
    }

    /// Pressure converted from the raw Pa reading to kPa.
    pub fn pressure_kpa(&self) -> Measurement {
        Measurement::new(self.pressure as f32 / 1000.0, Unit::Kilopascal)
    }

    pub fn humidity(&self) -> Measurement {
        Measurement::new(self.humidity, Unit::Percent)
    }

    pub fn gas_sensor_resistance(&self) -> Measurement {
        Measurement::new(self.gas_sensor_resistance as f32, Unit::Ohm)
    }
}

/// Air quality index, its accuracy, CO2 and breath-VOC estimates.
///
/// Only meaningful in cycle mode; the device needs repeated cycles to
/// accumulate calibration state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AirQualityData {
    /// Air quality index, 0..500+.
    pub aqi: f32,
    /// Estimated CO2 concentration in ppm.
    pub co2: f32,
    /// Equivalent breath-VOC concentration in ppm.
    pub b_voc: f32,
    /// Calibration accuracy of the index.
    pub aqi_accuracy: AqiAccuracy,
}

impl AirQualityData {
    /// Qualitative band for the index value.
    pub fn band(&self) -> AirQualityBand {
        AirQualityBand::from_index(self.aqi)
    }

    pub fn co2(&self) -> Measurement {
        Measurement::new(self.co2, Unit::PartsPerMillion)
    }

    pub fn b_voc(&self) -> Measurement {
        Measurement::new(self.b_voc, Unit::PartsPerMillion)
    }
}

impl fmt::Display for AirQualityData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AQI {} ({}), accuracy {} ({})",
            self.aqi,
            self.band(),
            self.aqi_accuracy,
            self.aqi_accuracy.calibration_status()
        )
    }
}

/// Qualitative air quality bands, inclusive on both range ends except the
/// open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AirQualityBand {
    /// AQI 0..=50
    Good,
    /// AQI 51..=100
    Acceptable,
    /// AQI 101..=150
    Substandard,
    /// AQI 151..=200
    Poor,
    /// AQI 201..=300
    Bad,
    /// AQI 301..=500
    VeryBad,
    /// AQI above 500
    Extreme,
}

impl AirQualityBand {
    pub fn from_index(aqi: f32) -> Self {
        if aqi <= 50.0 {
            AirQualityBand::Good
        } else if aqi <= 100.0 {
            AirQualityBand::Acceptable
        } else if aqi <= 150.0 {
            AirQualityBand::Substandard
        } else if aqi <= 200.0 {
            AirQualityBand::Poor
        } else if aqi <= 300.0 {
            AirQualityBand::Bad
        } else if aqi <= 500.0 {
            AirQualityBand::VeryBad
        } else {
            AirQualityBand::Extreme
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AirQualityBand::Good => "good",
            AirQualityBand::Acceptable => "acceptable",
            AirQualityBand::Substandard => "substandard",
            AirQualityBand::Poor => "poor",
            AirQualityBand::Bad => "bad",
            AirQualityBand::VeryBad => "very bad",
            AirQualityBand::Extreme => "extreme",
        }
    }
}

impl fmt::Display for AirQualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calibration accuracy of the air quality index, reported by the device
/// as a single byte 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiAccuracy {
    /// 0: self-calibration incomplete, index not yet usable.
    NotAvailable,
    /// 1: low accuracy, self-calibration ongoing.
    Low,
    /// 2: medium accuracy, self-calibration ongoing.
    Medium,
    /// 3: high accuracy, self-calibration complete.
    High,
}

impl AqiAccuracy {
    /// Map the raw status byte. The device only emits 0..=3; anything else
    /// is treated as not-yet-available.
    pub const fn from_byte(value: u8) -> Self {
        match value {
            1 => AqiAccuracy::Low,
            2 => AqiAccuracy::Medium,
            3 => AqiAccuracy::High,
            _ => AqiAccuracy::NotAvailable,
        }
    }

    /// Paired self-calibration status description.
    pub const fn calibration_status(self) -> &'static str {
        match self {
            AqiAccuracy::NotAvailable => "calibration incomplete",
            AqiAccuracy::Low => "calibration ongoing",
            AqiAccuracy::Medium => "calibration ongoing",
            AqiAccuracy::High => "calibration complete",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AqiAccuracy::NotAvailable => "not available",
            AqiAccuracy::Low => "low",
            AqiAccuracy::Medium => "medium",
            AqiAccuracy::High => "high",
        }
    }
}

impl fmt::Display for AqiAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Illumination and white light level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightData {
    /// Illuminance in lux.
    pub illumination: f32,
    /// Unscaled white light level.
    pub white: u16,
}

impl LightData {
    pub fn illumination(&self) -> Measurement {
        Measurement::new(self.illumination, Unit::Lux)
    }

    pub fn white(&self) -> Measurement {
        Measurement::dimensionless(self.white as f32)
    }
}

/// A-weighted sound pressure level, per-band levels, peak amplitude and
/// the microphone stability flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoundData {
    /// A-weighted SPL in dBA.
    pub spl: f32,
    /// SPL per frequency band in dB, lowest band first.
    pub spl_bands: [f32; SOUND_FREQ_BANDS],
    /// Peak sound amplitude in mPa.
    pub peak_amplitude: f32,
    /// False while the microphone output is still settling after power-on.
    pub stable: bool,
}

impl SoundData {
    pub fn spl(&self) -> Measurement {
        Measurement::new(self.spl, Unit::Decibel)
    }

    pub fn spl_band(&self, band: usize) -> Measurement {
        Measurement::new(self.spl_bands[band], Unit::Decibel)
    }
}

/// Particle sensor readings. Only meaningful after a particle sensor has
/// been configured via
/// [`configure_particle_sensor`](crate::Ms430::configure_particle_sensor).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParticleData {
    /// Sensor duty cycle in %.
    pub duty_cycle: f32,
    /// Particle concentration; the unit depends on the attached sensor
    /// (ppL for the PPD42, µg/m³ for the SDS011).
    pub concentration: f32,
    /// False until the sensor has run long enough to produce valid data.
    pub valid: bool,
}

impl ParticleData {
    pub fn duty_cycle(&self) -> Measurement {
        Measurement::new(self.duty_cycle, Unit::Percent)
    }

    pub fn concentration(&self) -> Measurement {
        Measurement::dimensionless(self.concentration)
    }

    /// Concentration tagged with the unit of the attached sensor.
    pub fn concentration_for(&self, sensor: crate::ParticleSensor) -> Measurement {
        match sensor.concentration_unit() {
            Some(unit) => Measurement::new(self.concentration, unit),
            None => Measurement::dimensionless(self.concentration),
        }
    }
}
