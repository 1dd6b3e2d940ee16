//! Protocol constants for the MS430.
//!
//! Register addresses, command bytes and data block lengths are a frozen
//! contract taken from the Metriful MS430 datasheet. Nothing in here is
//! derived at runtime.

/// 7-bit I2C address with the solder bridge open (factory default).
pub const I2C_ADDR_SB_OPEN: u8 = 0x71;
/// 7-bit I2C address with the solder bridge closed.
pub const I2C_ADDR_SB_CLOSED: u8 = 0x70;

/// Trigger a single on-demand measurement.
pub const ON_DEMAND_MEASURE_CMD: u8 = 0xE1;
/// Soft-reset; returns the device to standby.
pub const RESET_CMD: u8 = 0xE2;
/// Enter cycle mode with the period previously written to
/// [`CYCLE_TIME_PERIOD_REG`].
pub const CYCLE_MODE_CMD: u8 = 0xE4;

/// Cycle period selection register (one byte, see `CyclePeriod`).
pub const CYCLE_TIME_PERIOD_REG: u8 = 0x89;
/// Particle sensor type selection register (one byte, see `ParticleSensor`).
pub const PARTICLE_SENSOR_SELECT_REG: u8 = 0x07;

pub const AIR_DATA_READ: u8 = 0x10;
pub const AIR_QUALITY_DATA_READ: u8 = 0x11;
pub const LIGHT_DATA_READ: u8 = 0x12;
pub const SOUND_DATA_READ: u8 = 0x13;
pub const PARTICLE_DATA_READ: u8 = 0x14;

pub const AIR_DATA_BYTES: usize = 12;
pub const AIR_QUALITY_DATA_BYTES: usize = 10;
pub const LIGHT_DATA_BYTES: usize = 5;
pub const SOUND_DATA_BYTES: usize = 18;
pub const PARTICLE_DATA_BYTES: usize = 6;

/// Number of sound frequency bands reported by the device.
pub const SOUND_FREQ_BANDS: usize = 6;

/// Largest data block of any category (the sound block).
pub const MAX_DATA_BYTES: usize = SOUND_DATA_BYTES;

/// Low 7 bits of the first temperature byte hold the integer magnitude.
pub const TEMPERATURE_VALUE_MASK: u8 = 0x7F;
/// High bit of the first temperature byte is the sign flag.
pub const TEMPERATURE_SIGN_MASK: u8 = 0x80;

/// The five readable data categories of the MS430.
///
/// Each category maps to one read register and one fixed block length.
/// Because the enum is exhaustive, an unknown category cannot be expressed
/// at all; the lookup is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// Temperature, pressure, humidity, gas sensor resistance.
    Air,
    /// AQI, AQI accuracy, CO2, breath-VOC. Only valid in cycle mode.
    AirQuality,
    /// Illumination and white light level.
    Light,
    /// Sound pressure levels, band levels, peak amplitude, stability.
    Sound,
    /// Particle sensor duty cycle, concentration and validity.
    Particle,
}

impl Category {
    /// Read register for this category's data block.
    pub const fn register(self) -> u8 {
        match self {
            Category::Air => AIR_DATA_READ,
            Category::AirQuality => AIR_QUALITY_DATA_READ,
            Category::Light => LIGHT_DATA_READ,
            Category::Sound => SOUND_DATA_READ,
            Category::Particle => PARTICLE_DATA_READ,
        }
    }

    /// Exact data block length in bytes. Any other transfer size is a
    /// device contract violation.
    pub const fn data_len(self) -> usize {
        match self {
            Category::Air => AIR_DATA_BYTES,
            Category::AirQuality => AIR_QUALITY_DATA_BYTES,
            Category::Light => LIGHT_DATA_BYTES,
            Category::Sound => SOUND_DATA_BYTES,
            Category::Particle => PARTICLE_DATA_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_lengths_match_register_layout() {
        // air: temp(2) + pressure(4) + humidity(2) + gas(4)
        assert_eq!(Category::Air.data_len(), 12);
        // air quality: aqi(3) + co2(3) + bvoc(3) + accuracy(1)
        assert_eq!(Category::AirQuality.data_len(), 10);
        // light: illumination(3) + white(2)
        assert_eq!(Category::Light.data_len(), 5);
        // sound: spl(2) + bands(2*6) + peak(3) + stable(1)
        assert_eq!(Category::Sound.data_len(), 2 + 2 * SOUND_FREQ_BANDS + 3 + 1);
        // particle: duty(2) + concentration(3) + valid(1)
        assert_eq!(Category::Particle.data_len(), 6);
    }

    #[test]
    fn no_block_exceeds_scratch_size() {
        for cat in [
            Category::Air,
            Category::AirQuality,
            Category::Light,
            Category::Sound,
            Category::Particle,
        ] {
            assert!(cat.data_len() <= MAX_DATA_BYTES);
        }
    }
}
