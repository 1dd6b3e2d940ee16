//! Raw block decoding.
//!
//! Pure functions turning the fixed-size register blocks of the MS430 into
//! the records in [`crate::measurement`]. Each function expects exactly the
//! block length of its category; [`crate::Ms430::fetch`] validates the
//! transfer size before a block can reach this layer.
//!
//! Fractional bytes come in two scales which must not be mixed up:
//! temperature, humidity and SPL use tenths, illumination, peak amplitude
//! and the particle fields use hundredths.

use crate::measurement::{AirData, AirQualityData, AqiAccuracy, LightData, ParticleData, SoundData};
use crate::registers::{SOUND_FREQ_BANDS, TEMPERATURE_SIGN_MASK, TEMPERATURE_VALUE_MASK};

fn u16_le(lo: u8, hi: u8) -> u16 {
    lo as u16 | (hi as u16) << 8
}

fn u32_le(bytes: &[u8]) -> u32 {
    bytes[0] as u32 | (bytes[1] as u32) << 8 | (bytes[2] as u32) << 16 | (bytes[3] as u32) << 24
}

/// Integer byte plus a tenths fraction byte.
fn tenths(int: u8, frac: u8) -> f32 {
    int as f32 + frac as f32 / 10.0
}

/// 16-bit integer plus a tenths fraction byte.
fn tenths16(lo: u8, hi: u8, frac: u8) -> f32 {
    u16_le(lo, hi) as f32 + frac as f32 / 10.0
}

/// Integer byte plus a hundredths fraction byte.
fn hundredths(int: u8, frac: u8) -> f32 {
    int as f32 + frac as f32 / 100.0
}

/// 16-bit integer plus a hundredths fraction byte.
fn hundredths16(lo: u8, hi: u8, frac: u8) -> f32 {
    u16_le(lo, hi) as f32 + frac as f32 / 100.0
}

/// Temperature: low 7 bits of byte 0 are the integer magnitude, the high
/// bit is the sign flag, byte 1 holds unsigned tenths.
fn temperature(raw: &[u8]) -> f32 {
    let t = tenths(raw[0] & TEMPERATURE_VALUE_MASK, raw[1]);
    if raw[0] & TEMPERATURE_SIGN_MASK == 0 {
        t
    } else {
        -t
    }
}

/// Decode the 12-byte air data block.
pub fn air(raw: &[u8]) -> AirData {
    AirData {
        temperature: temperature(raw),
        pressure: u32_le(&raw[2..6]),
        humidity: tenths(raw[6], raw[7]),
        gas_sensor_resistance: u32_le(&raw[8..12]),
    }
}

/// Decode the 10-byte air quality data block.
pub fn air_quality(raw: &[u8]) -> AirQualityData {
    AirQualityData {
        aqi: tenths16(raw[0], raw[1], raw[2]),
        co2: tenths16(raw[3], raw[4], raw[5]),
        b_voc: tenths16(raw[6], raw[7], raw[8]),
        aqi_accuracy: AqiAccuracy::from_byte(raw[9]),
    }
}

/// Decode the 5-byte light data block. Illumination carries a hundredths
/// fraction, unlike the tenths used by the air block.
pub fn light(raw: &[u8]) -> LightData {
    LightData {
        illumination: hundredths16(raw[0], raw[1], raw[2]),
        white: u16_le(raw[3], raw[4]),
    }
}

/// Decode the 18-byte sound data block.
///
/// Band i's integer part sits at offset `2 + i` and its tenths fraction at
/// `2 + i + N` for N bands; the peak amplitude and stability flag follow
/// the band arrays.
pub fn sound(raw: &[u8]) -> SoundData {
    let mut spl_bands = [0.0; SOUND_FREQ_BANDS];
    for (i, band) in spl_bands.iter_mut().enumerate() {
        *band = tenths(raw[2 + i], raw[2 + i + SOUND_FREQ_BANDS]);
    }
    let peak = 2 + 2 * SOUND_FREQ_BANDS;
    SoundData {
        spl: tenths(raw[0], raw[1]),
        spl_bands,
        peak_amplitude: hundredths16(raw[peak], raw[peak + 1], raw[peak + 2]),
        stable: raw[5 + 2 * SOUND_FREQ_BANDS] != 0,
    }
}

/// Decode the 6-byte particle data block. Both fractions are hundredths.
pub fn particle(raw: &[u8]) -> ParticleData {
    ParticleData {
        duty_cycle: hundredths(raw[0], raw[1]),
        concentration: hundredths16(raw[2], raw[3], raw[4]),
        valid: raw[5] != 0,
    }
}
