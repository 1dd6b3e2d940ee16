#![cfg_attr(not(test), no_std)]

//! # Metriful MS430 Environmental Sensor Driver
//!
//! A `no_std` driver for the Metriful MS430 indoor environment sensor.
//! The MS430 measures temperature, pressure, humidity, gas resistance,
//! air quality (AQI, CO2, breath-VOC), light, sound and, with an external
//! particle sensor attached, particulates. All readings travel over I2C
//! as fixed-size register blocks; a dedicated READY line signals busy
//! state and, via falling edges, measurement completion.
//!
//! ## Features
//! - **Typestate initialisation**: the device must be reset before use;
//!   the `Uninitialized` → `Ready` transition makes skipping that a
//!   compile error.
//! - **Explicit operating modes**: standby, on-demand and cycle mode form
//!   a tracked state machine; invalid requests (such as reading air
//!   quality data outside cycle mode) fail with a typed error instead of
//!   returning garbage.
//! - **Hardware-independent**: any [`embedded_hal::i2c::I2c`] bus works
//!   out of the box, and any [`embedded_hal::digital::InputPin`] becomes
//!   the READY line through [`EdgeDetectPin`].
//!
//! ## Usage
//! ```rust,no_run
//! use ms430_driver::{CyclePeriod, EdgeDetectPin, Ms430, Ms430Builder};
//!
//! let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let ready_pin = embedded_hal_mock::eh1::digital::Mock::new(&[]);
//! let mut delay = embedded_hal_mock::eh1::delay::NoopDelay;
//!
//! let sensor = Ms430::new(i2c, EdgeDetectPin::new(ready_pin), Ms430Builder::new().build());
//! let mut sensor = sensor.init(&mut delay).unwrap();
//!
//! sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds).unwrap();
//! loop {
//!     sensor.wait_for_data(&mut delay).unwrap();
//!     let air = sensor.air_data().unwrap();
//!     let quality = sensor.air_quality_data().unwrap();
//!     // 21.4 °C, AQI 43.5 (good), ...
//!     let _ = (air.temperature(), quality.band());
//! }
//! ```

pub mod bus;
pub mod config;
pub mod decode;
pub mod measurement;
pub mod registers;

use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;

pub use bus::{EdgeDetectPin, LineLevel, ReadyLine, SensorBus};
pub use config::{Config, CyclePeriod, Ms430Builder, ParticleSensor};
pub use measurement::{
    AirData, AirQualityBand, AirQualityData, AqiAccuracy, LightData, Measurement, ParticleData,
    SoundData, Unit,
};
pub use registers::Category;

use bus::LineLevel::NotBusy;
use registers::{
    CYCLE_MODE_CMD, CYCLE_TIME_PERIOD_REG, MAX_DATA_BYTES, ON_DEMAND_MEASURE_CMD,
    PARTICLE_SENSOR_SELECT_REG, RESET_CMD,
};

/// Settle time after the reset command before the READY line is polled.
const WAIT_RESET_MS: u32 = 5;

// --- Typestates ---

/// Driver has been created but the device has not been reset yet.
pub struct Uninitialized;
/// Device has been reset and accepts commands.
pub struct Ready;

/// Error types for the MS430 driver.
pub mod error {
    use crate::OperatingMode;

    /// Errors that can occur during communication or mode handling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Ms430Error<EB, EP> {
        /// Bus transport error.
        Bus(EB),
        /// Ready-line pin error.
        Pin(EP),
        /// The transport moved a different number of bytes than the
        /// category's fixed block length. A device contract violation;
        /// the read is not retried.
        ShortRead {
            /// The category's documented block length.
            expected: usize,
            /// Bytes the transport actually transferred.
            actual: usize,
        },
        /// The requested operation is not valid in the current mode.
        /// Recoverable: reset or switch mode and retry.
        InvalidModeTransition(OperatingMode),
        /// A wait loop exceeded the configured deadline.
        Timeout,
    }

    impl<EB, EP> core::fmt::Display for Ms430Error<EB, EP> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                Ms430Error::Bus(_) => write!(f, "bus transport error"),
                Ms430Error::Pin(_) => write!(f, "ready line error"),
                Ms430Error::ShortRead { expected, actual } => {
                    write!(f, "short read: expected {expected} bytes, got {actual}")
                }
                Ms430Error::InvalidModeTransition(mode) => {
                    write!(f, "operation not valid in {mode:?} mode")
                }
                Ms430Error::Timeout => write!(f, "timed out waiting for the ready line"),
            }
        }
    }

    /// Result type alias for MS430 operations.
    pub type Result<T, EB, EP> = core::result::Result<T, Ms430Error<EB, EP>>;
}

/// Operating mode of the MS430.
///
/// The device starts in standby after a reset. On-demand and cycle mode
/// are entered with explicit commands; the only way back to standby is a
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Idle, accepting commands.
    Standby,
    /// One measurement per on-demand command.
    OnDemand,
    /// Autonomous measurements at a fixed period.
    Cycle,
}

/// A raw register block read from the device.
///
/// Owns its bytes; the backing array is sized for the largest category so
/// no allocator is needed.
#[derive(Debug, Clone, Copy)]
pub struct RawBlock {
    category: Category,
    bytes: [u8; MAX_DATA_BYTES],
    len: usize,
}

impl RawBlock {
    /// The category this block was read for.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The block's bytes, exactly `category().data_len()` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// The main MS430 driver structure.
///
/// Use [`Ms430::new`] followed by [`init`](Ms430::init). The `STATE`
/// generic tracks initialisation status at compile time; all measurement
/// operations require the `Ready` state.
pub struct Ms430<B, R, STATE> {
    bus: B,
    ready: R,
    config: Config,
    mode: OperatingMode,
    _state: PhantomData<STATE>,
}

impl<B, R, EB, EP> Ms430<B, R, Uninitialized>
where
    B: SensorBus<Error = EB>,
    R: ReadyLine<Error = EP>,
{
    /// Creates a new driver instance in the `Uninitialized` state.
    ///
    /// This does not communicate with the device yet.
    pub fn new(bus: B, ready: R, config: Config) -> Ms430<B, R, Uninitialized> {
        Ms430 {
            bus,
            ready,
            config,
            mode: OperatingMode::Standby,
            _state: PhantomData,
        }
    }

    /// Initialises the device: waits for it to finish booting, then
    /// performs a reset. Transitions the driver from `Uninitialized` to
    /// `Ready`; the device is in standby afterwards.
    ///
    /// # Errors
    /// Fails on transport or pin errors, or with `Timeout` if a deadline
    /// is configured and the READY line never settles.
    pub fn init(mut self, delay: &mut impl DelayNs) -> error::Result<Ms430<B, R, Ready>, EB, EP> {
        // The line reads busy while the device boots.
        self.poll_not_busy(delay)?;

        let mut driver = Ms430 {
            bus: self.bus,
            ready: self.ready,
            config: self.config,
            mode: OperatingMode::Standby,
            _state: PhantomData,
        };
        driver.reset(delay)?;
        Ok(driver)
    }
}

impl<B, R, STATE, EB, EP> Ms430<B, R, STATE>
where
    B: SensorBus<Error = EB>,
    R: ReadyLine<Error = EP>,
{
    fn write_byte(&mut self, value: u8) -> error::Result<(), EB, EP> {
        self.bus
            .write_byte(self.config.address, value)
            .map_err(error::Ms430Error::Bus)
    }

    fn write_block(&mut self, register: u8, data: &[u8]) -> error::Result<(), EB, EP> {
        self.bus
            .write_block(self.config.address, register, data)
            .map_err(error::Ms430Error::Bus)
    }

    /// Blocks until the READY line reads not-busy, sleeping the configured
    /// interval between polls.
    fn poll_not_busy(&mut self, delay: &mut impl DelayNs) -> error::Result<(), EB, EP> {
        let mut waited_ms = 0u32;
        loop {
            if self.ready.level().map_err(error::Ms430Error::Pin)? == NotBusy {
                return Ok(());
            }
            if let Some(timeout) = self.config.timeout_ms {
                if waited_ms >= timeout {
                    return Err(error::Ms430Error::Timeout);
                }
            }
            delay.delay_ms(self.config.poll_interval_ms);
            waited_ms = waited_ms.saturating_add(self.config.poll_interval_ms);
        }
    }
}

impl<B, R, EB, EP> Ms430<B, R, Ready>
where
    B: SensorBus<Error = EB>,
    R: ReadyLine<Error = EP>,
{
    /// Performs a soft-reset and waits for the device to come back up.
    ///
    /// Side effect: the device returns to standby, which also discards any
    /// accumulated air quality calibration state.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> error::Result<(), EB, EP> {
        self.write_byte(RESET_CMD)?;
        delay.delay_ms(WAIT_RESET_MS);
        self.poll_not_busy(delay)?;
        self.mode = OperatingMode::Standby;
        Ok(())
    }

    /// Triggers a single measurement. Completion is signalled by a falling
    /// edge on the READY line; use [`wait_for_data`](Ms430::wait_for_data).
    ///
    /// Valid in standby (entering on-demand mode) and in on-demand mode
    /// (triggering the next measurement). In cycle mode the device ignores
    /// the command, so the driver rejects it instead of forwarding it.
    pub fn enter_on_demand_mode(&mut self) -> error::Result<(), EB, EP> {
        if self.mode == OperatingMode::Cycle {
            return Err(error::Ms430Error::InvalidModeTransition(self.mode));
        }
        self.write_byte(ON_DEMAND_MEASURE_CMD)?;
        self.mode = OperatingMode::OnDemand;
        Ok(())
    }

    /// Starts autonomous measurements at the given period. Each completed
    /// cycle produces a falling edge on the READY line.
    ///
    /// Only valid from standby; leaving cycle mode requires a
    /// [`reset`](Ms430::reset).
    pub fn enter_cycle_mode(&mut self, period: CyclePeriod) -> error::Result<(), EB, EP> {
        if self.mode != OperatingMode::Standby {
            return Err(error::Ms430Error::InvalidModeTransition(self.mode));
        }
        self.write_block(CYCLE_TIME_PERIOD_REG, &[period as u8])?;
        self.write_byte(CYCLE_MODE_CMD)?;
        self.mode = OperatingMode::Cycle;
        Ok(())
    }

    /// Selects the attached particle sensor type. Call before the first
    /// particle data read; does not affect the operating mode.
    pub fn configure_particle_sensor(
        &mut self,
        kind: ParticleSensor,
    ) -> error::Result<(), EB, EP> {
        self.write_block(PARTICLE_SENSOR_SELECT_REG, &[kind as u8])
    }

    /// Current operating mode as tracked by the driver.
    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Blocks until the READY line reads not-busy. Needed before the
    /// first measurement of an on-demand flow when no edge event has been
    /// armed yet.
    pub fn wait_ready(&mut self, delay: &mut impl DelayNs) -> error::Result<(), EB, EP> {
        self.poll_not_busy(delay)
    }

    /// Blocks until a data-ready edge has occurred since the last check,
    /// then consumes it. Signals completion of an on-demand measurement or
    /// of one cycle tick.
    pub fn wait_for_data(&mut self, delay: &mut impl DelayNs) -> error::Result<(), EB, EP> {
        let mut waited_ms = 0u32;
        loop {
            if self.ready.event_detected().map_err(error::Ms430Error::Pin)? {
                return Ok(());
            }
            if let Some(timeout) = self.config.timeout_ms {
                if waited_ms >= timeout {
                    return Err(error::Ms430Error::Timeout);
                }
            }
            delay.delay_ms(self.config.poll_interval_ms);
            waited_ms = waited_ms.saturating_add(self.config.poll_interval_ms);
        }
    }

    /// Reads the raw register block for a category, verifying the exact
    /// transfer length.
    ///
    /// The air quality gate lives here: the device accumulates its
    /// calibration state in cycle mode alone, so requesting that category
    /// in any other mode fails with `InvalidModeTransition`.
    pub fn fetch(&mut self, category: Category) -> error::Result<RawBlock, EB, EP> {
        if category == Category::AirQuality && self.mode != OperatingMode::Cycle {
            return Err(error::Ms430Error::InvalidModeTransition(self.mode));
        }

        let expected = category.data_len();
        let mut bytes = [0u8; MAX_DATA_BYTES];
        let actual = self
            .bus
            .read_block(
                self.config.address,
                category.register(),
                &mut bytes[..expected],
            )
            .map_err(error::Ms430Error::Bus)?;
        if actual != expected {
            return Err(error::Ms430Error::ShortRead { expected, actual });
        }

        Ok(RawBlock {
            category,
            bytes,
            len: expected,
        })
    }

    /// Temperature, pressure, humidity and gas sensor resistance.
    pub fn air_data(&mut self) -> error::Result<AirData, EB, EP> {
        let block = self.fetch(Category::Air)?;
        Ok(decode::air(block.as_bytes()))
    }

    /// AQI, accuracy, CO2 and breath-VOC. Cycle mode only.
    pub fn air_quality_data(&mut self) -> error::Result<AirQualityData, EB, EP> {
        let block = self.fetch(Category::AirQuality)?;
        Ok(decode::air_quality(block.as_bytes()))
    }

    /// Illumination and white light level.
    pub fn light_data(&mut self) -> error::Result<LightData, EB, EP> {
        let block = self.fetch(Category::Light)?;
        Ok(decode::light(block.as_bytes()))
    }

    /// Sound pressure levels, band levels, peak amplitude and stability.
    pub fn sound_data(&mut self) -> error::Result<SoundData, EB, EP> {
        let block = self.fetch(Category::Sound)?;
        Ok(decode::sound(block.as_bytes()))
    }

    /// Particle sensor duty cycle, concentration and validity.
    pub fn particle_data(&mut self) -> error::Result<ParticleData, EB, EP> {
        let block = self.fetch(Category::Particle)?;
        Ok(decode::particle(block.as_bytes()))
    }

    /// Consumes the driver and hands the bus and ready-line handles back.
    pub fn release(self) -> (B, R) {
        (self.bus, self.ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use error::Ms430Error;

    /// Scripted bus: records every write frame and serves queued read
    /// responses. A response shorter or longer than the requested block
    /// models a transport-level contract violation.
    struct MockBus {
        written: Vec<Vec<u8>>,
        reads: Vec<(u8, Vec<u8>)>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                written: Vec::new(),
                reads: Vec::new(),
            }
        }

        fn expect_read(mut self, register: u8, response: &[u8]) -> Self {
            self.reads.push((register, response.to_vec()));
            self
        }
    }

    impl SensorBus for MockBus {
        type Error = Infallible;

        fn read_block(
            &mut self,
            _address: u8,
            register: u8,
            buf: &mut [u8],
        ) -> Result<usize, Infallible> {
            assert!(!self.reads.is_empty(), "unexpected read of {register:#04x}");
            let (expected_register, response) = self.reads.remove(0);
            assert_eq!(register, expected_register);
            let n = response.len().min(buf.len());
            buf[..n].copy_from_slice(&response[..n]);
            Ok(response.len())
        }

        fn write_byte(&mut self, _address: u8, value: u8) -> Result<(), Infallible> {
            self.written.push(vec![value]);
            Ok(())
        }

        fn write_block(
            &mut self,
            _address: u8,
            register: u8,
            data: &[u8],
        ) -> Result<(), Infallible> {
            let mut frame = vec![register];
            frame.extend_from_slice(data);
            self.written.push(frame);
            Ok(())
        }
    }

    /// Scripted ready line: a queue of levels (the last entry repeats) and
    /// a queue of edge events.
    struct MockReady {
        levels: Vec<LineLevel>,
        events: Vec<bool>,
    }

    impl MockReady {
        fn idle() -> Self {
            Self {
                levels: vec![LineLevel::NotBusy],
                events: Vec::new(),
            }
        }

        fn with_levels(levels: &[LineLevel]) -> Self {
            Self {
                levels: levels.to_vec(),
                events: Vec::new(),
            }
        }

        fn with_events(mut self, events: &[bool]) -> Self {
            self.events = events.to_vec();
            self
        }
    }

    impl ReadyLine for MockReady {
        type Error = Infallible;

        fn level(&mut self) -> Result<LineLevel, Infallible> {
            if self.levels.len() > 1 {
                Ok(self.levels.remove(0))
            } else {
                Ok(self.levels[0])
            }
        }

        fn event_detected(&mut self) -> Result<bool, Infallible> {
            if self.events.is_empty() {
                Ok(false)
            } else {
                Ok(self.events.remove(0))
            }
        }
    }

    fn init_driver(bus: MockBus, ready: MockReady) -> Ms430<MockBus, MockReady, Ready> {
        init_driver_with(bus, ready, Config::default())
    }

    fn init_driver_with(
        bus: MockBus,
        ready: MockReady,
        config: Config,
    ) -> Ms430<MockBus, MockReady, Ready> {
        Ms430::new(bus, ready, config).init(&mut NoopDelay).unwrap()
    }

    const AIR_BLOCK: [u8; 12] = [
        0x0A, 0x05, 0x00, 0x00, 0x00, 0x01, 0x28, 0x03, 0x10, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn init_issues_reset_and_lands_in_standby() {
        // Busy while booting, ready, then busy again after the reset.
        let ready = MockReady::with_levels(&[
            LineLevel::Busy,
            LineLevel::NotBusy,
            LineLevel::Busy,
            LineLevel::NotBusy,
        ]);
        let sensor = init_driver(MockBus::new(), ready);

        assert_eq!(sensor.mode(), OperatingMode::Standby);
        let (bus, _) = sensor.release();
        assert_eq!(bus.written, vec![vec![registers::RESET_CMD]]);
    }

    #[test]
    fn cycle_mode_writes_period_then_command() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());

        sensor.enter_cycle_mode(CyclePeriod::HundredSeconds).unwrap();
        assert_eq!(sensor.mode(), OperatingMode::Cycle);

        let (bus, _) = sensor.release();
        assert_eq!(
            bus.written[1..],
            vec![
                vec![registers::CYCLE_TIME_PERIOD_REG, 0x01],
                vec![registers::CYCLE_MODE_CMD],
            ]
        );
    }

    #[test]
    fn on_demand_is_rejected_in_cycle_mode() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());
        sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds).unwrap();

        assert_eq!(
            sensor.enter_on_demand_mode(),
            Err(Ms430Error::InvalidModeTransition(OperatingMode::Cycle))
        );
        // The rejected command must not reach the bus.
        let (bus, _) = sensor.release();
        assert!(!bus
            .written
            .contains(&vec![registers::ON_DEMAND_MEASURE_CMD]));
    }

    #[test]
    fn cycle_mode_requires_standby() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());
        sensor.enter_on_demand_mode().unwrap();

        assert_eq!(
            sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds),
            Err(Ms430Error::InvalidModeTransition(OperatingMode::OnDemand))
        );
    }

    #[test]
    fn on_demand_can_be_retriggered() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());
        sensor.enter_on_demand_mode().unwrap();
        sensor.enter_on_demand_mode().unwrap();

        let (bus, _) = sensor.release();
        assert_eq!(
            bus.written[1..],
            vec![
                vec![registers::ON_DEMAND_MEASURE_CMD],
                vec![registers::ON_DEMAND_MEASURE_CMD],
            ]
        );
    }

    #[test]
    fn reset_leaves_cycle_mode() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());
        sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds).unwrap();

        sensor.reset(&mut NoopDelay).unwrap();
        assert_eq!(sensor.mode(), OperatingMode::Standby);
        // Standby again, so on-demand is accepted.
        sensor.enter_on_demand_mode().unwrap();
    }

    #[test]
    fn particle_sensor_selection_writes_register() {
        let mut sensor = init_driver(MockBus::new(), MockReady::idle());
        sensor
            .configure_particle_sensor(ParticleSensor::Ppd42)
            .unwrap();

        let (bus, _) = sensor.release();
        assert_eq!(
            bus.written.last().unwrap(),
            &vec![registers::PARTICLE_SENSOR_SELECT_REG, 0x01]
        );
    }

    #[test]
    fn air_quality_fetch_is_mode_gated() {
        let bus = MockBus::new().expect_read(
            registers::AIR_QUALITY_DATA_READ,
            &[0x2B, 0x00, 0x05, 0x90, 0x01, 0x00, 0x02, 0x00, 0x00, 0x03],
        );
        let mut sensor = init_driver(bus, MockReady::idle());

        sensor.enter_on_demand_mode().unwrap();
        assert_eq!(
            sensor.air_quality_data(),
            Err(Ms430Error::InvalidModeTransition(OperatingMode::OnDemand))
        );

        sensor.reset(&mut NoopDelay).unwrap();
        sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds).unwrap();
        let quality = sensor.air_quality_data().unwrap();
        assert!((quality.aqi - 43.5).abs() < 1e-6);
        assert_eq!(quality.aqi_accuracy, AqiAccuracy::High);
        assert_eq!(quality.band(), AirQualityBand::Good);
    }

    #[test]
    fn short_read_fails_for_every_category() {
        for category in [
            Category::Air,
            Category::AirQuality,
            Category::Light,
            Category::Sound,
            Category::Particle,
        ] {
            let expected = category.data_len();
            let truncated = vec![0u8; expected - 1];
            let bus = MockBus::new().expect_read(category.register(), &truncated);
            let mut sensor = init_driver(bus, MockReady::idle());
            if category == Category::AirQuality {
                sensor.enter_cycle_mode(CyclePeriod::ThreeSeconds).unwrap();
            }

            assert_eq!(
                sensor.fetch(category).unwrap_err(),
                Ms430Error::ShortRead {
                    expected,
                    actual: expected - 1,
                }
            );
        }
    }

    #[test]
    fn fetch_returns_exact_block() {
        let bus = MockBus::new().expect_read(registers::AIR_DATA_READ, &AIR_BLOCK);
        let mut sensor = init_driver(bus, MockReady::idle());

        let block = sensor.fetch(Category::Air).unwrap();
        assert_eq!(block.category(), Category::Air);
        assert_eq!(block.as_bytes(), &AIR_BLOCK);
    }

    #[test]
    fn on_demand_end_to_end() {
        let bus = MockBus::new().expect_read(registers::AIR_DATA_READ, &AIR_BLOCK);
        // Busy for one poll after power-up, then ready; the measurement
        // completes after two data polls.
        let ready = MockReady::with_levels(&[
            LineLevel::Busy,
            LineLevel::NotBusy,
            LineLevel::Busy,
            LineLevel::NotBusy,
        ])
        .with_events(&[false, true]);
        let mut sensor = init_driver(bus, ready);

        sensor.enter_on_demand_mode().unwrap();
        sensor.wait_for_data(&mut NoopDelay).unwrap();

        let air = sensor.air_data().unwrap();
        assert!((air.temperature - 10.5).abs() < 1e-6);
        assert_eq!(air.pressure, 16_777_216);
        assert!((air.humidity - 40.3).abs() < 1e-6);
        assert_eq!(air.gas_sensor_resistance, 16);
    }

    #[test]
    fn wait_ready_times_out() {
        let config = Ms430Builder::new()
            .poll_interval_ms(50)
            .timeout_ms(100)
            .build();
        let ready = MockReady::with_levels(&[
            LineLevel::NotBusy, // boot wait in init
            LineLevel::NotBusy, // reset wait
            LineLevel::Busy,    // stuck from here on
        ]);
        let mut sensor = init_driver_with(MockBus::new(), ready, config);

        assert_eq!(sensor.wait_ready(&mut NoopDelay), Err(Ms430Error::Timeout));
    }

    #[test]
    fn wait_for_data_times_out() {
        let config = Ms430Builder::new()
            .poll_interval_ms(50)
            .timeout_ms(100)
            .build();
        let mut sensor = init_driver_with(MockBus::new(), MockReady::idle(), config);

        sensor.enter_on_demand_mode().unwrap();
        assert_eq!(
            sensor.wait_for_data(&mut NoopDelay),
            Err(Ms430Error::Timeout)
        );
    }
}
