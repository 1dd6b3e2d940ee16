//! Transport and ready-line capabilities consumed by the driver.
//!
//! The driver never talks to hardware directly; it goes through these two
//! traits. Any [`embedded_hal::i2c::I2c`] implementation is a
//! [`SensorBus`] via the blanket impl below, and any
//! [`embedded_hal::digital::InputPin`] becomes a [`ReadyLine`] through
//! [`EdgeDetectPin`]. Tests substitute scripted implementations.

use embedded_hal::digital::InputPin;
use embedded_hal::i2c;

/// Longest register write the MS430 accepts (register byte + data).
const MAX_WRITE_FRAME: usize = 4;

/// Byte-level transport to a 7-bit-addressed device.
pub trait SensorBus {
    /// Transport error type.
    type Error;

    /// Read `buf.len()` bytes starting at `register`, returning the number
    /// of bytes actually transferred.
    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;

    /// Write a single command byte with no register address.
    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Write `data` to `register`.
    fn write_block(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: i2c::I2c> SensorBus for T {
    type Error = T::Error;

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.write_read(address, &[register], buf)?;
        Ok(buf.len())
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[value])
    }

    fn write_block(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        // The device only takes one-byte register payloads, so a small
        // stack frame avoids needing an allocator.
        debug_assert!(data.len() < MAX_WRITE_FRAME);
        let mut frame = [0u8; MAX_WRITE_FRAME];
        frame[0] = register;
        frame[1..=data.len()].copy_from_slice(data);
        self.write(address, &frame[..data.len() + 1])
    }
}

/// Level of the MS430 READY line. The line idles high while the device is
/// busy and is driven low when it is ready; a falling edge signals
/// measurement completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineLevel {
    /// Device is initialising or measuring.
    Busy,
    /// Device is idle and able to accept commands.
    NotBusy,
}

/// Digital input with level read and consume-on-read edge detection.
pub trait ReadyLine {
    /// Pin error type.
    type Error;

    /// Current level of the line.
    fn level(&mut self) -> Result<LineLevel, Self::Error>;

    /// Whether a data-ready edge occurred since the last call. Clears the
    /// event on read.
    fn event_detected(&mut self) -> Result<bool, Self::Error>;
}

/// [`ReadyLine`] backed by a plain input pin.
///
/// Falling edges are recovered by comparing the level against the previous
/// sample, so [`event_detected`](ReadyLine::event_detected) must be polled
/// faster than the line toggles. The driver's wait loops do exactly that.
pub struct EdgeDetectPin<P> {
    pin: P,
    last_high: Option<bool>,
}

impl<P: InputPin> EdgeDetectPin<P> {
    /// Wrap `pin`. No edge is reported before the second poll.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_high: None,
        }
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ReadyLine for EdgeDetectPin<P> {
    type Error = P::Error;

    fn level(&mut self) -> Result<LineLevel, Self::Error> {
        if self.pin.is_high()? {
            Ok(LineLevel::Busy)
        } else {
            Ok(LineLevel::NotBusy)
        }
    }

    fn event_detected(&mut self) -> Result<bool, Self::Error> {
        let high = self.pin.is_high()?;
        let falling = self.last_high == Some(true) && !high;
        self.last_high = Some(high);
        Ok(falling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn blanket_i2c_impl_frames_transfers() {
        let expectations = [
            I2cTransaction::write(0x71, vec![0xE2]),
            I2cTransaction::write(0x71, vec![0x89, 0x01]),
            I2cTransaction::write_read(0x71, vec![0x12], vec![0x10, 0x00, 0x32, 0x05, 0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);

        SensorBus::write_byte(&mut i2c, 0x71, 0xE2).unwrap();
        SensorBus::write_block(&mut i2c, 0x71, 0x89, &[0x01]).unwrap();

        let mut buf = [0u8; 5];
        let n = SensorBus::read_block(&mut i2c, 0x71, 0x12, &mut buf).unwrap();
        assert_eq!(n, 5);
        assert_eq!(buf, [0x10, 0x00, 0x32, 0x05, 0x00]);

        i2c.done();
    }

    #[test]
    fn edge_detect_reports_falling_edges_once() {
        let expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let pin = PinMock::new(&expectations);
        let mut line = EdgeDetectPin::new(pin);

        // First sample only establishes the baseline.
        assert!(!line.event_detected().unwrap());
        assert!(!line.event_detected().unwrap());
        // High -> Low is the data-ready edge.
        assert!(line.event_detected().unwrap());
        // The event is consumed; a steady low line reports nothing.
        assert!(!line.event_detected().unwrap());
        // Rising edge is not an event.
        assert!(!line.event_detected().unwrap());
        assert!(line.event_detected().unwrap());

        line.release().done();
    }

    #[test]
    fn edge_detect_level_mapping() {
        let expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let pin = PinMock::new(&expectations);
        let mut line = EdgeDetectPin::new(pin);

        assert_eq!(line.level().unwrap(), LineLevel::Busy);
        assert_eq!(line.level().unwrap(), LineLevel::NotBusy);

        line.release().done();
    }
}
