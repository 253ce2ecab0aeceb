//! Driver for the Honeywell TruStability HSC and SSC digital pressure sensors
//! on SPI.
//!
//! Every poll clocks out a 4-byte frame holding a 2-bit status, a 14-bit
//! pressure count and an 11-bit temperature count. Pressure is converted with
//! the 10%/90% calibration points of the part, temperature with the fixed
//! -50 °C to 150 °C span.
//!
//! ```rust
//! # use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
//! # let spi = SpiMock::new(&[
//! #     SpiTransaction::transaction_start(),
//! #     SpiTransaction::transfer_in_place(vec![0; 4], vec![0x19, 0x99, 0x66, 0x60]),
//! #     SpiTransaction::transaction_end(),
//! # ]);
//! use trustability_spi::{CalibrationRange, Status, TruStability};
//!
//! // 0 to 30 psi part
//! let range = CalibrationRange::new(0.0, 30.0).unwrap();
//! let mut sensor = TruStability::new(spi, range);
//!
//! if sensor.read_sensor().unwrap() == Status::Normal {
//!     println!("{} psi, {} °C", sensor.pressure(), sensor.temperature());
//! }
//! # sensor.release().done();
//! ```
#![cfg_attr(not(test), no_std)]

mod calibration;
mod config;
mod error;
mod frame;
mod transport;

pub use calibration::{
    pressure_from_counts, temperature_from_counts, CalibrationRange, MAX_COUNT, MIN_COUNT,
};
pub use config::{BitOrder, BusConfig, DEFAULT_FREQUENCY_HZ};
pub use error::{CalibrationError, DeviceError};
pub use frame::{Decoder, RawFrame, SensorReading, Status, FRAME_LEN};
pub use transport::Transport;

pub struct TruStability<T> {
    transport: T,
    config: BusConfig,
    decoder: Decoder,
}

impl<T> TruStability<T>
where
    T: Transport,
{
    /// Create a new instance with the default bus settings.
    /// The bus must run at 800 kHz or below, MSB first, mode 0.
    pub fn new(transport: T, range: CalibrationRange) -> Self {
        Self::with_config(transport, range, BusConfig::default())
    }

    pub fn with_config(transport: T, range: CalibrationRange, config: BusConfig) -> Self {
        Self {
            transport,
            config,
            decoder: Decoder::new(range),
        }
    }

    /// Polls the sensor once and returns the status of the frame.
    ///
    /// Counts are only updated when the status is [`Status::Normal`]. There
    /// is no guarantee the data is fresh, so check the status before using
    /// the values. A bus failure leaves the previous state untouched.
    pub fn read_sensor(&mut self) -> Result<Status, DeviceError<T::Error>> {
        // The sensor is half-duplex, what we send is ignored.
        let frame = match self.transport.exchange([0; FRAME_LEN]) {
            Ok(frame) => frame,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("frame exchange failed");
                return Err(DeviceError::Transport(e));
            }
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("frame: {:02x}", frame);

        let status = self.decoder.decode(frame);

        #[cfg(feature = "defmt")]
        if !status.is_normal() {
            defmt::warn!("sensor status {}, keeping previous counts", status);
        }

        Ok(status)
    }

    /// Status of the most recent frame, `None` before the first read.
    pub fn status(&self) -> Option<Status> {
        self.decoder.status()
    }

    pub fn raw_pressure(&self) -> u16 {
        self.decoder.raw_pressure()
    }

    pub fn raw_temperature(&self) -> u16 {
        self.decoder.raw_temperature()
    }

    /// Pressure in the units of the calibration range.
    pub fn pressure(&self) -> f32 {
        self.decoder.pressure()
    }

    /// Temperature in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        self.decoder.temperature()
    }

    pub fn reading(&self) -> SensorReading {
        self.decoder.reading()
    }

    pub fn calibration(&self) -> CalibrationRange {
        self.decoder.calibration()
    }

    pub fn bus_config(&self) -> BusConfig {
        self.config
    }

    /// Releases the transport, consuming the driver.
    pub fn release(self) -> T {
        self.transport
    }
}
