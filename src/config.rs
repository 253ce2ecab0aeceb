use embedded_hal::spi::{Mode, MODE_0};

/// Datasheet SPI clock, 50 kHz to 800 kHz are supported.
pub const DEFAULT_FREQUENCY_HZ: u32 = 800_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI settings the bus must be set up with before the sensor is polled.
///
/// The driver cannot reconfigure an already built `SpiDevice`; HAL setup
/// code reads these values through
/// [`TruStability::bus_config`](crate::TruStability::bus_config).
/// Defaults to 800 kHz, MSB first, mode 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusConfig {
    pub frequency_hz: u32,
    pub bit_order: BitOrder,
    pub mode: Mode,
}

impl BusConfig {
    pub fn frequency(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    pub fn bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            bit_order: BitOrder::MsbFirst,
            mode: MODE_0,
        }
    }
}
