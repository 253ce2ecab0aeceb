use embedded_hal::spi::{ErrorType, SpiDevice};

use crate::frame::{RawFrame, FRAME_LEN};

/// Exchanges one frame with the sensor.
///
/// An implementation owns the bus for the duration of one call: chip select
/// is asserted before the first byte and released on every return path.
pub trait Transport {
    type Error;

    /// Clocks `out` to the sensor and returns the bytes it sent back.
    fn exchange(&mut self, out: [u8; FRAME_LEN]) -> Result<RawFrame, Self::Error>;
}

// A single SpiDevice transaction covers chip select and bus locking.
impl<SPI> Transport for SPI
where
    SPI: SpiDevice,
{
    type Error = <SPI as ErrorType>::Error;

    fn exchange(&mut self, out: [u8; FRAME_LEN]) -> Result<RawFrame, Self::Error> {
        let mut buf = out;
        self.transfer_in_place(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    #[test]
    fn spi_exchange_is_one_transaction() {
        let mut spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(vec![0; 4], vec![0x19, 0x99, 0x66, 0x60]),
            SpiTransaction::transaction_end(),
        ]);
        assert_eq!(spi.exchange([0; 4]).unwrap(), [0x19, 0x99, 0x66, 0x60]);
        spi.done();
    }

    #[test]
    fn spi_exchange_sends_payload() {
        let mut spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(vec![0xAA, 0x00, 0x55, 0xFF], vec![0; 4]),
            SpiTransaction::transaction_end(),
        ]);
        assert_eq!(spi.exchange([0xAA, 0x00, 0x55, 0xFF]).unwrap(), [0; 4]);
        spi.done();
    }
}
