/// Failure while polling the sensor.
///
/// Only the bus can fail; decoding a frame never does. Stale, diagnostic and
/// command mode statuses are reported through [`Status`](crate::Status).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError<E> {
    /// The transport could not complete the frame exchange.
    Transport(E),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// A calibration bound was NaN or infinite.
    NonFinite,
}
