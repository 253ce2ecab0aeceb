use crate::calibration::{temperature_from_counts, CalibrationRange};

/// Length of a sensor response in bytes.
pub const FRAME_LEN: usize = 4;

/// One response from the sensor, first transferred byte first.
pub type RawFrame = [u8; FRAME_LEN];

/// Sensor status, from the two most significant bits of the first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Fresh data.
    Normal,
    CommandMode,
    /// The data has already been fetched since the last measurement cycle.
    StaleData,
    Diagnostic,
}

impl Status {
    /// Resolves the status bits of a frame's first byte.
    pub fn from_byte(byte: u8) -> Self {
        match (byte >> 6) & 0b11 {
            0 => Status::Normal,
            1 => Status::CommandMode,
            2 => Status::StaleData,
            _ => Status::Diagnostic,
        }
    }

    pub fn value(&self) -> u8 {
        match *self {
            Status::Normal => 0,
            Status::CommandMode => 1,
            Status::StaleData => 2,
            Status::Diagnostic => 3,
        }
    }

    pub fn is_normal(&self) -> bool {
        *self == Status::Normal
    }
}

/// Last decoded sensor state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// `None` until the first frame has been decoded.
    pub status: Option<Status>,
    /// 14-bit pressure counts.
    pub pressure_count: u16,
    /// 11-bit temperature counts.
    pub temperature_count: u16,
}

/// Turns raw frames into counts and calibrated values.
///
/// Counts are only replaced by a frame whose status is [`Status::Normal`].
/// Any other status keeps the counts of the last good frame, so check
/// [`Decoder::status`] before trusting [`Decoder::pressure`] or
/// [`Decoder::temperature`].
#[derive(Clone, Debug)]
pub struct Decoder {
    range: CalibrationRange,
    reading: SensorReading,
}

impl Decoder {
    pub fn new(range: CalibrationRange) -> Self {
        Self {
            range,
            reading: SensorReading::default(),
        }
    }

    pub fn decode(&mut self, frame: RawFrame) -> Status {
        let status = Status::from_byte(frame[0]);
        self.reading.status = Some(status);

        if status.is_normal() {
            // 14 bits: low 6 bits of byte 0 above all of byte 1
            self.reading.pressure_count =
                ((u16::from(frame[0]) << 8) & 0x3F00) | u16::from(frame[1]);
            // 11 bits: all of byte 2 above the top 3 bits of byte 3
            self.reading.temperature_count =
                ((u16::from(frame[2]) << 3) & 0x7F8) | ((u16::from(frame[3]) >> 5) & 0x7);
        }

        status
    }

    pub fn status(&self) -> Option<Status> {
        self.reading.status
    }

    pub fn raw_pressure(&self) -> u16 {
        self.reading.pressure_count
    }

    pub fn raw_temperature(&self) -> u16 {
        self.reading.temperature_count
    }

    /// Pressure of the last good frame, in the calibration range's unit.
    pub fn pressure(&self) -> f32 {
        self.range.pressure(f32::from(self.reading.pressure_count))
    }

    /// Temperature of the last good frame, in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        temperature_from_counts(f32::from(self.reading.temperature_count))
    }

    pub fn reading(&self) -> SensorReading {
        self.reading
    }

    pub fn calibration(&self) -> CalibrationRange {
        self.range
    }
}
