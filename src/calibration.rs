use crate::error::CalibrationError;

/// Output count at 10% of the 14-bit range (0x0666).
pub const MIN_COUNT: f32 = 1638.4;
/// Output count at 90% of the 14-bit range (0x3999).
pub const MAX_COUNT: f32 = 14745.6;

/// Full scale of the 11-bit temperature counter.
const TEMPERATURE_FULL_SCALE: f32 = 2047.0;
/// Span of the temperature output, -50 °C to 150 °C.
const TEMPERATURE_SPAN: f32 = 200.0;
const TEMPERATURE_OFFSET: f32 = -50.0;

/// Pressures at the 10% and 90% calibrated output points, in any unit.
///
/// Taken from the part number / datasheet of the specific sensor. Every
/// pressure returned by the driver is in the unit of these two values.
/// `max_pressure` may be lower than `min_pressure` (vacuum parts).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationRange {
    min_pressure: f32,
    max_pressure: f32,
}

impl CalibrationRange {
    pub fn new(min_pressure: f32, max_pressure: f32) -> Result<Self, CalibrationError> {
        if !min_pressure.is_finite() || !max_pressure.is_finite() {
            return Err(CalibrationError::NonFinite);
        }
        Ok(Self {
            min_pressure,
            max_pressure,
        })
    }

    pub fn min_pressure(&self) -> f32 {
        self.min_pressure
    }

    pub fn max_pressure(&self) -> f32 {
        self.max_pressure
    }

    /// Converts pressure counts into this range's unit.
    pub fn pressure(&self, counts: f32) -> f32 {
        pressure_from_counts(counts, self.min_pressure, self.max_pressure)
    }
}

/// Converts a digital pressure measurement into the unit of `min_pressure`
/// and `max_pressure`.
///
/// Counts outside `MIN_COUNT..=MAX_COUNT` are extrapolated, not clamped.
pub fn pressure_from_counts(counts: f32, min_pressure: f32, max_pressure: f32) -> f32 {
    ((counts - MIN_COUNT) * (max_pressure - min_pressure)) / (MAX_COUNT - MIN_COUNT)
        + min_pressure
}

/// Converts a digital temperature measurement into degrees Celsius.
pub fn temperature_from_counts(counts: f32) -> f32 {
    (counts / TEMPERATURE_FULL_SCALE) * TEMPERATURE_SPAN + TEMPERATURE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: f32, expected: f32) {
        let tolerance = 1e-4 * expected.abs().max(1.0);
        assert!(
            (got - expected).abs() <= tolerance,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn calibration_points_map_to_range_bounds() {
        for (a, b) in [(0.0, 30.0), (-15.0, 15.0), (0.0, 1.6), (100.0, -1.0)] {
            assert_close(pressure_from_counts(MIN_COUNT, a, b), a);
            assert_close(pressure_from_counts(MAX_COUNT, a, b), b);
        }
    }

    #[test]
    fn midpoint_is_halfway() {
        let mid = (MIN_COUNT + MAX_COUNT) / 2.0;
        assert_close(pressure_from_counts(mid, 0.0, 30.0), 15.0);
        assert_close(pressure_from_counts(mid, 10.0, -10.0), 0.0);
    }

    #[test]
    fn pressure_is_extrapolated_outside_calibrated_band() {
        let below = pressure_from_counts(0.0, 0.0, 30.0);
        let above = pressure_from_counts(16383.0, 0.0, 30.0);
        assert_close(below, -3.75);
        assert!(above > 30.0);
    }

    #[test]
    fn temperature_endpoints() {
        assert_eq!(temperature_from_counts(0.0), -50.0);
        assert_eq!(temperature_from_counts(2047.0), 150.0);
    }

    #[test]
    fn temperature_reference_count() {
        assert_close(temperature_from_counts(819.0), 30.02);
    }

    #[test]
    fn range_rejects_non_finite_bounds() {
        assert_eq!(
            CalibrationRange::new(f32::NAN, 1.0),
            Err(CalibrationError::NonFinite)
        );
        assert_eq!(
            CalibrationRange::new(0.0, f32::INFINITY),
            Err(CalibrationError::NonFinite)
        );
        assert_eq!(
            CalibrationRange::new(f32::NEG_INFINITY, 0.0),
            Err(CalibrationError::NonFinite)
        );
    }

    #[test]
    fn inverted_range_is_accepted() {
        let range = CalibrationRange::new(0.0, -14.7).unwrap();
        assert_eq!(range.min_pressure(), 0.0);
        assert_eq!(range.max_pressure(), -14.7);
        assert_close(range.pressure(MAX_COUNT), -14.7);
    }
}
