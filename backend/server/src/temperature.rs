//! # Temperature Log
//!
//! Append-only history of readings, oldest first. Readings outside the safe
//! range are rejected before the log is touched.
use chrono::{DateTime, Local};
use thiserror::Error;

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureReading {
    pub timestamp: DateTime<Local>,
    pub temperature: f64,
}

#[derive(Error, Debug, PartialEq)]
#[error("Temperatura fora do limite seguro (0-10°C).")]
pub struct OutOfRange(pub f64);

#[derive(Default, Debug)]
pub struct TemperatureLog {
    readings: Vec<TemperatureReading>,
}

impl TemperatureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        temperature: f64,
        timestamp: DateTime<Local>,
    ) -> Result<TemperatureReading, OutOfRange> {
        if !is_safe(temperature) {
            return Err(OutOfRange(temperature));
        }

        let reading = TemperatureReading {
            timestamp,
            temperature,
        };
        self.readings.push(reading.clone());

        Ok(reading)
    }

    pub fn readings(&self) -> &[TemperatureReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

// NaN fails the range check
pub fn is_safe(temperature: f64) -> bool {
    (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use super::{OutOfRange, TemperatureLog, is_safe};

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_safe(0.0));
        assert!(is_safe(10.0));
        assert!(is_safe(4.2));
        assert!(!is_safe(-0.1));
        assert!(!is_safe(10.01));
        assert!(!is_safe(f64::NAN));
        assert!(!is_safe(f64::INFINITY));
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut log = TemperatureLog::new();
        let start = Local::now();

        log.record(3.0, start).unwrap();
        log.record(5.5, start + Duration::seconds(1)).unwrap();

        let temperatures: Vec<f64> = log.readings().iter().map(|r| r.temperature).collect();
        assert_eq!(temperatures, [3.0, 5.5]);
        assert_eq!(log.readings()[0].timestamp, start);
    }

    #[test]
    fn test_rejected_reading_leaves_log_unchanged() {
        let mut log = TemperatureLog::new();
        log.record(2.0, Local::now()).unwrap();

        for value in [-1.0, 10.5, 100.0, f64::NAN] {
            assert!(log.record(value, Local::now()).is_err());
        }

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_rejection_message() {
        let mut log = TemperatureLog::new();
        let err = log.record(12.0, Local::now()).unwrap_err();

        assert_eq!(err, OutOfRange(12.0));
        assert_eq!(err.to_string(), "Temperatura fora do limite seguro (0-10°C).");
        assert!(log.is_empty());
    }
}
