use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timestamp::format_timestamp;

/// Text shown in the power field when the instant reading cannot be fetched
pub const POWER_ERROR_TEXT: &str = "Error fetching data";

/// Current power draw from the meter.
///
/// Sent on the wire as a two element array `[timestamp, power]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct InstantReading {
    /// Meter timestamp, `YYMMDDHHMMSS`
    pub timestamp: String,
    /// Power in watts
    pub power: f64,
}

impl From<(String, f64)> for InstantReading {
    fn from((timestamp, power): (String, f64)) -> Self {
        Self { timestamp, power }
    }
}

impl From<InstantReading> for (String, f64) {
    fn from(reading: InstantReading) -> Self {
        (reading.timestamp, reading.power)
    }
}

/// One 15-minute window of the rolling 24-hour view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDescriptor {
    /// Fixed position 0..96, independent of the day supplying the data
    pub slot: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl IntervalDescriptor {
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

/// Average power of one interval, derived from the energy reported for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSample {
    pub slot: usize,
    /// Start of the interval
    pub time: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Average power in watts
    pub power: f64,
    /// Energy in watt-hours, as returned by the meter API
    pub energy: f64,
}

impl IntervalSample {
    pub fn from_energy(interval: &IntervalDescriptor, energy: f64) -> Self {
        Self {
            slot: interval.slot,
            time: interval.start,
            end: interval.end,
            power: average_power(energy, interval.duration_ms()),
            energy,
        }
    }
}

/// `energy * 3600 / duration_ms * 1000`.
///
/// An empty interval (now sitting exactly on a slot boundary) reads as 0 W.
pub fn average_power(energy_wh: f64, duration_ms: i64) -> f64 {
    if duration_ms <= 0 || !energy_wh.is_finite() {
        return 0.0;
    }
    let joules = energy_wh * 3600.0;
    joules / duration_ms as f64 * 1000.0
}

/// Text written to the timestamp and power fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PowerDisplay {
    pub timestamp: String,
    pub power: String,
}

impl PowerDisplay {
    pub fn from_reading(reading: &InstantReading) -> Self {
        Self {
            timestamp: format_timestamp(&reading.timestamp),
            // Round half away from zero, like the meter's own display
            power: format!("{:.0} W", reading.power.round()),
        }
    }

    pub fn error() -> Self {
        Self {
            timestamp: String::new(),
            power: POWER_ERROR_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_instant_reading_from_array() {
        let reading: InstantReading = serde_json::from_str(r#"["250614153045", 742.3]"#).unwrap();

        assert_eq!(reading.timestamp, "250614153045");
        assert_eq!(reading.power, 742.3);
    }

    #[test]
    fn test_instant_reading_rejects_object() {
        let result: Result<InstantReading, _> =
            serde_json::from_str(r#"{"timestamp": "250614153045", "power": 742.3}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_average_power_full_interval() {
        // 0.25 Wh spread over a quarter of an hour is 1 W
        assert!((average_power(0.25, 900_000) - 1.0).abs() < 1e-12);
        assert!((average_power(1.5, 900_000) - 6.0).abs() < 1e-12);
        assert!((average_power(250.0, 900_000) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_power_partial_interval() {
        // 7 minutes
        let power = average_power(700.0, 420_000);
        assert!((power - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_power_zero_width() {
        assert_eq!(average_power(0.4, 0), 0.0);
        assert_eq!(average_power(0.0, 0), 0.0);
        assert_eq!(average_power(f64::NAN, 900_000), 0.0);
    }

    #[test]
    fn test_sample_from_energy() {
        let interval = IntervalDescriptor {
            slot: 56,
            start: at(14, 0, 0),
            end: at(14, 15, 0),
        };

        let sample = IntervalSample::from_energy(&interval, 250.0);

        assert_eq!(interval.duration_ms(), 900_000);
        assert_eq!(sample.slot, 56);
        assert_eq!(sample.time, at(14, 0, 0));
        assert!((sample.power - 1000.0).abs() < 1e-9);
        assert_eq!(sample.energy, 250.0);
    }

    #[test]
    fn test_power_display_from_reading() {
        let reading = InstantReading {
            timestamp: "250614153045".to_string(),
            power: 742.3,
        };

        let display = PowerDisplay::from_reading(&reading);

        assert_eq!(display.timestamp, "15:30:45");
        assert_eq!(display.power, "742 W");
    }

    #[test]
    fn test_power_display_rounds_half_up() {
        let reading = InstantReading {
            timestamp: "250614153045".to_string(),
            power: 100.5,
        };

        assert_eq!(PowerDisplay::from_reading(&reading).power, "101 W");
    }

    #[test]
    fn test_power_display_error() {
        let display = PowerDisplay::error();

        assert_eq!(display.timestamp, "");
        assert_eq!(display.power, "Error fetching data");
    }
}
