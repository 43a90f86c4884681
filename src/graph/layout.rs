use chrono::NaiveDateTime;

use super::partition::midnight;
use crate::models::IntervalSample;
use crate::timestamp::format_tooltip_time;

/// Bars never shrink below this height, so idle slots stay visible
pub const MIN_BAR_HEIGHT: f64 = 2.0;

/// Floor for the scaling maximum when every slot reads zero
pub const MIN_SCALE_MAX: f64 = 0.1;

/// Whether a bar shows today's data or a slot backfilled from yesterday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Current,
    Faded,
}

impl BarTone {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Current => "bar current",
            Self::Faded => "bar faded",
        }
    }
}

/// Geometry of one rendered bar, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub slot: usize,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub tone: BarTone,
}

/// Largest average power, never below [`MIN_SCALE_MAX`]
pub fn scale_max(samples: &[IntervalSample]) -> f64 {
    samples
        .iter()
        .map(|s| s.power)
        .filter(|p| p.is_finite())
        .fold(MIN_SCALE_MAX, f64::max)
}

/// Lay out one bar per sample across a container of the given size
pub fn layout_bars(
    samples: &[IntervalSample],
    now: &NaiveDateTime,
    container_width: f64,
    container_height: f64,
) -> Vec<Bar> {
    if samples.is_empty() {
        return Vec::new();
    }

    let width = container_width / samples.len() as f64;
    let max = scale_max(samples);
    let today = midnight(now);

    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let scaled = sample.power / max * container_height;
            let height = if scaled.is_finite() {
                scaled.max(MIN_BAR_HEIGHT)
            } else {
                MIN_BAR_HEIGHT
            };
            let tone = if sample.time >= today {
                BarTone::Current
            } else {
                BarTone::Faded
            };

            Bar {
                slot: sample.slot,
                left: index as f64 * width,
                width,
                height,
                tone,
            }
        })
        .collect()
}

/// Heading and body lines of the tooltip for one sample
pub fn tooltip_lines(sample: &IntervalSample) -> (String, String) {
    let heading = format!(
        "{} - {}",
        format_tooltip_time(&sample.time),
        format_tooltip_time(&sample.end)
    );
    let body = format!("{} W ({} Wh)", sample.power, sample.energy);
    (heading, body)
}

/// Sum of energy over all samples, in Wh
pub fn total_energy(samples: &[IntervalSample]) -> f64 {
    samples.iter().map(|s| s.energy).filter(|e| e.is_finite()).sum()
}
