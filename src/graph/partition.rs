//! Splits the trailing 24 hours into fixed 15-minute slots

use chrono::{Days, Duration, NaiveDateTime, NaiveTime};

use crate::models::IntervalDescriptor;

pub const SLOT_MINUTES: i64 = 15;
pub const SLOT_COUNT: usize = 96;

/// Length of one slot
pub fn slot_length() -> Duration {
    Duration::minutes(SLOT_MINUTES)
}

/// Start of the day containing `now`
pub fn midnight(now: &NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Start of the day before the one containing `now`
pub fn midnight_yesterday(now: &NaiveDateTime) -> NaiveDateTime {
    let today = midnight(now);
    today.checked_sub_days(Days::new(1)).unwrap_or(today - Duration::days(1))
}

/// Build the 96 intervals of the rolling view, in slot order.
///
/// Slot `i` covers `[midnight + i*15min, +15min)`. The slot holding `now` is
/// cut off at `now`. Slots that have not started yet today are taken from
/// yesterday instead, so slot 0 is always 00:00-00:15 of whichever day
/// supplies it, not the oldest interval.
pub fn partition_day(now: NaiveDateTime) -> Vec<IntervalDescriptor> {
    let today = midnight(&now);
    let yesterday = midnight_yesterday(&now);
    let step = slot_length();

    (0..SLOT_COUNT)
        .map(|slot| {
            let offset = step * slot as i32;
            let mut start = today + offset;
            let mut end = start + step;

            if start <= now && end > now {
                end = now;
            } else if start > now {
                start = yesterday + offset;
                end = start + step;
            }

            IntervalDescriptor { slot, start, end }
        })
        .collect()
}
