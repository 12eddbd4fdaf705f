//! Time window value types.
//!
//! A [`TimeSlot`] is a half-open time-of-day interval; an [`AvailabilitySlot`]
//! attaches a list of them to one calendar day. All times share one implicit
//! timezone.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A half-open `[from, to)` window on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl TimeSlot {
    pub fn new(from: NaiveTime, to: NaiveTime) -> Self {
        Self { from, to }
    }

    /// Build a slot from whole hours, e.g. `TimeSlot::hours(9, 11)` for 09:00-11:00.
    ///
    /// Returns `None` if either hour is outside `0..24`.
    pub fn hours(from_hour: u32, to_hour: u32) -> Option<Self> {
        Some(Self {
            from: NaiveTime::from_hms_opt(from_hour, 0, 0)?,
            to: NaiveTime::from_hms_opt(to_hour, 0, 0)?,
        })
    }

    /// The window during which both slots are free, if any.
    ///
    /// Two windows intersect iff `self.from < other.to && other.from < self.to`,
    /// so windows that only touch at an endpoint do not intersect.
    pub fn intersect(&self, other: &TimeSlot) -> Option<TimeSlot> {
        if self.from < other.to && other.from < self.to {
            Some(TimeSlot {
                from: self.from.max(other.from),
                to: self.to.min(other.to),
            })
        } else {
            None
        }
    }
}

/// One calendar day and the windows declared free on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
}

impl AvailabilitySlot {
    pub fn new(day: NaiveDate, time_slots: Vec<TimeSlot>) -> Self {
        Self { day, time_slots }
    }
}
