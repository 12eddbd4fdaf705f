//! Well-formedness checks for submitted time windows.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};
use crate::slot::{AvailabilitySlot, TimeSlot};

/// Check a single window.
///
/// Bounds are checked before alignment, so `10:30-10:30` reports
/// [`SlotError::InvertedBounds`].
///
/// # Errors
/// - [`SlotError::InvertedBounds`] if `from >= to`.
/// - [`SlotError::NotHourAligned`] if either bound is not exactly on the hour.
pub fn validate_time_slot(slot: &TimeSlot) -> Result<()> {
    if slot.from >= slot.to {
        return Err(SlotError::InvertedBounds {
            from: slot.from,
            to: slot.to,
        });
    }

    if !on_the_hour(slot.from) || !on_the_hour(slot.to) {
        return Err(SlotError::NotHourAligned {
            from: slot.from,
            to: slot.to,
        });
    }

    Ok(())
}

/// Check every window of every day, stopping at the first violation.
pub fn validate_availability_slots(slots: &[AvailabilitySlot]) -> Result<()> {
    slots
        .iter()
        .flat_map(|slot| slot.time_slots.iter())
        .try_for_each(validate_time_slot)
}

fn on_the_hour(time: NaiveTime) -> bool {
    time.minute() == 0 && time.second() == 0 && time.nanosecond() == 0
}
