//! Per-person availability records and day-keyed merging.
//!
//! A person submits free time in batches. Each batch is folded into their
//! existing record one day at a time: windows for a day already on record are
//! appended to that day, windows for a new day become a new entry. Windows are
//! never coalesced or deduplicated, so overlapping or repeated windows within a
//! day are kept exactly as submitted.

use serde::{Deserialize, Serialize};

use crate::slot::AvailabilitySlot;

/// All the free time a single candidate or interviewer has declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Name of the candidate or interviewer this record belongs to.
    pub person: String,
    /// Declared days, in the order they were first submitted.
    pub slots: Vec<AvailabilitySlot>,
}

impl Availability {
    pub fn new(person: impl Into<String>, slots: Vec<AvailabilitySlot>) -> Self {
        Self {
            person: person.into(),
            slots,
        }
    }

    /// Fold a new batch of days into this record.
    ///
    /// For every incoming day, the windows are appended to the entry with the
    /// same date if there is one; otherwise the day is appended as a new entry.
    /// Every incoming window ends up in the record and no date is listed twice
    /// afterwards, unless it was already listed twice before.
    pub fn merge(&mut self, incoming: Vec<AvailabilitySlot>) {
        for slot in incoming {
            match self.slots.iter_mut().find(|existing| existing.day == slot.day) {
                Some(existing) => existing.time_slots.extend(slot.time_slots),
                None => self.slots.push(slot),
            }
        }
    }

    /// Number of distinct entries (days) on record.
    pub fn day_count(&self) -> usize {
        self.slots.len()
    }
}

/// Merge a submission into a person's existing record, if any.
///
/// Without an existing record the submission becomes the record verbatim, so a
/// first submission that lists the same day twice keeps both entries. A later
/// merge only ever extends the first entry for that day. Both day filters
/// resolve such a record identically.
pub fn merge_availability(
    existing: Option<Availability>,
    person: &str,
    incoming: Vec<AvailabilitySlot>,
) -> Availability {
    match existing {
        Some(mut availability) => {
            availability.merge(incoming);
            availability
        }
        None => Availability::new(person, incoming),
    }
}
