//! Pairwise time intersection of day-scoped slot lists.
//!
//! Every entry of the left list is compared against every entry of the right
//! list. Entries on the same day have all their windows intersected pairwise;
//! windows that merely touch (one ends exactly when the other starts) do not
//! intersect.

use crate::slot::{AvailabilitySlot, TimeSlot};

/// Intersect two slot lists day by day.
///
/// For each same-day pair `(a, b)`, all non-empty window intersections are
/// collected into one entry. The entry carries `b`'s day and is emitted only
/// when at least one intersection exists. Repeated days on either side produce
/// repeated entries; nothing is deduplicated.
pub fn overlap(a: &[AvailabilitySlot], b: &[AvailabilitySlot]) -> Vec<AvailabilitySlot> {
    let mut overlapping = Vec::new();

    for slot_a in a {
        for slot_b in b {
            if slot_a.day != slot_b.day {
                continue;
            }

            let time_slots: Vec<TimeSlot> = slot_a
                .time_slots
                .iter()
                .flat_map(|ta| slot_b.time_slots.iter().filter_map(move |tb| ta.intersect(tb)))
                .collect();

            if !time_slots.is_empty() {
                overlapping.push(AvailabilitySlot {
                    day: slot_b.day,
                    time_slots,
                });
            }
        }
    }

    overlapping
}

/// Reduce the candidate's slots against each interviewer in turn.
///
/// Equivalent to `overlap(overlap(overlap(candidate, i1), i2), i3)...`: the
/// running result is always the left operand. With no interviewers the
/// candidate's slots are returned unchanged.
pub fn overlap_all<S>(candidate: Vec<AvailabilitySlot>, interviewers: &[S]) -> Vec<AvailabilitySlot>
where
    S: AsRef<[AvailabilitySlot]>,
{
    interviewers
        .iter()
        .fold(candidate, |running, interviewer| overlap(&running, interviewer.as_ref()))
}
