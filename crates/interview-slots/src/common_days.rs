//! Days on which the candidate and the interviewers have declared free time.
//!
//! [`common_days`] is deliberately loose: a day qualifies when the candidate and
//! *any* interviewer have it. Days missing for some interviewer are removed later
//! by the pairwise reduction in [`crate::overlap::overlap_all`], because
//! overlapping against an interviewer with nothing on that day yields nothing.
//! [`all_parties_common_days`] applies the strict rule up front; both feed the
//! same final result.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::slot::AvailabilitySlot;

/// Days the candidate has in common with at least one interviewer.
pub fn common_days(
    candidate: &[AvailabilitySlot],
    interviewers: &[&[AvailabilitySlot]],
) -> BTreeSet<NaiveDate> {
    candidate
        .iter()
        .map(|slot| slot.day)
        .filter(|day| {
            interviewers
                .iter()
                .any(|slots| slots.iter().any(|slot| slot.day == *day))
        })
        .collect()
}

/// Days the candidate has in common with every interviewer.
///
/// With no interviewers at all, no day is common.
pub fn all_parties_common_days(
    candidate: &[AvailabilitySlot],
    interviewers: &[&[AvailabilitySlot]],
) -> BTreeSet<NaiveDate> {
    if interviewers.is_empty() {
        return BTreeSet::new();
    }

    candidate
        .iter()
        .map(|slot| slot.day)
        .filter(|day| {
            interviewers
                .iter()
                .all(|slots| slots.iter().any(|slot| slot.day == *day))
        })
        .collect()
}

/// Keep only the entries whose day is in `days`, preserving their order.
pub fn slots_on_days(
    slots: &[AvailabilitySlot],
    days: &BTreeSet<NaiveDate>,
) -> Vec<AvailabilitySlot> {
    slots
        .iter()
        .filter(|slot| days.contains(&slot.day))
        .cloned()
        .collect()
}
