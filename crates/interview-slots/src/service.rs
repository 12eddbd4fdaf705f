//! Operations exposed to callers, expressed over any [`AvailabilityStore`].
//!
//! Every mutating operation checks its input before writing.

use tracing::{debug, info, warn};

use crate::availability::{merge_availability, Availability};
use crate::error::{Result, Role, SlotError};
use crate::resolver::{require_person, resolve_interview_slots, DayFilter, SlotQuery, SlotResult};
use crate::slot::AvailabilitySlot;
use crate::store::{AvailabilityStore, Person};
use crate::validate::validate_availability_slots;

/// Register a person under `role`.
///
/// Returns `false` without touching the store if the name is already taken.
///
/// # Errors
/// [`SlotError::BlankName`] if `name` is empty or only whitespace.
pub fn register_person<S>(store: &mut S, role: Role, name: &str) -> Result<bool>
where
    S: AvailabilityStore + ?Sized,
{
    if name.trim().is_empty() {
        warn!(%role, "rejected blank name");
        return Err(SlotError::BlankName { role });
    }

    let added = store.add_person(role, name);
    if added {
        info!(%role, name, "person registered");
    } else {
        debug!(%role, name, "person already registered");
    }
    Ok(added)
}

/// Unregister a person and drop whatever availability they declared.
///
/// # Errors
/// [`SlotError::PersonNotFound`] if `name` is not registered under `role`.
pub fn delete_person<S>(store: &mut S, role: Role, name: &str) -> Result<()>
where
    S: AvailabilityStore + ?Sized,
{
    require_person(&*store, role, name)?;
    store.remove_person(role, name);
    info!(%role, name, "person deleted");
    Ok(())
}

/// Everyone registered under `role`, ordered by name.
pub fn list_people<S>(store: &S, role: Role) -> Vec<Person>
where
    S: AvailabilityStore + ?Sized,
{
    store.people(role)
}

/// Every availability record stored under `role`, ordered by person name.
pub fn list_availability<S>(store: &S, role: Role) -> Vec<Availability>
where
    S: AvailabilityStore + ?Sized,
{
    store.all_availability(role)
}

/// Validate a batch of free time and merge it into the person's record.
///
/// Nothing is written unless the person is registered and every window in the
/// batch is valid.
///
/// # Errors
/// - [`SlotError::PersonNotFound`] if `name` is not registered under `role`.
/// - [`SlotError::InvertedBounds`] / [`SlotError::NotHourAligned`] for the first bad window.
pub fn submit_availability<S>(
    store: &mut S,
    role: Role,
    name: &str,
    slots: Vec<AvailabilitySlot>,
) -> Result<Availability>
where
    S: AvailabilityStore + ?Sized,
{
    require_person(&*store, role, name)?;

    if let Err(err) = validate_availability_slots(&slots) {
        warn!(%role, name, error = %err, "rejected availability submission");
        return Err(err);
    }

    let existing = store.get_availability(role, name);
    debug!(
        %role,
        name,
        existing_days = existing.as_ref().map_or(0, Availability::day_count),
        incoming_days = slots.len(),
        "merging availability"
    );

    let merged = merge_availability(existing, name, slots);
    let saved = store.save_availability(role, merged);
    info!(%role, name, days = saved.day_count(), "availability saved");

    Ok(saved)
}

/// Resolve common interview slots using the default day filter.
pub fn get_interview_slots<S>(store: &S, query: &SlotQuery) -> Result<SlotResult>
where
    S: AvailabilityStore + ?Sized,
{
    resolve_interview_slots(store, query, DayFilter::default())
}

/// Fetch a person's availability.
///
/// # Errors
/// [`SlotError::AvailabilityNotDefined`] if nothing is stored for `name`.
pub fn get_availability<S>(store: &S, role: Role, name: &str) -> Result<Availability>
where
    S: AvailabilityStore + ?Sized,
{
    store
        .get_availability(role, name)
        .ok_or_else(|| SlotError::AvailabilityNotDefined {
            role,
            name: name.to_string(),
        })
}

/// Remove a person's availability, returning the removed record.
///
/// # Errors
/// [`SlotError::AvailabilityNotDefined`] if nothing is stored for `name`.
pub fn delete_availability<S>(store: &mut S, role: Role, name: &str) -> Result<Availability>
where
    S: AvailabilityStore + ?Sized,
{
    let removed = store
        .delete_availability(role, name)
        .ok_or_else(|| SlotError::AvailabilityNotDefined {
            role,
            name: name.to_string(),
        })?;
    info!(%role, name, days = removed.day_count(), "availability deleted");
    Ok(removed)
}
