//! Common interview slot resolution across a candidate and N interviewers.
//!
//! The pipeline is:
//!
//! 1. Check that the candidate and every interviewer are registered.
//! 2. Fetch each party's availability.
//! 3. Narrow everyone to the common days (see [`DayFilter`]).
//! 4. Fold [`overlap`](crate::overlap::overlap) across the interviewers in the
//!    order they were named.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common_days::{all_parties_common_days, common_days, slots_on_days};
use crate::error::{Result, Role, SlotError};
use crate::overlap::overlap_all;
use crate::slot::AvailabilitySlot;
use crate::store::AvailabilityStore;

/// Which people to find interview slots for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    pub candidate_name: String,
    pub interviewer_names: Vec<String>,
}

impl SlotQuery {
    pub fn new<I, S>(candidate_name: impl Into<String>, interviewer_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidate_name: candidate_name.into(),
            interviewer_names: interviewer_names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Windows shared by the candidate and every named interviewer.
///
/// Interviewers are listed exactly as queried, even when the shared slot list
/// ends up empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    pub candidate_name: String,
    pub interviewer_names: Vec<String>,
    pub slots: Vec<AvailabilitySlot>,
}

/// How days are pre-filtered before the pairwise overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    /// Keep a day when the candidate and at least one interviewer declared it.
    #[default]
    AnyInterviewer,
    /// Keep a day only when the candidate and every interviewer declared it.
    AllParties,
}

impl DayFilter {
    fn days(
        self,
        candidate: &[AvailabilitySlot],
        interviewers: &[&[AvailabilitySlot]],
    ) -> BTreeSet<NaiveDate> {
        match self {
            DayFilter::AnyInterviewer => common_days(candidate, interviewers),
            DayFilter::AllParties => all_parties_common_days(candidate, interviewers),
        }
    }
}

/// Resolve the common interview slots for `query`.
///
/// Both [`DayFilter`] variants produce the same result; they only differ in how
/// much work the overlap step does.
///
/// # Errors
/// - [`SlotError::NoInterviewers`] if the query names no interviewer.
/// - [`SlotError::PersonNotFound`] for the first unregistered person, candidate first.
/// - [`SlotError::AvailabilityNotDefined`] for the first person without availability,
///   candidate first.
pub fn resolve_interview_slots<S>(
    store: &S,
    query: &SlotQuery,
    filter: DayFilter,
) -> Result<SlotResult>
where
    S: AvailabilityStore + ?Sized,
{
    if query.interviewer_names.is_empty() {
        warn!(candidate = %query.candidate_name, "slot query names no interviewer");
        return Err(SlotError::NoInterviewers);
    }

    require_person(store, Role::Candidate, &query.candidate_name)?;
    for name in &query.interviewer_names {
        require_person(store, Role::Interviewer, name)?;
    }

    let candidate = require_availability(store, Role::Candidate, &query.candidate_name)?;
    let interviewers = query
        .interviewer_names
        .iter()
        .map(|name| require_availability(store, Role::Interviewer, name))
        .collect::<Result<Vec<_>>>()?;

    let interviewer_refs: Vec<&[AvailabilitySlot]> =
        interviewers.iter().map(Vec::as_slice).collect();
    let days = filter.days(&candidate, &interviewer_refs);
    debug!(
        candidate = %query.candidate_name,
        interviewers = query.interviewer_names.len(),
        common_days = days.len(),
        ?filter,
        "narrowed availability to common days"
    );

    let candidate_slots = slots_on_days(&candidate, &days);
    let interviewer_slots: Vec<Vec<AvailabilitySlot>> = interviewers
        .iter()
        .map(|slots| slots_on_days(slots, &days))
        .collect();

    let slots = overlap_all(candidate_slots, &interviewer_slots);
    debug!(
        candidate = %query.candidate_name,
        days = slots.len(),
        "resolved interview slots"
    );

    Ok(SlotResult {
        candidate_name: query.candidate_name.clone(),
        interviewer_names: query.interviewer_names.clone(),
        slots,
    })
}

pub(crate) fn require_person<S>(store: &S, role: Role, name: &str) -> Result<()>
where
    S: AvailabilityStore + ?Sized,
{
    match store.find_person(role, name) {
        Some(_) => Ok(()),
        None => {
            warn!(%role, name, "unknown person");
            Err(SlotError::PersonNotFound {
                role,
                name: name.to_string(),
            })
        }
    }
}

fn require_availability<S>(store: &S, role: Role, name: &str) -> Result<Vec<AvailabilitySlot>>
where
    S: AvailabilityStore + ?Sized,
{
    match store.get_availability(role, name) {
        Some(availability) => Ok(availability.slots),
        None => {
            warn!(%role, name, "no availability on record");
            Err(SlotError::AvailabilityNotDefined {
                role,
                name: name.to_string(),
            })
        }
    }
}
