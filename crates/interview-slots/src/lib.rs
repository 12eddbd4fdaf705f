//! # interview-slots
//!
//! Availability reconciliation and common-slot resolution for interview scheduling.
//!
//! Candidates and interviewers declare the hours they are free, day by day. This
//! crate validates those declarations, folds repeated submissions into a single
//! per-person record, and computes the time windows that a candidate shares with
//! every one of an arbitrary number of interviewers.
//!
//! ## Modules
//!
//! - [`slot`] — `TimeSlot` and `AvailabilitySlot` value types
//! - [`validate`] — Well-formedness and hour-alignment checks for submitted slots
//! - [`availability`] — Per-person availability records and day-keyed merging
//! - [`common_days`] — Days shared by the candidate and the interviewers
//! - [`overlap`] — Pairwise time intersection of day-scoped slot lists
//! - [`resolver`] — Query/result types and the slot intersection pipeline
//! - [`store`] — Storage contract plus an in-memory implementation
//! - [`service`] — Registration, submission and lookup operations over a store
//! - [`error`] — Error types

pub mod availability;
pub mod common_days;
pub mod error;
pub mod overlap;
pub mod resolver;
pub mod service;
pub mod slot;
pub mod store;
pub mod validate;

pub use availability::{merge_availability, Availability};
pub use common_days::{all_parties_common_days, common_days, slots_on_days};
pub use error::{Role, SlotError};
pub use overlap::{overlap, overlap_all};
pub use resolver::{resolve_interview_slots, DayFilter, SlotQuery, SlotResult};
pub use service::{
    delete_availability, delete_person, get_availability, get_interview_slots, list_availability,
    list_people, register_person, submit_availability,
};
pub use slot::{AvailabilitySlot, TimeSlot};
pub use store::{AvailabilityStore, MemoryStore, Person};
pub use validate::{validate_availability_slots, validate_time_slot};
