//! Error types for availability submission and slot resolution.
//!
//! Every failure here is caused by caller input. Each variant exposes a stable
//! message key plus the offending values as arguments, so callers can render
//! their own user-facing representation.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of the interview a person is on.
///
/// Candidates and interviewers are stored under separate keys, and the role
/// determines the wording of lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Interviewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Candidate => f.write_str("Candidate"),
            Role::Interviewer => f.write_str("Interviewer"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Start hour of slot must be before end hour of slot! (From: {from}, To: {to})")]
    InvertedBounds { from: NaiveTime, to: NaiveTime },

    #[error(
        "Availability slot must be from the beginning of the hour until the beginning of the next hour! (From: {from}, To: {to})"
    )]
    NotHourAligned { from: NaiveTime, to: NaiveTime },

    #[error("{role} Name cannot be empty!")]
    BlankName { role: Role },

    #[error("{role} does not exist! ({name})")]
    PersonNotFound { role: Role, name: String },

    #[error("{role} has no availability defined! ({name})")]
    AvailabilityNotDefined { role: Role, name: String },

    #[error("At least one interviewer must be named!")]
    NoInterviewers,
}

impl SlotError {
    /// Human-readable message without the offending values.
    pub fn message_key(&self) -> String {
        match self {
            SlotError::InvertedBounds { .. } => {
                "Start hour of slot must be before end hour of slot!".to_string()
            }
            SlotError::NotHourAligned { .. } => {
                "Availability slot must be from the beginning of the hour until the beginning of the next hour!"
                    .to_string()
            }
            SlotError::BlankName { role } => format!("{role} Name cannot be empty!"),
            SlotError::PersonNotFound { role, .. } => format!("{role} does not exist!"),
            SlotError::AvailabilityNotDefined { role, .. } => {
                format!("{role} has no availability defined!")
            }
            SlotError::NoInterviewers => "At least one interviewer must be named!".to_string(),
        }
    }

    /// The values that caused the error, in display form.
    pub fn arguments(&self) -> Vec<String> {
        match self {
            SlotError::InvertedBounds { from, to } | SlotError::NotHourAligned { from, to } => {
                vec![format!("From: {from}"), format!("To: {to}")]
            }
            SlotError::PersonNotFound { name, .. }
            | SlotError::AvailabilityNotDefined { name, .. } => vec![name.clone()],
            SlotError::BlankName { .. } | SlotError::NoInterviewers => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
