//! Storage contract for people and their availability.
//!
//! The engine never persists anything itself. It reads and writes through
//! [`AvailabilityStore`], and callers are responsible for making a
//! read-merge-write cycle atomic per person if they share a store across
//! threads. [`MemoryStore`] is a serde-friendly implementation used by the CLI
//! and the tests.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::availability::Availability;
use crate::error::Role;
use crate::slot::AvailabilitySlot;

/// A registered candidate or interviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: Role,
}

pub trait AvailabilityStore {
    /// Look up a registered person by role and name.
    fn find_person(&self, role: Role, name: &str) -> Option<Person>;

    /// Register a person. Returns `false` if they were already registered.
    fn add_person(&mut self, role: Role, name: &str) -> bool;

    /// Unregister a person along with any availability they declared.
    /// Returns `false` if nobody was registered under that name.
    fn remove_person(&mut self, role: Role, name: &str) -> bool;

    /// Everyone registered under `role`.
    fn people(&self, role: Role) -> Vec<Person>;

    /// Fetch the stored availability of a person, if any.
    fn get_availability(&self, role: Role, name: &str) -> Option<Availability>;

    /// Every availability record stored under `role`.
    fn all_availability(&self, role: Role) -> Vec<Availability>;

    /// Insert or replace the availability record of `availability.person`.
    fn save_availability(&mut self, role: Role, availability: Availability) -> Availability;

    /// Remove a person's availability, returning what was stored.
    fn delete_availability(&mut self, role: Role, name: &str) -> Option<Availability>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Registry {
    #[serde(default)]
    people: BTreeSet<String>,
    #[serde(default)]
    availability: BTreeMap<String, Vec<AvailabilitySlot>>,
}

/// In-memory store keeping candidates and interviewers in separate registries.
///
/// Serializes to a JSON object with `candidates` and `interviewers` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    candidates: Registry,
    #[serde(default)]
    interviewers: Registry,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self, role: Role) -> &Registry {
        match role {
            Role::Candidate => &self.candidates,
            Role::Interviewer => &self.interviewers,
        }
    }

    fn registry_mut(&mut self, role: Role) -> &mut Registry {
        match role {
            Role::Candidate => &mut self.candidates,
            Role::Interviewer => &mut self.interviewers,
        }
    }
}

impl AvailabilityStore for MemoryStore {
    fn find_person(&self, role: Role, name: &str) -> Option<Person> {
        self.registry(role).people.get(name).map(|name| Person {
            name: name.clone(),
            role,
        })
    }

    fn add_person(&mut self, role: Role, name: &str) -> bool {
        self.registry_mut(role).people.insert(name.to_string())
    }

    fn remove_person(&mut self, role: Role, name: &str) -> bool {
        let registry = self.registry_mut(role);
        registry.availability.remove(name);
        registry.people.remove(name)
    }

    /// Sorted by name.
    fn people(&self, role: Role) -> Vec<Person> {
        self.registry(role)
            .people
            .iter()
            .map(|name| Person {
                name: name.clone(),
                role,
            })
            .collect()
    }

    fn get_availability(&self, role: Role, name: &str) -> Option<Availability> {
        self.registry(role)
            .availability
            .get(name)
            .map(|slots| Availability::new(name, slots.clone()))
    }

    /// Sorted by person name.
    fn all_availability(&self, role: Role) -> Vec<Availability> {
        self.registry(role)
            .availability
            .iter()
            .map(|(name, slots)| Availability::new(name.as_str(), slots.clone()))
            .collect()
    }

    fn save_availability(&mut self, role: Role, availability: Availability) -> Availability {
        self.registry_mut(role)
            .availability
            .insert(availability.person.clone(), availability.slots.clone());
        availability
    }

    fn delete_availability(&mut self, role: Role, name: &str) -> Option<Availability> {
        self.registry_mut(role)
            .availability
            .remove(name)
            .map(|slots| Availability::new(name, slots))
    }
}
