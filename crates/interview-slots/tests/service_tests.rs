//! Tests for registering people and for submitting, reading and deleting
//! availability through a store.

use chrono::{NaiveDate, NaiveTime};
use interview_slots::{
    delete_availability, delete_person, get_availability, list_availability, list_people,
    register_person, submit_availability,
};
use interview_slots::{
    AvailabilitySlot, AvailabilityStore, MemoryStore, Person, Role, SlotError, TimeSlot,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 1, d).unwrap()
}

fn on(d: u32, windows: &[(u32, u32)]) -> AvailabilitySlot {
    AvailabilitySlot::new(
        day(d),
        windows
            .iter()
            .map(|&(from, to)| TimeSlot::hours(from, to).unwrap())
            .collect(),
    )
}

fn store_with(role: Role, name: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_person(role, name);
    store
}

// ── People ──────────────────────────────────────────────────────────────────

#[test]
fn register_reports_whether_the_name_was_new() {
    let mut store = MemoryStore::new();

    assert_eq!(register_person(&mut store, Role::Candidate, "John Doe"), Ok(true));
    assert_eq!(register_person(&mut store, Role::Candidate, "John Doe"), Ok(false));
    assert!(store.find_person(Role::Candidate, "John Doe").is_some());
}

#[test]
fn blank_names_are_rejected() {
    let mut store = MemoryStore::new();

    for name in ["", "   ", "\t\n"] {
        let err = register_person(&mut store, Role::Candidate, name).unwrap_err();
        assert_eq!(err, SlotError::BlankName { role: Role::Candidate });
        assert_eq!(err.to_string(), "Candidate Name cannot be empty!");
        assert!(err.arguments().is_empty());
    }
    assert!(list_people(&store, Role::Candidate).is_empty());
}

#[test]
fn people_are_listed_by_name_within_their_role() {
    let mut store = MemoryStore::new();
    register_person(&mut store, Role::Interviewer, "John Smith").unwrap();
    register_person(&mut store, Role::Interviewer, "Debora Smith").unwrap();
    register_person(&mut store, Role::Candidate, "John Doe").unwrap();

    let names: Vec<_> = list_people(&store, Role::Interviewer)
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Debora Smith", "John Smith"]);
    assert_eq!(
        list_people(&store, Role::Candidate),
        vec![Person {
            name: "John Doe".to_string(),
            role: Role::Candidate
        }]
    );
}

#[test]
fn availability_is_listed_only_for_people_who_declared_it() {
    let mut store = store_with(Role::Candidate, "John Doe");
    register_person(&mut store, Role::Candidate, "Sam Wheeler").unwrap();
    register_person(&mut store, Role::Candidate, "Ann Lee").unwrap();
    submit_availability(&mut store, Role::Candidate, "John Doe", vec![on(1, &[(9, 11)])]).unwrap();
    submit_availability(&mut store, Role::Candidate, "Ann Lee", vec![on(2, &[(13, 14)])]).unwrap();

    let all = list_availability(&store, Role::Candidate);

    let people: Vec<_> = all.iter().map(|a| a.person.as_str()).collect();
    assert_eq!(people, vec!["Ann Lee", "John Doe"]);
    assert_eq!(all[1].slots, vec![on(1, &[(9, 11)])]);
    assert!(list_availability(&store, Role::Interviewer).is_empty());
}

#[test]
fn deleting_a_person_drops_their_availability() {
    let mut store = store_with(Role::Interviewer, "Jane Doe");
    submit_availability(&mut store, Role::Interviewer, "Jane Doe", vec![on(1, &[(9, 10)])]).unwrap();

    delete_person(&mut store, Role::Interviewer, "Jane Doe").unwrap();

    assert!(store.find_person(Role::Interviewer, "Jane Doe").is_none());
    assert!(list_availability(&store, Role::Interviewer).is_empty());
    // Registering again starts from a clean record.
    register_person(&mut store, Role::Interviewer, "Jane Doe").unwrap();
    assert!(get_availability(&store, Role::Interviewer, "Jane Doe").is_err());
}

#[test]
fn deleting_an_unknown_person_fails() {
    let mut store = store_with(Role::Candidate, "Jane Doe");

    assert_eq!(
        delete_person(&mut store, Role::Interviewer, "Jane Doe"),
        Err(SlotError::PersonNotFound {
            role: Role::Interviewer,
            name: "Jane Doe".to_string()
        })
    );
    assert!(store.find_person(Role::Candidate, "Jane Doe").is_some());
}

// ── Submission ──────────────────────────────────────────────────────────────

#[test]
fn first_submission_is_stored() {
    let mut store = store_with(Role::Candidate, "John Doe");

    let saved = submit_availability(&mut store, Role::Candidate, "John Doe", vec![on(1, &[(9, 11)])])
        .unwrap();

    assert_eq!(saved.slots, vec![on(1, &[(9, 11)])]);
    assert_eq!(
        store.get_availability(Role::Candidate, "John Doe"),
        Some(saved)
    );
}

#[test]
fn second_submission_merges_into_first() {
    let mut store = store_with(Role::Interviewer, "Jane Doe");
    submit_availability(&mut store, Role::Interviewer, "Jane Doe", vec![on(1, &[(9, 10)])]).unwrap();

    let saved = submit_availability(
        &mut store,
        Role::Interviewer,
        "Jane Doe",
        vec![on(1, &[(13, 14)]), on(2, &[(9, 12)])],
    )
    .unwrap();

    assert_eq!(saved.day_count(), 2);
    assert_eq!(saved.slots[0], on(1, &[(9, 10), (13, 14)]));
    assert_eq!(saved.slots[1], on(2, &[(9, 12)]));
}

#[test]
fn unregistered_person_cannot_submit() {
    let mut store = store_with(Role::Candidate, "John Doe");

    let err = submit_availability(&mut store, Role::Interviewer, "John Doe", vec![on(1, &[(9, 11)])])
        .unwrap_err();

    assert_eq!(err.message_key(), "Interviewer does not exist!");
    assert!(store.get_availability(Role::Interviewer, "John Doe").is_none());
}

#[test]
fn invalid_window_leaves_record_untouched() {
    let mut store = store_with(Role::Candidate, "John Doe");
    submit_availability(&mut store, Role::Candidate, "John Doe", vec![on(1, &[(9, 11)])]).unwrap();
    let before = store.clone();

    let half_hour = TimeSlot::new(
        NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    );
    let err = submit_availability(
        &mut store,
        Role::Candidate,
        "John Doe",
        vec![
            on(2, &[(9, 10)]),
            AvailabilitySlot::new(day(1), vec![half_hour]),
        ],
    )
    .unwrap_err();

    assert!(matches!(err, SlotError::NotHourAligned { .. }));
    assert_eq!(store, before);
}

// ── Lookup and deletion ─────────────────────────────────────────────────────

#[test]
fn get_without_availability_fails() {
    let store = store_with(Role::Candidate, "John Doe");

    let err = get_availability(&store, Role::Candidate, "John Doe").unwrap_err();

    assert_eq!(err.message_key(), "Candidate has no availability defined!");
}

#[test]
fn delete_returns_removed_record() {
    let mut store = store_with(Role::Interviewer, "Jane Doe");
    submit_availability(&mut store, Role::Interviewer, "Jane Doe", vec![on(3, &[(9, 17)])]).unwrap();

    let removed = delete_availability(&mut store, Role::Interviewer, "Jane Doe").unwrap();

    assert_eq!(removed.slots, vec![on(3, &[(9, 17)])]);
    assert!(get_availability(&store, Role::Interviewer, "Jane Doe").is_err());
    // The person stays registered.
    assert!(store.find_person(Role::Interviewer, "Jane Doe").is_some());
}

#[test]
fn delete_without_availability_fails() {
    let mut store = store_with(Role::Interviewer, "Jane Doe");

    assert_eq!(
        delete_availability(&mut store, Role::Interviewer, "Jane Doe"),
        Err(SlotError::AvailabilityNotDefined {
            role: Role::Interviewer,
            name: "Jane Doe".to_string()
        })
    );
}
