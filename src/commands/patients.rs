//! Patients screen commands.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Patient, PatientPatch};
use crate::store::SelectOption;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientForm {
    pub id: String,
    pub name: String,
    pub age: u32,
}

pub fn list_patients(state: &CoreState) -> Result<Vec<Patient>, String> {
    super::list_records(state)
}

/// Matches the patient name, case-insensitive.
pub fn search_patients(query: &str, state: &CoreState) -> Result<Vec<Patient>, String> {
    super::search_records(query, state)
}

pub fn get_patient(id: &str, state: &CoreState) -> Result<Patient, String> {
    super::get_record(id, state)
}

pub fn add_patient(form: PatientForm, state: &CoreState) -> Result<Patient, String> {
    super::add_record(Patient::new(&form.id, &form.name, form.age), state)
}

pub fn update_patient(id: &str, patch: PatientPatch, state: &CoreState) -> Result<Patient, String> {
    super::update_record(id, patch, state)
}

pub fn delete_patient(id: &str, state: &CoreState) -> Result<Patient, String> {
    super::delete_record(id, state)
}

pub fn patient_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Patient>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    fn add(state: &CoreState, id: &str, name: &str, age: u32) -> Patient {
        add_patient(
            PatientForm {
                id: id.into(),
                name: name.into(),
                age,
            },
            state,
        )
        .unwrap()
    }

    #[test]
    fn search_jane_matches_stored_jane_doe() {
        let state = logged_in_state();
        add(&state, "P1", "Jane Doe", 34);
        add(&state, "P2", "John Roe", 61);
        let hits = search_patients("jane", &state).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jane Doe");
    }

    #[test]
    fn empty_search_returns_all_in_order() {
        let state = logged_in_state();
        add(&state, "P2", "John Roe", 61);
        add(&state, "P1", "Jane Doe", 34);
        let ids: Vec<_> = search_patients("", &state)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn edit_age() {
        let state = logged_in_state();
        add(&state, "P1", "Jane Doe", 34);
        let patch = PatientPatch {
            age: Some(35),
            ..Default::default()
        };
        assert_eq!(update_patient("P1", patch, &state).unwrap().age, 35);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let state = logged_in_state();
        add(&state, "P1", "Jane Doe", 34);
        delete_patient("P1", &state).unwrap();
        assert_eq!(get_patient("P1", &state).unwrap_err(), "Patient not found: P1");
        assert!(list_patients(&state).unwrap().is_empty());
    }
}
