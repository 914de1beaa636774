//! Doctors screen commands: view/search, add, edit, delete.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Doctor, DoctorPatch};
use crate::store::SelectOption;

/// Raw add-doctor form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorForm {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

pub fn list_doctors(state: &CoreState) -> Result<Vec<Doctor>, String> {
    super::list_records(state)
}

/// Matches name or specialty, case-insensitive.
pub fn search_doctors(query: &str, state: &CoreState) -> Result<Vec<Doctor>, String> {
    super::search_records(query, state)
}

pub fn get_doctor(id: &str, state: &CoreState) -> Result<Doctor, String> {
    super::get_record(id, state)
}

pub fn add_doctor(form: DoctorForm, state: &CoreState) -> Result<Doctor, String> {
    super::add_record(Doctor::new(&form.id, &form.name, &form.specialty), state)
}

pub fn update_doctor(id: &str, patch: DoctorPatch, state: &CoreState) -> Result<Doctor, String> {
    super::update_record(id, patch, state)
}

pub fn delete_doctor(id: &str, state: &CoreState) -> Result<Doctor, String> {
    super::delete_record(id, state)
}

/// "Name (ID)" entries for the doctor selectors.
pub fn doctor_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Doctor>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    fn form(id: &str, name: &str, specialty: &str) -> DoctorForm {
        DoctorForm {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    #[test]
    fn add_trims_and_lists() {
        let state = logged_in_state();
        let added = add_doctor(form(" D1 ", " Amal ", "Cardiology "), &state).unwrap();
        assert_eq!(added, Doctor::new("D1", "Amal", "Cardiology"));
        assert_eq!(list_doctors(&state).unwrap(), vec![added]);
    }

    #[test]
    fn duplicate_ids_are_accepted() {
        let state = logged_in_state();
        add_doctor(form("D1", "Amal", "Cardiology"), &state).unwrap();
        add_doctor(form("D1", "Zaid", "Neurology"), &state).unwrap();
        assert_eq!(list_doctors(&state).unwrap().len(), 2);
        assert_eq!(get_doctor("D1", &state).unwrap().name, "Amal");
    }

    #[test]
    fn search_by_specialty() {
        let state = logged_in_state();
        add_doctor(form("D1", "Amal", "Cardiology"), &state).unwrap();
        add_doctor(form("D2", "Zaid", "Neurology"), &state).unwrap();
        let hits = search_doctors("neuro", &state).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "D2");
    }

    #[test]
    fn edit_renames_identifier() {
        let state = logged_in_state();
        add_doctor(form("D1", "Amal", "Cardiology"), &state).unwrap();
        let patch = DoctorPatch {
            id: Some("D7".into()),
            ..Default::default()
        };
        update_doctor("D1", patch, &state).unwrap();
        assert!(get_doctor("D1", &state).is_err());
        assert_eq!(get_doctor("D7", &state).unwrap().name, "Amal");
    }

    #[test]
    fn options_use_name_label() {
        let state = logged_in_state();
        add_doctor(form("D1", "Amal", "Cardiology"), &state).unwrap();
        let opts = doctor_options(&state).unwrap();
        assert_eq!(
            opts,
            vec![SelectOption {
                label: "Amal (D1)".into(),
                id: "D1".into(),
                name: "Amal".into(),
            }]
        );
    }

    #[test]
    fn form_decodes_from_json() {
        let form: DoctorForm =
            serde_json::from_str(r#"{"id":"D1","name":"Amal","specialty":"Cardiology"}"#).unwrap();
        assert_eq!(form.name, "Amal");
    }
}
