//! Appointments screen commands.
//!
//! Patient and doctor arrive as display names, taken from the chosen
//! `SelectOption::name` or typed when the related collection is empty.
//! Only the name is stored; there is no link to the patient or doctor record.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Appointment, AppointmentPatch};
use crate::store::SelectOption;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentForm {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    /// Blank means today.
    #[serde(default)]
    pub date: Option<String>,
}

pub fn list_appointments(state: &CoreState) -> Result<Vec<Appointment>, String> {
    super::list_records(state)
}

/// Matches patient or doctor name.
pub fn search_appointments(query: &str, state: &CoreState) -> Result<Vec<Appointment>, String> {
    super::search_records(query, state)
}

pub fn get_appointment(id: &str, state: &CoreState) -> Result<Appointment, String> {
    super::get_record(id, state)
}

pub fn add_appointment(form: AppointmentForm, state: &CoreState) -> Result<Appointment, String> {
    let date = super::date_or_today(form.date.as_deref());
    let record = Appointment::new(
        &form.id,
        &form.patient,
        &form.doctor,
        &date,
    );
    super::add_record(record, state)
}

pub fn update_appointment(
    id: &str,
    patch: AppointmentPatch,
    state: &CoreState,
) -> Result<Appointment, String> {
    super::update_record(id, patch, state)
}

pub fn delete_appointment(id: &str, state: &CoreState) -> Result<Appointment, String> {
    super::delete_record(id, state)
}

pub fn appointment_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Appointment>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    fn form(id: &str, patient: &str, doctor: &str, date: Option<&str>) -> AppointmentForm {
        AppointmentForm {
            id: id.into(),
            patient: patient.into(),
            doctor: doctor.into(),
            date: date.map(String::from),
        }
    }

    #[test]
    fn names_with_parentheses_are_stored_whole() {
        let state = logged_in_state();
        let a = add_appointment(
            form("A1", "Jane (Janie) Doe", "Amal", Some("2024-03-05")),
            &state,
        )
        .unwrap();
        assert_eq!(a.patient, "Jane (Janie) Doe");
        assert_eq!(a.doctor, "Amal");
        assert_eq!(a.date, "2024-03-05");
    }

    #[test]
    fn free_text_names_are_kept() {
        let state = logged_in_state();
        let a = add_appointment(form("A1", " walk-in ", "on call", Some("2024-03-05")), &state)
            .unwrap();
        assert_eq!(a.patient, "walk-in");
        assert_eq!(a.doctor, "on call");
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let state = logged_in_state();
        let a = add_appointment(form("A1", "Jane", "Amal", None), &state).unwrap();
        assert_eq!(a.date, super::super::date_or_today(None));
    }

    #[test]
    fn edit_accepts_free_text_date() {
        let state = logged_in_state();
        add_appointment(form("A1", "Jane", "Amal", Some("2024-03-05")), &state).unwrap();
        let patch = AppointmentPatch {
            date: Some(" next tuesday ".into()),
            ..Default::default()
        };
        let a = update_appointment("A1", patch, &state).unwrap();
        assert_eq!(a.date, "next tuesday");
        assert_eq!(a.patient, "Jane");
    }

    #[test]
    fn update_missing_reports_not_found() {
        let state = logged_in_state();
        let err = update_appointment("A9", AppointmentPatch::default(), &state).unwrap_err();
        assert_eq!(err, "Appointment not found: A9");
        assert!(list_appointments(&state).unwrap().is_empty());
    }

    #[test]
    fn search_matches_patient_or_doctor() {
        let state = logged_in_state();
        add_appointment(form("A1", "Jane Doe", "Amal", None), &state).unwrap();
        add_appointment(form("A2", "John Roe", "Zaid", None), &state).unwrap();
        add_appointment(form("A3", "Amalia Cruz", "Lina", None), &state).unwrap();

        let ids = |query: &str| -> Vec<String> {
            search_appointments(query, &state)
                .unwrap()
                .into_iter()
                .map(|a| a.id)
                .collect()
        };
        assert_eq!(ids("amal"), vec!["A1", "A3"]);
        assert_eq!(ids("ZAID"), vec!["A2"]);
        assert_eq!(ids("A2"), Vec::<String>::new());
        assert_eq!(ids(" "), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn options_are_bare_ids() {
        let state = logged_in_state();
        add_appointment(form("A1", "Jane", "Amal", None), &state).unwrap();
        let opts = appointment_options(&state).unwrap();
        assert_eq!(opts[0].label, "A1");
        assert_eq!(opts[0].name, "A1");
    }
}
