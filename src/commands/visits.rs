//! Visits screen commands.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Visit, VisitPatch};
use crate::store::SelectOption;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitForm {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub diagnosis: String,
}

pub fn list_visits(state: &CoreState) -> Result<Vec<Visit>, String> {
    super::list_records(state)
}

pub fn search_visits(query: &str, state: &CoreState) -> Result<Vec<Visit>, String> {
    super::search_records(query, state)
}

pub fn get_visit(id: &str, state: &CoreState) -> Result<Visit, String> {
    super::get_record(id, state)
}

pub fn add_visit(form: VisitForm, state: &CoreState) -> Result<Visit, String> {
    let date = super::date_or_today(form.date.as_deref());
    let record = Visit::new(
        &form.id,
        &form.patient,
        &form.doctor,
        &date,
        &form.diagnosis,
    );
    super::add_record(record, state)
}

/// Only the diagnosis is editable.
pub fn update_visit(id: &str, patch: VisitPatch, state: &CoreState) -> Result<Visit, String> {
    super::update_record(id, patch, state)
}

pub fn delete_visit(id: &str, state: &CoreState) -> Result<Visit, String> {
    super::delete_record(id, state)
}

/// Visit ids, also offered by the payment form.
pub fn visit_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Visit>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    #[test]
    fn add_and_edit_diagnosis() {
        let state = logged_in_state();
        let form = VisitForm {
            id: "V1".into(),
            patient: "Jane Doe".into(),
            doctor: "Amal".into(),
            date: Some("2024-01-01".into()),
            diagnosis: "  cough ".into(),
        };
        let v = add_visit(form, &state).unwrap();
        assert_eq!(v.diagnosis, "cough");

        let patch = VisitPatch {
            diagnosis: Some("bronchitis".into()),
        };
        update_visit("V1", patch, &state).unwrap();
        assert_eq!(get_visit("V1", &state).unwrap().diagnosis, "bronchitis");
    }

    #[test]
    fn search_matches_patient_or_doctor() {
        let state = logged_in_state();
        for (id, patient, doctor) in [
            ("V1", "Jane Doe", "Amal"),
            ("V2", "John Roe", "Zaid"),
            ("V3", "Sara Zaidan", "Lina"),
        ] {
            let form = VisitForm {
                id: id.into(),
                patient: patient.into(),
                doctor: doctor.into(),
                date: Some("2024-01-01".into()),
                diagnosis: "flu".into(),
            };
            add_visit(form, &state).unwrap();
        }
        let ids: Vec<_> = search_visits("zaid", &state)
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["V2", "V3"]);
        assert!(search_visits("flu", &state).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_visit() {
        let state = logged_in_state();
        assert_eq!(delete_visit("V1", &state).unwrap_err(), "Visit not found: V1");
    }
}
