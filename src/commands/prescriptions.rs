//! Prescriptions screen commands.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Prescription, PrescriptionPatch};
use crate::store::SelectOption;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrescriptionForm {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub notes: String,
}

pub fn list_prescriptions(state: &CoreState) -> Result<Vec<Prescription>, String> {
    super::list_records(state)
}

pub fn search_prescriptions(query: &str, state: &CoreState) -> Result<Vec<Prescription>, String> {
    super::search_records(query, state)
}

pub fn get_prescription(id: &str, state: &CoreState) -> Result<Prescription, String> {
    super::get_record(id, state)
}

pub fn add_prescription(form: PrescriptionForm, state: &CoreState) -> Result<Prescription, String> {
    let record = Prescription::new(
        &form.id,
        &form.patient,
        &form.doctor,
        &form.medications,
        &form.notes,
    );
    super::add_record(record, state)
}

pub fn update_prescription(
    id: &str,
    patch: PrescriptionPatch,
    state: &CoreState,
) -> Result<Prescription, String> {
    super::update_record(id, patch, state)
}

pub fn delete_prescription(id: &str, state: &CoreState) -> Result<Prescription, String> {
    super::delete_record(id, state)
}

pub fn prescription_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Prescription>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    #[test]
    fn edit_medications_keeps_notes() {
        let state = logged_in_state();
        let form = PrescriptionForm {
            id: "RX1".into(),
            patient: "Jane Doe".into(),
            doctor: "Amal".into(),
            medications: "amoxicillin 500mg".into(),
            notes: "after meals".into(),
        };
        add_prescription(form, &state).unwrap();

        let patch = PrescriptionPatch {
            medications: Some("amoxicillin 250mg ".into()),
            notes: None,
        };
        let rx = update_prescription("RX1", patch, &state).unwrap();
        assert_eq!(rx.medications, "amoxicillin 250mg");
        assert_eq!(rx.notes, "after meals");
        assert_eq!(rx.patient, "Jane Doe");
    }

    #[test]
    fn search_by_doctor_name() {
        let state = logged_in_state();
        for (id, doctor) in [("RX1", "Amal"), ("RX2", "Zaid"), ("RX3", "amal")] {
            let form = PrescriptionForm {
                id: id.into(),
                patient: "Jane".into(),
                doctor: doctor.into(),
                ..Default::default()
            };
            add_prescription(form, &state).unwrap();
        }
        let ids: Vec<_> = search_prescriptions("AMAL", &state)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["RX1", "RX3"]);
    }
}
