use serde::{Deserialize, Serialize};

use super::{patch_text, trimmed, EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    pub date: String,
}

impl Appointment {
    pub fn new(id: &str, patient: &str, doctor: &str, date: &str) -> Self {
        Self {
            id: trimmed(id),
            patient: trimmed(patient),
            doctor: trimmed(doctor),
            date: trimmed(date),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentPatch {
    pub patient: Option<String>,
    pub doctor: Option<String>,
    pub date: Option<String>,
}

impl Record for Appointment {
    type Patch = AppointmentPatch;
    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient, &self.doctor]
    }

    fn apply(&mut self, patch: AppointmentPatch) {
        patch_text(&mut self.patient, patch.patient);
        patch_text(&mut self.doctor, patch.doctor);
        patch_text(&mut self.date, patch.date);
    }
}
