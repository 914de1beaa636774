use serde::{Deserialize, Serialize};

use super::{patch_text, trimmed, EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    pub medications: String,
    pub notes: String,
}

impl Prescription {
    pub fn new(id: &str, patient: &str, doctor: &str, medications: &str, notes: &str) -> Self {
        Self {
            id: trimmed(id),
            patient: trimmed(patient),
            doctor: trimmed(doctor),
            medications: trimmed(medications),
            notes: trimmed(notes),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrescriptionPatch {
    pub medications: Option<String>,
    pub notes: Option<String>,
}

impl Record for Prescription {
    type Patch = PrescriptionPatch;
    const KIND: EntityKind = EntityKind::Prescription;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient, &self.doctor]
    }

    fn apply(&mut self, patch: PrescriptionPatch) {
        patch_text(&mut self.medications, patch.medications);
        patch_text(&mut self.notes, patch.notes);
    }
}
