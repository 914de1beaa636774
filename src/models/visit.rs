use serde::{Deserialize, Serialize};

use super::{patch_text, trimmed, EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    /// Free text.
    pub diagnosis: String,
}

impl Visit {
    pub fn new(id: &str, patient: &str, doctor: &str, date: &str, diagnosis: &str) -> Self {
        Self {
            id: trimmed(id),
            patient: trimmed(patient),
            doctor: trimmed(doctor),
            date: trimmed(date),
            diagnosis: trimmed(diagnosis),
        }
    }
}

/// Only the diagnosis of a recorded visit is editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitPatch {
    pub diagnosis: Option<String>,
}

impl Record for Visit {
    type Patch = VisitPatch;
    const KIND: EntityKind = EntityKind::Visit;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient, &self.doctor]
    }

    fn apply(&mut self, patch: VisitPatch) {
        patch_text(&mut self.diagnosis, patch.diagnosis);
    }
}
