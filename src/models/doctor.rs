use serde::{Deserialize, Serialize};

use super::{name_label, patch_text, trimmed, EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialty: &str) -> Self {
        Self {
            id: trimmed(id),
            name: trimmed(name),
            specialty: trimmed(specialty),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl Record for Doctor {
    type Patch = DoctorPatch;
    const KIND: EntityKind = EntityKind::Doctor;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> String {
        name_label(&self.name, &self.id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.specialty]
    }

    fn apply(&mut self, patch: DoctorPatch) {
        patch_text(&mut self.id, patch.id);
        patch_text(&mut self.name, patch.name);
        patch_text(&mut self.specialty, patch.specialty);
    }
}
