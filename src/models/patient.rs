use serde::{Deserialize, Serialize};

use super::{name_label, patch_text, trimmed, EntityKind, Record};

/// Age bounds of the patient form. Not enforced by the store.
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl Patient {
    pub fn new(id: &str, name: &str, age: u32) -> Self {
        Self {
            id: trimmed(id),
            name: trimmed(name),
            age,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl Record for Patient {
    type Patch = PatientPatch;
    const KIND: EntityKind = EntityKind::Patient;

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
        vec![&self.name]
    }

    fn apply(&mut self, patch: PatientPatch) {
        patch_text(&mut self.id, patch.id);
        patch_text(&mut self.name, patch.name);
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_accepts_out_of_range_age() {
        // Range is a form concern; the record keeps what it is given.
        let p = Patient::new("P1", "Jane Doe", 0);
        assert_eq!(p.age, 0);
    }

    #[test]
    fn apply_updates_age_and_name() {
        let mut p = Patient::new("P1", "Jane Doe", 30);
        p.apply(PatientPatch {
            name: Some(" Jane Smith ".into()),
            age: Some(31),
            ..Default::default()
        });
        assert_eq!(p.name, "Jane Smith");
        assert_eq!(p.age, 31);
        assert_eq!(p.label(), "Jane Smith (P1)");
    }
}
