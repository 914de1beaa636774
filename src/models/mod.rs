//! Entity records held by the record store.
//!
//! Every entity carries a string identifier plus denormalised reference
//! fields (the display name of a related patient or doctor, never a link).
//! String fields are trimmed on construction and on patch.

pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod patient;
pub mod payment;
pub mod prescription;
pub mod visit;

pub use appointment::*;
pub use doctor::*;
pub use enums::*;
pub use patient::*;
pub use payment::*;
pub use prescription::*;
pub use visit::*;

use serde::Serialize;

/// Shape shared by all six entity types.
///
/// `Collection<T>` is generic over this trait; it never inspects fields
/// beyond the identifier and the searchable text.
pub trait Record: Clone + std::fmt::Debug + Serialize {
    /// Partial update accepted by `apply`.
    type Patch;

    /// Collection this record belongs to.
    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Name copied onto related records when this one is selected.
    /// Defaults to the bare identifier.
    fn display_name(&self) -> &str {
        self.id()
    }

    /// Text shown in a selector. Defaults to the bare identifier.
    fn label(&self) -> String {
        self.id().to_string()
    }

    /// Text fields matched by a case-insensitive search.
    fn search_fields(&self) -> Vec<&str>;

    /// Overwrite the fields present in `patch`, in place.
    fn apply(&mut self, patch: Self::Patch);
}

/// Owned copy of `value` without leading/trailing whitespace.
pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Replace `field` with the trimmed patch value, if any.
pub(crate) fn patch_text(field: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *field = trimmed(&v);
    }
}

/// "Name (ID)" label used by the doctor and patient selectors.
pub(crate) fn name_label(name: &str, id: &str) -> String {
    format!("{name} ({id})")
}
