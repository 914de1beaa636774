//! In-memory record store: one ordered collection per entity type.

pub mod collection;
pub mod selection;

pub use collection::Collection;
pub use selection::{label_name, parse_selection_id, SelectOption};

use thiserror::Error;

use crate::models::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Unknown record type: {0}")]
    UnknownKind(String),
}

impl StoreError {
    pub fn not_found<T: Record>(id: &str) -> Self {
        Self::NotFound {
            entity_type: T::KIND.singular(),
            id: id.to_string(),
        }
    }
}

/// Typed access to the collection holding `T`.
///
/// Lets generic code reach `store.collection::<Doctor>()` without a match
/// on `EntityKind`.
pub trait HoldsCollection<T: Record> {
    fn collection(&self) -> &Collection<T>;
    fn collection_mut(&mut self) -> &mut Collection<T>;
}

/// Owner of every entity instance for the lifetime of a session context.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    doctors: Collection<Doctor>,
    patients: Collection<Patient>,
    appointments: Collection<Appointment>,
    visits: Collection<Visit>,
    prescriptions: Collection<Prescription>,
    payments: Collection<Payment>,
}

macro_rules! holds {
    ($ty:ty, $field:ident, $field_mut:ident) => {
        impl HoldsCollection<$ty> for RecordStore {
            fn collection(&self) -> &Collection<$ty> {
                &self.$field
            }

            fn collection_mut(&mut self) -> &mut Collection<$ty> {
                &mut self.$field
            }
        }

        impl RecordStore {
            pub fn $field(&self) -> &Collection<$ty> {
                &self.$field
            }

            pub fn $field_mut(&mut self) -> &mut Collection<$ty> {
                &mut self.$field
            }
        }
    };
}

holds!(Doctor, doctors, doctors_mut);
holds!(Patient, patients, patients_mut);
holds!(Appointment, appointments, appointments_mut);
holds!(Visit, visits, visits_mut);
holds!(Prescription, prescriptions, prescriptions_mut);
holds!(Payment, payments, payments_mut);

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic accessor, see [`HoldsCollection`].
    pub fn collection<T: Record>(&self) -> &Collection<T>
    where
        Self: HoldsCollection<T>,
    {
        HoldsCollection::<T>::collection(self)
    }

    pub fn collection_mut<T: Record>(&mut self) -> &mut Collection<T>
    where
        Self: HoldsCollection<T>,
    {
        HoldsCollection::<T>::collection_mut(self)
    }

    /// Number of records held for `kind`.
    pub fn len_of(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Doctor => self.doctors.len(),
            EntityKind::Patient => self.patients.len(),
            EntityKind::Appointment => self.appointments.len(),
            EntityKind::Visit => self.visits.len(),
            EntityKind::Prescription => self.prescriptions.len(),
            EntityKind::Payment => self.payments.len(),
        }
    }

    /// Record counts in menu order.
    pub fn counts(&self) -> Vec<(EntityKind, usize)> {
        EntityKind::ALL
            .iter()
            .map(|&kind| (kind, self.len_of(kind)))
            .collect()
    }

    /// Drop every record of every collection.
    pub fn clear(&mut self) {
        self.doctors.clear();
        self.patients.clear();
        self.appointments.clear();
        self.visits.clear();
        self.prescriptions.clear();
        self.payments.clear();
    }
}
