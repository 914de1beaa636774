use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::UnknownKind(s.into())),
                }
            }
        }
    };
}

str_enum!(EntityKind {
    Doctor => "doctors",
    Patient => "patients",
    Appointment => "appointments",
    Visit => "visits",
    Prescription => "prescriptions",
    Payment => "payments",
});

impl EntityKind {
    /// Menu order of the six sections.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Doctor,
        EntityKind::Patient,
        EntityKind::Appointment,
        EntityKind::Visit,
        EntityKind::Prescription,
        EntityKind::Payment,
    ];

    /// Capitalised singular name used in user-facing messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
            Self::Appointment => "Appointment",
            Self::Visit => "Visit",
            Self::Prescription => "Prescription",
            Self::Payment => "Payment",
        }
    }

    /// Capitalised plural name used as a section header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Doctor => "Doctors",
            Self::Patient => "Patients",
            Self::Appointment => "Appointments",
            Self::Visit => "Visits",
            Self::Prescription => "Prescriptions",
            Self::Payment => "Payments",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn entity_kind_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn entity_kind_names() {
        assert_eq!(EntityKind::Prescription.as_str(), "prescriptions");
        assert_eq!(EntityKind::Prescription.singular(), "Prescription");
        assert_eq!(EntityKind::Payment.title(), "Payments");
        assert_eq!(EntityKind::Visit.to_string(), "visits");
    }

    #[test]
    fn invalid_kind_returns_error() {
        assert!(EntityKind::from_str("nurses").is_err());
        assert!(EntityKind::from_str("").is_err());
        assert!(EntityKind::from_str("Doctors").is_err());
    }
}
