//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `PatientId` where a
//! `BudgetId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(ClinicId, "Unique identifier for a clinic.");
typed_id!(PatientId, "Unique identifier for a patient.");
typed_id!(BudgetId, "Unique identifier for a commercial budget.");
typed_id!(BudgetItemId, "Unique identifier for a budget line item.");
typed_id!(ProcedureId, "Unique identifier for a clinical procedure.");
typed_id!(UserId, "Unique identifier for a team member.");

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(BudgetId::new(), BudgetId::new());
        assert_ne!(ProcedureId::new(), ProcedureId::new());
    }

    #[test]
    fn test_from_uuid_round_trip() {
        let uuid = Uuid::now_v7();
        let id = BudgetItemId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_display_matches_uuid() {
        let uuid = Uuid::now_v7();
        let id = PatientId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_from_str_parses_uuid() {
        let uuid = Uuid::now_v7();
        let parsed = ClinicId::from_str(&uuid.to_string()).unwrap();
        assert_eq!(parsed.into_inner(), uuid);

        assert!(ClinicId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::now_v7();
        let id = ProcedureId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));

        let back: ProcedureId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
