//! Opaque record identifier.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Globally unique identifier for club records.
///
/// Compared by equality only. There is intentionally no `Ord` impl: ids
/// carry no meaningful numeric or lexical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

pub type MemberId = RecordId;
pub type CoachId = RecordId;
pub type ScheduleItemId = RecordId;

impl RecordId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The "absent" identifier. Repository writes replace it with a fresh one.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Canonical hyphenated lowercase form, same as the persisted files.
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::RecordId;

    #[test]
    fn display_and_parse_use_canonical_form() {
        let id: RecordId = "11111111-2222-4333-8444-555555555555".parse().unwrap();
        assert_eq!(id.to_string(), "11111111-2222-4333-8444-555555555555");
        assert_eq!(id.to_string().parse::<RecordId>().unwrap(), id);
    }

    #[test]
    fn new_ids_are_distinct_and_not_nil() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert!(!a.is_nil());
        assert!(RecordId::nil().is_nil());
    }
}
