//! Coach record.

use crate::model::id::{CoachId, RecordId};
use crate::model::validation::{validate_full_name, ValidationError};
use serde::{Deserialize, Serialize};

/// A coach who can run scheduled classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub specialization: String,
    /// Whole years of coaching experience.
    pub experience: u32,
}

impl Coach {
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
        experience: u32,
    ) -> Self {
        Self {
            id: RecordId::new(),
            full_name: full_name.into(),
            phone: phone.into(),
            email: email.into(),
            specialization: specialization.into(),
            experience,
        }
    }

    /// Only the full name is required; phone and email are free text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_full_name(&self.full_name)
    }
}

/// Parses free-text experience input.
///
/// Anything that is not a non-negative integer counts as zero years.
pub fn parse_experience(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_experience;

    #[test]
    fn parse_experience_coerces_garbage_to_zero() {
        assert_eq!(parse_experience(" 12 "), 12);
        assert_eq!(parse_experience("twelve"), 0);
        assert_eq!(parse_experience("-3"), 0);
        assert_eq!(parse_experience(""), 0);
    }
}
