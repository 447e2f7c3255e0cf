//! Club member record.

use crate::model::id::{MemberId, RecordId};
use crate::model::validation::{validate_full_name, ValidationError};
use serde::{Deserialize, Serialize};

/// A registered club member. Phone and email are free text and optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

impl Member {
    /// Creates a member with a freshly generated id.
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::with_id(RecordId::new(), full_name, phone, email)
    }

    /// Creates a member with a caller-provided id (import and decode paths).
    pub fn with_id(
        id: MemberId,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Checks the fields required before a member may be added.
    ///
    /// # Errors
    /// - `EmptyFullName` when the name is blank.
    /// - `InvalidEmail` when a non-empty email has no `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_full_name(&self.full_name)?;
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}
