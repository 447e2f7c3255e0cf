//! Validation failures for club mutations.
//!
//! A validation failure rejects one mutation and leaves every store
//! unchanged. It is never fatal to the process.

use crate::model::id::{CoachId, MemberId, RecordId};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Member or coach full name is blank.
    EmptyFullName,
    /// Member email is present but does not look like an address.
    InvalidEmail(String),
    EmptyDayOfWeek,
    EmptyTime,
    /// Schedule item is not bound to a coach.
    MissingCoach,
    /// Caller-supplied id is already used by a record of the same family.
    DuplicateId(RecordId),
    /// Referenced coach does not exist.
    UnknownCoach(CoachId),
    /// Referenced member does not exist.
    UnknownMember(MemberId),
    /// Coach already has a class at the same day and time.
    CoachDoubleBooked {
        coach_id: CoachId,
        day: String,
        time: String,
    },
    /// Member already has an attendance record for this date.
    DuplicateAttendance { member_id: MemberId, date: NaiveDate },
}

impl ValidationError {
    /// Stable error code for logs. Carries no personal data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyFullName => "empty_full_name",
            Self::InvalidEmail(_) => "invalid_email",
            Self::EmptyDayOfWeek => "empty_day_of_week",
            Self::EmptyTime => "empty_time",
            Self::MissingCoach => "missing_coach",
            Self::DuplicateId(_) => "duplicate_id",
            Self::UnknownCoach(_) => "unknown_coach",
            Self::UnknownMember(_) => "unknown_member",
            Self::CoachDoubleBooked { .. } => "coach_double_booked",
            Self::DuplicateAttendance { .. } => "duplicate_attendance",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFullName => write!(f, "full name is required"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::EmptyDayOfWeek => write!(f, "day of week is required"),
            Self::EmptyTime => write!(f, "time is required"),
            Self::MissingCoach => write!(f, "coach is required"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::UnknownCoach(id) => write!(f, "coach not found: {id}"),
            Self::UnknownMember(id) => write!(f, "member not found: {id}"),
            Self::CoachDoubleBooked {
                coach_id,
                day,
                time,
            } => write!(f, "coach {coach_id} is already booked on {day} at {time}"),
            Self::DuplicateAttendance { member_id, date } => write!(
                f,
                "attendance for member {member_id} on {date} is already recorded"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::EmptyFullName);
    }
    Ok(())
}
