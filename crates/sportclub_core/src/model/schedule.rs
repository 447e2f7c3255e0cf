//! Weekly schedule item.

use crate::model::coach::Coach;
use crate::model::id::{CoachId, RecordId, ScheduleItemId};
use crate::model::validation::ValidationError;
use crate::model::weekday::same_day;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GROUP_NAME: &str = "General group";
pub const DEFAULT_DURATION: &str = "1.5 hours";

/// One recurring weekly class run by a coach.
///
/// `day_of_week` and `time` stay free text to match the file format.
/// `coach_name` is a snapshot and is not refreshed when the coach changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ScheduleItemId,
    pub day_of_week: String,
    pub time: String,
    pub coach_id: CoachId,
    pub coach_name: String,
    pub group_name: String,
    pub duration: String,
}

impl ScheduleItem {
    /// Creates an item for `coach` with default group name and duration.
    pub fn new(day_of_week: impl Into<String>, time: impl Into<String>, coach: &Coach) -> Self {
        Self {
            id: RecordId::new(),
            day_of_week: day_of_week.into(),
            time: time.into(),
            coach_id: coach.id,
            coach_name: coach.full_name.clone(),
            group_name: DEFAULT_GROUP_NAME.to_string(),
            duration: DEFAULT_DURATION.to_string(),
        }
    }

    /// Checks the fields required before an item may be scheduled.
    ///
    /// Coach existence and double-booking are repository checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.day_of_week.trim().is_empty() {
            return Err(ValidationError::EmptyDayOfWeek);
        }
        if self.time.trim().is_empty() {
            return Err(ValidationError::EmptyTime);
        }
        if self.coach_id.is_nil() {
            return Err(ValidationError::MissingCoach);
        }
        Ok(())
    }

    /// Whether both items put the same coach in the same slot.
    pub fn conflicts_with(&self, other: &ScheduleItem) -> bool {
        self.coach_id == other.coach_id
            && same_day(&self.day_of_week, &other.day_of_week)
            && self.time.trim() == other.time.trim()
    }
}
